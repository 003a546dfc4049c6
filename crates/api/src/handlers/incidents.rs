//! Incident reporting handlers.
//!
//! Creating an incident fires the incident webhook the same detached way the
//! irrigation path does.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use agriops_core::error::CoreError;
use agriops_core::incidents::{
    validate_incident_severity, validate_incident_status_update, validate_incident_type,
};
use agriops_core::types::DbId;
use agriops_db::models::incident::{CreateIncident, UpdateIncidentStatus};
use agriops_db::repositories::{FieldRepo, IncidentRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireFieldStaff, RequireSupervisor};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /incidents (worker/supervisor)
pub async fn create_incident(
    RequireFieldStaff(user): RequireFieldStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateIncident>,
) -> AppResult<impl IntoResponse> {
    validate_incident_type(&input.incident_type)?;
    validate_incident_severity(&input.severity)?;
    if input.description.trim().is_empty() {
        return Err(CoreError::Validation("Description is required".into()).into());
    }

    let field = FieldRepo::find_by_id(&state.pool, input.field_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Field",
            id: input.field_id,
        })?;

    let incident = IncidentRepo::create(&state.pool, user.user_id, &input).await?;

    tracing::info!(
        incident_id = incident.id,
        incident_type = %incident.incident_type,
        severity = %incident.severity,
        "Incident created"
    );

    let notifier = Arc::clone(&state.notifier);
    let webhook_incident = incident.clone();
    let field_name = field.name.clone();
    tokio::spawn(async move {
        notifier
            .incident_created(&webhook_incident, &field_name)
            .await;
    });

    Ok((StatusCode::CREATED, Json(DataResponse { data: incident })))
}

/// GET /incidents (any authenticated user)
pub async fn list_incidents(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let incidents = IncidentRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: incidents }))
}

/// PATCH /incidents/{id}/status (supervisor/admin)
pub async fn update_incident_status(
    RequireSupervisor(_user): RequireSupervisor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateIncidentStatus>,
) -> AppResult<impl IntoResponse> {
    validate_incident_status_update(&input.status)?;

    let incident = IncidentRepo::update_status(&state.pool, id, &input.status)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Incident",
            id,
        })?;

    tracing::info!(incident_id = id, status = %input.status, "Incident status updated");

    Ok(Json(DataResponse { data: incident }))
}
