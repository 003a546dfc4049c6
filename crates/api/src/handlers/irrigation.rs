//! Handlers for irrigation readings: the status classifier trigger and the
//! escalation evaluator.
//!
//! Submitting a reading classifies it against the field's thresholds. A
//! critical reading additionally creates a remediation task and dispatches a
//! detached webhook notification; the response never waits on delivery.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use agriops_core::error::CoreError;
use agriops_core::irrigation::{
    classify_status, sustained_borderline, IrrigationStatus, ESCALATION_WINDOW,
};
use agriops_core::tasks::{
    critical_task_description, critical_task_priority, critical_task_title, final_status,
};
use agriops_core::types::DbId;
use agriops_db::models::irrigation_log::CreateIrrigationLog;
use agriops_db::models::task::CreateTask;
use agriops_db::repositories::{FieldRepo, IrrigationLogRepo, TaskRepo};
use agriops_db::DbPool;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireFieldStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response payload for a submitted reading: the computed status only.
#[derive(Debug, Serialize)]
pub struct ReadingResult {
    pub status: IrrigationStatus,
}

/// Query parameters for listing readings.
#[derive(Debug, serde::Deserialize)]
pub struct LogListParams {
    pub field_id: Option<DbId>,
}

/// Escalation evaluator: inspect the rolling window of the field's most
/// recent readings (including the one just created).
///
/// True iff a full window exists and every reading falls in the fixed
/// borderline band. The window read is not isolated from concurrent writes;
/// best-effort by design.
async fn check_escalation(pool: &DbPool, field_id: DbId) -> Result<bool, sqlx::Error> {
    let recent =
        IrrigationLogRepo::recent_for_field(pool, field_id, ESCALATION_WINDOW as i64).await?;
    let deficits: Vec<f64> = recent.iter().map(|log| log.moisture_deficit).collect();
    Ok(sustained_borderline(&deficits))
}

/// POST /irrigation-logs
///
/// Record a moisture reading (worker/supervisor). Classifies the reading,
/// and on a critical result creates a remediation task and fires the
/// irrigation webhook.
pub async fn create_log(
    RequireFieldStaff(user): RequireFieldStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateIrrigationLog>,
) -> AppResult<impl IntoResponse> {
    let field = FieldRepo::find_by_id(&state.pool, input.field_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Field",
            id: input.field_id,
        })?;

    let status = classify_status(
        input.moisture_deficit,
        field.warning_threshold,
        field.critical_threshold,
    );

    let log = IrrigationLogRepo::create(
        &state.pool,
        input.field_id,
        input.moisture_deficit,
        user.user_id,
    )
    .await?;

    tracing::info!(
        irrigation_log_id = log.id,
        field_id = input.field_id,
        moisture_deficit = input.moisture_deficit,
        status = %status,
        "Irrigation log created"
    );

    if status == IrrigationStatus::Critical {
        let escalated = check_escalation(&state.pool, input.field_id).await?;
        let reported_status = final_status(status, escalated);

        TaskRepo::create(
            &state.pool,
            &CreateTask {
                field_id: input.field_id,
                incident_id: None,
                title: critical_task_title(&field.name),
                description: critical_task_description(input.moisture_deficit),
                priority: Some(critical_task_priority(escalated).to_string()),
            },
        )
        .await?;

        // Detached delivery: the response must not wait on the webhook.
        let notifier = Arc::clone(&state.notifier);
        let webhook_log = log.clone();
        let field_name = field.name.clone();
        tokio::spawn(async move {
            notifier
                .irrigation_critical(&webhook_log, reported_status, &field_name)
                .await;
        });

        tracing::info!(
            field_id = input.field_id,
            escalated,
            "Critical irrigation - task created"
        );
    }

    Ok((StatusCode::CREATED, Json(DataResponse { data: ReadingResult { status } })))
}

/// GET /irrigation-logs?field_id=
///
/// List readings, newest first, capped at 100, optionally filtered by field.
pub async fn list_logs(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<LogListParams>,
) -> AppResult<impl IntoResponse> {
    let logs = IrrigationLogRepo::list(&state.pool, params.field_id).await?;
    Ok(Json(DataResponse { data: logs }))
}
