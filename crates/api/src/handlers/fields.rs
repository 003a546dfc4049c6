//! Field CRUD handlers. Fields carry the per-field irrigation thresholds
//! read by the status classifier.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use agriops_core::error::CoreError;
use agriops_core::types::DbId;
use agriops_db::models::field::{CreateField, UpdateField};
use agriops_db::repositories::FieldRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// POST /fields (admin). Thresholds default to 10 / 15 when absent.
pub async fn create_field(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateField>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Field name is required".into(),
        )));
    }
    if input.crop_type.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Crop type is required".into(),
        )));
    }

    let field = FieldRepo::create(&state.pool, &input).await?;

    tracing::info!(field_id = field.id, "Field created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: field })))
}

/// GET /fields (any authenticated user).
pub async fn list_fields(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let fields = FieldRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: fields }))
}

/// GET /fields/{id}
pub async fn get_field(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let field = FieldRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Field", id })?;
    Ok(Json(DataResponse { data: field }))
}

/// PATCH /fields/{id} (admin)
pub async fn update_field(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateField>,
) -> AppResult<impl IntoResponse> {
    let field = FieldRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Field", id })?;

    tracing::info!(field_id = id, "Field updated");

    Ok(Json(DataResponse { data: field }))
}

/// DELETE /fields/{id} (admin)
pub async fn delete_field(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = FieldRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Field", id }));
    }

    tracing::info!(field_id = id, "Field deleted");

    Ok(Json(MessageResponse {
        message: "Field deleted successfully",
    }))
}
