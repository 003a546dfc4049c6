//! Admin user-management handlers.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use agriops_core::error::CoreError;
use agriops_core::roles::validate_role;
use agriops_core::types::DbId;
use agriops_db::models::user::UpdateUser;
use agriops_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// GET /users
pub async fn list_users(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: users }))
}

/// PATCH /users/{id}
pub async fn update_user(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref role) = input.role {
        validate_role(role)?;
    }

    let user = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "User", id })?;

    tracing::info!(user_id = id, "User updated");

    Ok(Json(DataResponse { data: user }))
}

/// DELETE /users/{id}
///
/// Soft deactivation; the row is kept for audit and foreign keys.
pub async fn deactivate_user(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let updated = UserRepo::deactivate(&state.pool, id).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }

    tracing::info!(user_id = id, "User deactivated");

    Ok(Json(MessageResponse {
        message: "User deactivated successfully",
    }))
}
