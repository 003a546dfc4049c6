//! Remediation task handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use agriops_core::error::CoreError;
use agriops_core::tasks::{validate_task_priority, TASK_STATUS_COMPLETED};
use agriops_core::types::DbId;
use agriops_db::models::task::{CreateTask, TaskFilter, UpdateTaskStatus};
use agriops_db::repositories::{FieldRepo, TaskRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireSupervisor;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /tasks?status=&field_id= (any authenticated user)
///
/// Most urgent first, then newest.
pub async fn list_tasks(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(filter): Query<TaskFilter>,
) -> AppResult<impl IntoResponse> {
    let tasks = TaskRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: tasks }))
}

/// POST /tasks (supervisor/admin)
///
/// Manual task creation; the critical-reading path creates tasks itself.
pub async fn create_task(
    RequireSupervisor(_user): RequireSupervisor,
    State(state): State<AppState>,
    Json(input): Json<CreateTask>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() {
        return Err(CoreError::Validation("Title is required".into()).into());
    }
    if input.description.trim().is_empty() {
        return Err(CoreError::Validation("Description is required".into()).into());
    }
    if let Some(ref priority) = input.priority {
        validate_task_priority(priority)?;
    }

    FieldRepo::find_by_id(&state.pool, input.field_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Field",
            id: input.field_id,
        })?;

    let task = TaskRepo::create(&state.pool, &input).await?;

    tracing::info!(task_id = task.id, field_id = task.field_id, "Task created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: task })))
}

/// PATCH /tasks/{id}/status (supervisor/admin)
///
/// The only allowed transition is `OPEN` -> `COMPLETED`.
pub async fn update_task_status(
    RequireSupervisor(_user): RequireSupervisor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTaskStatus>,
) -> AppResult<impl IntoResponse> {
    if input.status != TASK_STATUS_COMPLETED {
        return Err(CoreError::Validation(format!(
            "Invalid task status update: {}",
            input.status
        ))
        .into());
    }

    let task = TaskRepo::update_status(&state.pool, id, &input.status)
        .await?
        .ok_or(CoreError::NotFound { entity: "Task", id })?;

    tracing::info!(task_id = id, status = %input.status, "Task status updated");

    Ok(Json(DataResponse { data: task }))
}
