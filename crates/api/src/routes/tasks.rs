//! Route definitions for remediation tasks.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::tasks;
use crate::state::AppState;

/// ```text
/// GET   /               -> list_tasks (any auth, ?status=&field_id=)
/// POST  /               -> create_task (supervisor/admin)
/// PATCH /{id}/status    -> update_task_status (supervisor/admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tasks::list_tasks).post(tasks::create_task))
        .route("/{id}/status", patch(tasks::update_task_status))
}
