//! Route definitions for incidents.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::incidents;
use crate::state::AppState;

/// ```text
/// GET   /               -> list_incidents (any auth)
/// POST  /               -> create_incident (worker/supervisor)
/// PATCH /{id}/status    -> update_incident_status (supervisor/admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(incidents::list_incidents).post(incidents::create_incident),
        )
        .route("/{id}/status", patch(incidents::update_incident_status))
}
