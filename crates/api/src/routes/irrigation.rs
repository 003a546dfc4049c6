//! Route definitions for irrigation readings.

use axum::routing::get;
use axum::Router;

use crate::handlers::irrigation;
use crate::state::AppState;

/// ```text
/// GET  /    -> list_logs (any auth, ?field_id=)
/// POST /    -> create_log (worker/supervisor)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(irrigation::list_logs).post(irrigation::create_log))
}
