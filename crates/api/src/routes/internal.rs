//! Route definitions for the internal reporting surface.
//!
//! Mounted at `/internal` at root level, outside `/api/v1`; protected by a
//! shared token header instead of user JWTs.

use axum::routing::get;
use axum::Router;

use crate::handlers::internal;
use crate::state::AppState;

/// ```text
/// GET /daily-summary    -> daily_summary (x-internal-token)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/daily-summary", get(internal::daily_summary))
}
