//! Liveness probe, mounted at the root rather than under `/api/v1` so load
//! balancers can hit it without credentials.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthReport {
    status: &'static str,
    version: &'static str,
    db_healthy: bool,
}

/// GET /health
///
/// Reports `degraded` instead of failing the request when the database is
/// unreachable, so the probe itself stays green while dependencies flap.
async fn health_check(State(state): State<AppState>) -> Json<HealthReport> {
    let db_healthy = agriops_db::health_check(&state.pool).await.is_ok();

    Json(HealthReport {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
