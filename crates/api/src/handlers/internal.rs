//! Internal reporting endpoints for the automation integration.
//!
//! Authenticated by a shared `x-internal-token` header, not by user JWTs.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;

use agriops_core::error::CoreError;
use agriops_db::repositories::SummaryRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /internal/daily-summary
///
/// Daily operations statistics: incident totals, open remediation tasks,
/// and the number of fields with a critical reading in the last 24 hours.
pub async fn daily_summary(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<impl IntoResponse> {
    let provided = headers
        .get("x-internal-token")
        .and_then(|v| v.to_str().ok());

    let expected = state.config.internal_api_token.as_deref();

    // Not a constant-time comparison. The token gates read-only reporting;
    // switch to a constant-time check before it guards anything mutating.
    match (provided, expected) {
        (Some(p), Some(e)) if p == e => {}
        _ => {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid internal token".into(),
            )));
        }
    }

    let summary = SummaryRepo::daily_summary(&state.pool).await?;

    tracing::info!("Daily summary fetched");

    Ok(Json(DataResponse { data: summary }))
}
