use std::sync::Arc;

use crate::config::ServerConfig;
use crate::notifications::WebhookNotifier;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: agriops_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Outbound webhook notifier; handlers dispatch to it via `tokio::spawn`.
    pub notifier: Arc<WebhookNotifier>,
}
