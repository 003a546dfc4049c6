//! Webhook delivery-ledger models.

use serde::Serialize;
use sqlx::FromRow;

use agriops_core::types::{DbId, Timestamp};

/// A row from the `notification_logs` ledger. Append-only.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NotificationLog {
    pub id: DbId,
    pub event_type: String,
    pub related_entity_id: DbId,
    pub delivery_status: String,
    pub created_at: Timestamp,
}
