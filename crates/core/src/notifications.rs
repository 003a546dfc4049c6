//! Webhook event vocabulary and the delivery-ledger status union.

use serde::{Deserialize, Serialize};

/// Event type carried in the irrigation webhook payload.
pub const EVENT_IRRIGATION_CRITICAL: &str = "IRRIGATION_CRITICAL";

/// Event type carried in the incident webhook payload.
pub const EVENT_INCIDENT_CREATED: &str = "INCIDENT_CREATED";

/// Ledger event type for irrigation webhook attempts.
pub const LEDGER_IRRIGATION_WEBHOOK: &str = "IRRIGATION_WEBHOOK";

/// Ledger event type for incident webhook attempts.
pub const LEDGER_INCIDENT_WEBHOOK: &str = "INCIDENT_WEBHOOK";

/// Outcome of a single webhook delivery attempt, as recorded in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    Delivered,
    Failed,
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Delivered => "DELIVERED",
            DeliveryStatus::Failed => "FAILED",
        }
    }

    /// Map an HTTP success flag onto a ledger status.
    pub fn from_success(success: bool) -> Self {
        if success {
            DeliveryStatus::Delivered
        } else {
            DeliveryStatus::Failed
        }
    }
}
