use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use agriops_core::notifications::{
    DeliveryStatus, EVENT_INCIDENT_CREATED, EVENT_IRRIGATION_CRITICAL, LEDGER_INCIDENT_WEBHOOK,
    LEDGER_IRRIGATION_WEBHOOK,
};
use agriops_core::irrigation::IrrigationStatus;
use agriops_core::types::DbId;
use agriops_db::models::incident::Incident;
use agriops_db::models::irrigation_log::IrrigationLog;
use agriops_db::repositories::NotificationLogRepo;
use agriops_db::DbPool;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Placeholder fragment left in unconfigured example URLs; treated the same
/// as an absent URL.
const URL_PLACEHOLDER: &str = "your-n8n-instance";

/// Destination URLs for outbound webhooks.
///
/// Injected into [`WebhookNotifier::new`] rather than read from ambient
/// environment at call time, so tests can construct it directly.
#[derive(Debug, Clone, Default)]
pub struct WebhookConfig {
    /// Destination for `IRRIGATION_CRITICAL` events.
    pub irrigation_url: Option<String>,
    /// Destination for `INCIDENT_CREATED` events.
    pub incident_url: Option<String>,
}

impl WebhookConfig {
    /// Load webhook destinations from `N8N_WEBHOOK_IRRIGATION` and
    /// `N8N_WEBHOOK_INCIDENT`. Absent variables leave the corresponding
    /// webhook disabled.
    pub fn from_env() -> Self {
        Self {
            irrigation_url: std::env::var("N8N_WEBHOOK_IRRIGATION").ok(),
            incident_url: std::env::var("N8N_WEBHOOK_INCIDENT").ok(),
        }
    }
}

/// Transport abstraction for the single outbound POST.
///
/// `Ok(true)` means the destination answered with a success status,
/// `Ok(false)` a non-success status, `Err` a transport failure. Tests inject
/// a recording fake; production uses [`HttpTransport`].
#[async_trait]
pub trait WebhookTransport: Send + Sync {
    async fn post(&self, url: &str, payload: &serde_json::Value) -> Result<bool, BoxError>;
}

/// reqwest-backed transport used in production.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WebhookTransport for HttpTransport {
    async fn post(&self, url: &str, payload: &serde_json::Value) -> Result<bool, BoxError> {
        let response = self.client.post(url).json(payload).send().await?;
        Ok(response.status().is_success())
    }
}

/// Sends best-effort webhook notifications and records every attempt in the
/// `notification_logs` ledger.
///
/// All failures are absorbed here: callers spawn these methods and never
/// observe their outcome.
pub struct WebhookNotifier {
    pool: DbPool,
    config: WebhookConfig,
    transport: Arc<dyn WebhookTransport>,
}

impl WebhookNotifier {
    pub fn new(pool: DbPool, config: WebhookConfig, transport: Arc<dyn WebhookTransport>) -> Self {
        Self {
            pool,
            config,
            transport,
        }
    }

    /// Whether a configured URL is usable (present and not a placeholder).
    fn usable_url(url: &Option<String>) -> Option<&str> {
        url.as_deref()
            .filter(|u| !u.is_empty() && !u.contains(URL_PLACEHOLDER))
    }

    /// Notify the automation endpoint of a critical irrigation reading.
    ///
    /// Exactly one delivery attempt; exactly one ledger row per attempt.
    /// Skipped entirely (no attempt, no ledger row) when no destination is
    /// configured.
    pub async fn irrigation_critical(
        &self,
        log: &IrrigationLog,
        status: IrrigationStatus,
        field_name: &str,
    ) {
        let Some(url) = Self::usable_url(&self.config.irrigation_url) else {
            tracing::info!(
                irrigation_log_id = log.id,
                "Irrigation webhook skipped - no valid URL configured"
            );
            return;
        };

        let payload = json!({
            "eventType": EVENT_IRRIGATION_CRITICAL,
            "data": {
                "id": log.id,
                "fieldId": log.field_id,
                "moistureDeficit": log.moisture_deficit,
                "recordedById": log.recorded_by_id,
                "createdAt": log.created_at,
                "status": status,
                "fieldName": field_name,
            },
            "timestamp": chrono::Utc::now().to_rfc3339(),
        });

        self.deliver(url, &payload, LEDGER_IRRIGATION_WEBHOOK, log.id)
            .await;
    }

    /// Notify the automation endpoint of a newly reported incident.
    pub async fn incident_created(&self, incident: &Incident, field_name: &str) {
        let Some(url) = Self::usable_url(&self.config.incident_url) else {
            tracing::info!(
                incident_id = incident.id,
                "Incident webhook skipped - no valid URL configured"
            );
            return;
        };

        let payload = json!({
            "eventType": EVENT_INCIDENT_CREATED,
            "data": {
                "id": incident.id,
                "type": incident.incident_type,
                "severity": incident.severity,
                "description": incident.description,
                "status": incident.status,
                "field": { "id": incident.field_id, "name": field_name },
                "createdAt": incident.created_at,
            },
            "timestamp": chrono::Utc::now().to_rfc3339(),
        });

        self.deliver(url, &payload, LEDGER_INCIDENT_WEBHOOK, incident.id)
            .await;
    }

    /// Perform the single delivery attempt and write the ledger row.
    async fn deliver(
        &self,
        url: &str,
        payload: &serde_json::Value,
        ledger_event_type: &str,
        related_entity_id: DbId,
    ) {
        let delivery_status = match self.transport.post(url, payload).await {
            Ok(success) => {
                tracing::info!(
                    event_type = ledger_event_type,
                    entity_id = related_entity_id,
                    success,
                    "Webhook triggered"
                );
                DeliveryStatus::from_success(success)
            }
            Err(error) => {
                tracing::error!(
                    event_type = ledger_event_type,
                    entity_id = related_entity_id,
                    error = %error,
                    "Failed to trigger webhook"
                );
                DeliveryStatus::Failed
            }
        };

        if let Err(error) = NotificationLogRepo::create(
            &self.pool,
            ledger_event_type,
            related_entity_id,
            delivery_status,
        )
        .await
        {
            tracing::error!(
                event_type = ledger_event_type,
                entity_id = related_entity_id,
                error = %error,
                "Failed to record webhook delivery"
            );
        }
    }
}
