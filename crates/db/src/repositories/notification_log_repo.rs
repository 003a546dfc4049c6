//! Repository for the `notification_logs` delivery ledger. Append-only.

use sqlx::PgPool;

use agriops_core::notifications::DeliveryStatus;
use agriops_core::types::DbId;

use crate::models::notification_log::NotificationLog;

const COLUMNS: &str = "id, event_type, related_entity_id, delivery_status, created_at";

pub struct NotificationLogRepo;

impl NotificationLogRepo {
    /// Record one delivery attempt.
    pub async fn create(
        pool: &PgPool,
        event_type: &str,
        related_entity_id: DbId,
        delivery_status: DeliveryStatus,
    ) -> Result<NotificationLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO notification_logs (event_type, related_entity_id, delivery_status) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NotificationLog>(&query)
            .bind(event_type)
            .bind(related_entity_id)
            .bind(delivery_status.as_str())
            .fetch_one(pool)
            .await
    }

    /// All ledger rows for one entity under one event type, oldest first.
    pub async fn list_for_entity(
        pool: &PgPool,
        event_type: &str,
        related_entity_id: DbId,
    ) -> Result<Vec<NotificationLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notification_logs \
             WHERE event_type = $1 AND related_entity_id = $2 \
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, NotificationLog>(&query)
            .bind(event_type)
            .bind(related_entity_id)
            .fetch_all(pool)
            .await
    }
}
