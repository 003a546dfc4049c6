//! Repository for the `irrigation_logs` table. Append-only.

use sqlx::PgPool;

use agriops_core::types::DbId;

use crate::models::irrigation_log::{IrrigationLog, IrrigationLogWithField};

const COLUMNS: &str = "id, field_id, moisture_deficit, recorded_by_id, created_at";

/// Cap on rows returned by the listing endpoint.
const LIST_LIMIT: i64 = 100;

pub struct IrrigationLogRepo;

impl IrrigationLogRepo {
    /// Append a reading, returning the stored row.
    pub async fn create(
        pool: &PgPool,
        field_id: DbId,
        moisture_deficit: f64,
        recorded_by_id: DbId,
    ) -> Result<IrrigationLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO irrigation_logs (field_id, moisture_deficit, recorded_by_id) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, IrrigationLog>(&query)
            .bind(field_id)
            .bind(moisture_deficit)
            .bind(recorded_by_id)
            .fetch_one(pool)
            .await
    }

    /// The `limit` most recent readings for a field, newest first.
    ///
    /// This is the escalation evaluator's rolling window; it is not isolated
    /// from concurrent writes.
    pub async fn recent_for_field(
        pool: &PgPool,
        field_id: DbId,
        limit: i64,
    ) -> Result<Vec<IrrigationLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM irrigation_logs \
             WHERE field_id = $1 \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2"
        );
        sqlx::query_as::<_, IrrigationLog>(&query)
            .bind(field_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// List readings joined with field and recorder, newest first, capped at
    /// 100 rows, optionally filtered by field.
    pub async fn list(
        pool: &PgPool,
        field_id: Option<DbId>,
    ) -> Result<Vec<IrrigationLogWithField>, sqlx::Error> {
        let query = "SELECT il.id, il.field_id, il.moisture_deficit, il.recorded_by_id, il.created_at, \
                    f.name AS field_name, f.crop_type, u.full_name AS recorded_by_name \
             FROM irrigation_logs il \
             JOIN fields f ON f.id = il.field_id \
             JOIN users u ON u.id = il.recorded_by_id \
             WHERE ($1::BIGINT IS NULL OR il.field_id = $1) \
             ORDER BY il.created_at DESC \
             LIMIT $2";
        sqlx::query_as::<_, IrrigationLogWithField>(query)
            .bind(field_id)
            .bind(LIST_LIMIT)
            .fetch_all(pool)
            .await
    }
}
