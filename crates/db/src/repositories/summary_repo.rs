//! Aggregate queries backing the internal daily-summary endpoint.

use serde::Serialize;
use sqlx::PgPool;

/// Daily operations summary for the automation integration.
#[derive(Debug, Serialize)]
pub struct DailySummary {
    pub total_incidents: i64,
    pub open_incidents: i64,
    pub critical_fields: i64,
    pub pending_tasks: i64,
}

pub struct SummaryRepo;

impl SummaryRepo {
    /// Compute the daily summary.
    ///
    /// `critical_fields` counts distinct fields with at least one reading in
    /// the last 24 hours at or above the field's own critical threshold.
    pub async fn daily_summary(pool: &PgPool) -> Result<DailySummary, sqlx::Error> {
        let total_incidents: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM incidents")
            .fetch_one(pool)
            .await?;

        let open_incidents: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM incidents WHERE status = 'OPEN'")
                .fetch_one(pool)
                .await?;

        let pending_tasks: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE status = 'OPEN'")
                .fetch_one(pool)
                .await?;

        let critical_fields: i64 = sqlx::query_scalar(
            "SELECT COUNT(DISTINCT il.field_id) \
             FROM irrigation_logs il \
             JOIN fields f ON f.id = il.field_id \
             WHERE il.created_at >= NOW() - INTERVAL '24 hours' \
               AND il.moisture_deficit >= f.critical_threshold",
        )
        .fetch_one(pool)
        .await?;

        Ok(DailySummary {
            total_incidents,
            open_incidents,
            critical_fields,
            pending_tasks,
        })
    }
}
