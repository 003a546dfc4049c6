//! Repository for the `incidents` table.

use sqlx::PgPool;

use agriops_core::types::DbId;

use crate::models::incident::{CreateIncident, Incident, IncidentWithField};

const COLUMNS: &str = "id, field_id, reported_by_id, incident_type, severity, description, \
                       status, created_at, updated_at";

pub struct IncidentRepo;

impl IncidentRepo {
    /// Create an incident in `OPEN` status, returning the stored row.
    pub async fn create(
        pool: &PgPool,
        reported_by_id: DbId,
        input: &CreateIncident,
    ) -> Result<Incident, sqlx::Error> {
        let query = format!(
            "INSERT INTO incidents (field_id, reported_by_id, incident_type, severity, description) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Incident>(&query)
            .bind(input.field_id)
            .bind(reported_by_id)
            .bind(&input.incident_type)
            .bind(&input.severity)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// List incidents joined with field and reporter, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<IncidentWithField>, sqlx::Error> {
        let query = "SELECT i.id, i.field_id, i.reported_by_id, i.incident_type, i.severity, \
                    i.description, i.status, i.created_at, i.updated_at, \
                    f.name AS field_name, f.crop_type, u.full_name AS reported_by_name \
             FROM incidents i \
             JOIN fields f ON f.id = i.field_id \
             JOIN users u ON u.id = i.reported_by_id \
             ORDER BY i.created_at DESC";
        sqlx::query_as::<_, IncidentWithField>(query)
            .fetch_all(pool)
            .await
    }

    /// Update an incident's status, returning the updated row when it exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Incident>, sqlx::Error> {
        let query = format!(
            "UPDATE incidents SET status = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Incident>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }
}
