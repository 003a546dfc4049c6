//! Repository for the `fields` table.

use sqlx::PgPool;

use agriops_core::types::DbId;

use crate::models::field::{CreateField, Field, UpdateField};

const COLUMNS: &str =
    "id, name, crop_type, warning_threshold, critical_threshold, created_at, updated_at";

/// Default warning threshold applied when a field is created without one.
const DEFAULT_WARNING_THRESHOLD: f64 = 10.0;

/// Default critical threshold applied when a field is created without one.
const DEFAULT_CRITICAL_THRESHOLD: f64 = 15.0;

pub struct FieldRepo;

impl FieldRepo {
    /// Create a field, applying threshold defaults when absent.
    pub async fn create(pool: &PgPool, input: &CreateField) -> Result<Field, sqlx::Error> {
        let query = format!(
            "INSERT INTO fields (name, crop_type, warning_threshold, critical_threshold) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Field>(&query)
            .bind(&input.name)
            .bind(&input.crop_type)
            .bind(input.warning_threshold.unwrap_or(DEFAULT_WARNING_THRESHOLD))
            .bind(
                input
                    .critical_threshold
                    .unwrap_or(DEFAULT_CRITICAL_THRESHOLD),
            )
            .fetch_one(pool)
            .await
    }

    /// Look up a field by id; returns its configured thresholds for the
    /// status classifier.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Field>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fields WHERE id = $1");
        sqlx::query_as::<_, Field>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Field>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fields ORDER BY created_at DESC");
        sqlx::query_as::<_, Field>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateField,
    ) -> Result<Option<Field>, sqlx::Error> {
        let query = format!(
            "UPDATE fields SET \
                 name = COALESCE($2, name), \
                 crop_type = COALESCE($3, crop_type), \
                 warning_threshold = COALESCE($4, warning_threshold), \
                 critical_threshold = COALESCE($5, critical_threshold), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Field>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.crop_type)
            .bind(input.warning_threshold)
            .bind(input.critical_threshold)
            .fetch_optional(pool)
            .await
    }

    /// Delete a field. Returns `true` when a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM fields WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
