//! Repository for the `tasks` table.

use sqlx::PgPool;

use agriops_core::tasks::TASK_PRIORITY_NORMAL;
use agriops_core::types::DbId;

use crate::models::task::{CreateTask, Task, TaskFilter};

const COLUMNS: &str =
    "id, field_id, incident_id, title, description, status, priority, created_at, updated_at";

pub struct TaskRepo;

impl TaskRepo {
    /// Create a task in `OPEN` status, returning the stored row.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (field_id, incident_id, title, description, priority) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(input.field_id)
            .bind(input.incident_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.priority.as_deref().unwrap_or(TASK_PRIORITY_NORMAL))
            .fetch_one(pool)
            .await
    }

    /// List tasks, most urgent first, then newest. Optional status and field
    /// filters.
    pub async fn list(pool: &PgPool, filter: &TaskFilter) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks \
             WHERE ($1::TEXT IS NULL OR status = $1) \
               AND ($2::BIGINT IS NULL OR field_id = $2) \
             ORDER BY CASE priority \
                          WHEN 'CRITICAL' THEN 3 \
                          WHEN 'WARNING' THEN 2 \
                          ELSE 1 \
                      END DESC, \
                      created_at DESC"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&filter.status)
            .bind(filter.field_id)
            .fetch_all(pool)
            .await
    }

    /// Update a task's status, returning the updated row when it exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET status = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Number of tasks attached to a field (used by tests to verify the
    /// one-task-per-critical-reading invariant).
    pub async fn count_for_field(pool: &PgPool, field_id: DbId) -> Result<i64, sqlx::Error> {
        let count: Option<i64> =
            sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE field_id = $1")
                .bind(field_id)
                .fetch_one(pool)
                .await?;
        Ok(count.unwrap_or(0))
    }
}
