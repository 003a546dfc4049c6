//! Remediation task models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use agriops_core::types::{DbId, Timestamp};

/// A row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub field_id: DbId,
    pub incident_id: Option<DbId>,
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a task manually (supervisor/admin).
#[derive(Debug, Deserialize)]
pub struct CreateTask {
    pub field_id: DbId,
    pub incident_id: Option<DbId>,
    pub title: String,
    pub description: String,
    pub priority: Option<String>,
}

/// DTO for updating a task's status.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskStatus {
    pub status: String,
}

/// Filters accepted by the task listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct TaskFilter {
    pub status: Option<String>,
    pub field_id: Option<DbId>,
}
