//! Field entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use agriops_core::types::{DbId, Timestamp};

/// A row from the `fields` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Field {
    pub id: DbId,
    pub name: String,
    pub crop_type: String,
    pub warning_threshold: f64,
    pub critical_threshold: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a field. Threshold defaults (10 / 15) are applied by
/// the repository when absent.
#[derive(Debug, Deserialize)]
pub struct CreateField {
    pub name: String,
    pub crop_type: String,
    pub warning_threshold: Option<f64>,
    pub critical_threshold: Option<f64>,
}

/// DTO for updating a field.
#[derive(Debug, Deserialize)]
pub struct UpdateField {
    pub name: Option<String>,
    pub crop_type: Option<String>,
    pub warning_threshold: Option<f64>,
    pub critical_threshold: Option<f64>,
}
