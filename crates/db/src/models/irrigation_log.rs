//! Irrigation reading models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use agriops_core::types::{DbId, Timestamp};

/// A row from the `irrigation_logs` table. Immutable once created.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct IrrigationLog {
    pub id: DbId,
    pub field_id: DbId,
    pub moisture_deficit: f64,
    pub recorded_by_id: DbId,
    pub created_at: Timestamp,
}

/// Listing projection joined with the field and recorder.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct IrrigationLogWithField {
    pub id: DbId,
    pub field_id: DbId,
    pub moisture_deficit: f64,
    pub recorded_by_id: DbId,
    pub created_at: Timestamp,
    pub field_name: String,
    pub crop_type: String,
    pub recorded_by_name: String,
}

/// DTO for submitting a reading.
#[derive(Debug, Deserialize)]
pub struct CreateIrrigationLog {
    pub field_id: DbId,
    pub moisture_deficit: f64,
}
