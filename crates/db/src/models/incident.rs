//! Incident entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use agriops_core::types::{DbId, Timestamp};

/// A row from the `incidents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Incident {
    pub id: DbId,
    pub field_id: DbId,
    pub reported_by_id: DbId,
    pub incident_type: String,
    pub severity: String,
    pub description: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Listing projection joined with the field and reporter.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct IncidentWithField {
    pub id: DbId,
    pub field_id: DbId,
    pub reported_by_id: DbId,
    pub incident_type: String,
    pub severity: String,
    pub description: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub field_name: String,
    pub crop_type: String,
    pub reported_by_name: String,
}

/// DTO for reporting an incident.
#[derive(Debug, Deserialize)]
pub struct CreateIncident {
    pub field_id: DbId,
    pub incident_type: String,
    pub severity: String,
    pub description: String,
}

/// DTO for updating an incident's status.
#[derive(Debug, Deserialize)]
pub struct UpdateIncidentStatus {
    pub status: String,
}
