//! Incident vocabulary and request-body validation helpers.

use crate::error::CoreError;

pub const INCIDENT_STATUS_OPEN: &str = "OPEN";
pub const INCIDENT_STATUS_IN_PROGRESS: &str = "IN_PROGRESS";
pub const INCIDENT_STATUS_RESOLVED: &str = "RESOLVED";

pub const ALL_INCIDENT_TYPES: [&str; 4] = [
    "CROP_DISEASE",
    "EQUIPMENT_FAILURE",
    "IRRIGATION_FAILURE",
    "EMERGENCY_EVENT",
];

pub const ALL_INCIDENT_SEVERITIES: [&str; 3] = ["LOW", "MEDIUM", "HIGH"];

pub fn validate_incident_type(incident_type: &str) -> Result<(), CoreError> {
    if ALL_INCIDENT_TYPES.contains(&incident_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown incident type: {incident_type}"
        )))
    }
}

pub fn validate_incident_severity(severity: &str) -> Result<(), CoreError> {
    if ALL_INCIDENT_SEVERITIES.contains(&severity) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown incident severity: {severity}"
        )))
    }
}

/// Status transitions a caller may request; `OPEN` is assigned only at
/// creation time.
pub fn validate_incident_status_update(status: &str) -> Result<(), CoreError> {
    if status == INCIDENT_STATUS_IN_PROGRESS || status == INCIDENT_STATUS_RESOLVED {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid incident status update: {status}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_types_and_severities_pass() {
        assert!(validate_incident_type("CROP_DISEASE").is_ok());
        assert!(validate_incident_severity("HIGH").is_ok());
    }

    #[test]
    fn unknown_values_fail() {
        assert!(validate_incident_type("FLOOD").is_err());
        assert!(validate_incident_severity("SEVERE").is_err());
    }

    #[test]
    fn open_is_not_a_valid_update_target() {
        assert!(validate_incident_status_update("OPEN").is_err());
        assert!(validate_incident_status_update("RESOLVED").is_ok());
    }
}
