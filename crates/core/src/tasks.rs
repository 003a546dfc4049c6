//! Remediation task vocabulary and the auto-created critical task content.

use crate::error::CoreError;
use crate::irrigation::IrrigationStatus;

pub const TASK_STATUS_OPEN: &str = "OPEN";
pub const TASK_STATUS_COMPLETED: &str = "COMPLETED";

pub const TASK_PRIORITY_NORMAL: &str = "NORMAL";
pub const TASK_PRIORITY_WARNING: &str = "WARNING";
pub const TASK_PRIORITY_CRITICAL: &str = "CRITICAL";

pub const ALL_TASK_PRIORITIES: [&str; 3] = [
    TASK_PRIORITY_NORMAL,
    TASK_PRIORITY_WARNING,
    TASK_PRIORITY_CRITICAL,
];

/// Validate a task priority from a request body.
pub fn validate_task_priority(priority: &str) -> Result<(), CoreError> {
    if ALL_TASK_PRIORITIES.contains(&priority) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown task priority: {priority}"
        )))
    }
}

/// Title for the task auto-created on a critical reading.
pub fn critical_task_title(field_name: &str) -> String {
    format!("Critical irrigation required - Field {field_name}")
}

/// Description for the task auto-created on a critical reading.
pub fn critical_task_description(moisture_deficit: f64) -> String {
    format!("Moisture deficit: {moisture_deficit}. Immediate irrigation needed.")
}

/// Priority for the task auto-created on a critical reading.
///
/// The escalated and non-escalated paths currently assign the same top
/// priority; a distinct marker for escalated tasks is an open product
/// question.
pub fn critical_task_priority(_escalated: bool) -> &'static str {
    TASK_PRIORITY_CRITICAL
}

/// Final status reported to the webhook for a critical reading.
///
/// Mirrors the escalation outcome onto the status; with the current policy
/// both branches yield `Critical`.
pub fn final_status(status: IrrigationStatus, escalated: bool) -> IrrigationStatus {
    if escalated {
        IrrigationStatus::Critical
    } else {
        status
    }
}
