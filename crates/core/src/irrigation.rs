//! Irrigation status classification and the escalation-window rule.
//!
//! Status is derived, never stored: it is recomputed from a moisture-deficit
//! reading and the owning field's configured thresholds every time it is
//! needed.

use serde::{Deserialize, Serialize};

/// Ordinal irrigation severity, `Normal < Warning < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IrrigationStatus {
    Normal,
    Warning,
    Critical,
}

impl IrrigationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IrrigationStatus::Normal => "NORMAL",
            IrrigationStatus::Warning => "WARNING",
            IrrigationStatus::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for IrrigationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of most-recent readings inspected by the escalation rule.
pub const ESCALATION_WINDOW: usize = 3;

/// Lower bound (inclusive) of the escalation band.
pub const ESCALATION_BAND_MIN: f64 = 10.0;

/// Upper bound (exclusive) of the escalation band.
pub const ESCALATION_BAND_MAX: f64 = 15.0;

/// Classify a moisture-deficit reading against a field's thresholds.
///
/// Boundaries are inclusive on the upper side: a deficit exactly equal to a
/// threshold already belongs to that threshold's class. The critical check
/// runs first, so misconfigured fields with `critical < warning` resolve
/// toward `Critical` in the inverted range; no extra validation is performed
/// here.
pub fn classify_status(
    moisture_deficit: f64,
    warning_threshold: f64,
    critical_threshold: f64,
) -> IrrigationStatus {
    if moisture_deficit >= critical_threshold {
        return IrrigationStatus::Critical;
    }
    if moisture_deficit >= warning_threshold {
        return IrrigationStatus::Warning;
    }
    IrrigationStatus::Normal
}

/// Escalation rule over the most recent readings for a field, newest first.
///
/// Returns `true` iff a full window of [`ESCALATION_WINDOW`] readings exists
/// and every one of them lies in the fixed band
/// `[ESCALATION_BAND_MIN, ESCALATION_BAND_MAX)`. The band is a global
/// constant and intentionally does not consult the field's own thresholds.
pub fn sustained_borderline(recent_deficits: &[f64]) -> bool {
    if recent_deficits.len() < ESCALATION_WINDOW {
        return false;
    }
    recent_deficits
        .iter()
        .all(|d| *d >= ESCALATION_BAND_MIN && *d < ESCALATION_BAND_MAX)
}
