//! Threshold classification of a solved operating point.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Operating-state label attached to every telemetry record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatingState {
    #[serde(rename = "NORMAL")]
    Normal,
    #[serde(rename = "WARNING")]
    Warning,
    #[serde(rename = "ALARM")]
    Alarm,
}

impl OperatingState {
    /// Ordinal severity: NORMAL 0, WARNING 1, ALARM 2.
    pub fn severity(self) -> u8 {
        match self {
            OperatingState::Normal => 0,
            OperatingState::Warning => 1,
            OperatingState::Alarm => 2,
        }
    }
}

impl fmt::Display for OperatingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OperatingState::Normal => "NORMAL",
            OperatingState::Warning => "WARNING",
            OperatingState::Alarm => "ALARM",
        };
        f.write_str(s)
    }
}

/// Classify a record from its condenser approach delta-T [°C] and COP.
///
/// Alarm conditions are checked before warning conditions, so a point
/// satisfying both thresholds always classifies as ALARM.
pub fn classify(condenser_delta_t_c: f64, cop: f64) -> OperatingState {
    if condenser_delta_t_c > 25.0 || cop < 2.0 {
        OperatingState::Alarm
    } else if condenser_delta_t_c > 20.0 || cop < 2.5 {
        OperatingState::Warning
    } else {
        OperatingState::Normal
    }
}
