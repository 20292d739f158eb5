//! The telemetry record contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::OperatingState;

/// One generated telemetry sample for one unit at one tick.
///
/// Field names and units are the contract any persistence or presentation
/// collaborator must honor unchanged; the serde renames pin the serialized
/// keys to that contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    pub timestamp: DateTime<Utc>,
    pub equipment_id: String,
    #[serde(rename = "ambient_temperature_C")]
    pub ambient_temperature_c: f64,
    /// Interior temperature with sensor jitter, not the raw setpoint
    #[serde(rename = "interior_temperature_C")]
    pub interior_temperature_c: f64,
    #[serde(rename = "condenser_delta_t_C")]
    pub condenser_delta_t_c: f64,
    pub compressor_efficiency: f64,
    pub cop: f64,
    #[serde(rename = "discharge_temperature_C")]
    pub discharge_temperature_c: f64,
    #[serde(rename = "compressor_work_kW")]
    pub compressor_work_kw: f64,
    #[serde(rename = "evaporator_heat_kW")]
    pub evaporator_heat_kw: f64,
    pub evaporator_inlet_quality: f64,
    pub operating_state: OperatingState,
}
