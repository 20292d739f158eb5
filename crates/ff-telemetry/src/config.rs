//! Generator configuration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{TelemetryError, TelemetryResult};

/// One cold-storage unit in the simulated fleet. Static configuration,
/// never mutated during a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentUnit {
    pub id: String,
    /// Interior setpoint temperature [°C]; fixes the evaporation temperature
    pub setpoint_temperature: f64,
    /// Nominal refrigerant mass flow [kg/s]
    pub nominal_mass_flow: f64,
}

impl EquipmentUnit {
    pub fn new(id: impl Into<String>, setpoint_temperature: f64, nominal_mass_flow: f64) -> Self {
        Self {
            id: id.into(),
            setpoint_temperature,
            nominal_mass_flow,
        }
    }
}

fn default_start() -> DateTime<Utc> {
    // 2024-01-01T00:00:00Z
    DateTime::from_timestamp(1_704_067_200, 0).unwrap_or(DateTime::UNIX_EPOCH)
}

/// Full configuration of a generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Simulated horizon in whole days
    pub horizon_days: u32,
    /// Evenly spaced ticks per simulated day
    pub ticks_per_day: u32,
    /// Fleet to simulate; record order within a tick follows this list
    pub equipment: Vec<EquipmentUnit>,
    /// Seed for every stochastic term; omitted means seed 0
    #[serde(default)]
    pub noise_seed: Option<u64>,
    /// Timestamp of tick zero
    #[serde(default = "default_start")]
    pub start: DateTime<Utc>,
}

impl GeneratorConfig {
    pub fn new(horizon_days: u32, ticks_per_day: u32, equipment: Vec<EquipmentUnit>) -> Self {
        Self {
            horizon_days,
            ticks_per_day,
            equipment,
            noise_seed: None,
            start: default_start(),
        }
    }

    /// Total number of ticks on the time grid.
    pub fn total_ticks(&self) -> u64 {
        u64::from(self.horizon_days) * u64::from(self.ticks_per_day)
    }

    /// Validate the configuration before any computation starts.
    ///
    /// # Errors
    /// `TelemetryError::InvalidConfig` on an empty grid, an empty fleet, or
    /// a malformed unit. These are fatal; nothing is generated.
    pub fn validate(&self) -> TelemetryResult<()> {
        if self.horizon_days == 0 {
            return Err(TelemetryError::InvalidConfig {
                what: "horizon_days must be positive",
            });
        }
        if self.ticks_per_day == 0 {
            return Err(TelemetryError::InvalidConfig {
                what: "ticks_per_day must be positive",
            });
        }
        if self.equipment.is_empty() {
            return Err(TelemetryError::InvalidConfig {
                what: "equipment list must not be empty",
            });
        }
        for unit in &self.equipment {
            if unit.id.is_empty() {
                return Err(TelemetryError::InvalidConfig {
                    what: "equipment id must not be empty",
                });
            }
            if !unit.setpoint_temperature.is_finite() {
                return Err(TelemetryError::InvalidConfig {
                    what: "setpoint temperature must be finite",
                });
            }
            if !unit.nominal_mass_flow.is_finite() || unit.nominal_mass_flow <= 0.0 {
                return Err(TelemetryError::InvalidConfig {
                    what: "nominal mass flow must be positive",
                });
            }
        }
        Ok(())
    }
}
