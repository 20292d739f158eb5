//! Operating parameters for a single cycle solve.

use crate::error::{CycleError, SolveResult};
use ff_core::units::{MassRate, TempInterval, Temperature};

/// Plausibility bounds for absolute temperatures [K].
///
/// Wide on purpose: these reject nonsense (sub-absolute-zero, boiler-room
/// ambients), not merely unusual cold-storage conditions. The property
/// provider enforces its own, tighter envelope.
const T_MIN_K: f64 = 173.15;
const T_MAX_K: f64 = 373.15;

/// Validated inputs to the cycle solver.
///
/// Value object: construction validates every field and a constructed
/// instance is never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingParameters {
    /// Ambient (heat rejection sink) temperature
    pub ambient: Temperature,
    /// Interior target temperature; fixes the evaporation temperature
    pub interior: Temperature,
    /// Refrigerant mass flow
    pub mass_flow: MassRate,
    /// Compressor isentropic efficiency, in (0, 1]
    pub isentropic_efficiency: f64,
    /// Condenser approach: condensing temperature minus ambient
    pub condenser_approach: TempInterval,
}

impl OperatingParameters {
    /// Create validated operating parameters.
    ///
    /// # Errors
    /// `CycleError::InvalidParameter` if any value is non-finite or out of
    /// physical bounds. Fails fast; nothing here is retryable.
    pub fn new(
        ambient: Temperature,
        interior: Temperature,
        mass_flow: MassRate,
        isentropic_efficiency: f64,
        condenser_approach: TempInterval,
    ) -> SolveResult<Self> {
        for (t, what) in [
            (ambient.value, "ambient temperature must be physically plausible"),
            (interior.value, "interior temperature must be physically plausible"),
        ] {
            if !t.is_finite() || !(T_MIN_K..=T_MAX_K).contains(&t) {
                return Err(CycleError::InvalidParameter { what });
            }
        }
        if !mass_flow.value.is_finite() || mass_flow.value <= 0.0 {
            return Err(CycleError::InvalidParameter {
                what: "mass flow must be positive",
            });
        }
        if !isentropic_efficiency.is_finite()
            || isentropic_efficiency <= 0.0
            || isentropic_efficiency > 1.0
        {
            return Err(CycleError::InvalidParameter {
                what: "isentropic efficiency must be in (0,1]",
            });
        }
        if !condenser_approach.value.is_finite() || condenser_approach.value <= 0.0 {
            return Err(CycleError::InvalidParameter {
                what: "condenser approach delta-T must be positive",
            });
        }
        Ok(Self {
            ambient,
            interior,
            mass_flow,
            isentropic_efficiency,
            condenser_approach,
        })
    }

    /// Condensing temperature: ambient plus the condenser approach.
    pub fn condensing_temperature(&self) -> Temperature {
        ff_core::units::k(self.ambient.value + self.condenser_approach.value)
    }
}
