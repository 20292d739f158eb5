//! Thermodynamic state snapshots and the solved-cycle result.

use core::fmt;
use ff_core::units::{MassRate, Power, Pressure, SpecEnthalpy, SpecEntropy, Temperature};

/// Position of a state point in the four-state cycle, indexed 1–4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateLabel {
    /// State 1: saturated vapor entering the compressor
    CompressorInlet,
    /// State 2: superheated discharge entering the condenser
    CondenserInlet,
    /// State 3: saturated liquid leaving the condenser
    CondenserOutlet,
    /// State 4: two-phase mixture entering the evaporator
    EvaporatorInlet,
}

impl StateLabel {
    /// 1-based cycle index.
    pub fn index(self) -> usize {
        match self {
            StateLabel::CompressorInlet => 1,
            StateLabel::CondenserInlet => 2,
            StateLabel::CondenserOutlet => 3,
            StateLabel::EvaporatorInlet => 4,
        }
    }
}

impl fmt::Display for StateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let desc = match self {
            StateLabel::CompressorInlet => "compressor inlet",
            StateLabel::CondenserInlet => "condenser inlet",
            StateLabel::CondenserOutlet => "condenser outlet",
            StateLabel::EvaporatorInlet => "evaporator inlet",
        };
        f.write_str(desc)
    }
}

/// Immutable snapshot of one cycle state point.
///
/// Created only by the cycle solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermodynamicState {
    pub pressure: Pressure,
    pub temperature: Temperature,
    /// Specific enthalpy [J/kg]
    pub enthalpy: SpecEnthalpy,
    /// Specific entropy [J/(kg·K)]
    pub entropy: SpecEntropy,
    /// Vapor quality; `None` outside the two-phase dome
    pub quality: Option<f64>,
    pub label: StateLabel,
}

/// Non-fatal physical-law findings attached to a solved cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CycleWarning {
    /// Entropy at the compressor outlet fell below the inlet entropy.
    EntropyDecrease { s1: f64, s2: f64 },
    /// Evaporator-inlet flash quality fell outside [0,1].
    QualityOutOfRange { x4: f64 },
}

impl fmt::Display for CycleWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleWarning::EntropyDecrease { s1, s2 } => {
                write!(f, "compressor outlet entropy {s2} below inlet entropy {s1}")
            }
            CycleWarning::QualityOutOfRange { x4 } => {
                write!(f, "evaporator inlet quality {x4} outside [0,1]")
            }
        }
    }
}

/// Solved real cycle: four state points plus scalar KPIs.
///
/// Immutable; one per solve.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleResult {
    states: [ThermodynamicState; 4],
    /// Compressor work input (positive)
    pub compressor_work: Power,
    /// Heat absorbed in the evaporator (positive)
    pub evaporator_heat: Power,
    /// Coefficient of performance
    pub cop: f64,
    /// Compressor discharge temperature, recomputed from (P2, h2)
    pub discharge_temperature: Temperature,
    /// Refrigerant mass flow used for the solve
    pub mass_flow: MassRate,
    /// Physical-law findings that did not abort the solve
    pub warnings: Vec<CycleWarning>,
}

impl CycleResult {
    pub(crate) fn new(
        states: [ThermodynamicState; 4],
        compressor_work: Power,
        evaporator_heat: Power,
        cop: f64,
        discharge_temperature: Temperature,
        mass_flow: MassRate,
        warnings: Vec<CycleWarning>,
    ) -> Self {
        Self {
            states,
            compressor_work,
            evaporator_heat,
            cop,
            discharge_temperature,
            mass_flow,
            warnings,
        }
    }

    /// State point by 1-based cycle index (1–4).
    ///
    /// # Panics
    /// Panics if `index` is not in 1..=4; callers index with literals.
    pub fn state(&self, index: usize) -> &ThermodynamicState {
        assert!((1..=4).contains(&index), "cycle states are indexed 1-4");
        &self.states[index - 1]
    }

    /// All four state points in cycle order.
    pub fn states(&self) -> &[ThermodynamicState; 4] {
        &self.states
    }

    /// Heat rejected in the condenser, from the energy balance.
    pub fn condenser_heat(&self) -> Power {
        self.compressor_work + self.evaporator_heat
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Evaporator-inlet flash quality, if state 4 is in the dome.
    pub fn evaporator_inlet_quality(&self) -> Option<f64> {
        self.state(4).quality
    }
}
