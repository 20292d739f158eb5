//! Four-state vapor-compression cycle solver.
//!
//! Solves the standard refrigeration cycle against a [`PropertyProvider`]:
//! saturated vapor at the evaporator outlet, non-ideal compression via an
//! isentropic efficiency, saturated liquid at the condenser outlet, and an
//! isenthalpic expansion back to the evaporation pressure.

use crate::error::{CycleError, SolveResult};
use crate::params::OperatingParameters;
use crate::state::{CycleResult, CycleWarning, StateLabel, ThermodynamicState};
use ff_core::units::watts;
use ff_fluids::{PropertyProvider, Refrigerant};

/// Solve the real cycle for one set of operating parameters.
///
/// State points, in cycle order:
/// 1. compressor inlet: saturated vapor at the interior (evaporation)
///    temperature;
/// 2. condenser inlet: superheated discharge at the condensing pressure,
///    with `h2 = h1 + (h2s - h1) / eta` from the isentropic target `h2s`;
/// 3. condenser outlet: saturated liquid at the condensing pressure;
/// 4. evaporator inlet: isenthalpic flash of state 3 down to the
///    evaporation pressure.
///
/// The condensing temperature is ambient plus the condenser approach. The
/// discharge temperature is resolved from the real outlet state (P2, h2),
/// never from the isentropic intermediate.
///
/// # Errors
/// `CycleError::Property` when the provider cannot resolve a state, and
/// `CycleError::InvalidCycle` when compressor work comes out non-positive
/// (an inverted temperature lift), which would leave COP undefined. Entropy
/// decrease across the compressor and a flash quality outside [0,1] are
/// non-fatal and reported as warnings on the result.
pub fn solve_cycle(
    provider: &dyn PropertyProvider,
    refrigerant: Refrigerant,
    params: &OperatingParameters,
) -> SolveResult<CycleResult> {
    let mut warnings = Vec::new();
    let mdot = params.mass_flow.value;

    // State 1: saturated vapor at the evaporation temperature.
    let t1 = params.interior;
    let p1 = provider
        .saturation_pressure(refrigerant, t1)
        .map_err(CycleError::at("evaporation pressure"))?;
    let h1 = provider
        .saturation_enthalpy_at_t(refrigerant, t1, 1.0)
        .map_err(CycleError::at("compressor inlet enthalpy"))?;
    let s1 = provider
        .saturation_entropy_at_t(refrigerant, t1, 1.0)
        .map_err(CycleError::at("compressor inlet entropy"))?;

    // Condensing pressure from the ambient plus the approach.
    let t_cond = params.condensing_temperature();
    let p2 = provider
        .saturation_pressure(refrigerant, t_cond)
        .map_err(CycleError::at("condensing pressure"))?;

    // Isentropic compression target, then the real outlet enthalpy.
    let h2_ideal = provider
        .enthalpy_at_ps(refrigerant, p2, s1)
        .map_err(CycleError::at("isentropic discharge enthalpy"))?;
    let h2 = h1 + (h2_ideal - h1) / params.isentropic_efficiency;

    let s2 = provider
        .entropy_at_ph(refrigerant, p2, h2)
        .map_err(CycleError::at("discharge entropy"))?;
    if s2 < s1 {
        warnings.push(CycleWarning::EntropyDecrease { s1, s2 });
    }
    let t2 = provider
        .temperature_at_ph(refrigerant, p2, h2)
        .map_err(CycleError::at("discharge temperature"))?;

    // State 3: saturated liquid at the condensing pressure.
    let h3 = provider
        .saturation_enthalpy_at_p(refrigerant, p2, 0.0)
        .map_err(CycleError::at("condenser outlet enthalpy"))?;
    let s3 = provider
        .saturation_entropy_at_p(refrigerant, p2, 0.0)
        .map_err(CycleError::at("condenser outlet entropy"))?;
    let t3 = provider
        .saturation_temperature(refrigerant, p2)
        .map_err(CycleError::at("condensing temperature"))?;

    // State 4: isenthalpic flash down to the evaporation pressure.
    let h4 = h3;
    let x4 = provider
        .quality_at_ph(refrigerant, p1, h4)
        .map_err(CycleError::at("evaporator inlet quality"))?;
    if !(0.0..=1.0).contains(&x4) {
        warnings.push(CycleWarning::QualityOutOfRange { x4 });
    }
    let s4 = provider
        .entropy_at_ph(refrigerant, p1, h4)
        .map_err(CycleError::at("evaporator inlet entropy"))?;

    let work = mdot * (h2 - h1);
    if work <= 0.0 {
        return Err(CycleError::InvalidCycle {
            what: "compressor work is non-positive, COP is undefined",
        });
    }
    let heat = mdot * (h1 - h4);
    let cop = heat / work;

    let states = [
        ThermodynamicState {
            pressure: p1,
            temperature: t1,
            enthalpy: h1,
            entropy: s1,
            quality: Some(1.0),
            label: StateLabel::CompressorInlet,
        },
        ThermodynamicState {
            pressure: p2,
            temperature: t2,
            enthalpy: h2,
            entropy: s2,
            quality: None,
            label: StateLabel::CondenserInlet,
        },
        ThermodynamicState {
            pressure: p2,
            temperature: t3,
            enthalpy: h3,
            entropy: s3,
            quality: Some(0.0),
            label: StateLabel::CondenserOutlet,
        },
        ThermodynamicState {
            pressure: p1,
            temperature: t1,
            enthalpy: h4,
            entropy: s4,
            quality: Some(x4),
            label: StateLabel::EvaporatorInlet,
        },
    ];

    Ok(CycleResult::new(
        states,
        watts(work),
        watts(heat),
        cop,
        t2,
        params.mass_flow,
        warnings,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ff_core::units::{c, dk, kgps};
    use ff_fluids::{FluidError, FluidResult, Property};

    /// Provider returning canned values so warning paths can be forced.
    struct RiggedProvider {
        s2: f64,
        x4: f64,
    }

    impl PropertyProvider for RiggedProvider {
        fn name(&self) -> &str {
            "rigged"
        }

        fn lookup(
            &self,
            _r: Refrigerant,
            output: Property,
            input1: (Property, f64),
            input2: (Property, f64),
        ) -> FluidResult<f64> {
            match (output, input1.0, input2.0) {
                (Property::Pressure, ..) => Ok(5.0e5),
                (Property::Enthalpy, Property::Temperature, Property::Quality) => Ok(4.0e5),
                (Property::Entropy, Property::Temperature, Property::Quality) => Ok(1700.0),
                (Property::Enthalpy, Property::Pressure, Property::Entropy) => Ok(4.2e5),
                (Property::Entropy, Property::Pressure, Property::Enthalpy) => Ok(self.s2),
                (Property::Enthalpy, Property::Pressure, Property::Quality) => Ok(2.5e5),
                (Property::Entropy, Property::Pressure, Property::Quality) => Ok(1150.0),
                (Property::Temperature, ..) => Ok(320.0),
                (Property::Quality, ..) => Ok(self.x4),
                _ => Err(FluidError::NotSupported {
                    what: "rigged provider query",
                }),
            }
        }
    }

    fn nominal_params() -> OperatingParameters {
        OperatingParameters::new(c(20.0), c(4.0), kgps(0.1), 0.75, dk(15.0)).unwrap()
    }

    #[test]
    fn rigged_solve_has_no_warnings_when_laws_hold() {
        let provider = RiggedProvider { s2: 1750.0, x4: 0.3 };
        let result = solve_cycle(&provider, Refrigerant::R134a, &nominal_params()).unwrap();
        assert!(!result.has_warnings());
        // h2 = 4.0e5 + (4.2e5 - 4.0e5) / 0.75
        let h2 = result.state(2).enthalpy;
        assert!((h2 - 426_666.666).abs() < 1.0);
        assert!(result.compressor_work.value > 0.0);
        assert!((result.cop - (4.0e5 - 2.5e5) / (h2 - 4.0e5)).abs() < 1e-9);
    }

    #[test]
    fn entropy_decrease_is_reported_not_fatal() {
        let provider = RiggedProvider { s2: 1600.0, x4: 0.3 };
        let result = solve_cycle(&provider, Refrigerant::R134a, &nominal_params()).unwrap();
        assert!(result
            .warnings
            .iter()
            .any(|w| matches!(w, CycleWarning::EntropyDecrease { .. })));
    }

    #[test]
    fn out_of_range_quality_is_reported_not_fatal() {
        let provider = RiggedProvider { s2: 1750.0, x4: 1.4 };
        let result = solve_cycle(&provider, Refrigerant::R134a, &nominal_params()).unwrap();
        assert!(result
            .warnings
            .iter()
            .any(|w| matches!(w, CycleWarning::QualityOutOfRange { x4 } if *x4 == 1.4)));
        assert_eq!(result.evaporator_inlet_quality(), Some(1.4));
    }

    #[test]
    fn provider_failure_names_the_step() {
        struct Failing;
        impl PropertyProvider for Failing {
            fn name(&self) -> &str {
                "failing"
            }
            fn lookup(
                &self,
                _r: Refrigerant,
                _output: Property,
                _input1: (Property, f64),
                _input2: (Property, f64),
            ) -> FluidResult<f64> {
                Err(FluidError::OutOfRange {
                    what: "saturation table",
                })
            }
        }
        let err = solve_cycle(&Failing, Refrigerant::R134a, &nominal_params()).unwrap_err();
        assert!(matches!(
            err,
            CycleError::Property {
                step: "evaporation pressure",
                ..
            }
        ));
    }
}
