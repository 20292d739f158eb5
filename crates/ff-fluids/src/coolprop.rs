//! CoolProp-based property provider (optional `coolprop` feature).
//!
//! Adapter over `rfluids` for callers that want full equation-of-state
//! accuracy instead of the embedded saturation table. CoolProp handles the
//! dome and saturation queries natively; (P,h) and (P,s) states are solved
//! by bisection over temperature, which is robust across the superheated
//! region the cycle solver visits.

use crate::error::{FluidError, FluidResult};
use crate::property::{Property, Refrigerant};
use crate::provider::PropertyProvider;
use rfluids::prelude::*;

/// CoolProp backend for refrigerant properties.
///
/// Thread-safe: rfluids Fluid instances are created per query and hold no
/// shared state.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoolPropProvider;

impl CoolPropProvider {
    pub fn new() -> Self {
        Self
    }

    fn pure(refrigerant: Refrigerant) -> Pure {
        match refrigerant {
            Refrigerant::R134a => Pure::R134a,
        }
    }

    fn backend_err(context: &str, e: impl std::fmt::Display) -> FluidError {
        FluidError::Backend {
            message: format!("rfluids error {context}: {e}"),
        }
    }

    fn fluid_at_pt(pure: Pure, p_pa: f64, t_k: f64) -> FluidResult<Fluid> {
        Fluid::from(pure)
            .in_state(FluidInput::pressure(p_pa), FluidInput::temperature(t_k))
            .map_err(|e| Self::backend_err(&format!("at P={p_pa} Pa, T={t_k} K"), e))
    }

    fn fluid_on_dome_t(pure: Pure, t_k: f64, q: f64) -> FluidResult<Fluid> {
        Fluid::from(pure)
            .in_state(FluidInput::temperature(t_k), FluidInput::quality(q))
            .map_err(|e| Self::backend_err(&format!("at T={t_k} K, Q={q}"), e))
    }

    fn fluid_on_dome_p(pure: Pure, p_pa: f64, q: f64) -> FluidResult<Fluid> {
        Fluid::from(pure)
            .in_state(FluidInput::pressure(p_pa), FluidInput::quality(q))
            .map_err(|e| Self::backend_err(&format!("at P={p_pa} Pa, Q={q}"), e))
    }

    fn read(fluid: &mut Fluid, output: Property) -> FluidResult<f64> {
        match output {
            Property::Pressure => fluid
                .pressure()
                .map_err(|e| Self::backend_err("getting pressure", e)),
            Property::Temperature => fluid
                .temperature()
                .map_err(|e| Self::backend_err("getting temperature", e)),
            Property::Enthalpy => fluid
                .enthalpy()
                .map_err(|e| Self::backend_err("getting enthalpy", e)),
            Property::Entropy => fluid
                .entropy()
                .map_err(|e| Self::backend_err("getting entropy", e)),
            Property::Quality => Err(FluidError::NotSupported {
                what: "quality output for this query",
            }),
        }
    }

    /// Bisection for T such that prop(P,T) = target; works for enthalpy and
    /// entropy, both monotone in T at fixed pressure.
    fn solve_t(
        pure: Pure,
        p_pa: f64,
        target: f64,
        read_prop: fn(&mut Fluid) -> FluidResult<f64>,
    ) -> FluidResult<f64> {
        const T_MIN: f64 = 180.0;
        const T_MAX: f64 = 450.0;
        const MAX_ITER: usize = 100;

        let mut t_low = T_MIN;
        let mut t_high = T_MAX;

        let mut fluid_low = Self::fluid_at_pt(pure, p_pa, t_low)?;
        let v_low = read_prop(&mut fluid_low)?;
        let mut fluid_high = Self::fluid_at_pt(pure, p_pa, t_high)?;
        let v_high = read_prop(&mut fluid_high)?;

        if target < v_low || target > v_high {
            return Err(FluidError::OutOfRange {
                what: "target outside valid range for given pressure",
            });
        }

        for _ in 0..MAX_ITER {
            let t_mid = 0.5 * (t_low + t_high);
            let mut fluid_mid = Self::fluid_at_pt(pure, p_pa, t_mid)?;
            let v_mid = read_prop(&mut fluid_mid)?;

            let tol = 1e-6_f64.max(target.abs() * 1e-9);
            if (v_mid - target).abs() < tol {
                return Ok(t_mid);
            }
            if v_mid < target {
                t_low = t_mid;
            } else {
                t_high = t_mid;
            }
        }

        Ok(0.5 * (t_low + t_high))
    }

    fn read_h(fluid: &mut Fluid) -> FluidResult<f64> {
        fluid
            .enthalpy()
            .map_err(|e| Self::backend_err("getting enthalpy", e))
    }

    fn read_s(fluid: &mut Fluid) -> FluidResult<f64> {
        fluid
            .entropy()
            .map_err(|e| Self::backend_err("getting entropy", e))
    }

    fn solve_ph(pure: Pure, p_pa: f64, h: f64, output: Property) -> FluidResult<f64> {
        if output == Property::Quality {
            // Flash fraction from the dome boundaries; may fall outside [0,1]
            // for single-phase states, mirroring the table backend.
            let mut liq = Self::fluid_on_dome_p(pure, p_pa, 0.0)?;
            let h_f = Self::read_h(&mut liq)?;
            let mut vap = Self::fluid_on_dome_p(pure, p_pa, 1.0)?;
            let h_g = Self::read_h(&mut vap)?;
            return Ok((h - h_f) / (h_g - h_f));
        }
        let t = Self::solve_t(pure, p_pa, h, Self::read_h)?;
        let mut fluid = Self::fluid_at_pt(pure, p_pa, t)?;
        Self::read(&mut fluid, output)
    }

    fn solve_ps(pure: Pure, p_pa: f64, s: f64, output: Property) -> FluidResult<f64> {
        let t = Self::solve_t(pure, p_pa, s, Self::read_s)?;
        let mut fluid = Self::fluid_at_pt(pure, p_pa, t)?;
        Self::read(&mut fluid, output)
    }
}

impl PropertyProvider for CoolPropProvider {
    fn name(&self) -> &str {
        "coolprop"
    }

    fn lookup(
        &self,
        refrigerant: Refrigerant,
        output: Property,
        input1: (Property, f64),
        input2: (Property, f64),
    ) -> FluidResult<f64> {
        if !input1.1.is_finite() || !input2.1.is_finite() {
            return Err(FluidError::NonPhysical {
                what: "lookup input value",
            });
        }
        let pure = Self::pure(refrigerant);
        match (input1.0, input2.0) {
            (Property::Temperature, Property::Quality) => {
                let mut fluid = Self::fluid_on_dome_t(pure, input1.1, input2.1)?;
                Self::read(&mut fluid, output)
            }
            (Property::Quality, Property::Temperature) => {
                let mut fluid = Self::fluid_on_dome_t(pure, input2.1, input1.1)?;
                Self::read(&mut fluid, output)
            }
            (Property::Pressure, Property::Quality) => {
                let mut fluid = Self::fluid_on_dome_p(pure, input1.1, input2.1)?;
                Self::read(&mut fluid, output)
            }
            (Property::Quality, Property::Pressure) => {
                let mut fluid = Self::fluid_on_dome_p(pure, input2.1, input1.1)?;
                Self::read(&mut fluid, output)
            }
            (Property::Pressure, Property::Enthalpy) => {
                Self::solve_ph(pure, input1.1, input2.1, output)
            }
            (Property::Enthalpy, Property::Pressure) => {
                Self::solve_ph(pure, input2.1, input1.1, output)
            }
            (Property::Pressure, Property::Entropy) => {
                Self::solve_ps(pure, input1.1, input2.1, output)
            }
            (Property::Entropy, Property::Pressure) => {
                Self::solve_ps(pure, input2.1, input1.1, output)
            }
            _ => Err(FluidError::NotSupported {
                what: "input property pair",
            }),
        }
    }
}
