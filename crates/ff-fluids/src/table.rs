//! Embedded saturation-table property backend.
//!
//! A self-contained R-134a backend built from tabulated saturation data on
//! the IIR reference state (h = 200 kJ/kg, s = 1.0 kJ/(kg·K) for saturated
//! liquid at 0 °C). Saturation pressure is interpolated log-linearly in
//! temperature so pressure and temperature lookups are mutual inverses;
//! enthalpy and entropy are interpolated linearly. Superheated states extend
//! the dome with a frozen saturated-vapor cp, which keeps every (P,s) and
//! (P,h) solve closed-form.
//!
//! This backend covers the cold-storage operating envelope (−40 °C to 70 °C
//! saturation). It is NOT a general equation of state: queries outside the
//! envelope, in the subcooled liquid region, or approaching the critical
//! point fail with `FluidError::OutOfRange`.

use crate::error::{FluidError, FluidResult};
use crate::property::{Property, Refrigerant};
use crate::provider::PropertyProvider;
use ff_core::numeric::lerp;

/// One saturation isotherm.
///
/// `s_g` is not stored: it is derived as `s_f + (h_g − h_f)/T` so the dome
/// satisfies the Clausius relation exactly, row by row.
#[derive(Debug, Clone, Copy)]
struct SatRow {
    /// Saturation temperature [K]
    t_k: f64,
    /// Saturation pressure [Pa]
    p_pa: f64,
    /// Saturated liquid enthalpy [J/kg]
    h_f: f64,
    /// Saturated vapor enthalpy [J/kg]
    h_g: f64,
    /// Saturated liquid entropy [J/(kg·K)]
    s_f: f64,
    /// Saturated vapor specific heat [J/(kg·K)], frozen for superheat
    cp_g: f64,
}

impl SatRow {
    fn s_g(&self) -> f64 {
        self.s_f + (self.h_g - self.h_f) / self.t_k
    }
}

/// R-134a saturation data, −40 °C to 70 °C, IIR reference state.
const R134A_SAT: [SatRow; 26] = [
    SatRow { t_k: 233.15, p_pa: 51_200.0, h_f: 148_140.0, h_g: 374_000.0, s_f: 795.6, cp_g: 749.0 },
    SatRow { t_k: 243.15, p_pa: 84_400.0, h_f: 160_790.0, h_g: 380_320.0, s_f: 850.2, cp_g: 781.0 },
    SatRow { t_k: 247.15, p_pa: 101_700.0, h_f: 165_900.0, h_g: 382_820.0, s_f: 872.0, cp_g: 794.0 },
    SatRow { t_k: 251.15, p_pa: 121_700.0, h_f: 171_050.0, h_g: 385_300.0, s_f: 890.8, cp_g: 808.0 },
    SatRow { t_k: 255.15, p_pa: 144_600.0, h_f: 176_230.0, h_g: 387_790.0, s_f: 910.3, cp_g: 822.0 },
    SatRow { t_k: 259.15, p_pa: 171_000.0, h_f: 181_440.0, h_g: 390_170.0, s_f: 930.5, cp_g: 837.0 },
    SatRow { t_k: 263.15, p_pa: 200_700.0, h_f: 186_700.0, h_g: 392_660.0, s_f: 950.6, cp_g: 852.0 },
    SatRow { t_k: 267.15, p_pa: 234_300.0, h_f: 191_990.0, h_g: 395_010.0, s_f: 970.5, cp_g: 868.0 },
    SatRow { t_k: 271.15, p_pa: 272_200.0, h_f: 197_320.0, h_g: 397_320.0, s_f: 990.2, cp_g: 885.0 },
    SatRow { t_k: 273.15, p_pa: 292_900.0, h_f: 200_000.0, h_g: 398_600.0, s_f: 1000.0, cp_g: 897.0 },
    SatRow { t_k: 277.15, p_pa: 337_900.0, h_f: 205_400.0, h_g: 400_920.0, s_f: 1019.3, cp_g: 916.0 },
    SatRow { t_k: 281.15, p_pa: 387_900.0, h_f: 210_840.0, h_g: 403_200.0, s_f: 1038.6, cp_g: 936.0 },
    SatRow { t_k: 283.15, p_pa: 414_700.0, h_f: 213_580.0, h_g: 404_320.0, s_f: 1048.3, cp_g: 946.0 },
    SatRow { t_k: 287.15, p_pa: 471_900.0, h_f: 219_080.0, h_g: 406_530.0, s_f: 1067.5, cp_g: 967.0 },
    SatRow { t_k: 291.15, p_pa: 535_200.0, h_f: 224_610.0, h_g: 408_700.0, s_f: 1086.7, cp_g: 989.0 },
    SatRow { t_k: 295.15, p_pa: 605_100.0, h_f: 230_180.0, h_g: 410_750.0, s_f: 1105.6, cp_g: 1013.0 },
    SatRow { t_k: 299.15, p_pa: 682_300.0, h_f: 235_780.0, h_g: 412_870.0, s_f: 1124.3, cp_g: 1037.0 },
    SatRow { t_k: 303.15, p_pa: 771_000.0, h_f: 241_720.0, h_g: 414_940.0, s_f: 1143.0, cp_g: 1065.0 },
    SatRow { t_k: 308.15, p_pa: 887_900.0, h_f: 249_010.0, h_g: 417_200.0, s_f: 1166.7, cp_g: 1103.0 },
    SatRow { t_k: 313.15, p_pa: 1_017_100.0, h_f: 256_410.0, h_g: 419_430.0, s_f: 1190.5, cp_g: 1145.0 },
    SatRow { t_k: 318.15, p_pa: 1_160_500.0, h_f: 263_940.0, h_g: 421_500.0, s_f: 1213.9, cp_g: 1192.0 },
    SatRow { t_k: 323.15, p_pa: 1_318_900.0, h_f: 271_620.0, h_g: 423_440.0, s_f: 1237.5, cp_g: 1246.0 },
    SatRow { t_k: 328.15, p_pa: 1_493_400.0, h_f: 279_470.0, h_g: 425_150.0, s_f: 1261.1, cp_g: 1310.0 },
    SatRow { t_k: 333.15, p_pa: 1_682_300.0, h_f: 287_490.0, h_g: 426_860.0, s_f: 1285.2, cp_g: 1387.0 },
    SatRow { t_k: 338.15, p_pa: 1_890_000.0, h_f: 295_730.0, h_g: 427_900.0, s_f: 1310.0, cp_g: 1480.0 },
    SatRow { t_k: 343.15, p_pa: 2_117_300.0, h_f: 304_280.0, h_g: 428_650.0, s_f: 1335.5, cp_g: 1605.0 },
];

/// Superheated-vapor ceiling [K]; the frozen-cp extension is not meaningful
/// arbitrarily far from the dome.
const T_SUPERHEAT_MAX_K: f64 = 500.0;

/// Saturation point at an arbitrary temperature or pressure in the envelope.
#[derive(Debug, Clone, Copy)]
struct SatPoint {
    t_k: f64,
    p_pa: f64,
    h_f: f64,
    h_g: f64,
    s_f: f64,
    s_g: f64,
    cp_g: f64,
}

impl SatPoint {
    fn between(lo: &SatRow, hi: &SatRow, t_k: f64) -> Self {
        let ln_p = lerp(t_k, lo.t_k, hi.t_k, lo.p_pa.ln(), hi.p_pa.ln());
        Self {
            t_k,
            p_pa: ln_p.exp(),
            h_f: lerp(t_k, lo.t_k, hi.t_k, lo.h_f, hi.h_f),
            h_g: lerp(t_k, lo.t_k, hi.t_k, lo.h_g, hi.h_g),
            s_f: lerp(t_k, lo.t_k, hi.t_k, lo.s_f, hi.s_f),
            s_g: lerp(t_k, lo.t_k, hi.t_k, lo.s_g(), hi.s_g()),
            cp_g: lerp(t_k, lo.t_k, hi.t_k, lo.cp_g, hi.cp_g),
        }
    }
}

/// Normalized input pair for a lookup query.
enum InputPair {
    /// Temperature [K] + quality
    Tq { t_k: f64, q: f64 },
    /// Pressure [Pa] + quality
    Pq { p_pa: f64, q: f64 },
    /// Pressure [Pa] + entropy [J/(kg·K)]
    Ps { p_pa: f64, s: f64 },
    /// Pressure [Pa] + enthalpy [J/kg]
    Ph { p_pa: f64, h: f64 },
}

impl InputPair {
    fn classify(a: (Property, f64), b: (Property, f64)) -> FluidResult<Self> {
        if !a.1.is_finite() || !b.1.is_finite() {
            return Err(FluidError::NonPhysical {
                what: "lookup input value",
            });
        }
        // Order-insensitive: (T, Q) and (Q, T) are the same query.
        let pair = match (a.0, b.0) {
            (Property::Temperature, Property::Quality) => InputPair::Tq { t_k: a.1, q: b.1 },
            (Property::Quality, Property::Temperature) => InputPair::Tq { t_k: b.1, q: a.1 },
            (Property::Pressure, Property::Quality) => InputPair::Pq { p_pa: a.1, q: b.1 },
            (Property::Quality, Property::Pressure) => InputPair::Pq { p_pa: b.1, q: a.1 },
            (Property::Pressure, Property::Entropy) => InputPair::Ps { p_pa: a.1, s: b.1 },
            (Property::Entropy, Property::Pressure) => InputPair::Ps { p_pa: b.1, s: a.1 },
            (Property::Pressure, Property::Enthalpy) => InputPair::Ph { p_pa: a.1, h: b.1 },
            (Property::Enthalpy, Property::Pressure) => InputPair::Ph { p_pa: b.1, h: a.1 },
            _ => {
                return Err(FluidError::NotSupported {
                    what: "input property pair",
                });
            }
        };
        Ok(pair)
    }
}

/// Table-backed property provider.
///
/// Stateless and trivially `Send + Sync`; one instance can serve any number
/// of parallel workers.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableProvider;

impl TableProvider {
    pub fn new() -> Self {
        Self
    }

    fn sat_at_temperature(t_k: f64) -> FluidResult<SatPoint> {
        let rows = &R134A_SAT;
        let first = &rows[0];
        let last = &rows[rows.len() - 1];
        if t_k < first.t_k || t_k > last.t_k {
            return Err(FluidError::OutOfRange {
                what: "saturation temperature outside table envelope",
            });
        }
        let idx = rows.partition_point(|row| row.t_k <= t_k).min(rows.len() - 1);
        let i = idx.saturating_sub(1);
        Ok(SatPoint::between(&rows[i], &rows[i + 1], t_k))
    }

    fn sat_at_pressure(p_pa: f64) -> FluidResult<SatPoint> {
        let rows = &R134A_SAT;
        let first = &rows[0];
        let last = &rows[rows.len() - 1];
        if p_pa < first.p_pa || p_pa > last.p_pa {
            return Err(FluidError::OutOfRange {
                what: "saturation pressure outside table envelope",
            });
        }
        let idx = rows.partition_point(|row| row.p_pa <= p_pa).min(rows.len() - 1);
        let i = idx.saturating_sub(1);
        let (lo, hi) = (&rows[i], &rows[i + 1]);
        // Invert the log-linear pressure interpolation, then evaluate the
        // isotherm so T(P) and P(T) round-trip exactly.
        let t_k = lerp(p_pa.ln(), lo.p_pa.ln(), hi.p_pa.ln(), lo.t_k, hi.t_k);
        Ok(SatPoint::between(lo, hi, t_k))
    }

    fn check_quality(q: f64) -> FluidResult<()> {
        if !(0.0..=1.0).contains(&q) {
            return Err(FluidError::NonPhysical {
                what: "dome quality must be within [0,1]",
            });
        }
        Ok(())
    }

    fn dome_output(sat: &SatPoint, q: f64, output: Property) -> FluidResult<f64> {
        match output {
            Property::Pressure => Ok(sat.p_pa),
            Property::Temperature => Ok(sat.t_k),
            Property::Enthalpy => Ok(sat.h_f + q * (sat.h_g - sat.h_f)),
            Property::Entropy => Ok(sat.s_f + q * (sat.s_g - sat.s_f)),
            Property::Quality => Err(FluidError::NotSupported {
                what: "quality output for a dome query",
            }),
        }
    }

    /// Resolve a (P, s) state: two-phase flash or frozen-cp superheat.
    fn solve_ps(sat: &SatPoint, s: f64, output: Property) -> FluidResult<f64> {
        if s < sat.s_f {
            return Err(FluidError::OutOfRange {
                what: "entropy below saturated liquid (subcooled region not modeled)",
            });
        }
        if s <= sat.s_g {
            let x = (s - sat.s_f) / (sat.s_g - sat.s_f);
            return match output {
                Property::Temperature => Ok(sat.t_k),
                Property::Enthalpy => Ok(sat.h_f + x * (sat.h_g - sat.h_f)),
                Property::Quality => Ok(x),
                _ => Err(FluidError::NotSupported {
                    what: "output property for a (P,s) query",
                }),
            };
        }
        // Superheated vapor: ds = cp·dT/T at constant pressure.
        let t = sat.t_k * ((s - sat.s_g) / sat.cp_g).exp();
        if t > T_SUPERHEAT_MAX_K {
            return Err(FluidError::OutOfRange {
                what: "superheat beyond model range",
            });
        }
        match output {
            Property::Temperature => Ok(t),
            Property::Enthalpy => Ok(sat.h_g + sat.cp_g * (t - sat.t_k)),
            Property::Quality => Err(FluidError::NotSupported {
                what: "quality output for a superheated state",
            }),
            _ => Err(FluidError::NotSupported {
                what: "output property for a (P,s) query",
            }),
        }
    }

    /// Resolve a (P, h) state: two-phase flash or frozen-cp superheat.
    ///
    /// A quality request is answered with the extrapolated flash fraction
    /// `(h − h_f)/(h_g − h_f)` even outside [0,1]; deciding whether that is
    /// an anomaly belongs to the caller.
    fn solve_ph(sat: &SatPoint, h: f64, output: Property) -> FluidResult<f64> {
        let x = (h - sat.h_f) / (sat.h_g - sat.h_f);
        if output == Property::Quality {
            return Ok(x);
        }
        if h < sat.h_f {
            return Err(FluidError::OutOfRange {
                what: "enthalpy below saturated liquid (subcooled region not modeled)",
            });
        }
        if h <= sat.h_g {
            return match output {
                Property::Temperature => Ok(sat.t_k),
                Property::Entropy => Ok(sat.s_f + x * (sat.s_g - sat.s_f)),
                _ => Err(FluidError::NotSupported {
                    what: "output property for a (P,h) query",
                }),
            };
        }
        let t = sat.t_k + (h - sat.h_g) / sat.cp_g;
        if t > T_SUPERHEAT_MAX_K {
            return Err(FluidError::OutOfRange {
                what: "superheat beyond model range",
            });
        }
        match output {
            Property::Temperature => Ok(t),
            Property::Entropy => Ok(sat.s_g + sat.cp_g * (t / sat.t_k).ln()),
            _ => Err(FluidError::NotSupported {
                what: "output property for a (P,h) query",
            }),
        }
    }
}

impl PropertyProvider for TableProvider {
    fn name(&self) -> &str {
        "r134a-table"
    }

    fn lookup(
        &self,
        refrigerant: Refrigerant,
        output: Property,
        input1: (Property, f64),
        input2: (Property, f64),
    ) -> FluidResult<f64> {
        let Refrigerant::R134a = refrigerant;
        match InputPair::classify(input1, input2)? {
            InputPair::Tq { t_k, q } => {
                Self::check_quality(q)?;
                let sat = Self::sat_at_temperature(t_k)?;
                Self::dome_output(&sat, q, output)
            }
            InputPair::Pq { p_pa, q } => {
                Self::check_quality(q)?;
                let sat = Self::sat_at_pressure(p_pa)?;
                Self::dome_output(&sat, q, output)
            }
            InputPair::Ps { p_pa, s } => {
                let sat = Self::sat_at_pressure(p_pa)?;
                Self::solve_ps(&sat, s, output)
            }
            InputPair::Ph { p_pa, h } => {
                let sat = Self::sat_at_pressure(p_pa)?;
                Self::solve_ph(&sat, h, output)
            }
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::provider::PropertyProvider;
    use ff_core::units::c;
    use proptest::prelude::*;

    const R: Refrigerant = Refrigerant::R134a;

    proptest! {
        #[test]
        fn dome_entropy_gap_is_positive(t_c in -40.0_f64..70.0_f64) {
            let prov = TableProvider::new();
            let sf = prov.saturation_entropy_at_t(R, c(t_c), 0.0).unwrap();
            let sg = prov.saturation_entropy_at_t(R, c(t_c), 1.0).unwrap();
            prop_assert!(sg > sf);
        }

        #[test]
        fn saturation_pressure_increases_with_temperature(
            t_c in -40.0_f64..69.0_f64,
            dt in 0.1_f64..1.0_f64,
        ) {
            let prov = TableProvider::new();
            let p_lo = prov.saturation_pressure(R, c(t_c)).unwrap().value;
            let p_hi = prov.saturation_pressure(R, c(t_c + dt)).unwrap().value;
            prop_assert!(p_hi > p_lo);
        }

        #[test]
        fn flash_quality_round_trip(t_c in -40.0_f64..70.0_f64, x in 0.0_f64..1.0_f64) {
            let prov = TableProvider::new();
            let p = prov.saturation_pressure(R, c(t_c)).unwrap();
            let h = prov.saturation_enthalpy_at_t(R, c(t_c), x).unwrap();
            let x_back = prov.quality_at_ph(R, p, h).unwrap();
            prop_assert!((x_back - x).abs() < 1e-9);
        }
    }
}
