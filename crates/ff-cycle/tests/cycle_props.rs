//! Property-based checks over the realistic cold-storage operating envelope.

use ff_core::units::{c, dk, kgps};
use ff_cycle::{OperatingParameters, solve_cycle};
use ff_fluids::{Refrigerant, TableProvider};
use proptest::prelude::*;

proptest! {
    #[test]
    fn cycle_laws_hold_across_the_envelope(
        ambient_c in -10.0_f64..25.0,
        interior_c in -25.0_f64..5.0,
        eta in 0.5_f64..1.0,
        approach in 5.0_f64..20.0,
        flow in 0.01_f64..0.5,
    ) {
        // Require a real temperature lift; degenerate lifts are covered by
        // the dedicated inverted-lift test.
        prop_assume!(ambient_c + approach > interior_c + 2.0);

        let provider = TableProvider::new();
        let params = OperatingParameters::new(
            c(ambient_c),
            c(interior_c),
            kgps(flow),
            eta,
            dk(approach),
        ).unwrap();
        let result = solve_cycle(&provider, Refrigerant::R134a, &params).unwrap();

        let s1 = result.state(1);
        let s2 = result.state(2);
        let s3 = result.state(3);
        let s4 = result.state(4);

        // Compression adds enthalpy and never destroys entropy.
        prop_assert!(s2.enthalpy > s1.enthalpy);
        prop_assert!(s2.entropy >= s1.entropy - 1e-9);

        // KPIs are positive and finite.
        prop_assert!(result.compressor_work.value > 0.0);
        prop_assert!(result.evaporator_heat.value > 0.0);
        prop_assert!(result.cop.is_finite() && result.cop > 0.0);

        // First law: rejected heat equals work plus absorbed heat.
        let q_cond = flow * (s2.enthalpy - s3.enthalpy);
        let sum = result.compressor_work.value + result.evaporator_heat.value;
        prop_assert!((q_cond - sum).abs() <= 1e-6 * q_cond.abs());

        // Flash quality stays inside the dome everywhere in this envelope.
        let x4 = s4.quality.unwrap();
        prop_assert!((0.0..=1.0).contains(&x4), "x4 = {}", x4);
        prop_assert!(!result.has_warnings());
    }

    #[test]
    fn lower_efficiency_never_improves_cop(
        eta_low in 0.5_f64..0.7,
        eta_high in 0.8_f64..1.0,
    ) {
        let provider = TableProvider::new();
        let solve = |eta: f64| {
            let params = OperatingParameters::new(
                c(20.0), c(4.0), kgps(0.08), eta, dk(15.0),
            ).unwrap();
            solve_cycle(&provider, Refrigerant::R134a, &params).unwrap()
        };
        let low = solve(eta_low);
        let high = solve(eta_high);
        prop_assert!(low.cop < high.cop);
        prop_assert!(low.compressor_work.value > high.compressor_work.value);
    }
}
