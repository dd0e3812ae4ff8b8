//! Property tests for the multiplicative radius law.

use proptest::prelude::*;

use super::{FnCost, NormalVariateSource, OnePlusOneEs};

struct ConstantSource(f64);

impl NormalVariateSource for ConstantSource {
    fn sample(&mut self) -> f64 {
        self.0
    }
}

proptest! {
    /// After k consecutive rejections from radius r0, the radius equals
    /// r0 · shrink^k within floating-point tolerance.
    #[test]
    fn radius_follows_shrink_power_law(
        k in 1u32..60,
        r0 in 0.01f64..10.0,
        shrink in 0.05f64..0.99,
    ) {
        // Minimizing x² from the origin rejects every perturbation.
        let mut es = OnePlusOneEs::new();
        es.set_cost_function(FnCost::new(1, |x: &[f64]| x[0] * x[0]));
        es.set_variate_source(ConstantSource(1.0));
        es.set_initial_position(&[0.0]);
        es.set_maximum_iteration(k);
        es.initialize(r0, None, Some(shrink)).unwrap();

        let report = es.start_optimization().unwrap();
        prop_assert_eq!(report.accepted, 0);

        let radius = es.current_radius().unwrap();
        let expected = r0 * shrink.powi(k as i32);
        prop_assert!(
            (radius - expected).abs() <= expected * 1e-9,
            "radius {} != {} * {}^{}", radius, r0, shrink, k
        );
    }

    /// After k consecutive acceptances from radius r0, the radius equals
    /// r0 · growth^k within floating-point tolerance.
    #[test]
    fn radius_follows_growth_power_law(
        k in 1u32..60,
        r0 in 0.01f64..10.0,
        growth in 1.01f64..2.0,
    ) {
        // Maximizing x with a constant positive perturbation accepts every
        // step.
        let mut es = OnePlusOneEs::new();
        es.set_cost_function(FnCost::new(1, |x: &[f64]| x[0]));
        es.set_variate_source(ConstantSource(1.0));
        es.set_initial_position(&[0.0]);
        es.set_maximum_iteration(k);
        es.maximize_on();
        es.initialize(r0, Some(growth), None).unwrap();

        let report = es.start_optimization().unwrap();
        prop_assert_eq!(report.accepted, k);

        let radius = es.current_radius().unwrap();
        let expected = r0 * growth.powi(k as i32);
        prop_assert!(
            (radius - expected).abs() <= expected * 1e-9,
            "radius {} != {} * {}^{}", radius, r0, growth, k
        );
    }
}
