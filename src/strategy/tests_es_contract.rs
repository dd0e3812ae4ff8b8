// =========================================================================
// FALSIFY-ES: contract tests for the documented (1+1)-ES guarantees.
//
// Each test names the guarantee it tries to falsify; assertion messages
// state what a failure would disprove.
// =========================================================================

use super::benchmarks::{sphere, Quadratic};
use super::{BoxMullerSource, CostFunction, FnCost, OnePlusOneEs, TerminationReason};

/// FALSIFY-ES-001: the strategy minimizes the 2-D sphere to a small cost
/// within a modest budget.
#[test]
fn falsify_es_001_sphere_convergence() {
    let mut es = OnePlusOneEs::new();
    es.set_cost_function(FnCost::new(2, sphere));
    es.set_variate_source(BoxMullerSource::seeded(42));
    es.set_initial_position(&[3.0, -3.0]);
    es.set_maximum_iteration(5000);
    es.initialize(1.0, None, None).unwrap();

    let report = es.start_optimization().unwrap();
    assert!(
        report.cost < 1e-3,
        "FALSIFIED ES-001: sphere objective {} >= 1e-3",
        report.cost
    );
}

/// FALSIFY-ES-002: solution and objective are finite after any run.
#[test]
fn falsify_es_002_finite_result() {
    let mut es = OnePlusOneEs::new();
    es.set_cost_function(FnCost::new(3, sphere));
    es.set_variate_source(BoxMullerSource::seeded(42));
    es.set_initial_position(&[1.0, 2.0, 3.0]);
    es.set_maximum_iteration(2000);
    es.initialize(1.0, None, None).unwrap();

    let report = es.start_optimization().unwrap();
    assert!(
        report.cost.is_finite(),
        "FALSIFIED ES-002: objective is not finite"
    );
    for (i, &v) in report.solution.iter().enumerate() {
        assert!(v.is_finite(), "FALSIFIED ES-002: solution[{i}] is not finite");
    }
}

/// FALSIFY-ES-003: the committed cost never worsens across a minimizing run
/// (acceptance requires strict improvement).
#[test]
fn falsify_es_003_cost_never_worsens() {
    let target = vec![3.0, 4.0];
    let cost_fn = Quadratic::new(target);
    let initial_cost = cost_fn.evaluate(&[0.0, 0.0]);

    let mut es = OnePlusOneEs::new();
    es.set_cost_function(cost_fn);
    es.set_variate_source(BoxMullerSource::seeded(7));
    es.set_initial_position(&[0.0, 0.0]);
    es.initialize(1.0, None, None).unwrap();

    let mut last = initial_cost;
    // Resume in slices of 100 iterations and watch the committed snapshots.
    for budget in (100..=1000).step_by(100) {
        es.set_maximum_iteration(budget);
        let report = es.start_optimization().unwrap();
        assert!(
            report.cost <= last,
            "FALSIFIED ES-003: cost rose from {last} to {}",
            report.cost
        );
        last = report.cost;
    }
    assert!(last < initial_cost, "FALSIFIED ES-003: no improvement at all");
}

/// FALSIFY-ES-004: every run ends in exactly one of the three normal
/// termination states, and the iteration count never exceeds the budget.
#[test]
fn falsify_es_004_termination_is_normal_and_bounded() {
    let mut es = OnePlusOneEs::new();
    es.set_cost_function(FnCost::new(2, sphere));
    es.set_variate_source(BoxMullerSource::seeded(3));
    es.set_initial_position(&[1.0, 1.0]);
    es.set_maximum_iteration(250);
    es.initialize(1.0, None, None).unwrap();

    let report = es.start_optimization().unwrap();
    assert!(
        matches!(
            report.termination,
            TerminationReason::Converged
                | TerminationReason::IterationLimitReached
                | TerminationReason::StoppedByRequest
        ),
        "FALSIFIED ES-004: unexpected termination {:?}",
        report.termination
    );
    assert!(
        report.iterations <= 250,
        "FALSIFIED ES-004: {} iterations exceed the budget",
        report.iterations
    );
}

/// FALSIFY-ES-005: accepted steps never outnumber total iterations.
#[test]
fn falsify_es_005_accepted_within_iterations() {
    let mut es = OnePlusOneEs::new();
    es.set_cost_function(FnCost::new(2, sphere));
    es.set_variate_source(BoxMullerSource::seeded(5));
    es.set_initial_position(&[2.0, 2.0]);
    es.set_maximum_iteration(500);
    es.initialize(1.0, None, None).unwrap();

    let report = es.start_optimization().unwrap();
    assert!(
        report.accepted <= report.iterations,
        "FALSIFIED ES-005: accepted {} > iterations {}",
        report.accepted,
        report.iterations
    );
}
