//! Capability traits and result types for the evolution strategy.

use serde::{Deserialize, Serialize};

/// A scalar cost over a fixed-dimensional parameter vector.
///
/// The optimizer only ever calls this capability; it never computes costs
/// itself. Any concrete cost shape can be plugged in, including closures via
/// [`FnCost`].
pub trait CostFunction {
    /// Number of parameters the cost function expects.
    fn dimension(&self) -> usize;

    /// Evaluates the cost at `position`. `position.len()` equals
    /// [`dimension`](CostFunction::dimension) for every call the optimizer
    /// makes.
    fn evaluate(&self, position: &[f64]) -> f64;
}

/// A source of standard-normal (unit Gaussian) variates, one per call.
///
/// Supplied explicitly to the optimizer so runs are reproducible with a
/// fixed seed; no process-wide RNG state is consulted.
pub trait NormalVariateSource {
    /// Draws one standard-normal sample.
    fn sample(&mut self) -> f64;
}

/// Adapts a closure into a [`CostFunction`] with a declared dimensionality.
///
/// # Examples
///
/// ```
/// use mejora::strategy::{CostFunction, FnCost};
///
/// let sphere = FnCost::new(3, |x: &[f64]| x.iter().map(|xi| xi * xi).sum());
/// assert_eq!(sphere.dimension(), 3);
/// assert_eq!(sphere.evaluate(&[0.0, 3.0, 4.0]), 25.0);
/// ```
pub struct FnCost<F> {
    dim: usize,
    f: F,
}

impl<F: Fn(&[f64]) -> f64> FnCost<F> {
    /// Wraps `f` as a cost function over `dim` parameters.
    pub fn new(dim: usize, f: F) -> Self {
        Self { dim, f }
    }
}

impl<F: Fn(&[f64]) -> f64> CostFunction for FnCost<F> {
    fn dimension(&self) -> usize {
        self.dim
    }

    fn evaluate(&self, position: &[f64]) -> f64 {
        (self.f)(position)
    }
}

/// Why a run stopped. All three are normal outcomes, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminationReason {
    /// The covariance's Frobenius norm fell below epsilon: the search
    /// distribution collapsed below the caller's tolerance.
    Converged,
    /// The iteration budget was exhausted.
    IterationLimitReached,
    /// An external stop request was observed at an iteration boundary.
    StoppedByRequest,
}

/// Summary of one `start_optimization` run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Best position found so far (last committed).
    pub solution: Vec<f64>,
    /// Cost at `solution`.
    pub cost: f64,
    /// Total committed iterations across all runs of this optimizer.
    pub iterations: u32,
    /// Steps accepted during this run.
    pub accepted: u32,
    /// Why this run stopped.
    pub termination: TerminationReason,
}
