//! Committed search state of a running (1+1) strategy.

use serde::{Deserialize, Serialize};

use crate::primitives::Covariance;

/// The single current best candidate and the adaptive distribution shape.
///
/// Exclusively owned by the optimizer and mutated exactly once per iteration
/// (accepted or rejected); readers always see the last committed values,
/// never a mid-step candidate. Persists across runs so a later
/// `start_optimization` resumes where the previous run stopped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchState {
    /// Current best position in parameter space.
    pub position: Vec<f64>,
    /// Cost at `position`.
    pub cost: f64,
    /// Anisotropic shape of the perturbation distribution.
    pub covariance: Covariance,
    /// Global step-size multiplier, independent of the covariance shape.
    pub radius: f64,
}

impl SearchState {
    /// Fresh state: identity covariance, the given start point and radius.
    #[must_use]
    pub fn new(position: Vec<f64>, cost: f64, radius: f64) -> Self {
        let dim = position.len();
        Self {
            position,
            cost,
            covariance: Covariance::identity(dim),
            radius,
        }
    }
}
