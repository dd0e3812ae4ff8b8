//! Self-adapting (1+1) evolution strategy.
//!
//! A (1+1) evolution strategy keeps exactly one candidate solution. Each
//! iteration perturbs it with a covariance-shaped, radius-scaled Gaussian
//! step and keeps the perturbed point only on strict improvement. The radius
//! follows the classical 1/5-success rule (grow on success, shrink on
//! failure) and the covariance is blended toward recently successful
//! directions, making the search distribution anisotropic.
//!
//! # Example
//!
//! ```
//! use mejora::strategy::{BoxMullerSource, FnCost, OnePlusOneEs};
//!
//! let mut es = OnePlusOneEs::new();
//! es.set_cost_function(FnCost::new(2, |x: &[f64]| x[0] * x[0] + x[1] * x[1]));
//! es.set_variate_source(BoxMullerSource::seeded(42));
//! es.set_initial_position(&[5.0, -3.0]);
//! es.set_maximum_iteration(2000);
//! es.initialize(1.0, None, None).unwrap();
//!
//! let report = es.start_optimization().unwrap();
//! assert!(report.cost < 1e-3);
//! ```
//!
//! # References
//!
//! - Styner et al. (2000): "Parametric estimate of intensity inhomogeneities
//!   applied to MRI"
//! - Rechenberg (1973): Evolutionsstrategie (origin of the 1/5-success rule)

pub mod benchmarks;
mod one_plus_one;
mod state;
mod traits;
mod variate;

pub use one_plus_one::{OnePlusOneEs, StopHandle, DEFAULT_GROWTH_FACTOR};
pub use state::SearchState;
pub use traits::{CostFunction, FnCost, NormalVariateSource, RunReport, TerminationReason};
pub use variate::BoxMullerSource;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests_es_contract;
