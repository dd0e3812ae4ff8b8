//! Mejora: self-adapting (1+1) evolution strategy optimizer in pure Rust.
//!
//! Mejora keeps a single candidate solution and repeatedly perturbs it with
//! a covariance-shaped, radius-scaled Gaussian step, accepting the
//! perturbation only on strict improvement. The search radius follows the
//! classical 1/5-success rule (grow on success, shrink on failure) and the
//! covariance matrix is blended toward recently successful directions, so
//! the search distribution adapts its shape as well as its scale.
//!
//! # Quick Start
//!
//! ```
//! use mejora::prelude::*;
//!
//! // Minimize the 2-D quadratic (x - 3)² + (y - 4)² from the origin.
//! let mut es = OnePlusOneEs::new();
//! es.set_cost_function(Quadratic::new(vec![3.0, 4.0]));
//! es.set_variate_source(BoxMullerSource::seeded(42));
//! es.set_initial_position(&[0.0, 0.0]);
//! es.set_maximum_iteration(5000);
//! es.initialize(1.0, None, None).unwrap();
//!
//! let report = es.start_optimization().unwrap();
//! assert!(report.cost < 1e-3);
//! assert!((report.solution[0] - 3.0).abs() < 0.1);
//! ```
//!
//! # Modules
//!
//! - [`strategy`]: The (1+1) evolution strategy: optimizer, capability
//!   traits, variate source, benchmark functions
//! - [`primitives`]: The symmetric covariance matrix shaping the search
//!   distribution
//! - [`error`]: Error types ([`error::MejoraError`])
//! - [`prelude`]: Convenience re-exports

pub mod error;
pub mod prelude;
pub mod primitives;
pub mod strategy;

pub use error::MejoraError;
