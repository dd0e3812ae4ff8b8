//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use mejora::prelude::*;
//! ```

pub use crate::error::MejoraError;
pub use crate::primitives::Covariance;
pub use crate::strategy::benchmarks::Quadratic;
pub use crate::strategy::{
    BoxMullerSource, CostFunction, FnCost, NormalVariateSource, OnePlusOneEs, RunReport,
    StopHandle, TerminationReason,
};
