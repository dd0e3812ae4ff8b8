//! Core numeric primitives for the search distribution.

mod covariance;

pub use covariance::Covariance;
