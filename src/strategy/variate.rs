//! Rand-backed standard-normal variate source.

use rand::prelude::*;
use std::f64::consts::PI;

use super::NormalVariateSource;

/// Standard-normal source using the Box-Muller transform over a seedable
/// PRNG.
///
/// Each transform produces a cosine/sine pair; the spare is cached so no
/// uniform draw is wasted.
///
/// # Examples
///
/// ```
/// use mejora::strategy::{BoxMullerSource, NormalVariateSource};
///
/// let mut a = BoxMullerSource::seeded(7);
/// let mut b = BoxMullerSource::seeded(7);
/// assert_eq!(a.sample(), b.sample());
/// ```
#[derive(Debug, Clone)]
pub struct BoxMullerSource {
    rng: StdRng,
    spare: Option<f64>,
}

impl BoxMullerSource {
    /// Creates a source seeded from the thread RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::seeded(rand::rng().random())
    }

    /// Creates a deterministic source from a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            spare: None,
        }
    }
}

impl Default for BoxMullerSource {
    fn default() -> Self {
        Self::new()
    }
}

impl NormalVariateSource for BoxMullerSource {
    fn sample(&mut self) -> f64 {
        if let Some(z) = self.spare.take() {
            return z;
        }
        let u1: f64 = self.rng.random::<f64>().max(1e-300);
        let u2: f64 = self.rng.random();
        let r = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * PI * u2;
        self.spare = Some(r * theta.sin());
        r * theta.cos()
    }
}
