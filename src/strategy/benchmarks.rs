//! Standard test functions for evaluating the strategy.
//!
//! The usual real-parameter benchmark suite, plus [`Quadratic`], a shifted
//! sphere exposed as a [`CostFunction`] for end-to-end runs.

use std::f64::consts::PI;

use super::CostFunction;

/// Sphere function - unimodal, separable.
///
/// Global minimum: f(0, 0, ..., 0) = 0
///
/// # Example
/// ```
/// use mejora::strategy::benchmarks::sphere;
/// let x = vec![0.0, 0.0, 0.0];
/// assert!((sphere(&x) - 0.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|xi| xi * xi).sum()
}

/// Rosenbrock function - unimodal, non-separable.
///
/// Global minimum: f(1, 1, ..., 1) = 0
///
/// # Example
/// ```
/// use mejora::strategy::benchmarks::rosenbrock;
/// let x = vec![1.0, 1.0, 1.0];
/// assert!((rosenbrock(&x) - 0.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn rosenbrock(x: &[f64]) -> f64 {
    x.windows(2)
        .map(|w| {
            let a = w[1] - w[0] * w[0];
            let b = 1.0 - w[0];
            100.0 * a * a + b * b
        })
        .sum()
}

/// Rastrigin function - multimodal, separable.
///
/// Global minimum: f(0, 0, ..., 0) = 0. Many local minima arranged in a
/// regular lattice.
///
/// # Example
/// ```
/// use mejora::strategy::benchmarks::rastrigin;
/// let x = vec![0.0, 0.0, 0.0];
/// assert!((rastrigin(&x) - 0.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn rastrigin(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    10.0 * n
        + x.iter()
            .map(|xi| xi * xi - 10.0 * (2.0 * PI * xi).cos())
            .sum::<f64>()
}

/// Shifted sphere `f(x) = (x − target)·(x − target)` as a [`CostFunction`].
///
/// # Example
/// ```
/// use mejora::strategy::benchmarks::Quadratic;
/// use mejora::strategy::CostFunction;
///
/// let q = Quadratic::new(vec![3.0, 4.0]);
/// assert_eq!(q.dimension(), 2);
/// assert_eq!(q.evaluate(&[0.0, 0.0]), 25.0);
/// assert_eq!(q.evaluate(&[3.0, 4.0]), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Quadratic {
    target: Vec<f64>,
}

impl Quadratic {
    /// Quadratic bowl with its minimum at `target`.
    #[must_use]
    pub fn new(target: Vec<f64>) -> Self {
        Self { target }
    }

    /// The minimizer of this function.
    #[must_use]
    pub fn target(&self) -> &[f64] {
        &self.target
    }
}

impl CostFunction for Quadratic {
    fn dimension(&self) -> usize {
        self.target.len()
    }

    fn evaluate(&self, position: &[f64]) -> f64 {
        position
            .iter()
            .zip(&self.target)
            .map(|(p, t)| (p - t) * (p - t))
            .sum()
    }
}

#[cfg(test)]
#[path = "benchmarks_tests.rs"]
mod tests;
