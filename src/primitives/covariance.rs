//! Symmetric covariance matrix for the search distribution.

use serde::{Deserialize, Serialize};

/// A square symmetric matrix of `f64` values (row-major storage) describing
/// the anisotropic shape of the search distribution.
///
/// The matrix starts as the identity and is reshaped by symmetric rank-one
/// blends toward directions that recently improved the cost. Symmetry holds
/// by construction; positive semi-definiteness is expected under correct
/// updates and is not enforced defensively.
///
/// # Examples
///
/// ```
/// use mejora::primitives::Covariance;
///
/// let c = Covariance::identity(3);
/// assert_eq!(c.dim(), 3);
/// assert!((c.frobenius_norm() - 3.0_f64.sqrt()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Covariance {
    data: Vec<f64>,
    dim: usize,
}

impl Covariance {
    /// Creates an identity matrix of the given dimension.
    #[must_use]
    pub fn identity(dim: usize) -> Self {
        let mut data = vec![0.0; dim * dim];
        for i in 0..dim {
            data[i * dim + i] = 1.0;
        }
        Self { data, dim }
    }

    /// Returns the dimension N of this N×N matrix.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.dim + col]
    }

    /// Sets elements (row, col) and (col, row), preserving symmetry.
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set_symmetric(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.dim + col] = value;
        self.data[col * self.dim + row] = value;
    }

    /// Frobenius norm: square root of the sum of squares of all entries.
    ///
    /// Used as the scalar magnitude of the search distribution for
    /// convergence testing.
    #[must_use]
    pub fn frobenius_norm(&self) -> f64 {
        self.data.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Matrix-vector product `C · z`.
    ///
    /// # Panics
    ///
    /// Panics if `z.len() != self.dim()`.
    #[must_use]
    pub fn transform(&self, z: &[f64]) -> Vec<f64> {
        assert_eq!(z.len(), self.dim, "vector length must match matrix dimension");
        (0..self.dim)
            .map(|r| {
                let row = &self.data[r * self.dim..(r + 1) * self.dim];
                row.iter().zip(z).map(|(a, b)| a * b).sum()
            })
            .collect()
    }

    /// Symmetric rank-one blend toward a direction:
    /// `C ← (1 − w)·C + w·(u uᵀ)` with `u = direction / ‖direction‖`.
    ///
    /// A zero direction leaves the matrix unchanged. Symmetry is preserved
    /// because `u uᵀ` is symmetric.
    pub fn blend_rank_one(&mut self, weight: f64, direction: &[f64]) {
        let norm = direction.iter().map(|d| d * d).sum::<f64>().sqrt();
        if norm == 0.0 {
            return;
        }
        let u: Vec<f64> = direction.iter().map(|d| d / norm).collect();
        for r in 0..self.dim {
            for c in 0..self.dim {
                let v = (1.0 - weight) * self.data[r * self.dim + c] + weight * u[r] * u[c];
                self.data[r * self.dim + c] = v;
            }
        }
    }

    /// Returns the underlying data as a slice (row-major).
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

#[cfg(test)]
#[path = "covariance_tests.rs"]
mod tests;
