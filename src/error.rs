//! Error types for mejora operations.
//!
//! All three kinds are programmer/configuration errors surfaced immediately
//! to the caller of the offending operation; none are retried internally.
//! Normal termination of a run (iteration limit, convergence, explicit stop)
//! is reported through [`crate::strategy::TerminationReason`], never through
//! this type.

use std::fmt;

/// Main error type for mejora operations.
///
/// # Examples
///
/// ```
/// use mejora::error::MejoraError;
///
/// let err = MejoraError::dimension_mismatch(3, 2);
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum MejoraError {
    /// An operation requires setup that has not happened yet: the optimizer
    /// was not initialized, or a cost function / variate source is unset.
    NotInitialized {
        /// What is missing (e.g. "cost function").
        missing: String,
    },

    /// A parameter value is outside its valid range.
    InvalidParameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// A parameter vector's length disagrees with the cost function's
    /// declared dimensionality.
    DimensionMismatch {
        /// Dimensionality declared by the cost function
        expected: usize,
        /// Length of the offending vector
        actual: usize,
    },
}

impl MejoraError {
    /// Convenience constructor for [`MejoraError::NotInitialized`].
    pub fn not_initialized(missing: impl Into<String>) -> Self {
        MejoraError::NotInitialized {
            missing: missing.into(),
        }
    }

    /// Convenience constructor for [`MejoraError::InvalidParameter`].
    pub fn invalid_parameter(
        param: impl Into<String>,
        value: impl fmt::Display,
        constraint: impl Into<String>,
    ) -> Self {
        MejoraError::InvalidParameter {
            param: param.into(),
            value: value.to_string(),
            constraint: constraint.into(),
        }
    }

    /// Convenience constructor for [`MejoraError::DimensionMismatch`].
    #[must_use]
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        MejoraError::DimensionMismatch { expected, actual }
    }
}

impl fmt::Display for MejoraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MejoraError::NotInitialized { missing } => {
                write!(f, "Optimizer not ready: {missing} has not been set up")
            }
            MejoraError::InvalidParameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter: {param} = {value}, expected {constraint}"
                )
            }
            MejoraError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Parameter dimension mismatch: cost function expects {expected}, got {actual}"
                )
            }
        }
    }
}

impl std::error::Error for MejoraError {}
