//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during mathematical operations.
#[derive(Error, Debug, Clone)]
pub enum MathError {
    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// A computation produced a non-finite value.
    #[error("Non-finite value in {operation}: {value}")]
    NonFinite {
        /// The operation that produced the value.
        operation: String,
        /// The offending value.
        value: f64,
    },

    /// Insufficient data points for operation.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        actual: usize,
    },

    /// A uniform draw fell outside the domain of the transform consuming it.
    #[error("Uniform draw {value} outside the unit interval")]
    UniformOutOfRange {
        /// The offending draw.
        value: f64,
    },
}

impl MathError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates a non-finite value error.
    #[must_use]
    pub fn non_finite(operation: impl Into<String>, value: f64) -> Self {
        Self::NonFinite {
            operation: operation.into(),
            value,
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }
}
