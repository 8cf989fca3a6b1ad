//! Unified error types for the analytics engine.

use thiserror::Error;

/// Unified error type for all analytics operations.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Invalid input parameter
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Value out of bounds
    #[error("{name} value {value} is out of bounds [{min}, {max}]")]
    OutOfBounds {
        /// Name of the parameter that is out of bounds.
        name: String,
        /// The value that was provided.
        value: f64,
        /// Minimum allowed value.
        min: f64,
        /// Maximum allowed value.
        max: f64,
    },

    /// Randomness source produced an unusable draw
    #[error("random source failure: {0}")]
    RandomSource(String),

    /// Long-running estimation was cancelled by the caller
    #[error("estimation cancelled")]
    Cancelled,

    /// General calculation failure
    #[error("calculation failed: {0}")]
    CalculationFailed(String),
}

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl AnalyticsError {
    /// Creates an invalid input error.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        AnalyticsError::InvalidInput(reason.into())
    }

    /// Creates an out-of-bounds error.
    #[must_use]
    pub fn out_of_bounds(name: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        AnalyticsError::OutOfBounds {
            name: name.into(),
            value,
            min,
            max,
        }
    }
}

impl From<tailrisk_math::MathError> for AnalyticsError {
    fn from(err: tailrisk_math::MathError) -> Self {
        match err {
            tailrisk_math::MathError::InvalidInput { reason } => {
                AnalyticsError::InvalidInput(reason)
            }
            tailrisk_math::MathError::UniformOutOfRange { .. } => {
                AnalyticsError::RandomSource(err.to_string())
            }
            other => AnalyticsError::CalculationFailed(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnalyticsError::invalid_input("simulation count must be positive");
        assert!(err.to_string().contains("simulation count"));

        let err = AnalyticsError::out_of_bounds("confidence_level", 1.5, 0.0, 1.0);
        assert!(err.to_string().contains("confidence_level"));
        assert!(err.to_string().contains("1.5"));
    }

    #[test]
    fn test_math_error_conversion() {
        let math_err = tailrisk_math::MathError::invalid_input("bad");
        let err: AnalyticsError = math_err.into();
        assert!(matches!(err, AnalyticsError::InvalidInput(_)));
    }
}
