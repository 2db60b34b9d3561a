//! Error types for parameter validation.

use thiserror::Error;

/// Errors raised when cone parameters fall outside their valid ranges.
///
/// The geometry and export functions assume validated input and do not
/// re-check; callers run [`crate::ConeParams::validate`] at the boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A radius or height is zero or negative.
    #[error("Parameter '{name}' must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    /// An arc angle lies outside [1, 360] degrees.
    #[error("Parameter '{name}' must be between 1 and 360 degrees, got {value}")]
    AngleOutOfRange { name: &'static str, value: f64 },

    /// A value is not a finite number.
    #[error("Parameter '{name}' is not finite: {value}")]
    NotFinite { name: &'static str, value: f64 },
}

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParameterError::NonPositive {
            name: "height",
            value: -3.0,
        };
        assert_eq!(err.to_string(), "Parameter 'height' must be positive, got -3");

        let err = ParameterError::AngleOutOfRange {
            name: "top_angle",
            value: 400.0,
        };
        assert_eq!(
            err.to_string(),
            "Parameter 'top_angle' must be between 1 and 360 degrees, got 400"
        );
    }
}
