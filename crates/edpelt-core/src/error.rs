//! Error types for change point detection
//!
//! Provides a unified error type for all edpelt crates.

use thiserror::Error;

/// Core error type for change point detection
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input(_operation: &str) -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for a minimum segment length outside `[1, n]`
    pub fn invalid_min_distance(min_distance: usize, n: usize) -> Self {
        Self::InvalidParameter(format!(
            "{min_distance} should be in range from 1 to {n}"
        ))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} contains NaN or infinite values"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("min_distance must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: min_distance must be positive");

        let err = Error::InsufficientData { expected: 3, actual: 2 };
        assert_eq!(err.to_string(), "Insufficient data: expected at least 3 samples, got 2");

        let err = Error::Computation("cost diverged".to_string());
        assert_eq!(err.to_string(), "Computation error: cost diverged");
    }

    #[test]
    fn test_error_helper_functions() {
        match Error::empty_input("which_min") {
            Error::InsufficientData { expected, actual } => {
                assert_eq!(expected, 1);
                assert_eq!(actual, 0);
            }
            other => panic!("Wrong error type: {other:?}"),
        }

        let err = Error::invalid_min_distance(0, 18);
        assert_eq!(err.to_string(), "Invalid parameter: 0 should be in range from 1 to 18");
        assert!(matches!(err, Error::InvalidParameter(_)));

        let err = Error::non_finite("input data");
        assert_eq!(err.to_string(), "Computation error: input data contains NaN or infinite values");
    }

    #[test]
    fn test_error_propagation() {
        fn inner(fail: bool) -> Result<usize> {
            if fail {
                Err(Error::invalid_min_distance(7, 5))
            } else {
                Ok(42)
            }
        }

        fn outer(fail: bool) -> Result<usize> {
            let value = inner(fail)?;
            Ok(value + 1)
        }

        assert_eq!(outer(false).unwrap(), 43);
        let err = outer(true).unwrap_err();
        assert!(err.to_string().contains("7 should be in range from 1 to 5"));
    }
}
