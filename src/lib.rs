//! Nonparametric change point detection
//!
//! Facade over the workspace crates:
//!
//! - [`edpelt_core`]: error type, numeric element trait, slice utilities
//! - [`edpelt_changepoint`]: the ED-PELT detector
//!
//! The most common items are re-exported at the top level.
//!
//! ```rust
//! use edpelt::{EdPeltDetector, SimpleDetector};
//!
//! let data: Vec<f64> = (0..18).map(|i| (i / 6) as f64).collect();
//! let result = EdPeltDetector::new().detect_simple(&data).unwrap();
//! assert_eq!(result.changepoints(), &[5, 11]);
//! ```

pub use edpelt_changepoint;
pub use edpelt_core;

pub use edpelt_changepoint::{
    change_point_indexes, BatchDetector, ChangePointDetectorProperties, ChangePointResult,
    ConfigurableDetector, EdPeltDetector, EdPeltParameters, SimpleDetector,
};
pub use edpelt_core::{Error, Numeric, Result};

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_facade_reexports() {
        let data: Vec<f64> = (0..18).map(|i| (i / 6) as f64).collect();
        assert_eq!(change_point_indexes(&data, 1).unwrap(), vec![5, 11]);

        let result = EdPeltDetector::new().detect_simple(&data).unwrap();
        assert_relative_eq!(result.penalty(), 3.0 * 18f64.ln());

        let err = change_point_indexes(&data, 0).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }
}
