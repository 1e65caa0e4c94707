//! Core traits for change point detection
//!
//! Detectors here need no external estimators: everything they use is
//! derived from the sample itself. Configuration is orthogonal and handled by
//! [`ConfigurableDetector`].

use crate::types::ChangePointResult;
use edpelt_core::{Numeric, Result};

/// Properties of a change point detector that don't depend on the input
pub trait ChangePointDetectorProperties {
    /// Get the name of the detection algorithm
    fn algorithm_name(&self) -> &'static str;

    /// Get the minimum sample size for which detection can report anything
    fn minimum_sample_size(&self) -> usize;
}

/// Detectors that work on the raw sample alone
pub trait SimpleDetector<T: Numeric>: ChangePointDetectorProperties {
    /// Detect change points in `sample`
    fn detect_simple(&self, sample: &[T]) -> Result<ChangePointResult>;
}

/// Detectors driven by a parameters value
pub trait ConfigurableDetector {
    type Parameters;

    fn with_parameters(params: Self::Parameters) -> Self;
    fn parameters(&self) -> &Self::Parameters;
    fn set_parameters(&mut self, params: Self::Parameters);
}

/// Batch processing over many independent samples
///
/// With the `parallel` feature the samples are processed on the rayon pool.
/// Results keep the input order; the first error aborts the batch.
pub trait BatchDetector<T: Numeric>: SimpleDetector<T> + Sync {
    fn detect_batch(&self, samples: &[&[T]]) -> Result<Vec<ChangePointResult>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            samples
                .par_iter()
                .map(|sample| self.detect_simple(sample))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            samples
                .iter()
                .map(|sample| self.detect_simple(sample))
                .collect()
        }
    }
}
