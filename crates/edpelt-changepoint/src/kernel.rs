//! Segment cost kernel
//!
//! Expresses the empirical-distribution cost of a segment in terms of the
//! prefix counts held by [`PartialSums`]. For every threshold the segment's
//! share of observations below it is compared against a homogeneous sample
//! through a binary entropy term; the terms are summed and rescaled so costs
//! are comparable across different `k`.

use crate::partial_sums::PartialSums;
use edpelt_core::Numeric;

/// Cost kernel for the ED-PELT dynamic program
#[derive(Debug, Clone)]
pub struct EdCostKernel {
    partial_sums: PartialSums,
    /// `2c / k` with `c = -ln(2n - 1)`
    scale: f64,
}

impl EdCostKernel {
    /// Build partial sums for `data` and wrap them in a kernel
    pub fn new<T: Numeric>(data: &[T], k: usize) -> Self {
        Self::from_partial_sums(PartialSums::new(data, k))
    }

    /// Wrap an already built table
    pub fn from_partial_sums(partial_sums: PartialSums) -> Self {
        let n = partial_sums.len();
        let k = partial_sums.k();
        let scale = if n == 0 || k == 0 {
            0.0
        } else {
            let c = -((2 * n - 1) as f64).ln();
            2.0 * c / k as f64
        };

        Self {
            partial_sums,
            scale,
        }
    }

    pub fn partial_sums(&self) -> &PartialSums {
        &self.partial_sums
    }

    /// Cost of treating `data[tau1..tau2)` as one homogeneous segment
    ///
    /// Requires `tau1 < tau2 <= n`. The result is never negative.
    pub fn segment_cost(&self, tau1: usize, tau2: usize) -> f64 {
        debug_assert!(tau1 < tau2 && tau2 <= self.partial_sums.len());

        let length = tau2 - tau1;
        let full = 2 * length;
        let length_f = length as f64;

        let mut sum = 0.0;
        for i in 0..self.partial_sums.k() {
            let actual = self.partial_sums.range_count(i, tau1, tau2);
            // Segment entirely on one side of the threshold: no contribution
            if actual == 0 || actual == full {
                continue;
            }
            let fit = actual as f64 * 0.5 / length_f;
            sum += length_f * (fit * fit.ln() + (1.0 - fit) * (1.0 - fit).ln());
        }

        self.scale * sum
    }
}
