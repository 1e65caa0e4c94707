//! Empirical quantile binning
//!
//! For `k` quantile thresholds taken from the sorted sample, stores prefix
//! counts of how many observations fall below or on each threshold. Any
//! sub-range count is then a single subtraction, which is what keeps the
//! segment cost cheap inside the dynamic program.
//!
//! Observations are coded 2 (below), 1 (equal) or 0 (above) so that ties
//! contribute half weight.

use edpelt_core::{utils::sorted, Numeric};

/// Prefix counts for `k` quantile thresholds over a sample of length `n`
///
/// Stored row-major in one contiguous buffer of `k * (n + 1)` counts. Column 0
/// of every row is zero and every row is non-decreasing.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialSums {
    counts: Vec<usize>,
    thresholds: Vec<f64>,
    k: usize,
    n: usize,
}

impl PartialSums {
    /// Build the table for `data` with `k` thresholds
    ///
    /// The input slice is not modified; a sorted copy is used to pick the
    /// thresholds.
    ///
    /// # Panics
    ///
    /// Panics if `data` is empty while `k > 0`, since no threshold exists.
    pub fn new<T: Numeric>(data: &[T], k: usize) -> Self {
        let n = data.len();
        assert!(
            k == 0 || n > 0,
            "Cannot choose quantile thresholds from an empty sample"
        );

        let width = n + 1;
        let mut counts = vec![0usize; k * width];
        let mut thresholds = Vec::with_capacity(k);
        let sorted_data = sorted(data);

        for (i, row) in counts.chunks_exact_mut(width).enumerate() {
            let threshold = sorted_data[Self::threshold_position(i, k, n)];
            thresholds.push(threshold.to_f64());

            for tau in 1..=n {
                let value = data[tau - 1];
                let weight = if value < threshold {
                    2
                } else if value == threshold {
                    1
                } else {
                    0
                };
                row[tau] = row[tau - 1] + weight;
            }
        }

        Self {
            counts,
            thresholds,
            k,
            n,
        }
    }

    /// Position in the sorted sample of the `i`-th of `k` thresholds
    ///
    /// `z` is evenly spaced in (-1, 1) and mapped through a logistic warp with
    /// base `2n - 1`, so thresholds are denser in the tails than a uniform
    /// grid of probabilities would place them.
    pub fn threshold_position(i: usize, k: usize, n: usize) -> usize {
        let z = -1.0 + (2 * i + 1) as f64 / k as f64;
        let p = 1.0 / (1.0 + ((2 * n - 1) as f64).powf(-z));
        ((n - 1) as f64 * p).floor() as usize
    }

    /// Number of thresholds
    pub fn k(&self) -> usize {
        self.k
    }

    /// Length of the sample the table was built from
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the table was built from an empty sample
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Thresholds as `f64`, one per row
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Prefix counts for threshold `i`, `n + 1` entries
    pub fn row(&self, i: usize) -> &[usize] {
        let width = self.n + 1;
        &self.counts[i * width..(i + 1) * width]
    }

    /// Coded count for threshold `i` over `data[tau1..tau2)`
    #[inline]
    pub fn range_count(&self, i: usize, tau1: usize, tau2: usize) -> usize {
        let row = self.row(i);
        row[tau2] - row[tau1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_positions_small_sample() {
        // n = 4, k = 4: p ~ [0.19, 0.38, 0.62, 0.81]
        let positions: Vec<usize> = (0..4)
            .map(|i| PartialSums::threshold_position(i, 4, 4))
            .collect();
        assert_eq!(positions, vec![0, 1, 1, 2]);
    }

    #[test]
    fn test_partial_sums_two_blocks() {
        let data = [0.0, 0.0, 1.0, 1.0];
        let sums = PartialSums::new(&data, 4);

        assert_eq!(sums.k(), 4);
        assert_eq!(sums.len(), 4);
        assert_eq!(sums.thresholds(), &[0.0, 0.0, 0.0, 1.0]);

        for i in 0..3 {
            assert_eq!(sums.row(i), &[0, 1, 2, 2, 2]);
        }
        assert_eq!(sums.row(3), &[0, 2, 4, 5, 6]);

        assert_eq!(sums.range_count(3, 1, 3), 3);
        assert_eq!(sums.range_count(0, 2, 4), 0);
    }

    #[test]
    fn test_rows_start_at_zero_and_never_decrease() {
        let data: Vec<f64> = (0..50).map(|i| ((i * 37) % 11) as f64 - 5.0).collect();
        let k = 16;
        let sums = PartialSums::new(&data, k);

        for i in 0..k {
            let row = sums.row(i);
            assert_eq!(row.len(), data.len() + 1);
            assert_eq!(row[0], 0);
            assert!(row.windows(2).all(|w| w[0] <= w[1]));
            assert!(row[data.len()] <= 2 * data.len());
        }
    }

    #[test]
    fn test_input_is_not_sorted_in_place() {
        let data = vec![3, 1, 2];
        let _ = PartialSums::new(&data, 3);
        assert_eq!(data, vec![3, 1, 2]);
    }

    #[test]
    fn test_integer_input() {
        let data = [5i32, 5, 5];
        let sums = PartialSums::new(&data, 3);
        for i in 0..3 {
            assert_eq!(sums.row(i), &[0, 1, 2, 3]);
        }
    }

    #[test]
    fn test_empty_without_thresholds() {
        let data: [f64; 0] = [];
        let sums = PartialSums::new(&data, 0);
        assert!(sums.is_empty());
        assert!(sums.thresholds().is_empty());
    }
}
