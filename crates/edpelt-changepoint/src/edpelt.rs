//! ED-PELT change point detection
//!
//! PELT (Pruned Exact Linear Time) segmentation driven by the nonparametric
//! empirical-distribution cost from [`EdCostKernel`], after Akinshin (2019),
//! <https://aakinshin.net/posts/edpelt/>.
//!
//! The detector minimizes the total segment cost plus a penalty of `3 ln n`
//! per additional segment. Boundaries that can no longer be part of an
//! optimal segmentation are dropped from the candidate set at every step,
//! which keeps the work close to linear in practice.
//!
//! Neither the number of thresholds (`min(n, ceil(4 ln n))`) nor the penalty
//! is configurable; the only parameter is the minimum segment length.

use crate::kernel::EdCostKernel;
use crate::traits::{
    BatchDetector, ChangePointDetectorProperties, ConfigurableDetector, SimpleDetector,
};
use crate::types::ChangePointResult;
use edpelt_core::{utils::which_min, Error, Numeric, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// ED-PELT parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdPeltParameters {
    /// Minimum segment length, in `[1, n]`
    pub min_distance: usize,
}

impl Default for EdPeltParameters {
    fn default() -> Self {
        Self { min_distance: 1 }
    }
}

impl EdPeltParameters {
    /// Check the parameters against a sample of length `n`
    pub fn validate(&self, n: usize) -> Result<()> {
        if self.min_distance < 1 || self.min_distance > n {
            return Err(Error::invalid_min_distance(self.min_distance, n));
        }
        Ok(())
    }
}

/// Optimal segmentation of one sample
#[derive(Debug, Clone)]
struct Segmentation {
    change_points: Vec<usize>,
    penalty: f64,
    total_cost: f64,
}

/// Nonparametric PELT change point detector
///
/// Holds only its parameters, so a single instance can be shared freely
/// between threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdPeltDetector {
    params: EdPeltParameters,
}

impl EdPeltDetector {
    /// Create a detector with a minimum segment length of 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with the given minimum segment length
    ///
    /// The value is checked against the sample length at detection time.
    pub fn with_min_distance(min_distance: usize) -> Self {
        Self {
            params: EdPeltParameters { min_distance },
        }
    }

    /// Number of quantile thresholds used for a sample of length `n`
    pub fn quantile_count(n: usize) -> usize {
        if n <= 1 {
            return n;
        }
        let k = (4.0 * (n as f64).ln()).ceil() as usize;
        k.min(n)
    }

    /// Penalty charged per additional segment for a sample of length `n`
    pub fn penalty(n: usize) -> f64 {
        if n == 0 {
            return 0.0;
        }
        3.0 * (n as f64).ln()
    }

    /// Indices of detected change points, ascending
    ///
    /// Each index is the last position of the segment before a break.
    /// Samples of length 2 or less never contain change points.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidParameter`] if `min_distance` is outside `[1, n]`
    /// - [`Error::Computation`] if the sample contains NaN or infinite values
    pub fn change_point_indexes<T: Numeric>(&self, data: &[T]) -> Result<Vec<usize>> {
        Ok(self.segment(data)?.change_points)
    }

    #[instrument(
        level = "debug",
        skip(self, data),
        fields(n = data.len(), min_distance = self.params.min_distance)
    )]
    fn segment<T: Numeric>(&self, data: &[T]) -> Result<Segmentation> {
        let n = data.len();
        let penalty = Self::penalty(n);

        if n <= 2 {
            return Ok(Segmentation {
                change_points: Vec::new(),
                penalty,
                total_cost: 0.0,
            });
        }

        self.params.validate(n)?;
        if data.iter().any(|x| !x.is_finite()) {
            return Err(Error::non_finite("input data"));
        }

        let min_distance = self.params.min_distance;
        let k = Self::quantile_count(n);
        debug!(k, penalty, "Building partial sums");
        let kernel = EdCostKernel::new(data, k);

        let mut best_cost = vec![0.0; n + 1];
        best_cost[0] = -penalty;
        // Too early for any boundary other than 0
        for tau in min_distance..(2 * min_distance).min(n + 1) {
            best_cost[tau] = kernel.segment_cost(0, tau);
        }

        let mut previous_change_point = vec![0usize; n + 1];
        let mut previous_taus = vec![0, min_distance];
        let mut candidate_costs: Vec<f64> = Vec::with_capacity(previous_taus.len());

        for tau in 2 * min_distance..=n {
            candidate_costs.clear();
            candidate_costs.extend(
                previous_taus
                    .iter()
                    .map(|&s| best_cost[s] + kernel.segment_cost(s, tau) + penalty),
            );

            let best = which_min(&candidate_costs)?;
            let current_best = candidate_costs[best];
            best_cost[tau] = current_best;
            previous_change_point[tau] = previous_taus[best];

            let before = previous_taus.len();
            previous_taus = previous_taus
                .iter()
                .zip(&candidate_costs)
                .filter(|&(_, &cost)| cost < current_best + penalty)
                .map(|(&s, _)| s)
                .collect();
            trace!(tau, pruned = before - previous_taus.len(), "Pruned candidates");

            previous_taus.push(tau - (min_distance - 1));
        }

        let change_points = backtrack(&previous_change_point, n);
        debug!(
            change_points = change_points.len(),
            candidates = previous_taus.len(),
            "Segmentation complete"
        );

        Ok(Segmentation {
            change_points,
            penalty,
            total_cost: best_cost[n],
        })
    }
}

/// Follow predecessor links from `n` back to 0
///
/// Internal boundaries are 1-based segment ends; reported indices are the
/// last element before each boundary, hence the `- 1`.
fn backtrack(previous_change_point: &[usize], n: usize) -> Vec<usize> {
    let mut change_points = Vec::new();
    let mut current = previous_change_point[n];
    while current != 0 {
        change_points.push(current - 1);
        current = previous_change_point[current];
    }
    change_points.reverse();
    change_points
}

/// Detect change points with the given minimum segment length
///
/// Shorthand for `EdPeltDetector::with_min_distance(min_distance).change_point_indexes(data)`.
///
/// # Examples
///
/// ```rust
/// use edpelt_changepoint::change_point_indexes;
///
/// let data = [0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
///             1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
///             2.0, 2.0, 2.0, 2.0, 2.0, 2.0];
/// assert_eq!(change_point_indexes(&data, 1).unwrap(), vec![5, 11]);
/// ```
pub fn change_point_indexes<T: Numeric>(data: &[T], min_distance: usize) -> Result<Vec<usize>> {
    EdPeltDetector::with_min_distance(min_distance).change_point_indexes(data)
}

impl ChangePointDetectorProperties for EdPeltDetector {
    fn algorithm_name(&self) -> &'static str {
        "ED-PELT"
    }

    fn minimum_sample_size(&self) -> usize {
        3
    }
}

impl<T: Numeric> SimpleDetector<T> for EdPeltDetector {
    fn detect_simple(&self, sample: &[T]) -> Result<ChangePointResult> {
        let segmentation = self.segment(sample)?;

        Ok(ChangePointResult::new(
            segmentation.change_points,
            self.algorithm_name().to_string(),
            sample.len(),
            self.params.min_distance,
            segmentation.penalty,
            segmentation.total_cost,
        ))
    }
}

impl<T: Numeric> BatchDetector<T> for EdPeltDetector {}

impl ConfigurableDetector for EdPeltDetector {
    type Parameters = EdPeltParameters;

    fn with_parameters(params: Self::Parameters) -> Self {
        Self { params }
    }

    fn parameters(&self) -> &Self::Parameters {
        &self.params
    }

    fn set_parameters(&mut self, params: Self::Parameters) {
        self.params = params;
    }
}
