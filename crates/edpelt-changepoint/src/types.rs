//! Types used for change point detection

use std::fmt;
use std::ops::Range;

/// Result of change point detection
///
/// Change points are reported as the index of the last element of the
/// segment that precedes each break, in ascending order.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangePointResult {
    /// Detected change point indices
    changepoints: Vec<usize>,
    /// Algorithm used for detection
    algorithm: String,
    /// Total number of data points analyzed
    sample_size: usize,
    /// Minimum segment length that was enforced
    min_distance: usize,
    /// Penalty charged per additional segment
    penalty: f64,
    /// Optimal penalized cost of the whole sample
    total_cost: f64,
}

impl ChangePointResult {
    /// Create a new change point result
    pub fn new(
        changepoints: Vec<usize>,
        algorithm: String,
        sample_size: usize,
        min_distance: usize,
        penalty: f64,
        total_cost: f64,
    ) -> Self {
        Self {
            changepoints,
            algorithm,
            sample_size,
            min_distance,
            penalty,
            total_cost,
        }
    }

    /// Get the detected change point indices
    pub fn changepoints(&self) -> &[usize] {
        &self.changepoints
    }

    /// Consume the result, keeping only the indices
    pub fn into_changepoints(self) -> Vec<usize> {
        self.changepoints
    }

    /// Get the number of detected change points
    pub fn count(&self) -> usize {
        self.changepoints.len()
    }

    /// Check if any change points were detected
    pub fn has_changepoints(&self) -> bool {
        !self.changepoints.is_empty()
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    pub fn min_distance(&self) -> usize {
        self.min_distance
    }

    pub fn penalty(&self) -> f64 {
        self.penalty
    }

    /// Optimal penalized cost; zero when the sample was too short to segment
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Half-open index ranges of the segments, covering `0..sample_size`
    pub fn segments(&self) -> Vec<Range<usize>> {
        if self.sample_size == 0 {
            return Vec::new();
        }

        let mut segments = Vec::with_capacity(self.changepoints.len() + 1);
        let mut start = 0;
        for &cp in &self.changepoints {
            segments.push(start..cp + 1);
            start = cp + 1;
        }
        segments.push(start..self.sample_size);
        segments
    }

    /// Segment containing `index`, if it lies inside the sample
    pub fn segment_for_index(&self, index: usize) -> Option<Range<usize>> {
        self.segments()
            .into_iter()
            .find(|segment| segment.contains(&index))
    }
}

impl fmt::Display for ChangePointResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ChangePoint Detection Result:")?;
        writeln!(f, "  Algorithm: {}", self.algorithm)?;
        writeln!(f, "  Sample size: {}", self.sample_size)?;
        writeln!(f, "  Min distance: {}", self.min_distance)?;
        writeln!(f, "  Penalty: {:.3}", self.penalty)?;
        writeln!(f, "  Changepoints detected: {}", self.count())?;

        if !self.changepoints.is_empty() {
            writeln!(f, "  Detected changepoints: {:?}", self.changepoints)?;
        }

        Ok(())
    }
}
