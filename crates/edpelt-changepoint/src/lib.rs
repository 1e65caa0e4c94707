//! Nonparametric change point detection
//!
//! This crate implements ED-PELT: the PELT (Pruned Exact Linear Time)
//! segmentation algorithm combined with a cost built from the empirical
//! distribution of each segment, following Akinshin (2019). It makes no
//! assumption about the shape of the distribution, so any shift of the
//! distribution counts as a change, not only shifts of the mean.
//!
//! # Pieces
//!
//! - [`PartialSums`]: prefix counts against `k` quantile thresholds
//! - [`EdCostKernel`]: segment cost computed from those counts
//! - [`EdPeltDetector`]: the pruned dynamic program and backtracking
//!
//! ## Usage
//!
//! ```rust
//! use edpelt_changepoint::{EdPeltDetector, SimpleDetector};
//!
//! let data: Vec<f64> = (0..60).map(|i| if i < 30 { 0.0 } else { 5.0 }).collect();
//!
//! let detector = EdPeltDetector::new();
//! let result = detector.detect_simple(&data).unwrap();
//!
//! println!("Detected changepoints: {:?}", result.changepoints());
//! ```

pub mod edpelt;
pub mod kernel;
pub mod partial_sums;
pub mod traits;
pub mod types;

pub use edpelt::{change_point_indexes, EdPeltDetector, EdPeltParameters};
pub use kernel::EdCostKernel;
pub use partial_sums::PartialSums;

pub use traits::{
    BatchDetector, ChangePointDetectorProperties, ConfigurableDetector, SimpleDetector,
};

pub use types::ChangePointResult;
