//! Core types shared by the ED-PELT crates
//!
//! This crate holds the pieces that are not specific to the segmentation
//! algorithm itself:
//!
//! - [`Error`] and [`Result`]: the unified error type for the workspace
//! - [`Numeric`]: the element types a detector accepts
//! - [`utils`]: small slice helpers (ordering, minimum selection)
//!
//! # Example
//!
//! ```rust
//! use edpelt_core::utils::{sorted, which_min};
//!
//! let data = [3.0, 1.0, 2.0, 1.0];
//! assert_eq!(sorted(&data), vec![1.0, 1.0, 2.0, 3.0]);
//! assert_eq!(which_min(&data).unwrap(), 1);
//! ```

pub mod error;
pub mod numeric;
pub mod utils;

pub use error::{Error, Result};
pub use numeric::Numeric;
