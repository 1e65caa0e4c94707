//! Utility functions for working with data slices

use crate::{Error, Numeric, Result};
use std::cmp::Ordering;

/// Sort data and return a new vector
///
/// The input slice is left untouched. Incomparable values (NaN) are treated
/// as equal to their neighbours; callers that care reject them beforehand.
///
/// # Examples
///
/// ```rust
/// use edpelt_core::utils::sorted;
///
/// let data = vec![3, 1, 5, 2, 4];
/// assert_eq!(sorted(&data), vec![1, 2, 3, 4, 5]);
/// ```
pub fn sorted<T: Numeric>(data: &[T]) -> Vec<T> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

/// Index of the smallest value, first occurrence on ties
///
/// # Errors
///
/// Returns [`Error::InsufficientData`] when `values` is empty.
///
/// # Examples
///
/// ```rust
/// use edpelt_core::utils::which_min;
///
/// assert_eq!(which_min(&[4.0, 2.0, 9.0, 2.0]).unwrap(), 1);
/// assert!(which_min(&[]).is_err());
/// ```
pub fn which_min(values: &[f64]) -> Result<usize> {
    let (&first, rest) = values
        .split_first()
        .ok_or_else(|| Error::empty_input("which_min"))?;

    let mut min_value = first;
    let mut min_index = 0;
    for (i, &value) in rest.iter().enumerate() {
        if value < min_value {
            min_value = value;
            min_index = i + 1;
        }
    }

    Ok(min_index)
}
