//! Numeric element types accepted by the detectors
//!
//! Change point detection here only ever compares elements against each other
//! and against thresholds drawn from the same data, so the trait is kept to
//! ordering, finiteness and a lossy view as `f64` for diagnostics.

use num_traits::Num;
use std::fmt::Debug;

/// Base trait for numeric types that can be segmented
pub trait Numeric: Num + Copy + PartialOrd + Debug + Send + Sync {
    /// Check if value is finite (always true for integers)
    fn is_finite(&self) -> bool;

    /// Convert to f64 (for reporting thresholds)
    fn to_f64(&self) -> f64;
}

impl Numeric for f64 {
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }

    fn to_f64(&self) -> f64 {
        *self
    }
}

impl Numeric for f32 {
    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }

    fn to_f64(&self) -> f64 {
        *self as f64
    }
}

macro_rules! impl_integer_numeric {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn is_finite(&self) -> bool {
                    true
                }

                fn to_f64(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_integer_numeric!(i32, u32, i64, u64);

#[cfg(test)]
mod tests {
    use super::*;

    fn all_finite<T: Numeric>(data: &[T]) -> bool {
        data.iter().all(|x| x.is_finite())
    }

    #[test]
    fn test_numeric_trait() {
        assert!(all_finite(&[1.0f64, 2.0, 3.0]));
        assert!(!all_finite(&[1.0f64, f64::NAN]));
        assert!(!all_finite(&[f32::INFINITY]));
        assert!(all_finite(&[i32::MIN, 0, i32::MAX]));
        assert!(all_finite(&[u64::MAX]));
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(Numeric::to_f64(&2.5f32), 2.5);
        assert_eq!(Numeric::to_f64(&-7i64), -7.0);
        assert_eq!(Numeric::to_f64(&42u32), 42.0);
    }
}
