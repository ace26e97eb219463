//! Approximate floating-point comparison.

use num_traits::Float;

use super::DEFAULT_EPSILON;

/// A pluggable approximate-equality test.
///
/// The elimination core uses it to decide whether a pivot is effectively
/// zero; tests use the same comparator for their assertions.
pub trait Tolerance<T> {
    /// Whether `a` and `b` are equal within tolerance.
    fn approx_eq(&self, a: T, b: T) -> bool;

    /// Whether `a` is zero within tolerance.
    fn is_zero(&self, a: T) -> bool
    where
        T: Float,
    {
        self.approx_eq(a, T::zero())
    }

    /// Whether `value` is lost in rounding noise next to `scale`, the
    /// magnitude of the terms it was computed from. Unlike
    /// [`is_zero`](Self::is_zero) this has no absolute floor.
    fn is_negligible(&self, value: T, scale: T) -> bool;
}

/// Relative-error comparator: `|a - b| <= (|a| + |b| + 1) * epsilon`.
///
/// The `+ 1` term makes it behave as an absolute test near zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelativeTolerance {
    pub epsilon: f64,
}

impl RelativeTolerance {
    /// Create a comparator with the given epsilon.
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }
}

impl Default for RelativeTolerance {
    fn default() -> Self {
        Self::new(DEFAULT_EPSILON)
    }
}

impl<T: Float> Tolerance<T> for RelativeTolerance {
    fn approx_eq(&self, a: T, b: T) -> bool {
        let eps = T::from(self.epsilon).unwrap_or_else(T::epsilon);
        (a - b).abs() <= (a.abs() + b.abs() + T::one()) * eps
    }

    fn is_negligible(&self, value: T, scale: T) -> bool {
        let eps = T::from(self.epsilon).unwrap_or_else(T::epsilon);
        value.abs() <= scale.abs() * eps
    }
}
