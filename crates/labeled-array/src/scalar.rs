//! Scalar trait for labeled array elements.
//!
//! This module defines the `Scalar` trait that abstracts over the numeric
//! element types a labeled array can hold.

use std::fmt::Debug;

use num_complex::Complex64;
use num_traits::Zero;

/// Trait for element types stored in labeled arrays.
///
/// The zero value is the default fill value of every container.
pub trait Scalar: Clone + Copy + Debug + Default + PartialEq + Zero + 'static {
    /// Create a scalar from f64.
    fn from_f64(val: f64) -> Self;

    /// Bitwise equality: `-0.0` differs from `0.0`, and a NaN equals the
    /// same NaN.
    ///
    /// Sparse storage drops an entry only when it is identical to the fill value.
    fn is_identical(&self, other: &Self) -> bool;
}

impl Scalar for f64 {
    fn from_f64(val: f64) -> Self {
        val
    }

    fn is_identical(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl Scalar for f32 {
    fn from_f64(val: f64) -> Self {
        val as f32
    }

    fn is_identical(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl Scalar for Complex64 {
    fn from_f64(val: f64) -> Self {
        Complex64::new(val, 0.0)
    }

    fn is_identical(&self, other: &Self) -> bool {
        self.re.is_identical(&other.re) && self.im.is_identical(&other.im)
    }
}
