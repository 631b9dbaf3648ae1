#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

extern crate assert_float_eq;

pub mod matrix;
mod number_traits;
pub mod vector;

pub use number_traits::{Float, NumericOps, One, Two, Zero};

/// Linear interpolation between `x` and `y`.
pub fn mix<T>(x: T, y: T, a: T) -> T
where
    T: Float,
{
    x * (T::one() - a) + y * a
}
