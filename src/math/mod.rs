//! FixedPointMath: overflow-checked integer primitives.
//!
//! All arithmetic is unsigned.  Products of two `u64` quantities are taken
//! in `u128` and narrowed only after division; anything that would exceed
//! `u64`, go negative, or divide by zero fails with
//! [`AmmError::ArithmeticOverflow`](crate::error::AmmError::ArithmeticOverflow).

mod checked;
mod mul_div;
mod rounding;
mod sqrt;

pub use checked::{CheckedArithmetic, CheckedScale};
pub use mul_div::{mul_div, mul_div_ceil, mul_div_rounded};
pub use rounding::div_round;
pub use sqrt::isqrt;
