//! Multiply-then-divide with a 128-bit intermediate.
//!
//! Every ratio in the engine (pro-rata shares, fee-adjusted input,
//! constant-product pricing) is a `a * b / d` over `u64` operands.  The
//! product is taken in `u128`, which cannot overflow, and only the final
//! quotient is narrowed back to `u64`.
//!
//! # Examples
//!
//! ```
//! use cpmm_engine::math::{mul_div, mul_div_ceil};
//!
//! assert_eq!(mul_div(u64::MAX, 2, 4), Ok(u64::MAX / 2));
//! assert_eq!(mul_div(10, 1, 3), Ok(3));
//! assert_eq!(mul_div_ceil(10, 1, 3), Ok(4));
//! assert!(mul_div(1, 1, 0).is_err());
//! ```

use super::div_round;
use crate::domain::Rounding;
use crate::error::{AmmError, Result};

/// `floor(a * b / denominator)`.
///
/// # Errors
///
/// Returns [`AmmError::ArithmeticOverflow`] if `denominator` is zero or the
/// quotient does not fit in `u64`.
pub fn mul_div(a: u64, b: u64, denominator: u64) -> Result<u64> {
    mul_div_rounded(a, b, denominator, Rounding::Down)
}

/// `ceil(a * b / denominator)`.
///
/// # Errors
///
/// Returns [`AmmError::ArithmeticOverflow`] if `denominator` is zero or the
/// quotient does not fit in `u64`.
pub fn mul_div_ceil(a: u64, b: u64, denominator: u64) -> Result<u64> {
    mul_div_rounded(a, b, denominator, Rounding::Up)
}

/// `a * b / denominator` with an explicit rounding direction.
///
/// # Errors
///
/// Returns [`AmmError::ArithmeticOverflow`] if `denominator` is zero or the
/// quotient does not fit in `u64`.
pub fn mul_div_rounded(a: u64, b: u64, denominator: u64, rounding: Rounding) -> Result<u64> {
    let product = u128::from(a) * u128::from(b);
    let quotient = div_round(product, u128::from(denominator), rounding)
        .ok_or(AmmError::ArithmeticOverflow("mul_div by zero"))?;
    u64::try_from(quotient).map_err(|_| AmmError::ArithmeticOverflow("mul_div result exceeds u64"))
}
