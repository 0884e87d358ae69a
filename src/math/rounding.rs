//! Rounding division on the `u128` intermediate.
//!
//! [`div_round`] is the single place where a wide product is divided back
//! down.  Ceiling division is computed from quotient and remainder, so it
//! never needs the `n + d - 1` adjustment that can overflow near
//! `u128::MAX`.
//!
//! # Examples
//!
//! ```
//! use cpmm_engine::domain::Rounding;
//! use cpmm_engine::math::div_round;
//!
//! assert_eq!(div_round(10, 3, Rounding::Down), Some(3));
//! assert_eq!(div_round(10, 3, Rounding::Up), Some(4));
//! assert_eq!(div_round(10, 0, Rounding::Down), None);
//! ```

use crate::domain::Rounding;

/// `numerator / denominator` rounded in the given direction.
///
/// Returns [`None`] if `denominator` is zero.
#[must_use]
pub const fn div_round(numerator: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let q = numerator / denominator;
    match rounding {
        Rounding::Down => Some(q),
        // q + 1 cannot overflow: a non-zero remainder implies denominator > 1.
        Rounding::Up if numerator % denominator != 0 => Some(q + 1),
        Rounding::Up => Some(q),
    }
}
