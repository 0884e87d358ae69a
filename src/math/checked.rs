//! Checked arithmetic for the quantity newtypes.
//!
//! [`CheckedArithmetic`] lifts the `Option`-returning primitives on
//! [`Amount`] and [`Liquidity`] into [`Result`](crate::error::Result) so
//! engine code can chain them with `?`.  [`CheckedScale`] is the pro-rata
//! step applied to reserves.  Overflow, underflow and division by zero all
//! surface as [`AmmError::ArithmeticOverflow`]; nothing wraps and nothing
//! saturates.
//!
//! # Examples
//!
//! ```
//! use cpmm_engine::domain::{Amount, Rounding};
//! use cpmm_engine::math::{CheckedArithmetic, CheckedScale};
//!
//! let reserve = Amount::new(1_000);
//! assert_eq!(reserve.safe_add(&Amount::new(1)), Ok(Amount::new(1_001)));
//! assert!(reserve.safe_sub(&Amount::new(1_001)).is_err());
//! assert_eq!(reserve.scale(1, 3, Rounding::Up), Ok(Amount::new(334)));
//! ```

use super::mul_div_rounded;
use crate::domain::{Amount, Liquidity, Rounding};
use crate::error::AmmError;

/// Fallible arithmetic for quantity newtypes.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] on overflow.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the result would be
    /// negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;
}

/// Pro-rata scaling of a reserve amount.
pub trait CheckedScale: Sized {
    /// `self * numerator / denominator` through a `u128` intermediate.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if `denominator` is zero or
    /// the result exceeds `u64`.
    fn scale(&self, numerator: u64, denominator: u64, rounding: Rounding)
        -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::ArithmeticOverflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::ArithmeticOverflow("amount subtraction underflow"))
    }
}

impl CheckedScale for Amount {
    #[inline]
    fn scale(
        &self,
        numerator: u64,
        denominator: u64,
        rounding: Rounding,
    ) -> Result<Self, AmmError> {
        mul_div_rounded(self.get(), numerator, denominator, rounding).map(Amount::new)
    }
}

impl CheckedArithmetic for Liquidity {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::ArithmeticOverflow("liquidity addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::ArithmeticOverflow("liquidity subtraction underflow"))
    }
}
