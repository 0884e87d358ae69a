//! Basis-point representation for the swap fee.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::AmmError;

/// Denominator that represents 100%.
const MAX_BPS: u16 = 10_000;

/// A fee rate expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// All `u16` values are representable, but only `0..=10_000` are valid
/// fee rates.  Pool configuration rejects anything else with
/// [`AmmError::InvalidFee`].
///
/// # Examples
///
/// ```
/// use cpmm_engine::domain::BasisPoints;
///
/// let bp = BasisPoints::new(30);
/// assert_eq!(bp.get(), 30);
/// assert!(bp.is_valid_percent());
/// assert!(!BasisPoints::new(10_001).is_valid_percent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BasisPoints(u16);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(MAX_BPS);

    /// Creates a new `BasisPoints` from a raw `u16` value.
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Returns the underlying `u16` value.
    #[must_use]
    pub const fn get(&self) -> u16 {
        self.0
    }

    /// Returns `true` if the value is in the valid range (`0..=10_000`).
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= MAX_BPS
    }

    /// Returns `10_000 - self`, the share of an input that survives the fee.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the rate exceeds 100%.
    pub const fn complement(&self) -> crate::error::Result<Self> {
        match MAX_BPS.checked_sub(self.0) {
            Some(v) => Ok(Self(v)),
            None => Err(AmmError::InvalidFee("fee exceeds 10000 bps")),
        }
    }

    /// Computes `amount * self / 10_000` with explicit rounding.
    ///
    /// The intermediate product is taken in `u128`, so this only fails if
    /// the rate itself is out of range and the result no longer fits `u64`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the result exceeds `u64`.
    pub fn apply(&self, amount: Amount, rounding: Rounding) -> crate::error::Result<Amount> {
        crate::math::mul_div_rounded(
            amount.get(),
            u64::from(self.0),
            u64::from(MAX_BPS),
            rounding,
        )
        .map(Amount::new)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(BasisPoints::ZERO.get(), 0);
        assert_eq!(BasisPoints::MAX_PERCENT.get(), 10_000);
        assert_eq!(BasisPoints::default(), BasisPoints::ZERO);
    }

    #[test]
    fn valid_range() {
        assert!(BasisPoints::ZERO.is_valid_percent());
        assert!(BasisPoints::MAX_PERCENT.is_valid_percent());
        assert!(!BasisPoints::new(10_001).is_valid_percent());
        assert!(!BasisPoints::new(u16::MAX).is_valid_percent());
    }

    #[test]
    fn complement() {
        let Ok(c) = BasisPoints::new(30).complement() else {
            panic!("expected Ok");
        };
        assert_eq!(c, BasisPoints::new(9_970));
        assert!(matches!(
            BasisPoints::new(10_001).complement(),
            Err(AmmError::InvalidFee(_))
        ));
    }

    #[test]
    fn apply_round_down() {
        // 9970bp of 10_000 = 9_970
        let Ok(net) = BasisPoints::new(9_970).apply(Amount::new(10_000), Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(net, Amount::new(9_970));
    }

    #[test]
    fn apply_remainder() {
        // 30bp of 1 = 0.003
        let bp = BasisPoints::new(30);
        let Ok(down) = bp.apply(Amount::new(1), Rounding::Down) else {
            panic!("expected Ok");
        };
        let Ok(up) = bp.apply(Amount::new(1), Rounding::Up) else {
            panic!("expected Ok");
        };
        assert_eq!(down, Amount::ZERO);
        assert_eq!(up, Amount::new(1));
    }

    #[test]
    fn apply_max_amount_full_rate() {
        let Ok(all) = BasisPoints::MAX_PERCENT.apply(Amount::MAX, Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(all, Amount::MAX);
    }

    #[test]
    fn apply_out_of_range_rate_overflows() {
        let result = BasisPoints::new(u16::MAX).apply(Amount::MAX, Rounding::Down);
        assert!(matches!(result, Err(AmmError::ArithmeticOverflow(_))));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", BasisPoints::new(30)), "30bp");
    }
}
