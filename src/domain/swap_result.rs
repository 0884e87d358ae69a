//! Outcome of a swap.

use core::fmt;

use super::{Amount, SwapDirection};
use crate::error::AmmError;

/// The realized amounts of a swap (or of a swap quote).
///
/// `fee` is the part of `amount_in` withheld from the pricing formula.  It
/// is not paid out anywhere: the full `amount_in` is credited to the input
/// reserve, so the fee accrues to liquidity providers.
///
/// # Invariants
///
/// - `amount_in > 0` and `amount_out > 0`.
/// - `fee < amount_in`.
///
/// # Examples
///
/// ```
/// use cpmm_engine::domain::{Amount, SwapDirection, SwapResult};
///
/// let r = SwapResult::new(SwapDirection::XToY, Amount::new(10_000), Amount::new(9_871), Amount::new(30));
/// assert!(r.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSwapResult"))]
pub struct SwapResult {
    direction: SwapDirection,
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSwapResult {
    direction: SwapDirection,
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSwapResult> for SwapResult {
    type Error = AmmError;

    fn try_from(raw: RawSwapResult) -> Result<Self, Self::Error> {
        Self::new(raw.direction, raw.amount_in, raw.amount_out, raw.fee)
    }
}

impl SwapResult {
    /// Creates a new `SwapResult` with validated invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAmount`] if `amount_in` or `amount_out`
    /// is zero, or if `fee >= amount_in`.
    pub const fn new(
        direction: SwapDirection,
        amount_in: Amount,
        amount_out: Amount,
        fee: Amount,
    ) -> crate::error::Result<Self> {
        if amount_in.is_zero() {
            return Err(AmmError::InvalidAmount("amount_in must be positive"));
        }
        if amount_out.is_zero() {
            return Err(AmmError::InvalidAmount("amount_out must be positive"));
        }
        if fee.get() >= amount_in.get() {
            return Err(AmmError::InvalidAmount("fee must be less than amount_in"));
        }
        Ok(Self {
            direction,
            amount_in,
            amount_out,
            fee,
        })
    }

    /// Returns the swap direction.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Returns the full input amount credited to the input reserve.
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the amount debited from the output reserve.
    #[must_use]
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the fee withheld from pricing.
    #[must_use]
    pub const fn fee(&self) -> Amount {
        self.fee
    }

    /// Returns the input that took part in pricing (`amount_in - fee`).
    pub const fn amount_in_after_fee(&self) -> Amount {
        Amount::new(self.amount_in.get().saturating_sub(self.fee.get()))
    }

    /// Realized price as output units per input unit.
    #[must_use]
    pub fn effective_price(&self) -> f64 {
        self.amount_out.get() as f64 / self.amount_in.get() as f64
    }

    /// Relative shortfall of the realized price against `spot_price`
    /// (output units per input unit before the swap), as a fraction.
    ///
    /// Returns `None` when `spot_price` is not strictly positive.
    #[must_use]
    pub fn price_impact(&self, spot_price: f64) -> Option<f64> {
        if spot_price <= 0.0 {
            return None;
        }
        Some((spot_price - self.effective_price()) / spot_price)
    }
}

impl fmt::Display for SwapResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapResult({}, in={}, out={}, fee={})",
            self.direction, self.amount_in, self.amount_out, self.fee
        )
    }
}
