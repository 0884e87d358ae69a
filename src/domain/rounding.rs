//! Explicit rounding direction for integer division.

/// Rounding direction for every division in the engine.
///
/// The pool always rounds against the caller:
///
/// | Quantity | Direction |
/// |----------|-----------|
/// | Amount the caller must pay in (deposit) | [`Rounding::Up`] |
/// | Amount the pool pays out (withdraw, swap) | [`Rounding::Down`] |
///
/// # Examples
///
/// ```
/// use cpmm_engine::domain::Rounding;
///
/// assert_eq!(Rounding::for_charge(), Rounding::Up);
/// assert_eq!(Rounding::for_payout(), Rounding::Down);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Direction for amounts the caller pays into the pool.
    #[must_use]
    pub const fn for_charge() -> Self {
        Self::Up
    }

    /// Direction for amounts the pool pays out to the caller.
    #[must_use]
    pub const fn for_payout() -> Self {
        Self::Down
    }
}
