//! Swap trait for executing and quoting swaps.
//!
//! [`SwapPool`] covers the trading side of a pool:
//!
//! 1. **Execute**: [`SwapPool::swap`] performs the exchange and mutates
//!    the reserves.
//! 2. **Quote**: [`SwapPool::quote_swap`] prices the same trade without
//!    touching state.
//! 3. **Inspect**: [`SwapPool::token_pair`] and [`SwapPool::fee`].
//!
//! # Fee Deduction
//!
//! The fee is withheld from the input before the pricing formula runs,
//! and the whole input is credited to the input reserve:
//!
//! ```text
//! net        = floor(amount_in × (10_000 − fee_bps) / 10_000)
//! amount_out = reserve_out − ceil(reserve_in × reserve_out / (reserve_in + net))
//! ```
//!
//! Rounding the post-trade output reserve up means the output is rounded
//! down, so `reserve_x × reserve_y` never decreases across a swap.

use crate::domain::{Amount, BasisPoints, SwapDirection, SwapResult, TokenPair};
use crate::error::AmmError;

/// Trading interface of a constant-product pool.
///
/// # Errors
///
/// Failing methods return [`Result<T, AmmError>`]; validation errors are
/// reported in a fixed order: [`AmmError::InvalidAmount`] before
/// [`AmmError::PoolLocked`] before any pricing error.
pub trait SwapPool {
    /// Executes a swap of `amount_in` in `direction`.
    ///
    /// Either the whole trade applies or none of it does.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `amount_in` is zero.
    /// - [`AmmError::PoolLocked`] if the pool is locked.
    /// - [`AmmError::NoLiquidity`] if either reserve is zero.
    /// - [`AmmError::InsufficientLiquidity`] if the trade would pay out
    ///   nothing.
    /// - [`AmmError::SlippageExceeded`] if the output is below
    ///   `min_amount_out`.
    /// - [`AmmError::ArithmeticOverflow`] if the input reserve would
    ///   exceed `u64`.
    fn swap(
        &mut self,
        direction: SwapDirection,
        amount_in: Amount,
        min_amount_out: Amount,
    ) -> Result<SwapResult, AmmError>;

    /// Prices a swap against the current reserves without executing it.
    ///
    /// Quoting is allowed on a locked pool.
    ///
    /// # Errors
    ///
    /// Same as [`SwapPool::swap`], minus the lock and slippage checks.
    fn quote_swap(&self, direction: SwapDirection, amount_in: Amount)
        -> Result<SwapResult, AmmError>;

    /// Returns the pool's asset pair in X/Y order.
    #[must_use]
    fn token_pair(&self) -> &TokenPair;

    /// Returns the fee rate applied to every swap.
    #[must_use]
    fn fee(&self) -> BasisPoints;
}
