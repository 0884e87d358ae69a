//! Liquidity provision trait extending [`SwapPool`].
//!
//! # Supply Accounting
//!
//! [`LiquidityPool::total_liquidity`] only changes through
//! [`LiquidityPool::deposit`] and [`LiquidityPool::withdraw`].  Swaps move
//! reserves but never mint or burn claim tokens.
//!
//! # Rounding
//!
//! Deposits charge `ceil(lp × reserve / supply)` of each asset; withdrawals
//! pay `floor(lp × reserve / supply)`.  A deposit immediately followed by a
//! withdrawal of the same claim can therefore never return more than was
//! put in.

use super::SwapPool;
use crate::domain::{Amount, DepositReceipt, Liquidity, WithdrawReceipt};
use crate::error::AmmError;

/// Deposit and withdraw interface of a constant-product pool.
pub trait LiquidityPool: SwapPool {
    /// Mints `requested_lp` claim tokens against a proportional deposit.
    ///
    /// On an empty pool the requested amount is ignored: the depositor
    /// supplies exactly `max_x` and `max_y` and receives
    /// `isqrt(max_x × max_y)` claim tokens.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `requested_lp` is zero, or if a
    ///   first deposit leaves either maximum at zero.
    /// - [`AmmError::PoolLocked`] if the pool is locked.
    /// - [`AmmError::SlippageExceeded`] if a required amount exceeds its
    ///   maximum.
    /// - [`AmmError::ArithmeticOverflow`] if a reserve or the supply would
    ///   exceed `u64`.
    fn deposit(
        &mut self,
        requested_lp: Liquidity,
        max_x: Amount,
        max_y: Amount,
    ) -> Result<DepositReceipt, AmmError>;

    /// Burns `lp` claim tokens and pays out the pro-rata share of both
    /// reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `lp` is zero.
    /// - [`AmmError::PoolLocked`] if the pool is locked.
    /// - [`AmmError::InsufficientLiquidity`] if `lp` exceeds the supply.
    /// - [`AmmError::SlippageExceeded`] if a payout is below its minimum.
    fn withdraw(
        &mut self,
        lp: Liquidity,
        min_x: Amount,
        min_y: Amount,
    ) -> Result<WithdrawReceipt, AmmError>;

    /// Computes what [`LiquidityPool::deposit`] would charge, ignoring the
    /// lock flag and the maximums of a non-empty pool.
    ///
    /// # Errors
    ///
    /// As [`LiquidityPool::deposit`], without the lock and slippage checks.
    fn quote_deposit(
        &self,
        requested_lp: Liquidity,
        max_x: Amount,
        max_y: Amount,
    ) -> Result<DepositReceipt, AmmError>;

    /// Computes what [`LiquidityPool::withdraw`] would pay out.
    ///
    /// # Errors
    ///
    /// As [`LiquidityPool::withdraw`], without the lock and slippage checks.
    fn quote_withdraw(&self, lp: Liquidity) -> Result<WithdrawReceipt, AmmError>;

    /// Returns the outstanding claim-token supply.
    #[must_use]
    fn total_liquidity(&self) -> Liquidity;
}
