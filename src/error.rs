//! Unified error types for the constant-product engine.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type.  Every error is terminal for the attempted operation: the
//! pool state is left exactly as it was before the call.

use thiserror::Error;

/// Errors produced by pool lifecycle, liquidity, swap and registry
/// operations.
///
/// None of these are retried internally.  Retry policy, if any, belongs to
/// the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmmError {
    /// A zero amount was supplied where a positive amount is required.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// The fee rate lies outside `0..=10_000` basis points.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// The pool identity (seed + token pair) has already been initialized.
    #[error("pool already initialized")]
    AlreadyInitialized,

    /// A mutating operation was attempted while the pool is locked.
    #[error("pool is locked")]
    PoolLocked,

    /// Lock/unlock attempted by a non-authority, or on a pool without one.
    #[error("caller is not the pool authority")]
    Unauthorized,

    /// A computed amount violates the caller's stated bound.
    ///
    /// `limit` is the caller's bound (`max*` on deposit, `min*` on
    /// withdraw and swap) and `actual` is the amount the pool computed.
    #[error("slippage exceeded: limit {limit}, actual {actual}")]
    SlippageExceeded {
        /// The bound supplied by the caller.
        limit: u64,
        /// The amount the engine computed.
        actual: u64,
    },

    /// Withdraw requested more LP than exists, or a swap would pay out
    /// nothing.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// Swap attempted against a pool that holds no reserves.
    #[error("pool has no liquidity")]
    NoLiquidity,

    /// An intermediate computation exceeded the 64-bit range, underflowed,
    /// or divided by zero.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),

    /// The token pair is malformed (e.g. both sides share one address).
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// No pool is registered under the requested identity.
    #[error("pool not found")]
    PoolNotFound,
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;
