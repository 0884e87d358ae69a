//! Trait abstractions over pool operations.
//!
//! [`SwapPool`] covers trading and [`LiquidityPool`] adds deposits and
//! withdrawals.  [`PoolState`](crate::pool::PoolState) implements both.

mod liquidity_pool;
mod swap_pool;

pub use liquidity_pool::LiquidityPool;
pub use swap_pool::SwapPool;
