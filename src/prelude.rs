//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use cpmm_engine::prelude::*;
//! ```

pub use crate::config::PoolConfig;
pub use crate::domain::{
    Amount, Authority, BasisPoints, DepositReceipt, Liquidity, PoolKey, PoolSnapshot, Rounding,
    SwapDirection, SwapResult, TokenAddress, TokenPair, WithdrawReceipt,
};
pub use crate::error::{AmmError, Result};
pub use crate::math::{CheckedArithmetic, CheckedScale};
pub use crate::pool::PoolState;
pub use crate::registry::PoolRegistry;
pub use crate::traits::{LiquidityPool, SwapPool};
