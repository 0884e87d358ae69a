//! The pool entity and the engines that mutate it.
//!
//! | Module | Provides |
//! |--------|----------|
//! | `state` | [`PoolState`], accessors, snapshot and invariant checks |
//! | `lifecycle` | [`PoolState::initialize`], [`PoolState::set_locked`] |
//! | `liquidity` | [`LiquidityPool`](crate::traits::LiquidityPool) for `PoolState` |
//! | `swap` | [`SwapPool`](crate::traits::SwapPool) for `PoolState` |

mod lifecycle;
mod liquidity;
mod state;
mod swap;

#[cfg(test)]
mod proptest_properties;

pub use state::PoolState;
