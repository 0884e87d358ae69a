//! # CPMM Engine
//!
//! A constant-product (`x · y = k`) automated market maker for a single
//! pair of fungible assets.
//!
//! Liquidity providers deposit both assets in proportion to the current
//! reserves and receive LP claim tokens; traders swap one asset for the
//! other at a price set by the reserve ratio, paying a fee that stays in
//! the pool.  All arithmetic is unsigned 64-bit with `u128`
//! intermediates and explicit rounding in the pool's favour.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` for state, config and receipts |
//!
//! # Quick Start
//!
//! ```rust
//! use cpmm_engine::prelude::*;
//!
//! // 1. Two assets and a 0.30% fee
//! let pair = TokenPair::new(
//!     TokenAddress::from_bytes([1u8; 32]),
//!     TokenAddress::from_bytes([2u8; 32]),
//! )
//! .expect("distinct assets");
//! let config = PoolConfig::new(1, pair, BasisPoints::new(30), None).expect("valid config");
//!
//! // 2. Create the pool and seed it
//! let mut pool = PoolState::initialize(&config).expect("pool created");
//! let minted = pool
//!     .deposit(Liquidity::new(1), Amount::new(1_000_000), Amount::new(1_000_000))
//!     .expect("first deposit");
//! assert_eq!(minted.lp_minted(), Liquidity::new(1_000_000));
//!
//! // 3. Sell 10 000 X for at least 9 000 Y
//! let result = pool
//!     .swap(SwapDirection::XToY, Amount::new(10_000), Amount::new(9_000))
//!     .expect("swap succeeded");
//! assert_eq!(result.amount_out(), Amount::new(9_871));
//! assert_eq!(result.fee(), Amount::new(30));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Registry    │  PoolKey -> Mutex<PoolState>, transactional commit
//! └──────┬───────┘
//!        │ &mut PoolState
//!        ▼
//! ┌──────────────┐
//! │     Pool      │  lifecycle, LiquidityEngine, SwapEngine
//! └──────┬───────┘
//!        │ SwapPool + LiquidityPool traits
//!        ▼
//! ┌──────────────┐
//! │ Domain / Math │  Amount, Liquidity, BasisPoints, mul_div, isqrt
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Liquidity`](domain::Liquidity), [`BasisPoints`](domain::BasisPoints), receipts |
//! | [`traits`] | [`SwapPool`](traits::SwapPool) and [`LiquidityPool`](traits::LiquidityPool) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) creation parameters |
//! | [`pool`] | [`PoolState`](pool::PoolState) and the engines that mutate it |
//! | [`registry`] | [`PoolRegistry`](registry::PoolRegistry) for shared, serialized access |
//! | [`math`] | Overflow-checked `mul_div`, rounding division, integer square root |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |
//!
//! # Logging
//!
//! The engine emits [`tracing`] events: `info` for pool creation and lock
//! changes, `debug` for every committed deposit, withdraw and swap, `warn`
//! for slippage rejections.  Install any subscriber to see them.

pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod registry;
pub mod traits;
