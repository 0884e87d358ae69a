//! Pool creation parameters.
//!
//! A [`PoolConfig`] is validated once, at construction, and is immutable
//! for the life of the pool.

mod pool_config;

pub use pool_config::PoolConfig;
