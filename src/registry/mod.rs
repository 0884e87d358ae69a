//! Process-wide pool directory with per-pool serialization.

mod pool_registry;

pub use pool_registry::PoolRegistry;
