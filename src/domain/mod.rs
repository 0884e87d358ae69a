//! Value types used throughout the engine.
//!
//! Quantities are `u64` newtypes with checked arithmetic; identities are
//! opaque 32-byte values.  Outcome types carry the amounts an operation
//! realized so the settlement layer can move tokens accordingly.

mod amount;
mod authority;
mod basis_points;
mod liquidity;
mod pool_key;
mod receipts;
mod rounding;
mod snapshot;
mod swap_direction;
mod swap_result;
mod token_address;
mod token_pair;

pub use amount::Amount;
pub use authority::Authority;
pub use basis_points::BasisPoints;
pub use liquidity::Liquidity;
pub use pool_key::PoolKey;
pub use receipts::{DepositReceipt, WithdrawReceipt};
pub use rounding::Rounding;
pub use snapshot::PoolSnapshot;
pub use swap_direction::SwapDirection;
pub use swap_result::SwapResult;
pub use token_address::TokenAddress;
pub use token_pair::TokenPair;
