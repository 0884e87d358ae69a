//! Read-only view of a pool.

use super::{Amount, BasisPoints, Liquidity};

/// The `(reserve_x, reserve_y, lp_supply, fee, locked)` tuple returned by
/// state queries.  Taking a snapshot never fails, even on a locked pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolSnapshot {
    /// Vault balance of asset X.
    pub reserve_x: Amount,
    /// Vault balance of asset Y.
    pub reserve_y: Amount,
    /// Outstanding LP claim tokens.
    pub lp_supply: Liquidity,
    /// Swap fee rate.
    pub fee: BasisPoints,
    /// Whether mutating operations are blocked.
    pub locked: bool,
}
