//! Pool identity: creation seed plus asset pair.

use core::fmt;

use super::{TokenAddress, TokenPair};

/// The identity under which a pool is registered.
///
/// Two pools trading the same assets are told apart by their creation
/// seed.  The pair is stored in canonical order, so `(A, B)` and `(B, A)`
/// under one seed are the same identity.
///
/// # Examples
///
/// ```
/// use cpmm_engine::domain::{PoolKey, TokenAddress, TokenPair};
///
/// let a = TokenAddress::from_bytes([1u8; 32]);
/// let b = TokenAddress::from_bytes([2u8; 32]);
/// let ab = TokenPair::new(a, b).expect("distinct");
/// let ba = TokenPair::new(b, a).expect("distinct");
///
/// assert_eq!(PoolKey::new(1, &ab), PoolKey::new(1, &ba));
/// assert_ne!(PoolKey::new(1, &ab), PoolKey::new(2, &ab));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolKey {
    seed: u64,
    low: TokenAddress,
    high: TokenAddress,
}

impl PoolKey {
    /// Builds the identity of the pool created with `seed` over `pair`.
    #[must_use]
    pub fn new(seed: u64, pair: &TokenPair) -> Self {
        let (low, high) = pair.canonical();
        Self { seed, low, high }
    }

    /// Returns the creation seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl fmt::Display for PoolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pool#{}({}/{})", self.seed, self.low, self.high)
    }
}
