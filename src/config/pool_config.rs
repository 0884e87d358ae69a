//! Creation parameters of a constant-product pool.

use crate::domain::{Authority, BasisPoints, PoolKey, TokenPair};
use crate::error::AmmError;

/// Immutable parameters fixed when a pool is initialized.
///
/// - `seed`: distinguishes pools over the same asset pair.
/// - `pair`: the X and Y assets.
/// - `fee`: swap fee in basis points, `0..=10_000`.
/// - `authority`: identity allowed to lock/unlock; `None` freezes the
///   lock state forever.
///
/// Every construction path validates, including deserialization with the
/// `serde` feature; [`validate`](Self::validate) is public for callers that
/// want to re-check a stored value.
///
/// # Examples
///
/// ```
/// use cpmm_engine::config::PoolConfig;
/// use cpmm_engine::domain::{BasisPoints, TokenAddress, TokenPair};
///
/// let pair = TokenPair::new(
///     TokenAddress::from_bytes([1u8; 32]),
///     TokenAddress::from_bytes([2u8; 32]),
/// )
/// .expect("distinct assets");
///
/// assert!(PoolConfig::new(1, pair, BasisPoints::new(30), None).is_ok());
/// assert!(PoolConfig::new(1, pair, BasisPoints::new(10_001), None).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPoolConfig"))]
pub struct PoolConfig {
    seed: u64,
    pair: TokenPair,
    fee: BasisPoints,
    authority: Option<Authority>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPoolConfig {
    seed: u64,
    pair: TokenPair,
    fee: BasisPoints,
    authority: Option<Authority>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPoolConfig> for PoolConfig {
    type Error = AmmError;

    fn try_from(raw: RawPoolConfig) -> Result<Self, Self::Error> {
        Self::new(raw.seed, raw.pair, raw.fee, raw.authority)
    }
}

impl PoolConfig {
    /// Creates and validates a new `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if `fee` exceeds 10 000 bps.
    pub fn new(
        seed: u64,
        pair: TokenPair,
        fee: BasisPoints,
        authority: Option<Authority>,
    ) -> Result<Self, AmmError> {
        let config = Self {
            seed,
            pair,
            fee,
            authority,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidFee`] if the fee exceeds 10 000 bps.
    /// - [`AmmError::InvalidToken`] if both sides of the pair share one
    ///   address (only reachable through deserialization).
    pub fn validate(&self) -> Result<(), AmmError> {
        if !self.fee.is_valid_percent() {
            return Err(AmmError::InvalidFee("fee must be within 0..=10000 bps"));
        }
        if self.pair.x() == self.pair.y() {
            return Err(AmmError::InvalidToken(
                "token pair requires two distinct addresses",
            ));
        }
        Ok(())
    }

    /// Returns the creation seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the asset pair.
    #[must_use]
    pub const fn pair(&self) -> &TokenPair {
        &self.pair
    }

    /// Returns the swap fee.
    #[must_use]
    pub const fn fee(&self) -> BasisPoints {
        self.fee
    }

    /// Returns the lock authority, if any.
    #[must_use]
    pub const fn authority(&self) -> Option<Authority> {
        self.authority
    }

    /// Returns the identity the pool will be registered under.
    #[must_use]
    pub fn key(&self) -> PoolKey {
        PoolKey::new(self.seed, &self.pair)
    }
}
