//! The pool entity: reserves, LP supply, fee and lock flag.

use crate::config::PoolConfig;
use crate::domain::{
    Amount, Authority, BasisPoints, Liquidity, PoolKey, PoolSnapshot, TokenPair,
};
use crate::error::AmmError;

/// State of one constant-product pool.
///
/// Created once by [`PoolState::initialize`], then mutated in place by
/// every deposit, withdraw and swap.  A pool whose supply drops back to
/// zero stays usable; it is empty, not destroyed.
///
/// # Invariants
///
/// - `lp_supply == 0` iff `reserve_x == 0 && reserve_y == 0`.
/// - `fee` lies in `0..=10_000` bps and never changes.
/// - While `locked`, deposit, withdraw and swap fail with
///   [`AmmError::PoolLocked`]; queries still succeed.
///
/// Every mutating operation computes the complete new state before
/// writing any field, so a failed call leaves the pool untouched.
///
/// # Example
///
/// ```rust
/// use cpmm_engine::config::PoolConfig;
/// use cpmm_engine::domain::{Amount, BasisPoints, Liquidity, TokenAddress, TokenPair};
/// use cpmm_engine::pool::PoolState;
/// use cpmm_engine::traits::LiquidityPool;
///
/// let pair = TokenPair::new(
///     TokenAddress::from_bytes([1u8; 32]),
///     TokenAddress::from_bytes([2u8; 32]),
/// ).expect("distinct");
/// let cfg = PoolConfig::new(1, pair, BasisPoints::new(30), None).expect("valid");
///
/// let mut pool = PoolState::initialize(&cfg).expect("initialized");
/// let receipt = pool
///     .deposit(Liquidity::new(1), Amount::new(1_000_000), Amount::new(1_000_000))
///     .expect("first deposit");
/// assert_eq!(receipt.lp_minted(), Liquidity::new(1_000_000));
/// assert!(pool.is_consistent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPoolState"))]
pub struct PoolState {
    config: PoolConfig,
    reserve_x: Amount,
    reserve_y: Amount,
    lp_supply: Liquidity,
    locked: bool,
}

/// Persisted form, admitted only if it passes [`PoolState::is_consistent`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPoolState {
    config: PoolConfig,
    reserve_x: Amount,
    reserve_y: Amount,
    lp_supply: Liquidity,
    locked: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPoolState> for PoolState {
    type Error = AmmError;

    fn try_from(raw: RawPoolState) -> Result<Self, Self::Error> {
        let state = Self {
            config: raw.config,
            reserve_x: raw.reserve_x,
            reserve_y: raw.reserve_y,
            lp_supply: raw.lp_supply,
            locked: raw.locked,
        };
        if !state.is_consistent() {
            return Err(AmmError::InvalidAmount(
                "reserves and LP supply are inconsistent",
            ));
        }
        Ok(state)
    }
}

impl PoolState {
    pub(crate) fn empty(config: PoolConfig) -> Self {
        Self {
            config,
            reserve_x: Amount::ZERO,
            reserve_y: Amount::ZERO,
            lp_supply: Liquidity::ZERO,
            locked: false,
        }
    }

    /// Returns the vault balance of asset X.
    #[must_use]
    pub const fn reserve_x(&self) -> Amount {
        self.reserve_x
    }

    /// Returns the vault balance of asset Y.
    #[must_use]
    pub const fn reserve_y(&self) -> Amount {
        self.reserve_y
    }

    /// Returns the outstanding LP claim tokens.
    #[must_use]
    pub const fn lp_supply(&self) -> Liquidity {
        self.lp_supply
    }

    /// Returns the swap fee.
    #[must_use]
    pub const fn fee(&self) -> BasisPoints {
        self.config.fee()
    }

    /// Returns `true` while mutating operations are blocked.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Returns the lock authority, if any.
    #[must_use]
    pub const fn authority(&self) -> Option<Authority> {
        self.config.authority()
    }

    /// Returns the creation seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.config.seed()
    }

    /// Returns the asset pair.
    #[must_use]
    pub const fn pair(&self) -> &TokenPair {
        self.config.pair()
    }

    /// Returns the creation parameters.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Returns the pool identity.
    #[must_use]
    pub fn key(&self) -> PoolKey {
        self.config.key()
    }

    /// Read-only view of the pool.  Succeeds on a locked pool.
    #[must_use]
    pub const fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot {
            reserve_x: self.reserve_x,
            reserve_y: self.reserve_y,
            lp_supply: self.lp_supply,
            fee: self.config.fee(),
            locked: self.locked,
        }
    }

    /// `reserve_x * reserve_y`, the constant-product invariant.
    #[must_use]
    pub const fn invariant_k(&self) -> u128 {
        self.reserve_x.widening_mul(&self.reserve_y)
    }

    /// Returns `true` when the pool holds no reserves.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lp_supply.is_zero()
    }

    /// Marginal price of X in units of Y (`reserve_y / reserve_x`), for
    /// display only.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::NoLiquidity`] if the pool is empty.
    pub fn spot_price_x_in_y(&self) -> Result<f64, AmmError> {
        if self.reserve_x.is_zero() || self.reserve_y.is_zero() {
            return Err(AmmError::NoLiquidity);
        }
        Ok(self.reserve_y.get() as f64 / self.reserve_x.get() as f64)
    }

    /// Checks the state invariants.
    ///
    /// Always `true` for a pool that was only ever mutated through the
    /// engine.  Deserialization rejects any state for which it is `false`.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let supply_matches = self.lp_supply.is_zero()
            == (self.reserve_x.is_zero() && self.reserve_y.is_zero());
        let reserves_paired = self.reserve_x.is_zero() == self.reserve_y.is_zero();
        supply_matches && reserves_paired && self.config.validate().is_ok()
    }

    pub(crate) fn ensure_unlocked(&self) -> Result<(), AmmError> {
        if self.locked {
            return Err(AmmError::PoolLocked);
        }
        Ok(())
    }

    pub(crate) fn set_locked_unchecked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Writes a fully computed new state.  The only place reserves and
    /// supply change.
    pub(crate) fn commit(&mut self, reserve_x: Amount, reserve_y: Amount, lp_supply: Liquidity) {
        self.reserve_x = reserve_x;
        self.reserve_y = reserve_y;
        self.lp_supply = lp_supply;
    }
}
