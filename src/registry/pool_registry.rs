//! Thread-safe map from [`PoolKey`] to pool state.
//!
//! The engine operates on a `&mut PoolState`; this module supplies the
//! exclusive access.  Each pool sits behind its own [`Mutex`], so
//! operations on one pool are totally ordered while different pools
//! proceed in parallel.  The directory itself is an [`RwLock`] that is
//! held only long enough to look up or insert a handle.
//!
//! # Transactions
//!
//! [`PoolRegistry::transact`] runs a closure against a staged copy of the
//! pool and writes it back only if the closure returns `Ok`.  Callers that
//! pair an engine call with their own side effects (moving tokens between
//! accounts, say) do both inside one closure so that a failure on either
//! side leaves the pool as it was.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::{info, warn};

use crate::config::PoolConfig;
use crate::domain::{
    Amount, Authority, DepositReceipt, Liquidity, PoolKey, PoolSnapshot, SwapDirection,
    SwapResult, WithdrawReceipt,
};
use crate::error::AmmError;
use crate::pool::PoolState;
use crate::traits::{LiquidityPool, SwapPool};

type PoolHandle = Arc<Mutex<PoolState>>;

/// Registry of initialized pools, keyed by seed and canonical pair.
///
/// Cloning is cheap and yields a handle to the same registry.
///
/// # Examples
///
/// ```rust
/// use cpmm_engine::config::PoolConfig;
/// use cpmm_engine::domain::{Amount, BasisPoints, Liquidity, SwapDirection, TokenAddress, TokenPair};
/// use cpmm_engine::registry::PoolRegistry;
///
/// let pair = TokenPair::new(
///     TokenAddress::from_bytes([1u8; 32]),
///     TokenAddress::from_bytes([2u8; 32]),
/// ).expect("distinct");
/// let cfg = PoolConfig::new(1, pair, BasisPoints::new(30), None).expect("valid");
///
/// let registry = PoolRegistry::new();
/// let key = registry.initialize(&cfg).expect("new pool");
/// registry
///     .deposit(&key, Liquidity::new(1), Amount::new(1_000_000), Amount::new(1_000_000))
///     .expect("deposit");
/// let out = registry
///     .swap(&key, SwapDirection::XToY, Amount::new(10_000), Amount::new(9_000))
///     .expect("swap");
/// assert_eq!(out.amount_out(), Amount::new(9_871));
/// ```
#[derive(Clone, Debug, Default)]
pub struct PoolRegistry {
    pools: Arc<RwLock<HashMap<PoolKey, PoolHandle>>>,
}

impl PoolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with room for `capacity` pools.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pools: Arc::new(RwLock::new(HashMap::with_capacity(capacity))),
        }
    }

    /// Creates and registers a new empty pool.
    ///
    /// # Errors
    ///
    /// - [`AmmError::AlreadyInitialized`] if a pool with the same seed and
    ///   pair (in either order) exists.
    /// - Any validation error from [`PoolState::initialize`].
    pub fn initialize(&self, config: &PoolConfig) -> Result<PoolKey, AmmError> {
        let key = config.key();
        let mut pools = self.pools.write();
        if pools.contains_key(&key) {
            warn!(%key, "pool already initialized");
            return Err(AmmError::AlreadyInitialized);
        }
        let state = PoolState::initialize(config)?;
        pools.insert(key, Arc::new(Mutex::new(state)));
        info!(%key, pools = pools.len(), "pool registered");
        Ok(key)
    }

    /// Returns `true` if `key` names a registered pool.
    #[must_use]
    pub fn contains(&self, key: &PoolKey) -> bool {
        self.pools.read().contains_key(key)
    }

    /// Number of registered pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.read().len()
    }

    /// Returns `true` if no pool has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.read().is_empty()
    }

    /// Keys of all registered pools, in no particular order.
    #[must_use]
    pub fn keys(&self) -> Vec<PoolKey> {
        self.pools.read().keys().copied().collect()
    }

    fn handle(&self, key: &PoolKey) -> Result<PoolHandle, AmmError> {
        self.pools
            .read()
            .get(key)
            .cloned()
            .ok_or(AmmError::PoolNotFound)
    }

    /// Read-only view of a pool.  Succeeds on a locked pool.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolNotFound`] for an unknown key.
    pub fn get_state(&self, key: &PoolKey) -> Result<PoolSnapshot, AmmError> {
        Ok(self.handle(key)?.lock().snapshot())
    }

    /// Runs `f` on a staged copy of the pool under its lock and commits the
    /// copy only if `f` succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolNotFound`] for an unknown key, otherwise
    /// whatever `f` returns.
    pub fn transact<R, F>(&self, key: &PoolKey, f: F) -> Result<R, AmmError>
    where
        F: FnOnce(&mut PoolState) -> Result<R, AmmError>,
    {
        let handle = self.handle(key)?;
        let mut guard = handle.lock();
        let mut staged = *guard;
        let out = f(&mut staged)?;
        *guard = staged;
        Ok(out)
    }

    /// Runs a read-only closure against the pool under its lock.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolNotFound`] for an unknown key, otherwise
    /// whatever `f` returns.
    pub fn inspect<R, F>(&self, key: &PoolKey, f: F) -> Result<R, AmmError>
    where
        F: FnOnce(&PoolState) -> Result<R, AmmError>,
    {
        let handle = self.handle(key)?;
        let guard = handle.lock();
        f(&guard)
    }

    // -- single-operation shortcuts -------------------------------------------

    /// See [`LiquidityPool::deposit`].
    ///
    /// # Errors
    ///
    /// [`AmmError::PoolNotFound`] or any error of the underlying operation.
    pub fn deposit(
        &self,
        key: &PoolKey,
        requested_lp: Liquidity,
        max_x: Amount,
        max_y: Amount,
    ) -> Result<DepositReceipt, AmmError> {
        self.transact(key, |pool| pool.deposit(requested_lp, max_x, max_y))
    }

    /// See [`LiquidityPool::withdraw`].
    ///
    /// # Errors
    ///
    /// [`AmmError::PoolNotFound`] or any error of the underlying operation.
    pub fn withdraw(
        &self,
        key: &PoolKey,
        lp: Liquidity,
        min_x: Amount,
        min_y: Amount,
    ) -> Result<WithdrawReceipt, AmmError> {
        self.transact(key, |pool| pool.withdraw(lp, min_x, min_y))
    }

    /// See [`SwapPool::swap`].
    ///
    /// # Errors
    ///
    /// [`AmmError::PoolNotFound`] or any error of the underlying operation.
    pub fn swap(
        &self,
        key: &PoolKey,
        direction: SwapDirection,
        amount_in: Amount,
        min_amount_out: Amount,
    ) -> Result<SwapResult, AmmError> {
        self.transact(key, |pool| pool.swap(direction, amount_in, min_amount_out))
    }

    /// See [`SwapPool::quote_swap`].
    ///
    /// # Errors
    ///
    /// [`AmmError::PoolNotFound`] or any error of the underlying operation.
    pub fn quote_swap(
        &self,
        key: &PoolKey,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<SwapResult, AmmError> {
        self.inspect(key, |pool| pool.quote_swap(direction, amount_in))
    }

    /// See [`PoolState::set_locked`].
    ///
    /// # Errors
    ///
    /// [`AmmError::PoolNotFound`] or [`AmmError::Unauthorized`].
    pub fn set_locked(
        &self,
        key: &PoolKey,
        locked: bool,
        caller: &Authority,
    ) -> Result<(), AmmError> {
        self.transact(key, |pool| pool.set_locked(locked, caller))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{BasisPoints, TokenAddress, TokenPair};

    fn addr(b: u8) -> TokenAddress {
        TokenAddress::from_bytes([b; 32])
    }

    fn admin() -> Authority {
        Authority::from_bytes([0xAA; 32])
    }

    fn make_config(seed: u64, x: u8, y: u8) -> PoolConfig {
        let Ok(pair) = TokenPair::new(addr(x), addr(y)) else {
            panic!("expected valid pair");
        };
        let Ok(cfg) = PoolConfig::new(seed, pair, BasisPoints::new(30), Some(admin())) else {
            panic!("expected valid config");
        };
        cfg
    }

    fn funded(registry: &PoolRegistry, seed: u64) -> PoolKey {
        let Ok(key) = registry.initialize(&make_config(seed, 1, 2)) else {
            panic!("expected new pool");
        };
        let Ok(_) = registry.deposit(
            &key,
            Liquidity::new(1),
            Amount::new(1_000_000),
            Amount::new(1_000_000),
        ) else {
            panic!("expected deposit");
        };
        key
    }

    #[test]
    fn initialize_registers_empty_pool() {
        let registry = PoolRegistry::new();
        assert!(registry.is_empty());
        let Ok(key) = registry.initialize(&make_config(7, 1, 2)) else {
            panic!("expected Ok");
        };
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(&key));
        let Ok(snap) = registry.get_state(&key) else {
            panic!("expected Ok");
        };
        assert_eq!(snap.lp_supply, Liquidity::ZERO);
        assert!(!snap.locked);
    }

    #[test]
    fn duplicate_identity_rejected() {
        let registry = PoolRegistry::new();
        assert!(registry.initialize(&make_config(7, 1, 2)).is_ok());
        assert!(matches!(
            registry.initialize(&make_config(7, 1, 2)),
            Err(AmmError::AlreadyInitialized)
        ));
        // reversed pair, same seed
        assert!(matches!(
            registry.initialize(&make_config(7, 2, 1)),
            Err(AmmError::AlreadyInitialized)
        ));
        assert!(registry.initialize(&make_config(8, 1, 2)).is_ok());
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.keys().len(), 2);
    }

    #[test]
    fn unknown_key() {
        let registry = PoolRegistry::new();
        let key = make_config(1, 1, 2).key();
        assert!(matches!(registry.get_state(&key), Err(AmmError::PoolNotFound)));
        assert!(matches!(
            registry.swap(&key, SwapDirection::XToY, Amount::new(1), Amount::ZERO),
            Err(AmmError::PoolNotFound)
        ));
    }

    #[test]
    fn swap_through_registry() {
        let registry = PoolRegistry::new();
        let key = funded(&registry, 1);
        let Ok(result) = registry.swap(
            &key,
            SwapDirection::XToY,
            Amount::new(10_000),
            Amount::new(9_000),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(result.amount_out(), Amount::new(9_871));
        let Ok(snap) = registry.get_state(&key) else {
            panic!("expected Ok");
        };
        assert_eq!(snap.reserve_x, Amount::new(1_010_000));
    }

    #[test]
    fn failed_transaction_rolls_back() {
        let registry = PoolRegistry::new();
        let key = funded(&registry, 1);
        let Ok(before) = registry.get_state(&key) else {
            panic!("expected Ok");
        };
        let result: Result<(), AmmError> = registry.transact(&key, |pool| {
            pool.swap(SwapDirection::XToY, Amount::new(10_000), Amount::ZERO)?;
            // the caller's transfer fails after the engine step succeeded
            Err(AmmError::InsufficientLiquidity)
        });
        assert!(result.is_err());
        assert_eq!(registry.get_state(&key), Ok(before));
    }

    #[test]
    fn lock_blocks_mutation_not_reads() {
        let registry = PoolRegistry::new();
        let key = funded(&registry, 1);
        assert!(registry.set_locked(&key, true, &admin()).is_ok());
        assert!(matches!(
            registry.swap(&key, SwapDirection::YToX, Amount::new(100), Amount::ZERO),
            Err(AmmError::PoolLocked)
        ));
        assert!(registry.quote_swap(&key, SwapDirection::YToX, Amount::new(100)).is_ok());
        let Ok(snap) = registry.get_state(&key) else {
            panic!("expected Ok");
        };
        assert!(snap.locked);
        assert!(matches!(
            registry.set_locked(&key, false, &Authority::from_bytes([1; 32])),
            Err(AmmError::Unauthorized)
        ));
    }

    #[test]
    fn clones_share_pools() {
        let registry = PoolRegistry::with_capacity(4);
        let other = registry.clone();
        let key = funded(&registry, 3);
        assert!(other.contains(&key));
        assert!(other.withdraw(&key, Liquidity::new(10), Amount::ZERO, Amount::ZERO).is_ok());
        let Ok(snap) = registry.get_state(&key) else {
            panic!("expected Ok");
        };
        assert_eq!(snap.lp_supply, Liquidity::new(999_990));
    }

    #[test]
    fn concurrent_swaps_serialize() {
        let registry = PoolRegistry::new();
        let key = funded(&registry, 9);
        let Ok(k_before) = registry.inspect(&key, |pool| Ok(pool.invariant_k())) else {
            panic!("expected Ok");
        };

        let filled: usize = std::thread::scope(|s| {
            let workers: Vec<_> = (0..8u64)
                .map(|t| {
                    let registry = registry.clone();
                    s.spawn(move || {
                        let direction = SwapDirection::from_x_to_y(t % 2 == 0);
                        (1..=50u64)
                            .map(|i| {
                                registry.swap(&key, direction, Amount::new(100 + i), Amount::ZERO)
                            })
                            .map(|result| match result {
                                Ok(_) => 1usize,
                                Err(e) => panic!("unbounded swap failed: {e}"),
                            })
                            .sum::<usize>()
                    })
                })
                .collect();
            workers
                .into_iter()
                .map(|worker| {
                    let Ok(count) = worker.join() else {
                        panic!("worker panicked");
                    };
                    count
                })
                .sum()
        });
        assert_eq!(filled, 8 * 50);

        let Ok((k_after, consistent)) =
            registry.inspect(&key, |pool| Ok((pool.invariant_k(), pool.is_consistent())))
        else {
            panic!("expected Ok");
        };
        assert!(consistent);
        assert!(k_after > k_before);
    }
}
