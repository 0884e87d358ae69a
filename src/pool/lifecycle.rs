//! Initialization and lock transitions.
//!
//! ```text
//! Uninitialized --initialize--> Active <--set_locked--> Locked
//! ```
//!
//! Initialization is a one-time transition per pool identity; the
//! [`PoolRegistry`](crate::registry::PoolRegistry) enforces it with
//! [`AmmError::AlreadyInitialized`].  No state is terminal: a pool whose
//! supply drops to zero stays `Active`.

use tracing::info;

use super::PoolState;
use crate::config::PoolConfig;
use crate::domain::Authority;
use crate::error::AmmError;

impl PoolState {
    /// Creates an empty, unlocked pool from validated parameters.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidFee`] if the fee exceeds 10 000 bps.
    /// - [`AmmError::InvalidToken`] if the pair is malformed.
    pub fn initialize(config: &PoolConfig) -> Result<Self, AmmError> {
        config.validate()?;
        info!(
            seed = config.seed(),
            pair = %config.pair(),
            fee_bps = config.fee().get(),
            has_authority = config.authority().is_some(),
            "pool initialized"
        );
        Ok(Self::empty(*config))
    }

    /// Locks or unlocks the pool.
    ///
    /// Setting the flag to its current value is accepted and changes
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Unauthorized`] if the pool has no authority or
    /// `caller` is not it.
    pub fn set_locked(&mut self, locked: bool, caller: &Authority) -> Result<(), AmmError> {
        match self.authority() {
            Some(authority) if authority == *caller => {
                self.set_locked_unchecked(locked);
                info!(seed = self.seed(), locked, "pool lock updated");
                Ok(())
            }
            _ => Err(AmmError::Unauthorized),
        }
    }
}
