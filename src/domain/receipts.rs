//! Outcomes of deposit and withdraw operations.

use core::fmt;

use super::{Amount, Liquidity};

/// Realized amounts of a deposit.
///
/// The caller moves `amount_x` and `amount_y` from the depositor into the
/// vaults and mints `lp_minted` claim tokens to the depositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DepositReceipt {
    amount_x: Amount,
    amount_y: Amount,
    lp_minted: Liquidity,
}

impl DepositReceipt {
    pub(crate) const fn new(amount_x: Amount, amount_y: Amount, lp_minted: Liquidity) -> Self {
        Self {
            amount_x,
            amount_y,
            lp_minted,
        }
    }

    /// X taken from the depositor.
    #[must_use]
    pub const fn amount_x(&self) -> Amount {
        self.amount_x
    }

    /// Y taken from the depositor.
    #[must_use]
    pub const fn amount_y(&self) -> Amount {
        self.amount_y
    }

    /// LP claim tokens issued.
    #[must_use]
    pub const fn lp_minted(&self) -> Liquidity {
        self.lp_minted
    }
}

impl fmt::Display for DepositReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Deposit(x={}, y={}, lp={})",
            self.amount_x, self.amount_y, self.lp_minted
        )
    }
}

/// Realized amounts of a withdrawal.
///
/// The caller burns `lp_burned` from the holder and moves `amount_x` and
/// `amount_y` out of the vaults to the holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WithdrawReceipt {
    amount_x: Amount,
    amount_y: Amount,
    lp_burned: Liquidity,
}

impl WithdrawReceipt {
    pub(crate) const fn new(amount_x: Amount, amount_y: Amount, lp_burned: Liquidity) -> Self {
        Self {
            amount_x,
            amount_y,
            lp_burned,
        }
    }

    /// X paid out to the holder.
    #[must_use]
    pub const fn amount_x(&self) -> Amount {
        self.amount_x
    }

    /// Y paid out to the holder.
    #[must_use]
    pub const fn amount_y(&self) -> Amount {
        self.amount_y
    }

    /// LP claim tokens destroyed.
    #[must_use]
    pub const fn lp_burned(&self) -> Liquidity {
        self.lp_burned
    }
}

impl fmt::Display for WithdrawReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Withdraw(x={}, y={}, lp={})",
            self.amount_x, self.amount_y, self.lp_burned
        )
    }
}
