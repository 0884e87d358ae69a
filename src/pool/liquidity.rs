//! LiquidityEngine: proportional deposits and withdrawals.
//!
//! | Operation | Empty pool | Funded pool |
//! |-----------|------------|-------------|
//! | deposit | takes `max_x`, `max_y`; mints `isqrt(max_x × max_y)` | charges `ceil(lp × reserve / supply)` per asset |
//! | withdraw | fails, nothing to burn | pays `floor(lp × reserve / supply)` per asset |

use tracing::{debug, warn};

use super::PoolState;
use crate::domain::{Amount, DepositReceipt, Liquidity, Rounding, WithdrawReceipt};
use crate::error::AmmError;
use crate::math::{isqrt, CheckedArithmetic, CheckedScale};
use crate::traits::LiquidityPool;

#[derive(Debug, Clone, Copy)]
struct LiquidityPlan<R> {
    receipt: R,
    reserve_x_after: Amount,
    reserve_y_after: Amount,
    supply_after: Liquidity,
}

impl PoolState {
    fn plan_deposit(
        &self,
        requested_lp: Liquidity,
        max_x: Amount,
        max_y: Amount,
    ) -> Result<LiquidityPlan<DepositReceipt>, AmmError> {
        let supply = self.lp_supply();
        let receipt = if supply.is_zero() {
            if max_x.is_zero() || max_y.is_zero() {
                return Err(AmmError::InvalidAmount(
                    "first deposit requires both assets",
                ));
            }
            let minted = isqrt(max_x.widening_mul(&max_y))?;
            DepositReceipt::new(max_x, max_y, Liquidity::new(minted))
        } else {
            let amount_x = self
                .reserve_x()
                .scale(requested_lp.get(), supply.get(), Rounding::for_charge())?;
            let amount_y = self
                .reserve_y()
                .scale(requested_lp.get(), supply.get(), Rounding::for_charge())?;
            DepositReceipt::new(amount_x, amount_y, requested_lp)
        };

        Ok(LiquidityPlan {
            reserve_x_after: self.reserve_x().safe_add(&receipt.amount_x())?,
            reserve_y_after: self.reserve_y().safe_add(&receipt.amount_y())?,
            supply_after: supply.safe_add(&receipt.lp_minted())?,
            receipt,
        })
    }

    fn plan_withdraw(&self, lp: Liquidity) -> Result<LiquidityPlan<WithdrawReceipt>, AmmError> {
        let supply = self.lp_supply();
        if lp > supply {
            return Err(AmmError::InsufficientLiquidity);
        }

        let amount_x = self
            .reserve_x()
            .scale(lp.get(), supply.get(), Rounding::for_payout())?;
        let amount_y = self
            .reserve_y()
            .scale(lp.get(), supply.get(), Rounding::for_payout())?;

        Ok(LiquidityPlan {
            receipt: WithdrawReceipt::new(amount_x, amount_y, lp),
            reserve_x_after: self.reserve_x().safe_sub(&amount_x)?,
            reserve_y_after: self.reserve_y().safe_sub(&amount_y)?,
            supply_after: supply.safe_sub(&lp)?,
        })
    }

    fn slippage(&self, op: &'static str, limit: Amount, actual: Amount) -> AmmError {
        warn!(
            seed = self.seed(),
            op,
            limit = limit.get(),
            actual = actual.get(),
            "liquidity change rejected: slippage"
        );
        AmmError::SlippageExceeded {
            limit: limit.get(),
            actual: actual.get(),
        }
    }
}

impl LiquidityPool for PoolState {
    fn deposit(
        &mut self,
        requested_lp: Liquidity,
        max_x: Amount,
        max_y: Amount,
    ) -> Result<DepositReceipt, AmmError> {
        if requested_lp.is_zero() {
            return Err(AmmError::InvalidAmount("requested LP must be positive"));
        }
        self.ensure_unlocked()?;

        let plan = self.plan_deposit(requested_lp, max_x, max_y)?;
        let receipt = plan.receipt;
        if receipt.amount_x() > max_x {
            return Err(self.slippage("deposit", max_x, receipt.amount_x()));
        }
        if receipt.amount_y() > max_y {
            return Err(self.slippage("deposit", max_y, receipt.amount_y()));
        }

        self.commit(plan.reserve_x_after, plan.reserve_y_after, plan.supply_after);
        debug!(
            seed = self.seed(),
            %receipt,
            lp_supply = self.lp_supply().get(),
            "deposit applied"
        );
        Ok(receipt)
    }

    fn withdraw(
        &mut self,
        lp: Liquidity,
        min_x: Amount,
        min_y: Amount,
    ) -> Result<WithdrawReceipt, AmmError> {
        if lp.is_zero() {
            return Err(AmmError::InvalidAmount("withdrawn LP must be positive"));
        }
        self.ensure_unlocked()?;

        let plan = self.plan_withdraw(lp)?;
        let receipt = plan.receipt;
        if receipt.amount_x() < min_x {
            return Err(self.slippage("withdraw", min_x, receipt.amount_x()));
        }
        if receipt.amount_y() < min_y {
            return Err(self.slippage("withdraw", min_y, receipt.amount_y()));
        }

        self.commit(plan.reserve_x_after, plan.reserve_y_after, plan.supply_after);
        debug!(
            seed = self.seed(),
            %receipt,
            lp_supply = self.lp_supply().get(),
            "withdraw applied"
        );
        Ok(receipt)
    }

    fn quote_deposit(
        &self,
        requested_lp: Liquidity,
        max_x: Amount,
        max_y: Amount,
    ) -> Result<DepositReceipt, AmmError> {
        if requested_lp.is_zero() {
            return Err(AmmError::InvalidAmount("requested LP must be positive"));
        }
        self.plan_deposit(requested_lp, max_x, max_y)
            .map(|plan| plan.receipt)
    }

    fn quote_withdraw(&self, lp: Liquidity) -> Result<WithdrawReceipt, AmmError> {
        if lp.is_zero() {
            return Err(AmmError::InvalidAmount("withdrawn LP must be positive"));
        }
        self.plan_withdraw(lp).map(|plan| plan.receipt)
    }

    fn total_liquidity(&self) -> Liquidity {
        self.lp_supply()
    }
}
