//! SwapEngine: constant-product pricing with an input-side fee.

use tracing::{debug, warn};

use super::PoolState;
use crate::domain::{Amount, BasisPoints, Rounding, SwapDirection, SwapResult, TokenPair};
use crate::error::AmmError;
use crate::math::{div_round, CheckedArithmetic};
use crate::traits::SwapPool;

/// A priced swap together with the reserves it leaves behind.
#[derive(Debug, Clone, Copy)]
struct SwapPlan {
    result: SwapResult,
    reserve_in_after: Amount,
    reserve_out_after: Amount,
}

impl PoolState {
    /// `(reserve_in, reserve_out)` as seen from `direction`.
    const fn reserves_for(&self, direction: SwapDirection) -> (Amount, Amount) {
        match direction {
            SwapDirection::XToY => (self.reserve_x(), self.reserve_y()),
            SwapDirection::YToX => (self.reserve_y(), self.reserve_x()),
        }
    }

    /// Prices a swap against the current reserves.  Pure.
    fn plan_swap(
        &self,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<SwapPlan, AmmError> {
        let (reserve_in, reserve_out) = self.reserves_for(direction);
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(AmmError::NoLiquidity);
        }

        // The whole input lands in the vault, fee included.
        let reserve_in_after = reserve_in.safe_add(&amount_in)?;

        let net = self
            .fee()
            .complement()?
            .apply(amount_in, Rounding::for_payout())?;
        let fee = amount_in.safe_sub(&net)?;

        // Output reserve after the trade, rounded up in the pool's favour.
        let k = reserve_in.widening_mul(&reserve_out);
        let denominator = u128::from(reserve_in.get()) + u128::from(net.get());
        let floor_out = div_round(k, denominator, Rounding::Up)
            .ok_or(AmmError::ArithmeticOverflow("swap denominator is zero"))?;
        let reserve_out_after = u64::try_from(floor_out)
            .map(Amount::new)
            .map_err(|_| AmmError::ArithmeticOverflow("output reserve exceeds u64"))?;

        let amount_out = reserve_out.safe_sub(&reserve_out_after)?;
        if amount_out.is_zero() {
            return Err(AmmError::InsufficientLiquidity);
        }

        Ok(SwapPlan {
            result: SwapResult::new(direction, amount_in, amount_out, fee)?,
            reserve_in_after,
            reserve_out_after,
        })
    }
}

impl SwapPool for PoolState {
    fn swap(
        &mut self,
        direction: SwapDirection,
        amount_in: Amount,
        min_amount_out: Amount,
    ) -> Result<SwapResult, AmmError> {
        if amount_in.is_zero() {
            return Err(AmmError::InvalidAmount("swap amount must be positive"));
        }
        self.ensure_unlocked()?;

        let plan = self.plan_swap(direction, amount_in)?;
        let amount_out = plan.result.amount_out();
        if amount_out < min_amount_out {
            warn!(
                seed = self.seed(),
                %direction,
                min_out = min_amount_out.get(),
                amount_out = amount_out.get(),
                "swap rejected: slippage"
            );
            return Err(AmmError::SlippageExceeded {
                limit: min_amount_out.get(),
                actual: amount_out.get(),
            });
        }

        let k_before = self.invariant_k();
        let supply = self.lp_supply();
        match direction {
            SwapDirection::XToY => {
                self.commit(plan.reserve_in_after, plan.reserve_out_after, supply);
            }
            SwapDirection::YToX => {
                self.commit(plan.reserve_out_after, plan.reserve_in_after, supply);
            }
        }
        debug_assert!(self.invariant_k() >= k_before);

        debug!(
            seed = self.seed(),
            %direction,
            amount_in = amount_in.get(),
            amount_out = amount_out.get(),
            fee = plan.result.fee().get(),
            reserve_x = self.reserve_x().get(),
            reserve_y = self.reserve_y().get(),
            "swap executed"
        );
        Ok(plan.result)
    }

    fn quote_swap(
        &self,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<SwapResult, AmmError> {
        if amount_in.is_zero() {
            return Err(AmmError::InvalidAmount("swap amount must be positive"));
        }
        self.plan_swap(direction, amount_in).map(|plan| plan.result)
    }

    fn token_pair(&self) -> &TokenPair {
        self.pair()
    }

    fn fee(&self) -> BasisPoints {
        PoolState::fee(self)
    }
}
