//! Property-based tests using `proptest` for pool invariant validation.
//!
//! 1. **Invariant growth**: `reserve_x × reserve_y` strictly increases
//!    across every swap when the fee is positive.
//! 2. **Round-trip loss**: X→Y→X returns strictly less X.
//! 3. **No value creation**: deposit then immediate withdraw of the same
//!    claim returns no more than was deposited.
//! 4. **Pro-rata fairness**: withdrawal order moves a payout by at most
//!    one unit, and never against the later withdrawer.
//! 5. **Fee monotonicity**: a larger input never pays a smaller fee or
//!    receives a smaller output.
//! 6. **Quote fidelity**: a quote equals the execution that follows it.
//! 7. **Failure atomicity**: a rejected call leaves the pool untouched.

use proptest::prelude::*;

use super::fixtures::funded_pool;
use crate::domain::{Amount, Liquidity, SwapDirection};
use crate::traits::{LiquidityPool, SwapPool};

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 10_000_000] to avoid extremes.
fn reserve_strategy() -> impl Strategy<Value = u64> {
    10_000u64..=10_000_000u64
}

/// Positive fee rates up to 10%.
fn fee_strategy() -> impl Strategy<Value = u16> {
    1u16..=1_000u16
}

fn direction_strategy() -> impl Strategy<Value = SwapDirection> {
    any::<bool>().prop_map(SwapDirection::from_x_to_y)
}

/// A swap input as a fraction of the input reserve, in basis points.
fn trade_size_strategy() -> impl Strategy<Value = u64> {
    1u64..=5_000u64
}

fn sized(reserve: Amount, size_bps: u64) -> Amount {
    Amount::new((reserve.get() * size_bps / 10_000).max(1))
}

// ---------------------------------------------------------------------------
// Property 1: Invariant growth
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_invariant_grows_over_swap_sequence(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        fee in fee_strategy(),
        trades in prop::collection::vec((direction_strategy(), trade_size_strategy()), 1..20),
    ) {
        let mut pool = funded_pool(rx, ry, fee);
        for (direction, size) in trades {
            let reserve_in = match direction {
                SwapDirection::XToY => pool.reserve_x(),
                SwapDirection::YToX => pool.reserve_y(),
            };
            let k_before = pool.invariant_k();
            let Ok(_) = pool.swap(direction, sized(reserve_in, size), Amount::ZERO) else {
                prop_assert_eq!(pool.invariant_k(), k_before);
                continue;
            };
            prop_assert!(
                pool.invariant_k() > k_before,
                "k must grow: before={} after={}",
                k_before, pool.invariant_k()
            );
            prop_assert!(pool.is_consistent());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Round-trip loss
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip_loses_value(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        fee in fee_strategy(),
        size in trade_size_strategy(),
    ) {
        let mut pool = funded_pool(rx, ry, fee);
        let amount_in = sized(pool.reserve_x(), size);

        let Ok(there) = pool.swap(SwapDirection::XToY, amount_in, Amount::ZERO) else {
            return Ok(());
        };
        let Ok(back) = pool.swap(SwapDirection::YToX, there.amount_out(), Amount::ZERO) else {
            return Ok(());
        };

        prop_assert!(
            back.amount_out() < amount_in,
            "round-trip should lose value: final={} >= original={}",
            back.amount_out(), amount_in
        );
    }
}

// ---------------------------------------------------------------------------
// Property 3: No value creation on deposit/withdraw
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deposit_withdraw_never_profits(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        fee in fee_strategy(),
        pre_trade in trade_size_strategy(),
        share in 1u64..=100_000u64,
    ) {
        let mut pool = funded_pool(rx, ry, fee);
        // skew the reserve ratio so pro-rata amounts are not whole numbers
        let _ = pool.swap(SwapDirection::XToY, sized(pool.reserve_x(), pre_trade), Amount::ZERO);

        let lp = Liquidity::new(share);
        let Ok(dep) = pool.deposit(lp, Amount::MAX, Amount::MAX) else {
            return Ok(());
        };
        let Ok(wd) = pool.withdraw(lp, Amount::ZERO, Amount::ZERO) else {
            return Ok(());
        };

        prop_assert!(wd.amount_x() <= dep.amount_x());
        prop_assert!(wd.amount_y() <= dep.amount_y());
        prop_assert!(pool.is_consistent());
    }
}

// ---------------------------------------------------------------------------
// Property 4: Pro-rata fairness
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_withdraw_order_is_fair(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        share_a in 1u64..=50_000u64,
        share_b in 1u64..=50_000u64,
        size in trade_size_strategy(),
    ) {
        let mut pool = funded_pool(rx, ry, 30);
        let (la, lb) = (Liquidity::new(share_a), Liquidity::new(share_b));
        let Ok(_) = pool.deposit(la, Amount::MAX, Amount::MAX) else {
            return Ok(());
        };
        let Ok(_) = pool.deposit(lb, Amount::MAX, Amount::MAX) else {
            return Ok(());
        };
        let _ = pool.swap(SwapDirection::YToX, sized(pool.reserve_y(), size), Amount::ZERO);

        let mut a_first = pool;
        let mut b_first = pool;

        let Ok(b_alone) = b_first.withdraw(lb, Amount::ZERO, Amount::ZERO) else {
            return Ok(());
        };
        let Ok(_) = a_first.withdraw(la, Amount::ZERO, Amount::ZERO) else {
            return Ok(());
        };
        let Ok(b_second) = a_first.withdraw(lb, Amount::ZERO, Amount::ZERO) else {
            return Ok(());
        };

        for (second, alone) in [
            (b_second.amount_x(), b_alone.amount_x()),
            (b_second.amount_y(), b_alone.amount_y()),
        ] {
            prop_assert!(second >= alone);
            prop_assert!(second.get() - alone.get() <= 1);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 5: Fee and output monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_larger_input_never_worse(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        fee in fee_strategy(),
        small in trade_size_strategy(),
        extra in 1u64..=5_000u64,
    ) {
        let pool = funded_pool(rx, ry, fee);
        let a = sized(pool.reserve_x(), small);
        let b = Amount::new(a.get() + extra);

        let (Ok(qa), Ok(qb)) = (
            pool.quote_swap(SwapDirection::XToY, a),
            pool.quote_swap(SwapDirection::XToY, b),
        ) else {
            return Ok(());
        };
        prop_assert!(qb.fee() >= qa.fee());
        prop_assert!(qb.amount_out() >= qa.amount_out());
    }
}

// ---------------------------------------------------------------------------
// Properties 6 & 7: Quote fidelity and failure atomicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_quote_equals_swap(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        fee in fee_strategy(),
        direction in direction_strategy(),
        size in trade_size_strategy(),
    ) {
        let mut pool = funded_pool(rx, ry, fee);
        let amount_in = sized(pool.reserve_x().min(pool.reserve_y()), size);
        let quote = pool.quote_swap(direction, amount_in);
        let executed = pool.swap(direction, amount_in, Amount::ZERO);
        prop_assert_eq!(quote, executed);
    }

    #[test]
    fn prop_slippage_rejection_is_atomic(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        fee in fee_strategy(),
        direction in direction_strategy(),
        size in trade_size_strategy(),
    ) {
        let mut pool = funded_pool(rx, ry, fee);
        let amount_in = sized(pool.reserve_x().min(pool.reserve_y()), size);
        let Ok(quote) = pool.quote_swap(direction, amount_in) else {
            return Ok(());
        };
        let before = pool.snapshot();
        let too_greedy = Amount::new(quote.amount_out().get() + 1);
        prop_assert!(pool.swap(direction, amount_in, too_greedy).is_err());
        prop_assert_eq!(pool.snapshot(), before);
    }
}
