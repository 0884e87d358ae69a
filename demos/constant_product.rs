//! Constant-product pool walkthrough.
//!
//! Seeds a pool, trades in both directions, locks and unlocks it, then
//! drains it, printing the receipts and reserves along the way.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=cpmm_engine=debug cargo run --example constant_product
//! ```

use cpmm_engine::config::PoolConfig;
use cpmm_engine::domain::{
    Amount, Authority, BasisPoints, Liquidity, SwapDirection, TokenAddress, TokenPair,
};
use cpmm_engine::error::AmmError;
use cpmm_engine::pool::PoolState;
use cpmm_engine::traits::{LiquidityPool, SwapPool};

fn print_reserves(pool: &PoolState) {
    let snap = pool.snapshot();
    println!(
        "  reserves: x = {}, y = {}, lp supply = {}, k = {}",
        snap.reserve_x,
        snap.reserve_y,
        snap.lp_supply,
        pool.invariant_k()
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Constant Product Pool ===\n");

    // ── 1. Define the pair and the pool ─────────────────────────────────
    let usdc = TokenAddress::from_bytes([1u8; 32]);
    let weth = TokenAddress::from_bytes([2u8; 32]);
    let admin = Authority::from_bytes([0xAA; 32]);
    let pair = TokenPair::new(usdc, weth)?;
    let config = PoolConfig::new(12_345, pair, BasisPoints::new(30), Some(admin))?;

    let mut pool = PoolState::initialize(&config)?;
    println!("Pool {} created, fee {}", config.key(), pool.fee());

    // ── 2. Seed with the first deposit ──────────────────────────────────
    //    The requested LP amount is ignored here; sqrt(x * y) is minted.
    let seed = pool.deposit(
        Liquidity::new(1),
        Amount::new(1_000_000),
        Amount::new(1_000_000),
    )?;
    println!("\n{seed}");
    print_reserves(&pool);

    // ── 3. Quote, then trade X for Y ────────────────────────────────────
    let spot = pool.spot_price_x_in_y()?;
    let quote = pool.quote_swap(SwapDirection::XToY, Amount::new(10_000))?;
    println!("\nQuote: {quote}");
    let result = pool.swap(SwapDirection::XToY, Amount::new(10_000), quote.amount_out())?;
    println!("Swap:  {result}");
    if let Some(impact) = result.price_impact(spot) {
        println!("  price impact: {:.4}%", impact * 100.0);
    }
    print_reserves(&pool);

    // ── 4. A trade with too tight a bound is rejected ───────────────────
    let greedy = pool.swap(SwapDirection::YToX, Amount::new(10_000), Amount::new(20_000));
    println!("\nGreedy swap: {greedy:?}");

    // ── 5. A second provider joins ──────────────────────────────────────
    let joined = pool.deposit(
        Liquidity::new(250_000),
        Amount::new(300_000),
        Amount::new(300_000),
    )?;
    println!("\n{joined}");
    print_reserves(&pool);

    // ── 6. Lock, try to trade, unlock ───────────────────────────────────
    pool.set_locked(true, &admin)?;
    match pool.swap(SwapDirection::YToX, Amount::new(5_000), Amount::ZERO) {
        Err(AmmError::PoolLocked) => println!("\nLocked pool refused the swap"),
        other => println!("\nUnexpected: {other:?}"),
    }
    pool.set_locked(false, &admin)?;

    // ── 7. Everyone leaves ──────────────────────────────────────────────
    let first = pool.withdraw(seed.lp_minted(), Amount::ZERO, Amount::ZERO)?;
    let second = pool.withdraw(joined.lp_minted(), Amount::ZERO, Amount::ZERO)?;
    println!("\n{first}\n{second}");
    print_reserves(&pool);

    Ok(())
}
