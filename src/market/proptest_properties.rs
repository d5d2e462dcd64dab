//! Property-based tests for engine invariants.
//!
//! Covers the crate's fuzzable guarantees:
//!
//! 1. **Axis monotonicity** — after any sequence of valid trades the buy
//!    axis never trails the sell axis, on either dimension.
//! 2. **Curve round-trip** — `supply_from_area(area_of(x)) ≈ x`.
//! 3. **Curve monotonicity** — area and price grow with supply.
//! 4. **Quote/execute equality** — a quote equals the realized receipt on
//!    an unchanged ledger.
//! 5. **Fee-inversion minimality** — `gross_for_remainder` returns the
//!    smallest covering gross.
//! 6. **Value conservation** — every receipt splits exactly.

use proptest::prelude::*;

use crate::config::MarketConfig;
use crate::domain::{AccountId, Amount, FeeConfig, FeeSchedule};
use crate::math::Fixed;
use crate::traits::InMemoryAsset;

use super::engine::Market;
use super::events::NoOpSink;
use super::fees::{gross_for_remainder, split_gross};

const ONE_TOKEN: u128 = 1_000_000_000_000_000_000;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn vault() -> AccountId {
    AccountId::from_bytes([1u8; 32])
}

fn trader() -> AccountId {
    AccountId::from_bytes([2u8; 32])
}

fn collector() -> AccountId {
    AccountId::from_bytes([9u8; 32])
}

fn make_market(
    param_raw: u128,
    buy_fee: (u64, u64),
    sell_fee: (u64, u64),
) -> Option<Market<InMemoryAsset, InMemoryAsset, NoOpSink>> {
    let buy = FeeSchedule::new(buy_fee.0, buy_fee.1).ok()?;
    let sell = FeeSchedule::new(sell_fee.0, sell_fee.1).ok()?;
    let fees = FeeConfig::new(buy, sell, collector()).ok()?;
    let config = MarketConfig::new(Fixed::from_raw(param_raw), fees, vault()).ok()?;

    let mut reserve = InMemoryAsset::new(18);
    reserve.credit(trader(), Amount::MAX);
    reserve.approve(trader(), vault(), Amount::MAX);

    let mut synthetic = InMemoryAsset::new(18);
    synthetic.credit(vault(), Amount::MAX);
    synthetic.approve(trader(), vault(), Amount::MAX);

    Market::new(config, reserve, synthetic, NoOpSink).ok()
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Curve parameters from 0.01 to 1000 whole units.
fn parameter_strategy() -> impl Strategy<Value = u128> {
    (ONE_TOKEN / 100)..=(1_000 * ONE_TOKEN)
}

/// Trade amounts from 0.001 to 100 000 whole units.
fn amount_strategy() -> impl Strategy<Value = u128> {
    (ONE_TOKEN / 1_000)..=(100_000 * ONE_TOKEN)
}

/// Fee schedules with base up to 10^6 and any valid rate below it.
fn fee_strategy() -> impl Strategy<Value = (u64, u64)> {
    (2u64..=1_000_000).prop_flat_map(|base| (0..base, Just(base)))
}

/// One step of a random trade sequence.
#[derive(Debug, Clone, Copy)]
enum TradeStep {
    BuyByInput(u128),
    BuyExactNet(u128),
    SellByInput(u128),
    SellExactBurn(u128),
}

fn step_strategy() -> impl Strategy<Value = TradeStep> {
    prop_oneof![
        amount_strategy().prop_map(TradeStep::BuyByInput),
        amount_strategy().prop_map(TradeStep::BuyExactNet),
        amount_strategy().prop_map(TradeStep::SellByInput),
        amount_strategy().prop_map(TradeStep::SellExactBurn),
    ]
}

// ---------------------------------------------------------------------------
// Property 1: Axis monotonicity under random sequences
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_axes_never_cross(
        param in parameter_strategy(),
        fee in fee_strategy(),
        steps in prop::collection::vec(step_strategy(), 1..20),
    ) {
        let Some(mut market) = make_market(param, fee, fee) else {
            return Ok(());
        };

        for step in steps {
            // Individual trades may be rejected (dust, capacity, range);
            // the invariant must hold regardless.
            let _ = match step {
                TradeStep::BuyByInput(v) => market
                    .buy_with_reserve(trader(), Amount::new(v), Amount::ZERO)
                    .map(|_| ()),
                TradeStep::BuyExactNet(v) => market
                    .buy_exact_net(trader(), Amount::new(v), Amount::MAX)
                    .map(|_| ()),
                TradeStep::SellByInput(v) => market
                    .sell_with_synthetic(trader(), Amount::new(v), Amount::ZERO)
                    .map(|_| ()),
                TradeStep::SellExactBurn(v) => market
                    .sell_exact_burn(trader(), Amount::new(v), Amount::ZERO)
                    .map(|_| ()),
            };

            let ledger = market.ledger();
            prop_assert!(
                ledger.minted_total() >= ledger.burned_total(),
                "minted axis fell behind burned axis"
            );
            prop_assert!(
                ledger.reserve_in_total() >= ledger.reserve_out_total(),
                "inflow axis fell behind outflow axis"
            );
        }
    }

    // -----------------------------------------------------------------------
    // Property 2: Curve round-trip
    // -----------------------------------------------------------------------

    #[test]
    fn prop_curve_round_trip(
        param in parameter_strategy(),
        x_raw in amount_strategy(),
    ) {
        let Some(market) = make_market(param, (0, 1), (0, 1)) else {
            return Ok(());
        };
        let x = Fixed::from_raw(x_raw);
        let Ok(area) = market.curve().area_of(x) else {
            return Ok(());
        };
        if area.is_zero() {
            return Ok(());
        }
        let Ok(back) = market.curve().supply_from_area(area) else {
            return Ok(());
        };
        // Tolerance: a part per million plus absolute slack for dust.
        let tolerance = x_raw / 1_000_000 + 1_000;
        prop_assert!(
            back.raw().abs_diff(x_raw) <= tolerance,
            "round trip drifted: x={x_raw}, back={}",
            back.raw()
        );
    }

    // -----------------------------------------------------------------------
    // Property 3: Curve monotonicity
    // -----------------------------------------------------------------------

    #[test]
    fn prop_area_and_price_monotone(
        param in parameter_strategy(),
        lo_raw in amount_strategy(),
        factor in 2u128..=1_000,
    ) {
        let Some(market) = make_market(param, (0, 1), (0, 1)) else {
            return Ok(());
        };
        let hi_raw = match lo_raw.checked_mul(factor) {
            Some(v) => v,
            None => return Ok(()),
        };
        let curve = market.curve();

        let (Ok(area_lo), Ok(area_hi)) =
            (curve.area_of(Fixed::from_raw(lo_raw)), curve.area_of(Fixed::from_raw(hi_raw)))
        else {
            return Ok(());
        };
        prop_assert!(area_hi > area_lo, "area must grow with supply");

        let (Ok(price_lo), Ok(price_hi)) = (
            curve.price_at_supply(Fixed::from_raw(lo_raw)),
            curve.price_at_supply(Fixed::from_raw(hi_raw)),
        ) else {
            return Ok(());
        };
        prop_assert!(price_hi >= price_lo, "price must not fall as supply grows");
    }

    // -----------------------------------------------------------------------
    // Property 4: Quote/execute equality
    // -----------------------------------------------------------------------

    #[test]
    fn prop_quote_matches_execute(
        param in parameter_strategy(),
        fee in fee_strategy(),
        seed in amount_strategy(),
        trade in amount_strategy(),
    ) {
        let Some(mut market) = make_market(param, fee, fee) else {
            return Ok(());
        };
        if market.bootstrap(trader(), Amount::new(seed)).is_err() {
            return Ok(());
        }

        // Buy side.
        if let Ok(quote) = market.quote_buy_with_reserve(Amount::new(trade)) {
            let Ok(executed) =
                market.buy_with_reserve(trader(), Amount::new(trade), Amount::ZERO)
            else {
                return Ok(());
            };
            prop_assert_eq!(quote, executed);
        }

        // Sell side, scaled to something the trader can hold.
        let Ok(outstanding) = market.internal_supply() else {
            return Ok(());
        };
        let gross_in = outstanding.get() / 3;
        if gross_in == 0 {
            return Ok(());
        }
        if let Ok(quote) = market.quote_sell_with_synthetic(Amount::new(gross_in)) {
            let Ok(executed) =
                market.sell_with_synthetic(trader(), Amount::new(gross_in), Amount::ZERO)
            else {
                return Ok(());
            };
            prop_assert_eq!(quote, executed);
        }
    }

    // -----------------------------------------------------------------------
    // Property 5: Fee-inversion minimality
    // -----------------------------------------------------------------------

    #[test]
    fn prop_fee_inversion_minimal(
        fee in fee_strategy(),
        remainder in 1u128..=u64::MAX as u128,
    ) {
        let Ok(schedule) = FeeSchedule::new(fee.0, fee.1) else {
            return Ok(());
        };
        let remainder = Amount::new(remainder);
        let Ok(gross) = gross_for_remainder(schedule, remainder) else {
            return Ok(());
        };
        let Ok((_, got)) = split_gross(schedule, gross) else {
            return Ok(());
        };
        prop_assert!(got >= remainder, "inversion must cover the request");

        let Some(less) = gross.checked_sub(&Amount::new(1)) else {
            return Ok(());
        };
        if !less.is_zero() {
            let Ok((_, short)) = split_gross(schedule, less) else {
                return Ok(());
            };
            prop_assert!(short < remainder, "inversion must be minimal");
        }
    }

    // -----------------------------------------------------------------------
    // Property 6: Receipts conserve value
    // -----------------------------------------------------------------------

    #[test]
    fn prop_receipts_split_exactly(
        param in parameter_strategy(),
        fee in fee_strategy(),
        reserve_in in amount_strategy(),
    ) {
        let Some(mut market) = make_market(param, fee, fee) else {
            return Ok(());
        };
        let Ok(buy) = market.buy_with_reserve(trader(), Amount::new(reserve_in), Amount::ZERO)
        else {
            return Ok(());
        };
        prop_assert_eq!(buy.net().get() + buy.fee().get(), buy.gross().get());

        let gross_in = buy.net().get() / 2;
        if gross_in == 0 {
            return Ok(());
        }
        let Ok(sell) =
            market.sell_with_synthetic(trader(), Amount::new(gross_in), Amount::ZERO)
        else {
            return Ok(());
        };
        prop_assert_eq!(sell.burned().get() + sell.fee().get(), sell.gross_in().get());
    }
}
