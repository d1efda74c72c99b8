//! Impact calculator scenarios
//!
//! Exercises the public entry point against hand-built books with known
//! answers, then checks the result invariants over seeded random books.

use chrono::Utc;
use orderlens_core::{OrderBookLevel, OrderBookSnapshot, OrderRequest, OrderType, Side};
use orderlens_impact::{ImpactCalculator, ImpactConfig, MarketWalk, RoundingPolicy, compute_impact};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Asks [{100,1},{101,2},{102,5}] with a best bid of 99
fn reference_book() -> OrderBookSnapshot {
    OrderBookSnapshot::new(
        "BTC-USD",
        "OKX",
        vec![
            OrderBookLevel::new(dec!(99), dec!(3)),
            OrderBookLevel::new(dec!(98), dec!(3)),
        ],
        vec![
            OrderBookLevel::new(dec!(100), dec!(1)),
            OrderBookLevel::new(dec!(101), dec!(2)),
            OrderBookLevel::new(dec!(102), dec!(5)),
        ],
        Utc::now(),
    )
}

/// Random valid book: `depth` levels per side around `mid`
fn random_book(rng: &mut StdRng, depth: usize) -> OrderBookSnapshot {
    let mid = Decimal::from(rng.gen_range(1_000i64..50_000));
    let tick = dec!(0.5);

    let bids = (0..depth)
        .map(|i| OrderBookLevel::new(mid - tick * Decimal::from(i + 1), random_qty(rng)))
        .collect();
    let asks = (0..depth)
        .map(|i| OrderBookLevel::new(mid + tick * Decimal::from(i + 1), random_qty(rng)))
        .collect();

    OrderBookSnapshot::new("ETH-USD", "Bybit", bids, asks, Utc::now())
}

fn random_qty(rng: &mut StdRng) -> Decimal {
    Decimal::new(rng.gen_range(1..100_000), 4)
}

fn random_side(rng: &mut StdRng) -> Side {
    if rng.r#gen::<bool>() { Side::Buy } else { Side::Sell }
}

#[test]
fn scenario_single_level_fill() {
    let _ = env_logger::try_init();
    let result = compute_impact(&OrderRequest::market(Side::Buy, dec!(1)), &reference_book());

    assert_eq!(result.estimated_fill, dec!(100));
    assert_eq!(result.market_impact, dec!(1.0101));
    assert_eq!(result.slippage, dec!(1.0101));
    assert_eq!(result.time_to_fill, dec!(0.1));
    assert_eq!(result.would_sit_at_level, None);
}

#[test]
fn scenario_two_level_fill() {
    let result = compute_impact(&OrderRequest::market(Side::Buy, dec!(2)), &reference_book());

    assert_eq!(result.estimated_fill, dec!(100));
    assert_eq!(result.time_to_fill, dec!(0.2));
}

#[test]
fn scenario_liquidity_exhausted() {
    let result = compute_impact(&OrderRequest::market(Side::Buy, dec!(10)), &reference_book());

    assert_eq!(result.estimated_fill, dec!(80));
    assert!(result.is_partial());
    assert_eq!(result.time_to_fill, dec!(0.3));
}

#[test]
fn scenario_empty_asks() {
    let _ = env_logger::try_init();
    let mut book = reference_book();
    book.asks.clear();

    let result = compute_impact(&OrderRequest::market(Side::Buy, dec!(5)), &book);

    assert!(result.is_zero());
}

#[test]
fn scenario_limit_crosses_best_ask() {
    let mut book = reference_book();
    book.asks.truncate(2);

    let result = compute_impact(&OrderRequest::limit(Side::Buy, dec!(1), dec!(100)), &book);

    assert_eq!(result.would_sit_at_level, Some(0));
    assert_eq!(result.estimated_fill, dec!(100));
    assert_eq!(result.market_impact, dec!(0.05));
}

#[test]
fn scenario_limit_rests_behind_book() {
    let result = compute_impact(
        &OrderRequest::limit(Side::Buy, dec!(1), dec!(99)),
        &reference_book(),
    );

    assert_eq!(result.would_sit_at_level, Some(3));
    assert_eq!(result.estimated_fill, dec!(70));
    assert_eq!(result.time_to_fill, dec!(6.0));
}

#[test]
fn configured_calculator_uses_overrides() {
    let config = ImpactConfig::from_json(r#"{ "market": { "seconds_per_level": "1" } }"#).unwrap();
    let calc = ImpactCalculator::new(&config);

    let result = calc.compute(&OrderRequest::market(Side::Buy, dec!(10)), &reference_book());

    assert_eq!(result.time_to_fill, dec!(3.0));
}

#[test]
fn market_fill_is_full_iff_depth_covers_quantity() {
    let _ = env_logger::try_init();
    let mut rng = StdRng::seed_from_u64(7);
    let calc = ImpactCalculator::default();

    for _ in 0..200 {
        let depth = rng.gen_range(0..20);
        let book = random_book(&mut rng, depth);
        let side = random_side(&mut rng);
        let quantity = Decimal::new(rng.gen_range(1..500_000), 4);

        let result = calc.compute(&OrderRequest::market(side, quantity), &book);
        let available = book.total_depth(side.opposite());

        assert!(result.estimated_fill >= Decimal::ZERO);
        assert!(result.estimated_fill <= Decimal::ONE_HUNDRED);
        assert_eq!(result.market_impact, result.slippage);
        assert!(result.market_impact >= Decimal::ZERO);
        assert!(result.time_to_fill >= Decimal::ZERO);
        assert!(result.time_to_fill <= dec!(5));

        if available.is_zero() {
            assert!(result.is_zero());
        } else if available >= quantity {
            assert_eq!(result.estimated_fill, Decimal::ONE_HUNDRED);
        } else {
            let walk = MarketWalk::walk(quantity, book.opposing_levels(side));
            assert!(walk.is_exhausted());
            assert_eq!(
                result.estimated_fill,
                walk.fill_pct()
                    .round_dp_with_strategy(RoundingPolicy::FILL_DP, RoundingStrategy::MidpointAwayFromZero)
            );
        }
    }
}

#[test]
fn limit_outputs_follow_queue_policy() {
    let mut rng = StdRng::seed_from_u64(11);
    let calc = ImpactCalculator::default();

    for _ in 0..200 {
        let depth = rng.gen_range(1..20);
        let book = random_book(&mut rng, depth);
        let side = random_side(&mut rng);
        let mid = book.mid_price().unwrap();
        let price = mid + Decimal::from(rng.gen_range(-20i64..20));

        let result = calc.compute(&OrderRequest::limit(side, dec!(1), price), &book);
        let k = result.would_sit_at_level.expect("limit result carries queue level");

        if k == 0 {
            assert_eq!(result.estimated_fill, dec!(100));
            assert_eq!(result.market_impact, dec!(0.05));
            assert_eq!(result.slippage, dec!(0.02));
            assert_eq!(result.time_to_fill, dec!(0.1));
        } else {
            let k = Decimal::from(k);
            assert_eq!(result.estimated_fill, (dec!(100) - dec!(10) * k).max(dec!(20)));
            assert_eq!(result.market_impact, Decimal::ZERO);
            assert_eq!(result.slippage, Decimal::ZERO);
            assert_eq!(result.time_to_fill, (dec!(2) * k).min(dec!(30)));
        }
    }
}

#[test]
fn repeated_calls_are_identical() {
    let mut rng = StdRng::seed_from_u64(42);
    let calc = ImpactCalculator::default();

    for _ in 0..50 {
        let book = random_book(&mut rng, 15);
        let order = OrderRequest {
            side: Some(random_side(&mut rng)),
            order_type: if rng.r#gen::<bool>() { OrderType::Market } else { OrderType::Limit },
            quantity: Some(Decimal::new(rng.gen_range(1..100_000), 3)),
            price: book.mid_price(),
        };

        assert_eq!(calc.compute(&order, &book), calc.compute(&order, &book));
    }
}

#[test]
fn shared_calculator_across_threads() {
    let calc = ImpactCalculator::default();
    let book = reference_book();

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (1..=8)
            .map(|n| {
                let calc = &calc;
                let book = &book;
                scope.spawn(move || {
                    calc.compute(&OrderRequest::market(Side::Buy, Decimal::from(n)), book)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (n, result) in (1..=8).zip(results) {
        let expected = calc.compute(&OrderRequest::market(Side::Buy, Decimal::from(n)), &book);
        assert_eq!(result, expected);
    }
}
