//! Mock order book generator
//!
//! Produces well-formed books: levels step away from a random base price by
//! a fixed fraction, quantities are uniform, bids descend and asks ascend.

use orderlens_core::{OrderBookLevel, OrderBookSnapshot, Price, Quantity, Side};
use orderlens_ports::Clock;
use rand::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

use crate::config::FeedConfig;

/// Base price ranges: (floor, random spread on top)
const BTC_BASE: (Decimal, Decimal) = (dec!(42000), dec!(1000));
const OTHER_BASE: (Decimal, Decimal) = (dec!(2500), dec!(100));

const PRICE_DP: u32 = 2;
const QUANTITY_DP: u32 = 6;
const TOTAL_DP: u32 = 2;

/// Random order book generator
pub struct MockOrderBookGenerator {
    config: FeedConfig,
    rng: StdRng,
    clock: Arc<dyn Clock>,
}

impl MockOrderBookGenerator {
    /// Create a generator; seeded from `config.seed` if set, else from entropy
    pub fn new(config: FeedConfig, clock: Arc<dyn Clock>) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng, clock }
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Generate a fresh snapshot for `symbol` on `venue`
    pub fn generate(&mut self, venue: &str, symbol: &str) -> OrderBookSnapshot {
        let base = self.base_price(symbol);
        let step = base * self.config.price_step_ratio;

        let mut bids = Vec::with_capacity(self.config.levels);
        let mut asks = Vec::with_capacity(self.config.levels);
        for index in 0..self.config.levels {
            bids.push(self.level(base, step, Side::Buy, index));
            asks.push(self.level(base, step, Side::Sell, index));
        }

        bids.sort_by(|a, b| b.price.cmp(&a.price));
        asks.sort_by(|a, b| a.price.cmp(&b.price));

        OrderBookSnapshot::new(symbol, venue, bids, asks, self.clock.now())
    }

    fn base_price(&mut self, symbol: &str) -> Price {
        let (floor, spread) = if symbol.contains("BTC") {
            BTC_BASE
        } else {
            OTHER_BASE
        };
        floor + self.uniform(spread)
    }

    fn level(&mut self, base: Price, step: Price, side: Side, index: usize) -> OrderBookLevel {
        let offset = step * Decimal::from(index + 1);
        let price = match side {
            Side::Buy => base - offset,
            Side::Sell => base + offset,
        }
        .round_dp(PRICE_DP);

        let range = self.config.quantity_range;
        let quantity: Quantity = (self.uniform(range) + self.config.min_quantity).round_dp(QUANTITY_DP);
        let total = (price * quantity).round_dp(TOTAL_DP);

        OrderBookLevel::with_total(price, quantity, total)
    }

    /// Uniform sample in [0, max) at micro precision
    fn uniform(&mut self, max: Decimal) -> Decimal {
        let unit = Decimal::new(self.rng.gen_range(0..1_000_000), 6);
        unit * max
    }
}
