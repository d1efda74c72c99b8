//! Aggressive fill walk
//!
//! A market order consumes the opposing side best-first until the quantity
//! is satisfied or the visible book runs out.
//!
//! ```text
//! avg_price      = Σ(consumed × price) / filled
//! market_impact  = |avg_price − baseline| / baseline × 100
//! slippage       = market_impact
//! time_to_fill   = min(levels_consumed × seconds_per_level, max_time)
//! ```

use log::{debug, warn};
use orderlens_core::{ImpactResult, OrderBookLevel, Price, Quantity};
use rust_decimal::Decimal;

use crate::config::MarketModelConfig;
use crate::rounding::RoundingPolicy;

/// Result of sweeping a quantity through a side of the book
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketWalk {
    pub requested: Quantity,
    pub filled: Quantity,
    pub remaining: Quantity,
    /// Σ consumed × price
    pub total_cost: Decimal,
    /// Levels touched, including a partially consumed last level
    pub levels_consumed: usize,
}

impl MarketWalk {
    /// Sweep `quantity` through `levels` (best first)
    pub fn walk(quantity: Quantity, levels: &[OrderBookLevel]) -> Self {
        let mut remaining = quantity;
        let mut total_cost = Decimal::ZERO;
        let mut levels_consumed = 0;

        for level in levels {
            if remaining <= Decimal::ZERO {
                break;
            }
            let fill_qty = remaining.min(level.quantity);
            total_cost += fill_qty * level.price;
            remaining -= fill_qty;
            levels_consumed += 1;
        }

        Self {
            requested: quantity,
            filled: quantity - remaining,
            remaining,
            total_cost,
            levels_consumed,
        }
    }

    /// Volume-weighted execution price; None when nothing filled
    pub fn average_price(&self) -> Option<Price> {
        if self.filled > Decimal::ZERO {
            Some(self.total_cost / self.filled)
        } else {
            None
        }
    }

    /// Filled quantity as a percent of the request
    pub fn fill_pct(&self) -> Decimal {
        if self.requested > Decimal::ZERO {
            self.filled / self.requested * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        }
    }

    /// Visible depth ran out before the request was satisfied
    pub fn is_exhausted(&self) -> bool {
        self.remaining > Decimal::ZERO
    }
}

/// Simulates a market order sweeping the opposing book
#[derive(Debug, Clone, Default)]
pub struct MarketOrderSimulator {
    config: MarketModelConfig,
    rounding: RoundingPolicy,
}

impl MarketOrderSimulator {
    pub fn new(config: MarketModelConfig) -> Self {
        Self {
            config,
            rounding: RoundingPolicy,
        }
    }

    pub fn config(&self) -> &MarketModelConfig {
        &self.config
    }

    /// Simulate a market order of `quantity` against `opposing` levels
    ///
    /// `baseline` is the pre-trade same-side top of book. Without a usable
    /// baseline the impact and slippage are reported as zero.
    pub fn simulate(
        &self,
        quantity: Quantity,
        opposing: &[OrderBookLevel],
        baseline: Option<&OrderBookLevel>,
    ) -> ImpactResult {
        let walk = MarketWalk::walk(quantity, opposing);

        let Some(avg_price) = walk.average_price() else {
            warn!(
                "Market order for {} found no opposing liquidity ({} levels)",
                quantity,
                opposing.len()
            );
            return ImpactResult::zero();
        };

        let market_impact = match baseline {
            Some(level) if level.price > Decimal::ZERO => {
                (avg_price - level.price).abs() / level.price * Decimal::ONE_HUNDRED
            }
            _ => {
                warn!("No baseline price for market order; reporting zero impact");
                Decimal::ZERO
            }
        };

        let time_to_fill = (Decimal::from(walk.levels_consumed) * self.config.seconds_per_level)
            .min(self.config.max_time_to_fill_secs);

        debug!(
            "Market walk: filled {}/{} over {} levels, avg {}, remaining {}",
            walk.filled, walk.requested, walk.levels_consumed, avg_price, walk.remaining
        );

        self.rounding.apply(ImpactResult {
            estimated_fill: walk.fill_pct(),
            market_impact,
            slippage: market_impact,
            time_to_fill,
            would_sit_at_level: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn asks() -> Vec<OrderBookLevel> {
        vec![
            OrderBookLevel::new(dec!(100), dec!(1)),
            OrderBookLevel::new(dec!(101), dec!(2)),
            OrderBookLevel::new(dec!(102), dec!(5)),
        ]
    }

    fn best_bid() -> OrderBookLevel {
        OrderBookLevel::new(dec!(99), dec!(3))
    }

    #[test]
    fn test_walk_single_level() {
        let walk = MarketWalk::walk(dec!(1), &asks());

        assert_eq!(walk.filled, dec!(1));
        assert_eq!(walk.levels_consumed, 1);
        assert_eq!(walk.average_price(), Some(dec!(100)));
        assert!(!walk.is_exhausted());
    }

    #[test]
    fn test_walk_crosses_levels() {
        let walk = MarketWalk::walk(dec!(2), &asks());

        assert_eq!(walk.levels_consumed, 2);
        assert_eq!(walk.total_cost, dec!(201));
        assert_eq!(walk.average_price(), Some(dec!(100.5)));
    }

    #[test]
    fn test_walk_exhausts_book() {
        let walk = MarketWalk::walk(dec!(10), &asks());

        assert_eq!(walk.filled, dec!(8));
        assert_eq!(walk.remaining, dec!(2));
        assert_eq!(walk.levels_consumed, 3);
        assert_eq!(walk.fill_pct(), dec!(80));
        assert_eq!(walk.average_price(), Some(dec!(101.5)));
        assert!(walk.is_exhausted());
    }

    #[test]
    fn test_walk_empty_book() {
        let walk = MarketWalk::walk(dec!(5), &[]);

        assert_eq!(walk.filled, dec!(0));
        assert_eq!(walk.average_price(), None);
        assert_eq!(walk.fill_pct(), dec!(0));
    }

    #[test]
    fn test_simulate_single_level_fill() {
        let sim = MarketOrderSimulator::default();
        let result = sim.simulate(dec!(1), &asks(), Some(&best_bid()));

        assert_eq!(result.estimated_fill, dec!(100));
        // |100 - 99| / 99 * 100
        assert_eq!(result.market_impact, dec!(1.0101));
        assert_eq!(result.slippage, result.market_impact);
        assert_eq!(result.time_to_fill, dec!(0.1));
        assert_eq!(result.would_sit_at_level, None);
    }

    #[test]
    fn test_simulate_two_levels() {
        let sim = MarketOrderSimulator::default();
        let result = sim.simulate(dec!(2), &asks(), Some(&best_bid()));

        assert_eq!(result.estimated_fill, dec!(100));
        // |100.5 - 99| / 99 * 100 = 1.51515...
        assert_eq!(result.market_impact, dec!(1.5152));
        assert_eq!(result.time_to_fill, dec!(0.2));
    }

    #[test]
    fn test_simulate_partial_fill() {
        let sim = MarketOrderSimulator::default();
        let result = sim.simulate(dec!(10), &asks(), Some(&best_bid()));

        assert_eq!(result.estimated_fill, dec!(80));
        assert!(result.is_partial());
        assert_eq!(result.time_to_fill, dec!(0.3));
    }

    #[test]
    fn test_simulate_empty_book_is_zero() {
        let sim = MarketOrderSimulator::default();
        let result = sim.simulate(dec!(5), &[], Some(&best_bid()));

        assert!(result.is_zero());
    }

    #[test]
    fn test_simulate_without_baseline() {
        let sim = MarketOrderSimulator::default();
        let result = sim.simulate(dec!(2), &asks(), None);

        assert_eq!(result.estimated_fill, dec!(100));
        assert_eq!(result.market_impact, dec!(0));
        assert_eq!(result.slippage, dec!(0));
        assert_eq!(result.time_to_fill, dec!(0.2));
    }

    #[test]
    fn test_time_to_fill_capped() {
        let levels: Vec<_> = (0..80)
            .map(|i| OrderBookLevel::new(dec!(100) + Decimal::from(i), dec!(1)))
            .collect();
        let sim = MarketOrderSimulator::default();

        let result = sim.simulate(dec!(80), &levels, Some(&best_bid()));

        assert_eq!(result.estimated_fill, dec!(100));
        assert_eq!(result.time_to_fill, dec!(5.0));
    }
}
