//! Passive order placement
//!
//! A limit order either crosses the opposing book on arrival or rests
//! behind it. Fill, impact and time are assigned by policy from the queue
//! position rather than by walking the book.
//!
//! ```text
//! level k = first opposing index the limit price crosses, else depth
//!
//! k == 0:  fill = 100, impact = 0.05, slippage = 0.02, time = 0.1
//! k >  0:  fill = max(20, 100 − 10k), impact = 0, slippage = 0,
//!          time = min(2k, 30)
//! ```

use log::{debug, warn};
use orderlens_core::{ImpactResult, OrderBookLevel, Price, Quantity, Side};
use rust_decimal::Decimal;

use crate::config::LimitModelConfig;
use crate::rounding::RoundingPolicy;

/// Where a limit order lands relative to the opposing book
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueuePosition {
    /// Crosses the best opposing level on arrival
    Immediate,
    /// First crossed level is `level` deep, or `level == depth` if none crossed
    Resting { level: usize },
}

impl QueuePosition {
    /// Scan `levels` best-first for the first one `price` would trade against
    pub fn find(side: Side, price: Price, levels: &[OrderBookLevel]) -> Self {
        let level = levels
            .iter()
            .position(|level| side.crosses(price, level.price))
            .unwrap_or(levels.len());

        match level {
            0 => QueuePosition::Immediate,
            level => QueuePosition::Resting { level },
        }
    }

    pub fn level(&self) -> usize {
        match self {
            QueuePosition::Immediate => 0,
            QueuePosition::Resting { level } => *level,
        }
    }
}

/// Simulates a limit order's queue placement
#[derive(Debug, Clone, Default)]
pub struct LimitOrderSimulator {
    config: LimitModelConfig,
    rounding: RoundingPolicy,
}

impl LimitOrderSimulator {
    pub fn new(config: LimitModelConfig) -> Self {
        Self {
            config,
            rounding: RoundingPolicy,
        }
    }

    pub fn config(&self) -> &LimitModelConfig {
        &self.config
    }

    /// Simulate a limit order at `price` against `opposing` levels
    ///
    /// An empty opposing side has nothing to trade against and yields the
    /// zeroed result.
    pub fn simulate(
        &self,
        price: Price,
        quantity: Quantity,
        opposing: &[OrderBookLevel],
        side: Side,
    ) -> ImpactResult {
        if opposing.is_empty() {
            warn!("Limit {:?} {} @ {} has no opposing levels", side, quantity, price);
            return ImpactResult::zero();
        }

        let position = QueuePosition::find(side, price, opposing);
        debug!(
            "Limit {:?} {} @ {}: {:?} of {} levels",
            side,
            quantity,
            price,
            position,
            opposing.len()
        );

        self.rounding.apply(self.estimate(position))
    }

    fn estimate(&self, position: QueuePosition) -> ImpactResult {
        let cfg = &self.config;
        match position {
            QueuePosition::Immediate => ImpactResult {
                estimated_fill: cfg.immediate_fill_pct,
                market_impact: cfg.immediate_impact_pct,
                slippage: cfg.immediate_slippage_pct,
                time_to_fill: cfg.immediate_time_secs,
                would_sit_at_level: Some(0),
            },
            QueuePosition::Resting { level } => {
                let depth = Decimal::from(level);
                let decayed = cfg.immediate_fill_pct - depth * cfg.fill_decay_per_level_pct;
                ImpactResult {
                    estimated_fill: decayed.max(cfg.min_fill_pct),
                    market_impact: Decimal::ZERO,
                    slippage: Decimal::ZERO,
                    time_to_fill: (depth * cfg.seconds_per_level).min(cfg.max_time_to_fill_secs),
                    would_sit_at_level: Some(level),
                }
            }
        }
    }
}
