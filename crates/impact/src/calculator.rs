//! Impact calculation entry point
//!
//! Picks the side of the book an order trades against and the baseline
//! price it is measured from, then hands off to the market or limit model.
//!
//! | side | consumes | baseline    |
//! |------|----------|-------------|
//! | buy  | asks     | best bid    |
//! | sell | bids     | best ask    |

use log::{debug, warn};
use orderlens_core::{ImpactResult, OrderBookSnapshot, OrderRequest, OrderType};

use crate::config::ImpactConfig;
use crate::error::{ImpactError, Result};
use crate::limit::LimitOrderSimulator;
use crate::market::MarketOrderSimulator;

/// Stateless impact calculator
///
/// Holds only model parameters, so one instance can be shared freely
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct ImpactCalculator {
    market: MarketOrderSimulator,
    limit: LimitOrderSimulator,
}

impl ImpactCalculator {
    /// Create new calculator with configuration
    pub fn new(config: &ImpactConfig) -> Self {
        Self {
            market: MarketOrderSimulator::new(config.market.clone()),
            limit: LimitOrderSimulator::new(config.limit.clone()),
        }
    }

    /// Estimate the impact of `order` against `book`
    ///
    /// Never fails: a request without a side or a positive quantity, or a
    /// limit order without a positive price, yields [`ImpactResult::zero`].
    pub fn compute(&self, order: &OrderRequest, book: &OrderBookSnapshot) -> ImpactResult {
        let (Some(side), Some(quantity)) = (order.side, order.positive_quantity()) else {
            debug!("Nothing to simulate: {:?}", order);
            return ImpactResult::zero();
        };

        let opposing = book.opposing_levels(side);

        match order.order_type {
            OrderType::Market => self.market.simulate(quantity, opposing, book.baseline_level(side)),
            OrderType::Limit => match order.positive_price() {
                Some(price) => self.limit.simulate(price, quantity, opposing, side),
                None => {
                    warn!(
                        "Limit order on {}:{} has no usable price: {:?}",
                        book.venue, book.symbol, order.price
                    );
                    ImpactResult::zero()
                }
            },
        }
    }

    /// Like [`compute`](Self::compute) but rejects bad input
    ///
    /// Validates the request and the snapshot's sort/non-crossed invariants
    /// before simulating.
    pub fn compute_checked(
        &self,
        order: &OrderRequest,
        book: &OrderBookSnapshot,
    ) -> Result<ImpactResult> {
        if order.side.is_none() {
            return Err(ImpactError::InvalidRequest("missing side".to_string()));
        }
        if order.positive_quantity().is_none() {
            return Err(ImpactError::InvalidRequest(format!(
                "quantity must be positive, got {:?}",
                order.quantity
            )));
        }
        if order.order_type.requires_price() && order.positive_price().is_none() {
            return Err(ImpactError::InvalidRequest(format!(
                "limit order needs a positive price, got {:?}",
                order.price
            )));
        }

        book.validate()?;

        Ok(self.compute(order, book))
    }
}

/// Estimate impact with the default model parameters
pub fn compute_impact(order: &OrderRequest, book: &OrderBookSnapshot) -> ImpactResult {
    ImpactCalculator::default().compute(order, book)
}
