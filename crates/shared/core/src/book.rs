//! Order book snapshot
//!
//! An immutable, time-stamped view of both sides of a book. Bids are held
//! best-first (descending), asks best-first (ascending).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::Side;
use crate::error::{BookError, Result};
use crate::values::{Price, Quantity, Timestamp};

/// Order book level (price + resting quantity)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBookLevel {
    pub price: Price,
    pub quantity: Quantity,
    /// price * quantity, informational only
    pub total: Decimal,
}

impl OrderBookLevel {
    /// Create a new level, deriving `total`
    pub fn new(price: Price, quantity: Quantity) -> Self {
        Self {
            price,
            quantity,
            total: price * quantity,
        }
    }

    /// Create a level with a provider-supplied total
    pub fn with_total(price: Price, quantity: Quantity, total: Decimal) -> Self {
        Self {
            price,
            quantity,
            total,
        }
    }
}

/// Full snapshot of one book on one venue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    pub symbol: String,
    pub venue: String,
    /// Descending by price (best bid first)
    pub bids: Vec<OrderBookLevel>,
    /// Ascending by price (best ask first)
    pub asks: Vec<OrderBookLevel>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: Timestamp,
}

impl OrderBookSnapshot {
    pub fn new(
        symbol: impl Into<String>,
        venue: impl Into<String>,
        bids: Vec<OrderBookLevel>,
        asks: Vec<OrderBookLevel>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            venue: venue.into(),
            bids,
            asks,
            timestamp,
        }
    }

    /// Levels of one side of the book, best first
    pub fn levels(&self, side: Side) -> &[OrderBookLevel] {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    /// Liquidity an order on `side` trades against (asks for a buy)
    pub fn opposing_levels(&self, side: Side) -> &[OrderBookLevel] {
        self.levels(side.opposite())
    }

    /// Same-side top of book, used as the impact baseline (best bid for a buy)
    pub fn baseline_level(&self, side: Side) -> Option<&OrderBookLevel> {
        self.levels(side).first()
    }

    // === Price Queries ===

    pub fn best_bid(&self) -> Option<&OrderBookLevel> {
        self.bids.first()
    }

    pub fn best_ask(&self) -> Option<&OrderBookLevel> {
        self.asks.first()
    }

    /// Get mid price (average of best bid and ask)
    pub fn mid_price(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some((bid.price + ask.price) / Decimal::TWO),
            _ => None,
        }
    }

    /// Get spread (ask - bid)
    pub fn spread(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask.price - bid.price),
            _ => None,
        }
    }

    /// Spread as a percentage of the best bid
    pub fn spread_pct(&self) -> Option<Decimal> {
        match (self.spread(), self.best_bid()) {
            (Some(spread), Some(bid)) if bid.price > Decimal::ZERO => {
                Some(spread / bid.price * Decimal::ONE_HUNDRED)
            }
            _ => None,
        }
    }

    // === Depth Queries ===

    /// Total resting quantity on one side
    pub fn total_depth(&self, side: Side) -> Quantity {
        self.levels(side).iter().map(|l| l.quantity).sum()
    }

    pub fn depth(&self, side: Side) -> usize {
        self.levels(side).len()
    }

    /// Check if book has both sides
    pub fn is_two_sided(&self) -> bool {
        !self.bids.is_empty() && !self.asks.is_empty()
    }

    // === Validation ===

    /// Check the sort and non-crossed invariants
    ///
    /// Level prices and quantities must be positive, bids strictly
    /// descending, asks strictly ascending, and best bid below best ask.
    pub fn validate(&self) -> Result<()> {
        Self::validate_side(Side::Buy, &self.bids)?;
        Self::validate_side(Side::Sell, &self.asks)?;

        if let (Some(bid), Some(ask)) = (self.best_bid(), self.best_ask()) {
            if bid.price >= ask.price {
                return Err(BookError::Crossed {
                    best_bid: bid.price,
                    best_ask: ask.price,
                });
            }
        }
        Ok(())
    }

    fn validate_side(side: Side, levels: &[OrderBookLevel]) -> Result<()> {
        for (index, level) in levels.iter().enumerate() {
            if level.price <= Decimal::ZERO {
                return Err(BookError::NonPositivePrice {
                    side,
                    index,
                    price: level.price,
                });
            }
            if level.quantity <= Decimal::ZERO {
                return Err(BookError::NonPositiveQuantity {
                    side,
                    index,
                    quantity: level.quantity,
                });
            }
        }

        for (index, pair) in levels.windows(2).enumerate() {
            let (previous, price) = (pair[0].price, pair[1].price);
            let in_order = match side {
                Side::Buy => price < previous,
                Side::Sell => price > previous,
            };
            if !in_order {
                return Err(BookError::Unsorted {
                    side,
                    index: index + 1,
                    previous,
                    price,
                });
            }
        }
        Ok(())
    }
}
