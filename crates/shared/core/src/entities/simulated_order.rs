use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ImpactResult, OrderType, Side};
use crate::values::{Price, Quantity, Timestamp};

/// The minimal request the impact calculator evaluates
///
/// `side` and `quantity` are optional so that incomplete input maps to the
/// zeroed result instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub side: Option<Side>,
    pub order_type: OrderType,
    pub quantity: Option<Quantity>,
    /// Required for Limit orders
    pub price: Option<Price>,
}

impl OrderRequest {
    pub fn market(side: Side, quantity: Quantity) -> Self {
        Self {
            side: Some(side),
            order_type: OrderType::Market,
            quantity: Some(quantity),
            price: None,
        }
    }

    pub fn limit(side: Side, quantity: Quantity, price: Price) -> Self {
        Self {
            side: Some(side),
            order_type: OrderType::Limit,
            quantity: Some(quantity),
            price: Some(price),
        }
    }

    /// Quantity if present and strictly positive
    pub fn positive_quantity(&self) -> Option<Quantity> {
        self.quantity.filter(|q| *q > Decimal::ZERO)
    }

    /// Limit price if present and strictly positive
    pub fn positive_price(&self) -> Option<Price> {
        self.price.filter(|p| *p > Decimal::ZERO)
    }
}

/// A simulated order together with its computed impact metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatedOrder {
    pub id: String,
    pub venue: String,
    pub symbol: String,
    pub side: Side,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Only set for Limit orders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    pub quantity: Quantity,
    /// Submission delay in seconds (display only)
    #[serde(rename = "delay")]
    pub delay_secs: u64,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: Timestamp,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_fill: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_impact: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slippage: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_to_fill: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub would_sit_at_level: Option<usize>,
}

impl SimulatedOrder {
    /// Create a new order with explicit timestamp
    #[allow(clippy::too_many_arguments)]
    pub fn new_with_time(
        venue: impl Into<String>,
        symbol: impl Into<String>,
        side: Side,
        order_type: OrderType,
        quantity: Quantity,
        price: Option<Price>,
        delay_secs: u64,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id: format!("sim_{}", Uuid::new_v4().simple()),
            venue: venue.into(),
            symbol: symbol.into(),
            side,
            order_type,
            price: match order_type {
                OrderType::Limit => price,
                OrderType::Market => None,
            },
            quantity,
            delay_secs,
            timestamp,
            estimated_fill: None,
            market_impact: None,
            slippage: None,
            time_to_fill: None,
            would_sit_at_level: None,
        }
    }

    /// Create a new order using current system time
    pub fn new(
        venue: impl Into<String>,
        symbol: impl Into<String>,
        side: Side,
        order_type: OrderType,
        quantity: Quantity,
        price: Option<Price>,
        delay_secs: u64,
    ) -> Self {
        Self::new_with_time(
            venue,
            symbol,
            side,
            order_type,
            quantity,
            price,
            delay_secs,
            Utc::now(),
        )
    }

    /// The calculator input for this order
    pub fn request(&self) -> OrderRequest {
        OrderRequest {
            side: Some(self.side),
            order_type: self.order_type,
            quantity: Some(self.quantity),
            price: self.price,
        }
    }

    /// Returns a copy of this order carrying the given metrics
    pub fn with_impact(&self, impact: &ImpactResult) -> Self {
        Self {
            estimated_fill: Some(impact.estimated_fill),
            market_impact: Some(impact.market_impact),
            slippage: Some(impact.slippage),
            time_to_fill: Some(impact.time_to_fill),
            would_sit_at_level: impact.would_sit_at_level,
            ..self.clone()
        }
    }

    /// Metrics carried by this order, if it has been simulated
    pub fn impact(&self) -> Option<ImpactResult> {
        Some(ImpactResult {
            estimated_fill: self.estimated_fill?,
            market_impact: self.market_impact?,
            slippage: self.slippage?,
            time_to_fill: self.time_to_fill?,
            would_sit_at_level: self.would_sit_at_level,
        })
    }

    pub fn is_simulated(&self) -> bool {
        self.estimated_fill.is_some()
    }
}
