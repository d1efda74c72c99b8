//! Order entry form
//!
//! Raw user input for a simulation. Price and quantity arrive as text and
//! are parsed when the form is turned into a [`SimulatedOrder`].

use orderlens_core::{OrderType, Price, Quantity, Side, SimulatedOrder, Venue};
use orderlens_ports::Clock;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Result, SessionError};

/// Symbols offered by the form
pub const SYMBOLS: [&str; 4] = ["BTC-USD", "ETH-USD", "BTC-USDT", "ETH-USDT"];

/// Preset submission delays in seconds (0 = immediate)
pub const DELAY_OPTIONS: [u64; 4] = [0, 5, 10, 30];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderForm {
    pub venue: String,
    pub symbol: String,
    pub order_type: OrderType,
    pub side: Side,
    /// Ignored for market orders
    pub price: String,
    pub quantity: String,
    pub delay_secs: u64,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self {
            venue: Venue::Okx.to_string(),
            symbol: SYMBOLS[0].to_string(),
            order_type: OrderType::Limit,
            side: Side::Buy,
            price: String::new(),
            quantity: String::new(),
            delay_secs: 0,
        }
    }
}

impl OrderForm {
    /// Builder: market order
    pub fn market(venue: Venue, symbol: &str, side: Side, quantity: &str) -> Self {
        Self {
            venue: venue.to_string(),
            symbol: symbol.to_string(),
            order_type: OrderType::Market,
            side,
            quantity: quantity.to_string(),
            ..Default::default()
        }
    }

    /// Builder: limit order
    pub fn limit(venue: Venue, symbol: &str, side: Side, quantity: &str, price: &str) -> Self {
        Self {
            venue: venue.to_string(),
            symbol: symbol.to_string(),
            order_type: OrderType::Limit,
            side,
            price: price.to_string(),
            quantity: quantity.to_string(),
            ..Default::default()
        }
    }

    /// Builder: set delay
    pub fn with_delay(mut self, delay_secs: u64) -> Self {
        self.delay_secs = delay_secs;
        self
    }

    /// Whether the form has everything needed to submit
    pub fn is_complete(&self) -> bool {
        !self.quantity.trim().is_empty()
            && (self.order_type == OrderType::Market || !self.price.trim().is_empty())
    }

    /// Parse the form into an order stamped by `clock`
    pub fn to_order(&self, clock: &dyn Clock) -> Result<SimulatedOrder> {
        if !self.is_complete() {
            return Err(SessionError::InvalidForm(
                "quantity is required, and price for limit orders".to_string(),
            ));
        }
        let venue = Venue::from_str(&self.venue)
            .map_err(|e| SessionError::InvalidForm(e.to_string()))?;
        if self.symbol.trim().is_empty() {
            return Err(SessionError::InvalidForm("symbol is required".to_string()));
        }

        let quantity: Quantity = parse_positive("quantity", &self.quantity)?;
        let price: Option<Price> = match self.order_type {
            OrderType::Limit => Some(parse_positive("price", &self.price)?),
            OrderType::Market => None,
        };

        Ok(SimulatedOrder::new_with_time(
            venue.as_str(),
            self.symbol.trim(),
            self.side,
            self.order_type,
            quantity,
            price,
            self.delay_secs,
            clock.now(),
        ))
    }
}

fn parse_positive(field: &str, raw: &str) -> Result<Decimal> {
    let value = Decimal::from_str(raw.trim())
        .map_err(|e| SessionError::InvalidForm(format!("{} '{}': {}", field, raw, e)))?;
    if value <= Decimal::ZERO {
        return Err(SessionError::InvalidForm(format!(
            "{} must be positive, got {}",
            field, value
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use orderlens_clock::FixedClock;
    use rust_decimal_macros::dec;

    fn clock() -> FixedClock {
        FixedClock::new(Utc.timestamp_millis_opt(1_700_000_000_000).unwrap())
    }

    #[test]
    fn test_default_form_is_incomplete() {
        let form = OrderForm::default();
        assert!(!form.is_complete());
        assert!(matches!(
            form.to_order(&clock()),
            Err(SessionError::InvalidForm(_))
        ));
    }

    #[test]
    fn test_market_form_needs_no_price() {
        let form = OrderForm::market(Venue::Bybit, "ETH-USD", Side::Sell, "2.5");
        assert!(form.is_complete());

        let order = form.to_order(&clock()).unwrap();
        assert_eq!(order.venue, "Bybit");
        assert_eq!(order.quantity, dec!(2.5));
        assert_eq!(order.price, None);
        assert_eq!(order.timestamp.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn test_limit_form_parses_price() {
        let form = OrderForm::limit(Venue::Okx, "BTC-USD", Side::Buy, " 0.5 ", "42000.25")
            .with_delay(DELAY_OPTIONS[2]);

        let order = form.to_order(&clock()).unwrap();
        assert_eq!(order.order_type, OrderType::Limit);
        assert_eq!(order.price, Some(dec!(42000.25)));
        assert_eq!(order.quantity, dec!(0.5));
        assert_eq!(order.delay_secs, 10);
    }

    #[test]
    fn test_limit_form_without_price_incomplete() {
        let form = OrderForm::limit(Venue::Okx, "BTC-USD", Side::Buy, "1", "  ");
        assert!(!form.is_complete());
    }

    #[test]
    fn test_rejects_bad_numbers() {
        let c = clock();
        for quantity in ["abc", "0", "-1"] {
            let form = OrderForm::market(Venue::Okx, "BTC-USD", Side::Buy, quantity);
            assert!(matches!(form.to_order(&c), Err(SessionError::InvalidForm(_))));
        }

        let form = OrderForm::limit(Venue::Okx, "BTC-USD", Side::Buy, "1", "-42000");
        assert!(matches!(form.to_order(&c), Err(SessionError::InvalidForm(_))));
    }

    #[test]
    fn test_rejects_unknown_venue() {
        let form = OrderForm {
            venue: "Binance".to_string(),
            ..OrderForm::market(Venue::Okx, "BTC-USD", Side::Buy, "1")
        };
        let err = form.to_order(&clock()).unwrap_err();
        assert!(err.to_string().contains("Unknown venue"));
    }
}
