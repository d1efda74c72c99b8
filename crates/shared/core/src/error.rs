//! Snapshot validation errors

use rust_decimal::Decimal;
use thiserror::Error;

use crate::entities::Side;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    #[error("Crossed book: best bid {best_bid} >= best ask {best_ask}")]
    Crossed { best_bid: Decimal, best_ask: Decimal },

    #[error("{side:?} levels out of order at index {index}: {previous} then {price}")]
    Unsorted {
        side: Side,
        index: usize,
        previous: Decimal,
        price: Decimal,
    },

    #[error("{side:?} level {index} has non-positive price {price}")]
    NonPositivePrice {
        side: Side,
        index: usize,
        price: Decimal,
    },

    #[error("{side:?} level {index} has non-positive quantity {quantity}")]
    NonPositiveQuantity {
        side: Side,
        index: usize,
        quantity: Decimal,
    },
}

pub type Result<T> = std::result::Result<T, BookError>;
