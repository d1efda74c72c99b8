//! OrderLens Core Domain
//!
//! Pure domain types for the OrderLens impact simulator.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod book;
pub mod entities;
pub mod error;
pub mod values;

// Re-export commonly used types at crate root
pub use book::{OrderBookLevel, OrderBookSnapshot};
pub use entities::{
    ImpactResult, OrderRequest, OrderType, ParseVenueError, Side, SimulatedOrder, Venue,
};
pub use error::{BookError, Result};
pub use values::{Price, Quantity, Symbol, Timestamp};
