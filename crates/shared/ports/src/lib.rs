//! OrderLens Ports
//!
//! Port definitions (traits) for the OrderLens impact simulator.
//! These define the boundaries between the pure impact math and the
//! sources of order book data and time.

mod clock;
mod error;
mod market_data;

pub use clock::Clock;
pub use error::{ProviderError, ProviderResult};
pub use market_data::{BookKey, MarketDataProvider};
