use std::fmt;
use std::sync::Arc;

use orderlens_core::OrderBookSnapshot;

use crate::error::ProviderResult;

/// Identifies one book: a symbol on a venue
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookKey {
    pub venue: String,
    pub symbol: String,
}

impl BookKey {
    pub fn new(venue: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            venue: venue.into(),
            symbol: symbol.into(),
        }
    }
}

impl fmt::Display for BookKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.venue, self.symbol)
    }
}

/// Port for order book data
///
/// Implementations may generate books, replay files, or track a live feed.
/// Every call hands out a complete snapshot behind an `Arc`; a provider
/// replaces its snapshot wholesale and never mutates one that has been
/// handed out, so a caller holding the `Arc` always sees a consistent book.
pub trait MarketDataProvider: Send + Sync {
    /// Latest snapshot for the given book
    fn snapshot(&self, venue: &str, symbol: &str) -> ProviderResult<Arc<OrderBookSnapshot>>;

    /// Pull a fresh snapshot from the source and make it the latest
    ///
    /// Sources that are pushed to rather than polled can keep the default,
    /// which just returns the current snapshot.
    fn refresh(&self, venue: &str, symbol: &str) -> ProviderResult<Arc<OrderBookSnapshot>> {
        self.snapshot(venue, symbol)
    }

    /// Whether the provider currently has a live view of the book
    fn is_connected(&self, venue: &str, symbol: &str) -> bool {
        self.snapshot(venue, symbol).is_ok()
    }

    /// Get the provider's name/identifier for debugging
    fn name(&self) -> &str {
        "MarketDataProvider"
    }
}
