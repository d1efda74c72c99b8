//! Snapshot cache backed by the mock generator

use dashmap::DashMap;
use log::{debug, info};
use orderlens_core::{OrderBookSnapshot, Venue};
use orderlens_ports::{BookKey, Clock, MarketDataProvider, ProviderError, ProviderResult};
use std::sync::{Arc, Mutex};

use crate::config::FeedConfig;
use crate::generator::MockOrderBookGenerator;

/// Market data provider serving generated books
///
/// Holds the latest snapshot per book. `refresh` generates a new snapshot
/// and swaps the `Arc` in one insert, so a reader that already holds the
/// previous snapshot keeps a consistent view.
pub struct MockMarketDataProvider {
    books: DashMap<BookKey, Arc<OrderBookSnapshot>>,
    generator: Mutex<MockOrderBookGenerator>,
}

impl MockMarketDataProvider {
    pub fn new(config: FeedConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            books: DashMap::new(),
            generator: Mutex::new(MockOrderBookGenerator::new(config, clock)),
        }
    }

    /// Create a provider with one book per venue/symbol pair already generated
    pub fn with_books(
        config: FeedConfig,
        clock: Arc<dyn Clock>,
        venues: &[Venue],
        symbols: &[&str],
    ) -> ProviderResult<Self> {
        let provider = Self::new(config, clock);
        for venue in venues {
            for symbol in symbols {
                provider.regenerate(venue.as_str(), symbol)?;
            }
        }
        info!(
            "Mock provider ready with {} books ({} venues x {} symbols)",
            provider.books.len(),
            venues.len(),
            symbols.len()
        );
        Ok(provider)
    }

    /// Replace a book with an externally produced snapshot (e.g. a replay)
    pub fn publish(&self, snapshot: OrderBookSnapshot) -> Arc<OrderBookSnapshot> {
        let key = BookKey::new(snapshot.venue.clone(), snapshot.symbol.clone());
        let snapshot = Arc::new(snapshot);
        self.books.insert(key, snapshot.clone());
        snapshot
    }

    /// Books currently held
    pub fn keys(&self) -> Vec<BookKey> {
        self.books.iter().map(|entry| entry.key().clone()).collect()
    }

    fn regenerate(&self, venue: &str, symbol: &str) -> ProviderResult<Arc<OrderBookSnapshot>> {
        let snapshot = {
            let mut generator = self
                .generator
                .lock()
                .map_err(|e| ProviderError::UpdateFailed(e.to_string()))?;
            generator.generate(venue, symbol)
        };
        debug!(
            "Generated {}:{} with {} bids / {} asks",
            venue,
            symbol,
            snapshot.bids.len(),
            snapshot.asks.len()
        );
        Ok(self.publish(snapshot))
    }
}

impl MarketDataProvider for MockMarketDataProvider {
    fn snapshot(&self, venue: &str, symbol: &str) -> ProviderResult<Arc<OrderBookSnapshot>> {
        self.books
            .get(&BookKey::new(venue, symbol))
            .map(|entry| entry.value().clone())
            .ok_or_else(|| ProviderError::UnknownBook {
                venue: venue.to_string(),
                symbol: symbol.to_string(),
            })
    }

    fn refresh(&self, venue: &str, symbol: &str) -> ProviderResult<Arc<OrderBookSnapshot>> {
        self.regenerate(venue, symbol)
    }

    fn name(&self) -> &str {
        "MockMarketDataProvider"
    }
}
