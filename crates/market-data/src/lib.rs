//! OrderLens Market Data
//!
//! Sources of order book snapshots for the impact simulator:
//!
//! - **Generator**: random but well-formed books around a per-symbol base price
//! - **Provider**: caches the latest snapshot per (venue, symbol) and swaps it
//!   atomically on refresh
//! - **Feed**: a background task that refreshes one book on a fixed interval
//!   and publishes each new snapshot to subscribers
//!
//! ## Architecture
//!
//! ```text
//!  ┌────────────────────┐   refresh()   ┌──────────────────────────┐
//!  │   SnapshotFeed     │──────────────►│ MockMarketDataProvider   │
//!  │  (tokio interval)  │               │  DashMap<BookKey, Arc<>> │
//!  └─────────┬──────────┘               └────────────┬─────────────┘
//!            │ watch::Sender<Arc<Snapshot>>          │ snapshot()
//!            ▼                                       ▼
//!       subscribers                        impact calculation
//! ```
//!
//! A snapshot is never modified after it is published. Readers either see
//! the previous `Arc` or the next one, never a half-written book.

pub mod config;
pub mod feed;
pub mod generator;
pub mod provider;

// Re-export main types
pub use config::{ConfigError, FeedConfig};
pub use feed::{FeedHandle, SnapshotFeed};
pub use generator::MockOrderBookGenerator;
pub use provider::MockMarketDataProvider;
