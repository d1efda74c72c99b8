//! Periodic snapshot refresh
//!
//! Runs one background task per book that polls the provider on a fixed
//! interval and publishes every new snapshot on a `watch` channel. The
//! provider remains the place impact calculations read from; the feed only
//! decides when it is refreshed and reports whether refreshes succeed.

use log::{debug, info, warn};
use orderlens_core::OrderBookSnapshot;
use orderlens_ports::{BookKey, MarketDataProvider, ProviderError, ProviderResult};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

use crate::config::FeedConfig;

type Latest = Option<Arc<OrderBookSnapshot>>;

/// Shared between the refresh task and its handle
struct FeedState {
    key: BookKey,
    provider: Arc<dyn MarketDataProvider>,
    tx: watch::Sender<Latest>,
    connected: AtomicBool,
    updates: AtomicU64,
    last_error: Mutex<Option<String>>,
}

impl FeedState {
    fn poll(&self) -> ProviderResult<Arc<OrderBookSnapshot>> {
        match self.provider.refresh(&self.key.venue, &self.key.symbol) {
            Ok(snapshot) => {
                self.tx.send_replace(Some(snapshot.clone()));
                self.connected.store(true, Ordering::Release);
                self.updates.fetch_add(1, Ordering::Relaxed);
                self.set_error(None);
                Ok(snapshot)
            }
            Err(e) => {
                warn!("Failed to update order book {}: {}", self.key, e);
                self.connected.store(false, Ordering::Release);
                self.set_error(Some(e.to_string()));
                Err(e)
            }
        }
    }

    fn set_error(&self, error: Option<String>) {
        let mut last = self.last_error.lock().unwrap_or_else(|e| e.into_inner());
        *last = error;
    }
}

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Spawns refresh tasks
pub struct SnapshotFeed;

impl SnapshotFeed {
    /// Start refreshing `key` at the configured interval
    pub fn from_config(
        provider: Arc<dyn MarketDataProvider>,
        key: BookKey,
        config: &FeedConfig,
    ) -> FeedHandle {
        Self::spawn(provider, key, config.refresh_interval())
    }

    /// Start refreshing `key` every `period`
    ///
    /// The first refresh happens immediately. A zero period is raised to
    /// 1 ms. Must be called from within a tokio runtime.
    pub fn spawn(
        provider: Arc<dyn MarketDataProvider>,
        key: BookKey,
        period: Duration,
    ) -> FeedHandle {
        let period = period.max(MIN_PERIOD);
        let (tx, rx) = watch::channel(None);
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let state = Arc::new(FeedState {
            key,
            provider,
            tx,
            connected: AtomicBool::new(false),
            updates: AtomicU64::new(0),
            last_error: Mutex::new(None),
        });

        info!(
            "Starting snapshot feed for {} every {:?} via {}",
            state.key,
            period,
            state.provider.name()
        );

        let task_state = state.clone();
        let task = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let _ = task_state.poll();
                    }
                    _ = shutdown_rx.changed() => {
                        debug!("Snapshot feed for {} stopping", task_state.key);
                        break;
                    }
                }
            }
        });

        FeedHandle {
            state,
            rx,
            shutdown_tx,
            task,
        }
    }
}

/// Handle to a running feed
pub struct FeedHandle {
    state: Arc<FeedState>,
    rx: watch::Receiver<Latest>,
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl FeedHandle {
    pub fn key(&self) -> &BookKey {
        &self.state.key
    }

    /// Latest published snapshot, if any refresh has succeeded
    pub fn latest(&self) -> Option<Arc<OrderBookSnapshot>> {
        self.rx.borrow().clone()
    }

    /// Latest snapshot, or `NotConnected` while the feed is failing or has
    /// not refreshed yet
    pub fn current(&self) -> ProviderResult<Arc<OrderBookSnapshot>> {
        match self.latest() {
            Some(snapshot) if self.is_connected() => Ok(snapshot),
            _ => Err(ProviderError::NotConnected {
                venue: self.state.key.venue.clone(),
                symbol: self.state.key.symbol.clone(),
            }),
        }
    }

    /// Receiver notified on every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<Latest> {
        self.rx.clone()
    }

    /// Whether the most recent refresh succeeded
    pub fn is_connected(&self) -> bool {
        self.state.connected.load(Ordering::Acquire)
    }

    /// Error from the most recent refresh, cleared on success
    pub fn last_error(&self) -> Option<String> {
        self.state
            .last_error
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Successful refreshes so far
    pub fn update_count(&self) -> u64 {
        self.state.updates.load(Ordering::Relaxed)
    }

    /// Refresh now, outside the regular schedule
    pub fn refresh(&self) -> ProviderResult<Arc<OrderBookSnapshot>> {
        self.state.poll()
    }

    /// Stop the refresh task and wait for it to exit
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(true);
        if let Err(e) = self.task.await {
            warn!("Snapshot feed for {} ended abnormally: {}", self.state.key, e);
        }
    }
}
