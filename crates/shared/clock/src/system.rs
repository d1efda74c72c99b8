use chrono::Utc;
use orderlens_core::Timestamp;
use orderlens_ports::Clock;
use std::sync::Arc;

/// Wall-clock time source used outside of tests
///
/// Stamps generated snapshots and submitted orders with `Utc::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Shared handle for services that take `Arc<dyn Clock>`
    pub fn shared() -> Arc<dyn Clock> {
        Arc::new(SystemClock)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}
