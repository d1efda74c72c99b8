//! OrderLens Clock Infrastructure
//!
//! Time sources for stamping order book snapshots and simulated orders:
//!
//! - [`SystemClock`]: wall-clock time
//! - [`FixedClock`]: frozen time that only moves when told to, for
//!   deterministic tests and replays
//!
//! ## Usage
//!
//! ```ignore
//! use orderlens_clock::{Clock, FixedClock};
//! use chrono::{Duration, TimeZone, Utc};
//!
//! let clock = FixedClock::new(Utc.timestamp_millis_opt(0).unwrap());
//! clock.advance(Duration::milliseconds(500));
//! assert_eq!(clock.now().timestamp_millis(), 500);
//! ```

mod fixed;
mod system;

pub use fixed::FixedClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use orderlens_ports::Clock;
