//! Order simulation session
//!
//! ```text
//! OrderForm ──parse──► SimulatedOrder
//!                          │
//!        MarketDataProvider::snapshot(venue, symbol)
//!                          │
//!                 ImpactCalculator::compute
//!                          │
//!                 ImpactAssessment::assess ──► SimulationReport
//! ```

pub mod error;
pub mod form;
pub mod session;

pub use error::{Result, SessionError};
pub use form::{DELAY_OPTIONS, OrderForm, SYMBOLS};
pub use session::{SessionConfig, SimulationReport, SimulationSession};
