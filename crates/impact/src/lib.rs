//! OrderLens Impact Simulation
//!
//! Estimates what a single order would do to a limit order book snapshot:
//! - **Estimated fill**: percent of the quantity expected to execute
//! - **Market impact**: displacement of the execution price from the
//!   pre-trade top of book
//! - **Slippage**: how much worse than that price the order trades
//! - **Time to fill**: heuristic seconds until complete
//! - **Queue position**: for limit orders, where in the opposing book the
//!   order lands
//!
//! ## Architecture
//!
//! ```text
//! OrderRequest + OrderBookSnapshot
//!              │
//!              ▼
//!   ┌─────────────────────┐
//!   │  ImpactCalculator   │  picks opposing side + baseline,
//!   └─────────┬───────────┘  short-circuits degenerate input
//!             │
//!     ┌───────┴────────┐
//!     ▼                ▼
//! ┌─────────┐    ┌───────────┐
//! │ Market  │    │  Limit    │
//! │ walk    │    │  queue    │
//! └────┬────┘    └─────┬─────┘
//!      └───────┬───────┘
//!              ▼
//!       RoundingPolicy ──► ImpactResult ──► ImpactAssessment
//! ```
//!
//! Every call is a pure function of its inputs: no state is kept between
//! calls, and the snapshot is only borrowed for the duration of the call.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use orderlens_core::{OrderRequest, Side};
//! use orderlens_impact::ImpactCalculator;
//!
//! let calculator = ImpactCalculator::default();
//! let result = calculator.compute(&OrderRequest::market(Side::Buy, dec!(2)), &book);
//! println!("fill {}% impact {}%", result.estimated_fill, result.market_impact);
//! ```

pub mod assessment;
pub mod calculator;
pub mod config;
pub mod error;
pub mod limit;
pub mod market;
pub mod rounding;

// Re-export main types
pub use assessment::{FillSpeed, ImpactAssessment, ImpactSeverity, ImpactWarning};
pub use calculator::{ImpactCalculator, compute_impact};
pub use config::{
    ConfigError, ImpactConfig, LimitModelConfig, MarketModelConfig, SeverityThresholds,
};
pub use error::{ImpactError, Result};
pub use limit::{LimitOrderSimulator, QueuePosition};
pub use market::{MarketOrderSimulator, MarketWalk};
pub use rounding::RoundingPolicy;
