//! Simulation session
//!
//! Ties the pieces together: an [`OrderForm`] is parsed, the current
//! snapshot for its book is fetched from the provider, the calculator runs,
//! and the result is graded and remembered as the session's last report.

use log::{debug, info, warn};
use orderlens_clock::SystemClock;
use orderlens_core::{Price, SimulatedOrder, Timestamp};
use orderlens_impact::{ImpactAssessment, ImpactCalculator, ImpactConfig};
use orderlens_ports::{Clock, MarketDataProvider};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::error::{Result, SessionError};
use crate::form::OrderForm;

/// Session configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub impact: ImpactConfig,
    /// Reject malformed input and books instead of returning zeroed metrics
    pub strict_validation: bool,
}

impl SessionConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| SessionError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SessionError::Config(e.to_string()))
    }
}

/// Outcome of one simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationReport {
    /// The order with its impact metrics merged in
    pub order: SimulatedOrder,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub snapshot_timestamp: Timestamp,
    pub best_bid: Option<Price>,
    pub best_ask: Option<Price>,
    pub spread: Option<Price>,
    pub spread_pct: Option<Decimal>,
    pub assessment: ImpactAssessment,
}

pub struct SimulationSession {
    provider: Arc<dyn MarketDataProvider>,
    calculator: ImpactCalculator,
    config: SessionConfig,
    clock: Arc<dyn Clock>,
    last: Mutex<Option<SimulationReport>>,
}

impl SimulationSession {
    pub fn new(
        provider: Arc<dyn MarketDataProvider>,
        clock: Arc<dyn Clock>,
        config: SessionConfig,
    ) -> Self {
        info!(
            "Simulation session on {} (clock: {}, strict: {})",
            provider.name(),
            clock.name(),
            config.strict_validation
        );
        Self {
            provider,
            calculator: ImpactCalculator::new(&config.impact),
            config,
            clock,
            last: Mutex::new(None),
        }
    }

    /// Session stamping orders with wall-clock time
    pub fn with_system_clock(provider: Arc<dyn MarketDataProvider>, config: SessionConfig) -> Self {
        Self::new(provider, SystemClock::shared(), config)
    }

    /// Parse the form and simulate the resulting order
    pub fn simulate(&self, form: &OrderForm) -> Result<SimulationReport> {
        let order = form.to_order(self.clock.as_ref())?;
        self.simulate_order(&order)
    }

    /// Simulate an already built order against the current snapshot
    pub fn simulate_order(&self, order: &SimulatedOrder) -> Result<SimulationReport> {
        let snapshot = self.provider.snapshot(&order.venue, &order.symbol)?;
        let request = order.request();

        let impact = if self.config.strict_validation {
            self.calculator.compute_checked(&request, &snapshot)?
        } else {
            self.calculator.compute(&request, &snapshot)
        };
        debug!("Order {} on {}:{} -> {:?}", order.id, order.venue, order.symbol, impact);

        let assessment =
            ImpactAssessment::assess(order.order_type, &impact, &self.config.impact.severity);
        if !assessment.warnings.is_empty() {
            warn!(
                "Order {} raised {} warning(s): {:?}",
                order.id,
                assessment.warnings.len(),
                assessment.warnings
            );
        }

        let report = SimulationReport {
            order: order.with_impact(&impact),
            snapshot_timestamp: snapshot.timestamp,
            best_bid: snapshot.best_bid().map(|level| level.price),
            best_ask: snapshot.best_ask().map(|level| level.price),
            spread: snapshot.spread(),
            spread_pct: snapshot.spread_pct(),
            assessment,
        };

        *self.last.lock().unwrap_or_else(|e| e.into_inner()) = Some(report.clone());
        Ok(report)
    }

    /// Report from the most recent successful simulation
    pub fn last_report(&self) -> Option<SimulationReport> {
        self.last.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}
