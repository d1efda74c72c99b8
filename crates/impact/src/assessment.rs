//! Grading of simulation results for display
//!
//! Turns raw percentages into severity bands and the warnings a user
//! should see before sending the order.

use orderlens_core::{ImpactResult, OrderType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::SeverityThresholds;

/// Band for impact or slippage percentages
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactSeverity {
    Low,
    Medium,
    High,
}

impl ImpactSeverity {
    pub fn classify(pct: Decimal, thresholds: &SeverityThresholds) -> Self {
        if pct < thresholds.medium_impact_pct {
            ImpactSeverity::Low
        } else if pct < thresholds.high_impact_pct {
            ImpactSeverity::Medium
        } else {
            ImpactSeverity::High
        }
    }
}

/// Band for estimated time to fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillSpeed {
    Fast,
    Moderate,
    Slow,
}

impl FillSpeed {
    pub fn classify(secs: Decimal, thresholds: &SeverityThresholds) -> Self {
        if secs < thresholds.moderate_time_secs {
            FillSpeed::Fast
        } else if secs < thresholds.slow_time_secs {
            FillSpeed::Moderate
        } else {
            FillSpeed::Slow
        }
    }
}

/// Warnings attached to a simulated order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactWarning {
    /// Impact above the high band
    HighMarketImpact,
    /// Market order could not be filled from visible depth
    LiquidityExhausted,
    /// Shown for every market order
    MarketOrderNotice,
}

impl fmt::Display for ImpactWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ImpactWarning::HighMarketImpact => {
                "This order may significantly impact the market price. Consider splitting into smaller orders."
            }
            ImpactWarning::LiquidityExhausted => {
                "Order size exceeds visible liquidity; only part of it is expected to fill."
            }
            ImpactWarning::MarketOrderNotice => {
                "Market orders execute immediately but may result in higher slippage during volatile periods."
            }
        };
        f.write_str(msg)
    }
}

/// Display-ready grading of one [`ImpactResult`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactAssessment {
    pub impact_severity: ImpactSeverity,
    pub slippage_severity: ImpactSeverity,
    pub fill_speed: FillSpeed,
    pub warnings: Vec<ImpactWarning>,
}

impl ImpactAssessment {
    pub fn assess(
        order_type: OrderType,
        result: &ImpactResult,
        thresholds: &SeverityThresholds,
    ) -> Self {
        let mut warnings = Vec::new();

        if result.market_impact > thresholds.high_impact_pct {
            warnings.push(ImpactWarning::HighMarketImpact);
        }
        if order_type == OrderType::Market {
            if result.is_partial() {
                warnings.push(ImpactWarning::LiquidityExhausted);
            }
            warnings.push(ImpactWarning::MarketOrderNotice);
        }

        Self {
            impact_severity: ImpactSeverity::classify(result.market_impact, thresholds),
            slippage_severity: ImpactSeverity::classify(result.slippage, thresholds),
            fill_speed: FillSpeed::classify(result.time_to_fill, thresholds),
            warnings,
        }
    }

    pub fn has_warning(&self, warning: ImpactWarning) -> bool {
        self.warnings.contains(&warning)
    }
}
