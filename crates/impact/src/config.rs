//! Model parameters
//!
//! Every constant of the market and limit models lives here so that the
//! heuristics can be tuned from a JSON file. The defaults reproduce the
//! reference behaviour exactly.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Root configuration for impact simulation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImpactConfig {
    #[serde(default)]
    pub market: MarketModelConfig,
    #[serde(default)]
    pub limit: LimitModelConfig,
    #[serde(default)]
    pub severity: SeverityThresholds,
}

impl ImpactConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Time heuristic for aggressive orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketModelConfig {
    /// Seconds charged per consumed level
    #[serde(default = "default_market_seconds_per_level")]
    pub seconds_per_level: Decimal,
    /// Cap on estimated time to fill
    #[serde(default = "default_market_max_time")]
    pub max_time_to_fill_secs: Decimal,
}

fn default_market_seconds_per_level() -> Decimal {
    dec!(0.1)
}

fn default_market_max_time() -> Decimal {
    dec!(5.0)
}

impl Default for MarketModelConfig {
    fn default() -> Self {
        Self {
            seconds_per_level: default_market_seconds_per_level(),
            max_time_to_fill_secs: default_market_max_time(),
        }
    }
}

/// Queue-position policy for passive orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitModelConfig {
    /// Fill assumed when the order crosses on arrival
    #[serde(default = "default_immediate_fill")]
    pub immediate_fill_pct: Decimal,
    /// Fill lost per level of queue depth
    #[serde(default = "default_fill_decay")]
    pub fill_decay_per_level_pct: Decimal,
    /// Floor for the decayed fill
    #[serde(default = "default_min_fill")]
    pub min_fill_pct: Decimal,
    #[serde(default = "default_immediate_impact")]
    pub immediate_impact_pct: Decimal,
    #[serde(default = "default_immediate_slippage")]
    pub immediate_slippage_pct: Decimal,
    #[serde(default = "default_immediate_time")]
    pub immediate_time_secs: Decimal,
    /// Seconds of queueing per level of depth
    #[serde(default = "default_limit_seconds_per_level")]
    pub seconds_per_level: Decimal,
    #[serde(default = "default_limit_max_time")]
    pub max_time_to_fill_secs: Decimal,
}

fn default_immediate_fill() -> Decimal {
    dec!(100)
}

fn default_fill_decay() -> Decimal {
    dec!(10)
}

fn default_min_fill() -> Decimal {
    dec!(20)
}

fn default_immediate_impact() -> Decimal {
    dec!(0.05)
}

fn default_immediate_slippage() -> Decimal {
    dec!(0.02)
}

fn default_immediate_time() -> Decimal {
    dec!(0.1)
}

fn default_limit_seconds_per_level() -> Decimal {
    dec!(2)
}

fn default_limit_max_time() -> Decimal {
    dec!(30)
}

impl Default for LimitModelConfig {
    fn default() -> Self {
        Self {
            immediate_fill_pct: default_immediate_fill(),
            fill_decay_per_level_pct: default_fill_decay(),
            min_fill_pct: default_min_fill(),
            immediate_impact_pct: default_immediate_impact(),
            immediate_slippage_pct: default_immediate_slippage(),
            immediate_time_secs: default_immediate_time(),
            seconds_per_level: default_limit_seconds_per_level(),
            max_time_to_fill_secs: default_limit_max_time(),
        }
    }
}

/// Bands used to grade impact, slippage and time to fill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityThresholds {
    /// Impact/slippage at or above this is Medium
    #[serde(default = "default_medium_impact")]
    pub medium_impact_pct: Decimal,
    /// Impact/slippage at or above this is High; strictly above raises a warning
    #[serde(default = "default_high_impact")]
    pub high_impact_pct: Decimal,
    #[serde(default = "default_moderate_time")]
    pub moderate_time_secs: Decimal,
    #[serde(default = "default_slow_time")]
    pub slow_time_secs: Decimal,
}

fn default_medium_impact() -> Decimal {
    dec!(0.1)
}

fn default_high_impact() -> Decimal {
    dec!(0.5)
}

fn default_moderate_time() -> Decimal {
    dec!(1)
}

fn default_slow_time() -> Decimal {
    dec!(10)
}

impl Default for SeverityThresholds {
    fn default() -> Self {
        Self {
            medium_impact_pct: default_medium_impact(),
            high_impact_pct: default_high_impact(),
            moderate_time_secs: default_moderate_time(),
            slow_time_secs: default_slow_time(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),
}
