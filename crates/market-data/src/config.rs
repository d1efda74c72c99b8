//! Configuration for mock books and the refresh feed

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Mock book shape and refresh cadence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Milliseconds between refreshes
    #[serde(default = "default_refresh_interval_ms")]
    pub refresh_interval_ms: u64,
    /// Levels generated per side
    #[serde(default = "default_levels")]
    pub levels: usize,
    /// Distance between levels as a fraction of the base price
    #[serde(default = "default_price_step_ratio")]
    pub price_step_ratio: Decimal,
    /// Smallest resting quantity
    #[serde(default = "default_min_quantity")]
    pub min_quantity: Decimal,
    /// Random quantity added on top of `min_quantity`
    #[serde(default = "default_quantity_range")]
    pub quantity_range: Decimal,
    /// Fixed seed for reproducible books
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_refresh_interval_ms() -> u64 {
    500
}

fn default_levels() -> usize {
    15
}

fn default_price_step_ratio() -> Decimal {
    dec!(0.0001)
}

fn default_min_quantity() -> Decimal {
    dec!(0.1)
}

fn default_quantity_range() -> Decimal {
    dec!(10)
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: default_refresh_interval_ms(),
            levels: default_levels(),
            price_step_ratio: default_price_step_ratio(),
            min_quantity: default_min_quantity(),
            quantity_range: default_quantity_range(),
            seed: None,
        }
    }
}

impl FeedConfig {
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

    /// Builder: fix the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms.max(1))
    }
}

/// Configuration errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),
}
