//! Session errors

use orderlens_impact::ImpactError;
use orderlens_ports::ProviderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid order form: {0}")]
    InvalidForm(String),

    #[error("Market data unavailable: {0}")]
    MarketData(#[from] ProviderError),

    #[error("Impact calculation rejected input: {0}")]
    Impact(#[from] ImpactError),

    #[error("Failed to parse config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SessionError>;
