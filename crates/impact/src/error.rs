//! Impact simulation errors

use orderlens_core::BookError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum ImpactError {
    #[error("Invalid order request: {0}")]
    InvalidRequest(String),

    #[error("Malformed order book: {0}")]
    MalformedBook(#[from] BookError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, ImpactError>;
