use thiserror::Error;

/// Errors raised by market data providers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("No order book for {symbol} on {venue}")]
    UnknownBook { venue: String, symbol: String },

    #[error("Feed for {symbol} on {venue} is not connected")]
    NotConnected { venue: String, symbol: String },

    #[error("Failed to update order book: {0}")]
    UpdateFailed(String),
}

pub type ProviderResult<T> = std::result::Result<T, ProviderError>;
