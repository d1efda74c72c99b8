use serde::{Deserialize, Serialize};

/// Order side (Buy or Sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Returns the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    /// Whether a limit at `limit_price` would trade against a resting level at `level_price`
    pub fn crosses(&self, limit_price: crate::Price, level_price: crate::Price) -> bool {
        match self {
            Side::Buy => limit_price >= level_price,
            Side::Sell => limit_price <= level_price,
        }
    }
}
