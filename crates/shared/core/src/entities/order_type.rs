use serde::{Deserialize, Serialize};

/// Order types the simulator can evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Sweep the opposing book until filled or exhausted
    Market,
    /// Execute at specified price or better, otherwise rest in the book
    Limit,
}

impl OrderType {
    pub fn requires_price(&self) -> bool {
        matches!(self, OrderType::Limit)
    }
}
