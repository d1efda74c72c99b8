use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome of a single impact calculation
///
/// All percentages are on a 0-100 scale. `would_sit_at_level` is only set
/// for limit orders evaluated against a non-empty opposing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactResult {
    /// Percent of the requested quantity expected to fill
    pub estimated_fill: Decimal,
    /// Percent displacement from the pre-trade baseline price
    pub market_impact: Decimal,
    /// Percent slippage against the baseline
    pub slippage: Decimal,
    /// Heuristic seconds until complete
    pub time_to_fill: Decimal,
    /// Index of the first crossed opposing level, or book depth if none crossed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub would_sit_at_level: Option<usize>,
}

impl ImpactResult {
    /// Result for "nothing to simulate"
    pub fn zero() -> Self {
        Self {
            estimated_fill: Decimal::ZERO,
            market_impact: Decimal::ZERO,
            slippage: Decimal::ZERO,
            time_to_fill: Decimal::ZERO,
            would_sit_at_level: None,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// True when less than the full quantity is expected to fill
    pub fn is_partial(&self) -> bool {
        self.estimated_fill < Decimal::ONE_HUNDRED
    }

    /// Limit order crosses the book on arrival
    pub fn executes_immediately(&self) -> bool {
        self.would_sit_at_level == Some(0)
    }
}

impl Default for ImpactResult {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zero_result() {
        let result = ImpactResult::zero();
        assert!(result.is_zero());
        assert!(result.is_partial());
        assert!(!result.executes_immediately());
    }

    #[test]
    fn test_serialized_shape() {
        let result = ImpactResult {
            estimated_fill: dec!(70),
            market_impact: dec!(0),
            slippage: dec!(0),
            time_to_fill: dec!(6.0),
            would_sit_at_level: Some(3),
        };
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["estimatedFill"], "70");
        assert_eq!(json["wouldSitAtLevel"], 3);

        let json = serde_json::to_value(ImpactResult::zero()).unwrap();
        assert!(json.get("wouldSitAtLevel").is_none());
    }
}
