//! Output precision
//!
//! Simulators compute at full decimal precision; rounding is applied once,
//! when a result leaves a simulator.

use orderlens_core::ImpactResult;
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places applied to each metric of an [`ImpactResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundingPolicy;

impl RoundingPolicy {
    /// Estimated fill percent
    pub const FILL_DP: u32 = 2;
    /// Market impact and slippage percent
    pub const IMPACT_DP: u32 = 4;
    /// Time to fill in seconds
    pub const TIME_DP: u32 = 1;

    /// Round every metric to its documented precision
    pub fn apply(&self, raw: ImpactResult) -> ImpactResult {
        ImpactResult {
            estimated_fill: round(raw.estimated_fill, Self::FILL_DP),
            market_impact: round(raw.market_impact, Self::IMPACT_DP),
            slippage: round(raw.slippage, Self::IMPACT_DP),
            time_to_fill: round(raw.time_to_fill, Self::TIME_DP),
            would_sit_at_level: raw.would_sit_at_level,
        }
    }
}

fn round(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_apply_rounds_each_field() {
        let raw = ImpactResult {
            estimated_fill: dec!(66.666666),
            market_impact: dec!(1.0101010101),
            slippage: dec!(0.00005),
            time_to_fill: dec!(0.25),
            would_sit_at_level: Some(2),
        };

        let rounded = RoundingPolicy.apply(raw);

        assert_eq!(rounded.estimated_fill, dec!(66.67));
        assert_eq!(rounded.market_impact, dec!(1.0101));
        assert_eq!(rounded.slippage, dec!(0.0001));
        assert_eq!(rounded.time_to_fill, dec!(0.3));
        assert_eq!(rounded.would_sit_at_level, Some(2));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let raw = ImpactResult {
            estimated_fill: dec!(12.345),
            market_impact: dec!(0.123456),
            slippage: dec!(0.123456),
            time_to_fill: dec!(4.95),
            would_sit_at_level: None,
        };

        let once = RoundingPolicy.apply(raw);
        assert_eq!(RoundingPolicy.apply(once), once);
    }
}
