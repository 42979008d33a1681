//! Tier partition of worked minutes.
//!
//! Worked minutes fill the regular tier first, then the first overtime tier
//! up to its span, and whatever remains lands in the unbounded second tier.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ThresholdConfig;

/// Worked minutes split across the three pay tiers.
///
/// The three parts always add up to the partitioned total exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierBreakdown {
    /// Minutes up to the regular threshold.
    pub regular_minutes: Decimal,
    /// Minutes in the first overtime tier.
    pub overtime_minutes_1: Decimal,
    /// Minutes beyond the first overtime tier.
    pub overtime_minutes_2: Decimal,
}

impl TierBreakdown {
    /// Returns the sum of all three tiers.
    pub fn total_minutes(&self) -> Decimal {
        self.regular_minutes + self.overtime_minutes_1 + self.overtime_minutes_2
    }
}

/// Splits worked minutes into regular and overtime tiers.
///
/// Tier boundaries are inclusive on the lower tier: exactly reaching a
/// threshold leaves the next tier at zero.
///
/// # Examples
///
/// ## Shift at the regular threshold
///
/// ```
/// use shift_earnings::calculation::partition_minutes;
/// use shift_earnings::config::ThresholdConfig;
/// use rust_decimal::Decimal;
///
/// let tiers = partition_minutes(Decimal::new(480, 0), &ThresholdConfig::default());
///
/// assert_eq!(tiers.regular_minutes, Decimal::new(480, 0));
/// assert_eq!(tiers.overtime_minutes_1, Decimal::ZERO);
/// assert_eq!(tiers.overtime_minutes_2, Decimal::ZERO);
/// ```
///
/// ## Shift reaching the second tier
///
/// ```
/// use shift_earnings::calculation::partition_minutes;
/// use shift_earnings::config::ThresholdConfig;
/// use rust_decimal::Decimal;
///
/// let tiers = partition_minutes(Decimal::new(780, 0), &ThresholdConfig::default());
///
/// assert_eq!(tiers.regular_minutes, Decimal::new(480, 0));
/// assert_eq!(tiers.overtime_minutes_1, Decimal::new(120, 0));
/// assert_eq!(tiers.overtime_minutes_2, Decimal::new(180, 0));
/// ```
pub fn partition_minutes(total_minutes: Decimal, thresholds: &ThresholdConfig) -> TierBreakdown {
    let regular_minutes = total_minutes.min(thresholds.regular_threshold_minutes());
    let remaining = total_minutes - regular_minutes;

    let overtime_minutes_1 = remaining.min(thresholds.overtime_tier1_minutes());
    let overtime_minutes_2 = remaining - overtime_minutes_1;

    TierBreakdown {
        regular_minutes,
        overtime_minutes_1,
        overtime_minutes_2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn defaults() -> ThresholdConfig {
        ThresholdConfig::default()
    }

    #[test]
    fn test_under_regular_threshold() {
        let tiers = partition_minutes(dec("360"), &defaults());
        assert_eq!(tiers.regular_minutes, dec("360"));
        assert_eq!(tiers.overtime_minutes_1, dec("0"));
        assert_eq!(tiers.overtime_minutes_2, dec("0"));
    }

    #[test]
    fn test_exactly_regular_threshold() {
        let tiers = partition_minutes(dec("480"), &defaults());
        assert_eq!(tiers.regular_minutes, dec("480"));
        assert_eq!(tiers.overtime_minutes_1, dec("0"));
        assert_eq!(tiers.overtime_minutes_2, dec("0"));
    }

    #[test]
    fn test_inside_first_tier() {
        let tiers = partition_minutes(dec("525"), &defaults());
        assert_eq!(tiers.regular_minutes, dec("480"));
        assert_eq!(tiers.overtime_minutes_1, dec("45"));
        assert_eq!(tiers.overtime_minutes_2, dec("0"));
    }

    #[test]
    fn test_exactly_end_of_first_tier() {
        let tiers = partition_minutes(dec("600"), &defaults());
        assert_eq!(tiers.regular_minutes, dec("480"));
        assert_eq!(tiers.overtime_minutes_1, dec("120"));
        assert_eq!(tiers.overtime_minutes_2, dec("0"));
        assert!(!tiers.overtime_minutes_2.is_sign_negative());
    }

    #[test]
    fn test_second_tier() {
        let tiers = partition_minutes(dec("780"), &defaults());
        assert_eq!(tiers.overtime_minutes_2, dec("180"));
    }

    #[test]
    fn test_very_long_shift_has_no_upper_bound() {
        let tiers = partition_minutes(dec("2000"), &defaults());
        assert_eq!(tiers.regular_minutes, dec("480"));
        assert_eq!(tiers.overtime_minutes_1, dec("120"));
        assert_eq!(tiers.overtime_minutes_2, dec("1400"));
    }

    #[test]
    fn test_fractional_minutes_sum_exactly() {
        let total = dec("2000") / dec("3");
        let tiers = partition_minutes(total, &defaults());
        assert_eq!(tiers.total_minutes(), total);
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = ThresholdConfig::new(dec("420"), dec("60"), dec("1.25"), dec("1.5")).unwrap();
        let tiers = partition_minutes(dec("540"), &thresholds);
        assert_eq!(tiers.regular_minutes, dec("420"));
        assert_eq!(tiers.overtime_minutes_1, dec("60"));
        assert_eq!(tiers.overtime_minutes_2, dec("60"));
    }

    #[test]
    fn test_zero_width_first_tier() {
        let thresholds = ThresholdConfig::new(dec("480"), dec("0"), dec("1.25"), dec("1.5")).unwrap();
        let tiers = partition_minutes(dec("540"), &thresholds);
        assert_eq!(tiers.overtime_minutes_1, dec("0"));
        assert_eq!(tiers.overtime_minutes_2, dec("60"));
    }

    #[test]
    fn test_serialization() {
        let tiers = partition_minutes(dec("600"), &defaults());
        let json = serde_json::to_string(&tiers).unwrap();
        assert!(json.contains("\"regular_minutes\":\"480\""));
        assert!(json.contains("\"overtime_minutes_1\":\"120\""));
    }
}
