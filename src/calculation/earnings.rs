//! Tiered earnings calculation.
//!
//! Each tier is paid `minutes × base_rate × multiplier / 60`:
//! - **Regular:** 100% of the base rate
//! - **Overtime tier 1:** base rate × `overtime_tier1_multiplier` (default 125%)
//! - **Overtime tier 2:** base rate × `overtime_tier2_multiplier` (default 150%)
//!
//! Amounts returned here are unrounded. Every product is checked: a rate or
//! shift large enough to leave the decimal range yields
//! [`EngineError::ArithmeticOverflow`] rather than a panic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ThresholdConfig;
use crate::error::{EngineError, EngineResult};

use super::tiers::TierBreakdown;

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Unrounded earnings per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierEarnings {
    /// Earnings for regular minutes.
    pub regular: Decimal,
    /// Earnings for first-tier overtime minutes.
    pub overtime_1: Decimal,
    /// Earnings for second-tier overtime minutes.
    pub overtime_2: Decimal,
}

impl TierEarnings {
    /// Returns the unrounded sum of all tiers.
    pub fn total(&self) -> EngineResult<Decimal> {
        self.regular
            .checked_add(self.overtime_1)
            .and_then(|sum| sum.checked_add(self.overtime_2))
            .ok_or_else(|| EngineError::overflow("total earnings"))
    }
}

/// Converts minutes to decimal hours without rounding.
///
/// # Examples
///
/// ```
/// use shift_earnings::calculation::minutes_to_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(minutes_to_hours(Decimal::new(90, 0)), Decimal::new(15, 1));
/// ```
pub fn minutes_to_hours(minutes: Decimal) -> Decimal {
    minutes / MINUTES_PER_HOUR
}

/// Prices the given number of minutes at `base_rate × multiplier` per hour.
///
/// Returns `None` if the amount does not fit in a [`Decimal`].
///
/// # Examples
///
/// ```
/// use shift_earnings::calculation::tier_amount;
/// use rust_decimal::Decimal;
///
/// let amount = tier_amount(Decimal::new(90, 0), Decimal::new(40, 0), Decimal::new(15, 1));
/// assert_eq!(amount, Some(Decimal::new(90, 0)));
///
/// let huge = Decimal::from_i128_with_scale(10i128.pow(28), 0);
/// assert_eq!(tier_amount(Decimal::new(600, 0), huge, Decimal::ONE), None);
/// ```
pub fn tier_amount(minutes: Decimal, base_rate: Decimal, multiplier: Decimal) -> Option<Decimal> {
    minutes
        .checked_mul(base_rate)?
        .checked_mul(multiplier)?
        .checked_div(MINUTES_PER_HOUR)
}

/// Returns the hourly rate of a tier, `base_rate × multiplier`.
pub fn tier_hourly_rate(base_rate: Decimal, multiplier: Decimal) -> EngineResult<Decimal> {
    base_rate
        .checked_mul(multiplier)
        .ok_or_else(|| EngineError::overflow("tier hourly rate"))
}

/// Calculates the earnings of each tier.
///
/// Fails with [`EngineError::ArithmeticOverflow`] naming the tier whose
/// amount left the decimal range.
///
/// # Examples
///
/// ```
/// use shift_earnings::calculation::{calculate_tier_earnings, partition_minutes};
/// use shift_earnings::config::ThresholdConfig;
/// use rust_decimal::Decimal;
///
/// let thresholds = ThresholdConfig::default();
/// let tiers = partition_minutes(Decimal::new(780, 0), &thresholds);
/// let earnings = calculate_tier_earnings(&tiers, Decimal::new(50, 0), &thresholds).unwrap();
///
/// assert_eq!(earnings.regular, Decimal::new(400, 0));
/// assert_eq!(earnings.overtime_1, Decimal::new(125, 0));
/// assert_eq!(earnings.overtime_2, Decimal::new(225, 0));
/// assert_eq!(earnings.total().unwrap(), Decimal::new(750, 0));
/// ```
pub fn calculate_tier_earnings(
    tiers: &TierBreakdown,
    base_rate: Decimal,
    thresholds: &ThresholdConfig,
) -> EngineResult<TierEarnings> {
    let regular = tier_amount(tiers.regular_minutes, base_rate, Decimal::ONE)
        .ok_or_else(|| EngineError::overflow("regular earnings"))?;
    let overtime_1 = tier_amount(
        tiers.overtime_minutes_1,
        base_rate,
        thresholds.overtime_tier1_multiplier(),
    )
    .ok_or_else(|| EngineError::overflow("overtime tier 1 earnings"))?;
    let overtime_2 = tier_amount(
        tiers.overtime_minutes_2,
        base_rate,
        thresholds.overtime_tier2_multiplier(),
    )
    .ok_or_else(|| EngineError::overflow("overtime tier 2 earnings"))?;

    Ok(TierEarnings {
        regular,
        overtime_1,
        overtime_2,
    })
}
