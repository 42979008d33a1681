//! Output rounding.
//!
//! Values are carried unrounded through the computation and only rounded
//! when a [`ShiftComputation`](crate::models::ShiftComputation) is emitted.
//! All helpers round half-up; all values they see are non-negative, where
//! half-up and half-away-from-zero coincide.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::Currency;

use super::tiers::TierBreakdown;

/// Decimal places emitted for hour values.
pub const HOURS_DECIMAL_PLACES: u32 = 1;

/// Maximum decimal places emitted for minute values.
pub const MINUTES_DECIMAL_PLACES: u32 = 2;

/// Rounds a monetary amount to the currency's minor unit.
///
/// # Examples
///
/// ```
/// use shift_earnings::calculation::round_money;
/// use shift_earnings::models::Currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_money(Decimal::new(1875, 1), Currency::Ils).to_string(), "187.50");
/// assert_eq!(round_money(Decimal::new(10005, 3), Currency::Usd).to_string(), "10.01");
/// ```
pub fn round_money(amount: Decimal, currency: Currency) -> Decimal {
    round_to(amount, currency.minor_unit_digits())
}

/// Rounds an hour value to one decimal place.
///
/// # Examples
///
/// ```
/// use shift_earnings::calculation::round_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_hours(Decimal::new(8, 0)).to_string(), "8.0");
/// assert_eq!(round_hours(Decimal::new(825, 2)).to_string(), "8.3");
/// ```
pub fn round_hours(hours: Decimal) -> Decimal {
    round_to(hours, HOURS_DECIMAL_PLACES)
}

/// Rounds a minute value to at most two decimal places, without padding.
///
/// # Examples
///
/// ```
/// use shift_earnings::calculation::round_minutes;
/// use rust_decimal::Decimal;
///
/// // 100 seconds
/// let minutes = Decimal::new(100, 0) / Decimal::new(60, 0);
/// assert_eq!(round_minutes(minutes).to_string(), "1.67");
/// assert_eq!(round_minutes(Decimal::new(4800, 1)).to_string(), "480");
/// ```
pub fn round_minutes(minutes: Decimal) -> Decimal {
    minutes
        .round_dp_with_strategy(MINUTES_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

/// Rounds a tier breakdown for output, keeping its parts summing to the
/// rounded total.
///
/// Each tier is the difference of two rounded running sums, so no tier
/// turns negative.
pub fn round_tiers(tiers: &TierBreakdown) -> TierBreakdown {
    let through_regular = round_minutes(tiers.regular_minutes);
    let through_tier1 = round_minutes(tiers.regular_minutes + tiers.overtime_minutes_1);
    let total = round_minutes(tiers.total_minutes());

    TierBreakdown {
        regular_minutes: through_regular,
        overtime_minutes_1: (through_tier1 - through_regular).normalize(),
        overtime_minutes_2: (total - through_tier1).normalize(),
    }
}

fn round_to(value: Decimal, places: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    // Pad so every emitted value carries the same number of places.
    rounded.rescale(places);
    rounded
}
