//! Period summaries.
//!
//! Sums already-computed shifts per currency. No rounding is applied here:
//! the inputs are rounded values and their sums stay exact.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{PeriodSummary, ShiftComputation};

fn accumulate(total: &mut Decimal, value: Decimal, what: &str) -> EngineResult<()> {
    *total = total
        .checked_add(value)
        .ok_or_else(|| EngineError::overflow(what))?;
    Ok(())
}

/// Summarizes a set of shift computations, grouped by currency.
///
/// Fails with [`EngineError::ArithmeticOverflow`] if a sum leaves the
/// decimal range.
///
/// # Examples
///
/// ```
/// use shift_earnings::calculation::{compute, summarize_shifts};
/// use shift_earnings::models::{Currency, Rate, ShiftInput};
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let monday = ShiftInput::new(
///     Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2026, 3, 2, 17, 30, 0).unwrap(),
///     Decimal::new(30, 0),
///     Rate::new(Decimal::new(100, 0), Currency::Ils),
/// );
/// let tuesday = ShiftInput::new(
///     Utc.with_ymd_and_hms(2026, 3, 3, 8, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2026, 3, 3, 19, 0, 0).unwrap(),
///     Decimal::new(60, 0),
///     Rate::new(Decimal::new(100, 0), Currency::Ils),
/// );
///
/// let shifts = vec![compute(&monday).unwrap(), compute(&tuesday).unwrap()];
/// let summary = summarize_shifts(&shifts).unwrap();
///
/// let ils = summary.for_currency(Currency::Ils).unwrap();
/// assert_eq!(ils.shift_count, 2);
/// assert_eq!(ils.total_earnings.to_string(), "1850.00");
/// ```
pub fn summarize_shifts(shifts: &[ShiftComputation]) -> EngineResult<PeriodSummary> {
    let mut summary = PeriodSummary {
        shift_count: shifts.len(),
        ..Default::default()
    };

    for shift in shifts {
        let totals = summary.totals.entry(shift.currency).or_default();
        totals.shift_count += 1;
        accumulate(&mut totals.total_minutes, shift.total_minutes, "summary total minutes")?;
        accumulate(&mut totals.regular_minutes, shift.regular_minutes, "summary regular minutes")?;
        accumulate(
            &mut totals.overtime_minutes_1,
            shift.overtime_minutes_1,
            "summary overtime tier 1 minutes",
        )?;
        accumulate(
            &mut totals.overtime_minutes_2,
            shift.overtime_minutes_2,
            "summary overtime tier 2 minutes",
        )?;
        accumulate(&mut totals.total_hours, shift.total_hours, "summary total hours")?;
        accumulate(&mut totals.total_earnings, shift.total_earnings, "summary total earnings")?;
    }

    Ok(summary)
}
