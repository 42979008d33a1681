//! Aggregated totals across several computed shifts.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Currency;

/// Totals for all shifts paid in one currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyTotals {
    /// Number of shifts included.
    pub shift_count: usize,
    /// Sum of worked minutes.
    pub total_minutes: Decimal,
    /// Sum of regular minutes.
    pub regular_minutes: Decimal,
    /// Sum of first-tier overtime minutes.
    pub overtime_minutes_1: Decimal,
    /// Sum of second-tier overtime minutes.
    pub overtime_minutes_2: Decimal,
    /// Sum of the per-shift rounded worked hours.
    pub total_hours: Decimal,
    /// Sum of the per-shift rounded earnings.
    pub total_earnings: Decimal,
}

/// Totals over a set of shifts, grouped by currency.
///
/// Amounts in different currencies are never added together.
///
/// # Example
///
/// ```
/// use shift_earnings::models::PeriodSummary;
///
/// let summary = PeriodSummary::default();
/// assert_eq!(summary.shift_count, 0);
/// assert!(summary.totals.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// Number of shifts summarized.
    pub shift_count: usize,
    /// Totals keyed by currency.
    pub totals: BTreeMap<Currency, CurrencyTotals>,
}

impl PeriodSummary {
    /// Returns the totals for one currency, if any shift used it.
    pub fn for_currency(&self, currency: Currency) -> Option<&CurrencyTotals> {
        self.totals.get(&currency)
    }
}
