//! Computation result models for the Shift Earnings Engine.
//!
//! This module contains the [`ShiftComputation`] type produced for every
//! computed shift, together with the [`AuditStep`] records that explain how
//! it was derived.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Currency;

/// The derived time and earnings breakdown of one shift.
///
/// Minutes are rounded to at most two decimal places, with the tiers still
/// summing to the total. Hours are rounded to one decimal place and money to
/// the currency's minor unit, all half-up.
///
/// # Example
///
/// ```
/// use shift_earnings::models::{Currency, ShiftComputation};
/// use rust_decimal::Decimal;
///
/// let computation = ShiftComputation {
///     currency: Currency::Ils,
///     total_minutes: Decimal::new(480, 0),
///     regular_minutes: Decimal::new(480, 0),
///     overtime_minutes_1: Decimal::ZERO,
///     overtime_minutes_2: Decimal::ZERO,
///     total_hours: Decimal::new(80, 1),
///     regular_hours: Decimal::new(80, 1),
///     overtime_hours_1: Decimal::ZERO,
///     overtime_hours_2: Decimal::ZERO,
///     regular_earnings: Decimal::new(80000, 2),
///     overtime_earnings_1: Decimal::ZERO,
///     overtime_earnings_2: Decimal::ZERO,
///     total_earnings: Decimal::new(80000, 2),
/// };
/// assert_eq!(computation.overtime_minutes(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftComputation {
    /// The currency all earnings are expressed in.
    pub currency: Currency,
    /// Worked minutes (elapsed minus unpaid break).
    pub total_minutes: Decimal,
    /// Minutes paid at the base rate.
    pub regular_minutes: Decimal,
    /// Minutes paid at the first overtime multiplier.
    pub overtime_minutes_1: Decimal,
    /// Minutes paid at the second overtime multiplier.
    pub overtime_minutes_2: Decimal,
    /// Worked hours.
    pub total_hours: Decimal,
    /// Regular hours.
    pub regular_hours: Decimal,
    /// First-tier overtime hours.
    pub overtime_hours_1: Decimal,
    /// Second-tier overtime hours.
    pub overtime_hours_2: Decimal,
    /// Earnings for regular time.
    pub regular_earnings: Decimal,
    /// Earnings for first-tier overtime.
    pub overtime_earnings_1: Decimal,
    /// Earnings for second-tier overtime.
    pub overtime_earnings_2: Decimal,
    /// Total earnings for the shift.
    pub total_earnings: Decimal,
}

impl ShiftComputation {
    /// Returns the minutes worked beyond the regular threshold.
    pub fn overtime_minutes(&self) -> Decimal {
        self.overtime_minutes_1 + self.overtime_minutes_2
    }

    /// Returns true if any time fell into an overtime tier.
    pub fn has_overtime(&self) -> bool {
        self.overtime_minutes() > Decimal::ZERO
    }
}

/// A single step in the explanation of a computation.
///
/// Each step captures the input, output, and reasoning for one rule
/// application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A computation together with the steps that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftExplanation {
    /// The computed breakdown.
    pub computation: ShiftComputation,
    /// Ordered audit steps.
    pub audit_steps: Vec<AuditStep>,
}
