//! Shift computation.
//!
//! This module ties validation, tier partition, earnings and rounding
//! together into the public computation entry points.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::config::ThresholdConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, Currency, Rate, ShiftComputation, ShiftExplanation, ShiftInput};

use super::earnings::{TierEarnings, calculate_tier_earnings, minutes_to_hours, tier_hourly_rate};
use super::rounding::{round_hours, round_minutes, round_money, round_tiers};
use super::tiers::{TierBreakdown, partition_minutes};
use super::validation::validate_shift;

/// Unrounded intermediate values of one computation.
struct Evaluation {
    elapsed_minutes: Decimal,
    total_minutes: Decimal,
    tiers: TierBreakdown,
    earnings: TierEarnings,
    total_earnings: Decimal,
}

fn evaluate(shift: &ShiftInput) -> EngineResult<Evaluation> {
    let elapsed_minutes = validate_shift(shift)?;
    let total_minutes = shift.worked_minutes();

    let tiers = partition_minutes(total_minutes, &shift.thresholds);
    let earnings = calculate_tier_earnings(&tiers, shift.rate.base_rate, &shift.thresholds)?;
    let total_earnings = earnings.total()?;

    Ok(Evaluation {
        elapsed_minutes,
        total_minutes,
        tiers,
        earnings,
        total_earnings,
    })
}

fn to_computation(evaluation: &Evaluation, currency: Currency) -> ShiftComputation {
    let tiers = &evaluation.tiers;
    let earnings = &evaluation.earnings;
    let rounded = round_tiers(tiers);

    ShiftComputation {
        currency,
        total_minutes: rounded.total_minutes().normalize(),
        regular_minutes: rounded.regular_minutes,
        overtime_minutes_1: rounded.overtime_minutes_1,
        overtime_minutes_2: rounded.overtime_minutes_2,
        total_hours: round_hours(minutes_to_hours(evaluation.total_minutes)),
        regular_hours: round_hours(minutes_to_hours(tiers.regular_minutes)),
        overtime_hours_1: round_hours(minutes_to_hours(tiers.overtime_minutes_1)),
        overtime_hours_2: round_hours(minutes_to_hours(tiers.overtime_minutes_2)),
        regular_earnings: round_money(earnings.regular, currency),
        overtime_earnings_1: round_money(earnings.overtime_1, currency),
        overtime_earnings_2: round_money(earnings.overtime_2, currency),
        total_earnings: round_money(evaluation.total_earnings, currency),
    }
}

fn percent(multiplier: Decimal) -> EngineResult<Decimal> {
    multiplier
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|value| value.normalize())
        .ok_or_else(|| EngineError::overflow("multiplier percentage"))
}

/// Computes the time and earnings breakdown of a shift.
///
/// Rounding happens once, on the emitted values; the total is rounded from
/// the unrounded tier sum, so it reconciles with the rounded tiers within one
/// minor currency unit.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when the shift fails validation, and
/// [`EngineError::ArithmeticOverflow`] when an amount leaves the decimal
/// range. No partial result is ever produced.
///
/// # Examples
///
/// ```
/// use shift_earnings::calculation::compute;
/// use shift_earnings::models::{Currency, Rate, ShiftInput};
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let shift = ShiftInput::new(
///     Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2026, 3, 2, 19, 0, 0).unwrap(),
///     Decimal::new(60, 0),
///     Rate::new(Decimal::new(100, 0), Currency::Ils),
/// );
///
/// let computation = compute(&shift).unwrap();
/// assert_eq!(computation.regular_minutes, Decimal::new(480, 0));
/// assert_eq!(computation.overtime_minutes_1, Decimal::new(120, 0));
/// assert_eq!(computation.total_earnings.to_string(), "1050.00");
/// ```
pub fn compute(shift: &ShiftInput) -> EngineResult<ShiftComputation> {
    let evaluation = evaluate(shift)?;
    Ok(to_computation(&evaluation, shift.rate.currency))
}

/// Computes a shift from its individual parts.
///
/// Equivalent to building a [`ShiftInput`] and calling [`compute`].
///
/// # Examples
///
/// ```
/// use shift_earnings::calculation::compute_shift;
/// use shift_earnings::config::ThresholdConfig;
/// use shift_earnings::models::{Currency, Rate};
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let computation = compute_shift(
///     Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2026, 3, 2, 17, 30, 0).unwrap(),
///     Decimal::new(30, 0),
///     Rate::new(Decimal::new(100, 0), Currency::Ils),
///     &ThresholdConfig::default(),
/// )
/// .unwrap();
///
/// assert_eq!(computation.regular_hours.to_string(), "8.0");
/// assert_eq!(computation.total_earnings.to_string(), "800.00");
/// ```
pub fn compute_shift(
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    break_minutes: Decimal,
    rate: Rate,
    thresholds: &ThresholdConfig,
) -> EngineResult<ShiftComputation> {
    let shift =
        ShiftInput::new(start_time, end_time, break_minutes, rate).with_thresholds(thresholds.clone());
    compute(&shift)
}

/// Computes a shift and records each step of the derivation.
///
/// Steps are numbered from `step_number_start`. The regular tier step is
/// always recorded; overtime tier steps only when the tier holds time.
///
/// # Examples
///
/// ```
/// use shift_earnings::calculation::{compute, explain_shift};
/// use shift_earnings::models::{Currency, Rate, ShiftInput};
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let shift = ShiftInput::new(
///     Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2026, 3, 2, 21, 0, 0).unwrap(),
///     Decimal::ZERO,
///     Rate::new(Decimal::new(50, 0), Currency::Ils),
/// );
///
/// let explanation = explain_shift(&shift, 1).unwrap();
/// let rules: Vec<&str> = explanation.audit_steps.iter().map(|s| s.rule_id.as_str()).collect();
///
/// assert_eq!(
///     rules,
///     ["worked_time", "regular_tier", "overtime_tier_1", "overtime_tier_2", "earnings_total"]
/// );
/// assert_eq!(explanation.computation, compute(&shift).unwrap());
/// ```
pub fn explain_shift(shift: &ShiftInput, step_number_start: u32) -> EngineResult<ShiftExplanation> {
    let evaluation = evaluate(shift)?;
    let currency = shift.rate.currency;
    let computation = to_computation(&evaluation, currency);

    let thresholds = &shift.thresholds;
    let base_rate = shift.rate.base_rate;
    let mut audit_steps = Vec::new();
    let mut step_number = step_number_start;

    // Step 1: worked time
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "worked_time".to_string(),
        rule_name: "Worked Time".to_string(),
        input: serde_json::json!({
            "start_time": shift.start_time.to_rfc3339(),
            "end_time": shift.end_time.to_rfc3339(),
            "elapsed_minutes": round_minutes(evaluation.elapsed_minutes).to_string(),
            "break_minutes": shift.break_minutes.normalize().to_string()
        }),
        output: serde_json::json!({
            "total_minutes": computation.total_minutes.to_string()
        }),
        reasoning: format!(
            "{} elapsed minutes minus {} minute unpaid break = {} worked minutes",
            round_minutes(evaluation.elapsed_minutes),
            shift.break_minutes.normalize(),
            computation.total_minutes
        ),
    });
    step_number += 1;

    // Step 2: regular tier
    let regular_threshold = thresholds.regular_threshold_minutes().normalize();
    let regular_reasoning = if evaluation.total_minutes > thresholds.regular_threshold_minutes() {
        format!(
            "{} worked minutes exceed the {} minute regular threshold; {} minutes paid at base rate {}",
            computation.total_minutes,
            regular_threshold,
            computation.regular_minutes,
            base_rate.normalize()
        )
    } else if evaluation.total_minutes == thresholds.regular_threshold_minutes() {
        format!(
            "{} worked minutes equal the {} minute regular threshold, no overtime",
            computation.total_minutes, regular_threshold
        )
    } else {
        format!(
            "{} worked minutes are under the {} minute regular threshold, no overtime",
            computation.total_minutes, regular_threshold
        )
    };

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "regular_tier".to_string(),
        rule_name: "Regular Tier".to_string(),
        input: serde_json::json!({
            "total_minutes": computation.total_minutes.to_string(),
            "regular_threshold_minutes": regular_threshold.to_string(),
            "base_rate": base_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "minutes": computation.regular_minutes.to_string(),
            "hours": computation.regular_hours.to_string(),
            "earnings": computation.regular_earnings.to_string()
        }),
        reasoning: regular_reasoning,
    });
    step_number += 1;

    // Step 3: first overtime tier
    if evaluation.tiers.overtime_minutes_1 > Decimal::ZERO {
        let multiplier = thresholds.overtime_tier1_multiplier();
        audit_steps.push(AuditStep {
            step_number,
            rule_id: "overtime_tier_1".to_string(),
            rule_name: "Overtime Tier 1".to_string(),
            input: serde_json::json!({
                "tier_span_minutes": thresholds.overtime_tier1_minutes().normalize().to_string(),
                "base_rate": base_rate.normalize().to_string(),
                "multiplier": multiplier.normalize().to_string()
            }),
            output: serde_json::json!({
                "minutes": computation.overtime_minutes_1.to_string(),
                "hours": computation.overtime_hours_1.to_string(),
                "earnings": computation.overtime_earnings_1.to_string()
            }),
            reasoning: format!(
                "{} minutes of overtime at {}%: {} hours x {} = {}",
                computation.overtime_minutes_1,
                percent(multiplier)?,
                computation.overtime_hours_1,
                tier_hourly_rate(base_rate, multiplier)?.normalize(),
                computation.overtime_earnings_1
            ),
        });
        step_number += 1;
    }

    // Step 4: second overtime tier
    if evaluation.tiers.overtime_minutes_2 > Decimal::ZERO {
        let multiplier = thresholds.overtime_tier2_multiplier();
        audit_steps.push(AuditStep {
            step_number,
            rule_id: "overtime_tier_2".to_string(),
            rule_name: "Overtime Tier 2".to_string(),
            input: serde_json::json!({
                "base_rate": base_rate.normalize().to_string(),
                "multiplier": multiplier.normalize().to_string()
            }),
            output: serde_json::json!({
                "minutes": computation.overtime_minutes_2.to_string(),
                "hours": computation.overtime_hours_2.to_string(),
                "earnings": computation.overtime_earnings_2.to_string()
            }),
            reasoning: format!(
                "{} minutes beyond the first overtime tier at {}%: {} hours x {} = {}",
                computation.overtime_minutes_2,
                percent(multiplier)?,
                computation.overtime_hours_2,
                tier_hourly_rate(base_rate, multiplier)?.normalize(),
                computation.overtime_earnings_2
            ),
        });
        step_number += 1;
    }

    // Step 5: total
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "earnings_total".to_string(),
        rule_name: "Earnings Total".to_string(),
        input: serde_json::json!({
            "unrounded_total": evaluation.total_earnings.normalize().to_string(),
            "currency": currency.code()
        }),
        output: serde_json::json!({
            "total_hours": computation.total_hours.to_string(),
            "total_earnings": computation.total_earnings.to_string()
        }),
        reasoning: format!(
            "Total of {} {} for {} hours, rounded half-up to {} decimal places",
            computation.total_earnings,
            currency,
            computation.total_hours,
            currency.minor_unit_digits()
        ),
    });

    Ok(ShiftExplanation {
        computation,
        audit_steps,
    })
}
