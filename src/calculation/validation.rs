//! Shift input validation.
//!
//! Validation runs before any arithmetic. A failing input is reported as
//! [`EngineError::InvalidInput`] and is never clamped or defaulted.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult, InvalidInputReason};
use crate::models::ShiftInput;

/// Validates a shift and returns its elapsed minutes.
///
/// Checks, in order:
/// 1. `end_time` lies after `start_time` (`NEGATIVE_DURATION`)
/// 2. `break_minutes` is not negative (`NEGATIVE_DURATION`)
/// 3. `break_minutes` is shorter than the elapsed time (`BREAK_EXCEEDS_DURATION`)
/// 4. `rate.base_rate` is positive (`NON_POSITIVE_RATE`)
///
/// # Examples
///
/// ```
/// use shift_earnings::calculation::validate_shift;
/// use shift_earnings::error::{EngineError, InvalidInputReason};
/// use shift_earnings::models::{Currency, Rate, ShiftInput};
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let shift = ShiftInput::new(
///     Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2026, 3, 2, 9, 30, 0).unwrap(),
///     Decimal::new(45, 0),
///     Rate::new(Decimal::new(100, 0), Currency::Ils),
/// );
///
/// match validate_shift(&shift) {
///     Err(EngineError::InvalidInput { reason, .. }) => {
///         assert_eq!(reason, InvalidInputReason::BreakExceedsDuration);
///     }
///     _ => panic!("expected a rejected break"),
/// }
/// ```
pub fn validate_shift(shift: &ShiftInput) -> EngineResult<Decimal> {
    let elapsed_minutes = shift.elapsed_minutes();

    if elapsed_minutes <= Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "end_time",
            InvalidInputReason::NegativeDuration,
            format!(
                "shift must end after it starts (start {}, end {})",
                shift.start_time.to_rfc3339(),
                shift.end_time.to_rfc3339()
            ),
        ));
    }

    if shift.break_minutes < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "break_minutes",
            InvalidInputReason::NegativeDuration,
            format!(
                "break must not be negative, got {} minutes",
                shift.break_minutes.normalize()
            ),
        ));
    }

    if shift.break_minutes >= elapsed_minutes {
        return Err(EngineError::invalid_input(
            "break_minutes",
            InvalidInputReason::BreakExceedsDuration,
            format!(
                "break of {} minutes is not shorter than the {} minute shift",
                shift.break_minutes.normalize(),
                elapsed_minutes.normalize()
            ),
        ));
    }

    if shift.rate.base_rate <= Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "rate.base_rate",
            InvalidInputReason::NonPositiveRate,
            format!(
                "base rate must be positive, got {}",
                shift.rate.base_rate.normalize()
            ),
        ));
    }

    Ok(elapsed_minutes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Currency, Rate};
    use chrono::{DateTime, TimeZone, Utc};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, hour, minute, 0).unwrap()
    }

    fn shift(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        break_minutes: &str,
        base_rate: &str,
    ) -> ShiftInput {
        ShiftInput::new(
            start,
            end,
            dec(break_minutes),
            Rate::new(dec(base_rate), Currency::Ils),
        )
    }

    fn reason_and_field(result: EngineResult<Decimal>) -> (InvalidInputReason, String) {
        match result {
            Err(EngineError::InvalidInput { field, reason, .. }) => (reason, field),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_shift_returns_elapsed_minutes() {
        let result = validate_shift(&shift(at(9, 0), at(17, 30), "30", "100"));
        assert_eq!(result.unwrap(), dec("510"));
    }

    #[test]
    fn test_end_before_start_rejected() {
        let (reason, field) = reason_and_field(validate_shift(&shift(at(17, 0), at(9, 0), "0", "100")));
        assert_eq!(reason, InvalidInputReason::NegativeDuration);
        assert_eq!(field, "end_time");
    }

    #[test]
    fn test_end_equal_to_start_rejected() {
        let (reason, _) = reason_and_field(validate_shift(&shift(at(9, 0), at(9, 0), "0", "100")));
        assert_eq!(reason, InvalidInputReason::NegativeDuration);
    }

    #[test]
    fn test_negative_break_rejected() {
        let (reason, field) =
            reason_and_field(validate_shift(&shift(at(9, 0), at(17, 0), "-15", "100")));
        assert_eq!(reason, InvalidInputReason::NegativeDuration);
        assert_eq!(field, "break_minutes");
    }

    #[test]
    fn test_break_equal_to_elapsed_rejected() {
        let (reason, field) =
            reason_and_field(validate_shift(&shift(at(9, 0), at(9, 30), "30", "100")));
        assert_eq!(reason, InvalidInputReason::BreakExceedsDuration);
        assert_eq!(field, "break_minutes");
    }

    #[test]
    fn test_break_longer_than_elapsed_rejected() {
        let result = validate_shift(&shift(at(9, 0), at(9, 30), "45", "100"));
        match result {
            Err(EngineError::InvalidInput {
                reason, message, ..
            }) => {
                assert_eq!(reason, InvalidInputReason::BreakExceedsDuration);
                assert!(message.contains("45"));
                assert!(message.contains("30"));
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_break_just_below_elapsed_accepted() {
        let result = validate_shift(&shift(at(9, 0), at(9, 30), "29.5", "100"));
        assert_eq!(result.unwrap(), dec("30"));
    }

    #[test]
    fn test_sub_second_shift_accepted() {
        let start = at(8, 0) + chrono::Duration::milliseconds(100);
        let end = at(8, 0) + chrono::Duration::milliseconds(900);
        let elapsed = validate_shift(&shift(start, end, "0", "100")).unwrap();
        assert!(elapsed > Decimal::ZERO);
        assert!(elapsed < dec("0.014"));
    }

    #[test]
    fn test_fractional_second_shift_accepted() {
        let start = at(8, 0);
        let end = start + chrono::Duration::milliseconds(30_250);
        let elapsed = validate_shift(&shift(start, end, "0.5", "100")).unwrap();
        // 30.25 s
        assert_eq!(elapsed, dec("30.25") / dec("60"));
    }

    #[test]
    fn test_sub_second_reversal_rejected() {
        let start = at(8, 0) + chrono::Duration::milliseconds(900);
        let end = at(8, 0) + chrono::Duration::milliseconds(100);
        let (reason, field) = reason_and_field(validate_shift(&shift(start, end, "0", "100")));
        assert_eq!(reason, InvalidInputReason::NegativeDuration);
        assert_eq!(field, "end_time");
    }

    #[test]
    fn test_zero_rate_rejected() {
        let (reason, field) =
            reason_and_field(validate_shift(&shift(at(9, 0), at(17, 0), "0", "0")));
        assert_eq!(reason, InvalidInputReason::NonPositiveRate);
        assert_eq!(field, "rate.base_rate");
    }

    #[test]
    fn test_negative_rate_rejected() {
        let (reason, _) =
            reason_and_field(validate_shift(&shift(at(9, 0), at(17, 0), "0", "-12.5")));
        assert_eq!(reason, InvalidInputReason::NonPositiveRate);
    }

    #[test]
    fn test_duration_checked_before_rate() {
        let (reason, _) = reason_and_field(validate_shift(&shift(at(9, 0), at(8, 0), "0", "0")));
        assert_eq!(reason, InvalidInputReason::NegativeDuration);
    }
}
