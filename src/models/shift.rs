//! Shift input model.
//!
//! This module defines the [`ShiftInput`] struct describing one worked shift
//! as handed to the computation engine.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ThresholdConfig;

use super::Rate;

const SECONDS_PER_MINUTE: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// A single shift to be computed.
///
/// Timestamps are absolute instants, so a shift crossing midnight simply has
/// an `end_time` on the following day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftInput {
    /// The moment the shift begins.
    pub start_time: DateTime<Utc>,
    /// The moment the shift ends.
    pub end_time: DateTime<Utc>,
    /// Unpaid break subtracted from the worked duration, in minutes.
    #[serde(default)]
    pub break_minutes: Decimal,
    /// The resolved pay rate for the shift.
    pub rate: Rate,
    /// Tier thresholds and multipliers; defaults apply when omitted.
    #[serde(default)]
    pub thresholds: ThresholdConfig,
}

impl ShiftInput {
    /// Creates a shift input using the default thresholds.
    pub fn new(
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        break_minutes: Decimal,
        rate: Rate,
    ) -> Self {
        Self {
            start_time,
            end_time,
            break_minutes,
            rate,
            thresholds: ThresholdConfig::default(),
        }
    }

    /// Replaces the thresholds used for this shift.
    pub fn with_thresholds(mut self, thresholds: ThresholdConfig) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Returns the elapsed time between start and end in minutes.
    ///
    /// Kept to nanosecond precision. The value is negative when the end lies
    /// before the start.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_earnings::models::{Currency, Rate, ShiftInput};
    /// use chrono::{TimeZone, Utc};
    /// use rust_decimal::Decimal;
    ///
    /// let shift = ShiftInput::new(
    ///     Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap(),
    ///     Utc.with_ymd_and_hms(2026, 3, 2, 17, 30, 0).unwrap(),
    ///     Decimal::new(30, 0),
    ///     Rate::new(Decimal::new(100, 0), Currency::Ils),
    /// );
    /// assert_eq!(shift.elapsed_minutes(), Decimal::new(510, 0));
    /// assert_eq!(shift.worked_minutes(), Decimal::new(480, 0));
    /// ```
    pub fn elapsed_minutes(&self) -> Decimal {
        let elapsed = self.end_time - self.start_time;
        let seconds =
            Decimal::from(elapsed.num_seconds()) + Decimal::new(i64::from(elapsed.subsec_nanos()), 9);
        seconds / SECONDS_PER_MINUTE
    }

    /// Returns the elapsed minutes minus the unpaid break.
    pub fn worked_minutes(&self) -> Decimal {
        self.elapsed_minutes() - self.break_minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Currency;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, day, hour, minute, 0).unwrap()
    }

    fn rate() -> Rate {
        Rate::new(Decimal::new(100, 0), Currency::Ils)
    }

    #[test]
    fn test_elapsed_minutes_same_day() {
        let shift = ShiftInput::new(at(2, 8, 0), at(2, 19, 0), Decimal::new(60, 0), rate());
        assert_eq!(shift.elapsed_minutes(), Decimal::new(660, 0));
        assert_eq!(shift.worked_minutes(), Decimal::new(600, 0));
    }

    #[test]
    fn test_elapsed_minutes_across_midnight() {
        let shift = ShiftInput::new(at(2, 22, 0), at(3, 6, 0), Decimal::ZERO, rate());
        assert_eq!(shift.elapsed_minutes(), Decimal::new(480, 0));
    }

    #[test]
    fn test_elapsed_minutes_negative_when_reversed() {
        let shift = ShiftInput::new(at(2, 17, 0), at(2, 9, 0), Decimal::ZERO, rate());
        assert_eq!(shift.elapsed_minutes(), Decimal::new(-480, 0));
    }

    #[test]
    fn test_elapsed_minutes_keeps_seconds() {
        let start = at(2, 9, 0);
        let end = start + chrono::Duration::seconds(90);
        let shift = ShiftInput::new(start, end, Decimal::ZERO, rate());
        assert_eq!(shift.elapsed_minutes(), Decimal::new(15, 1));
    }

    #[test]
    fn test_elapsed_minutes_keeps_sub_second_time() {
        let start = at(2, 8, 0) + chrono::Duration::milliseconds(100);
        let end = at(2, 8, 0) + chrono::Duration::milliseconds(900);
        let shift = ShiftInput::new(start, end, Decimal::ZERO, rate());
        // 0.8 s
        assert_eq!(shift.elapsed_minutes(), Decimal::new(8, 1) / Decimal::from(60));
        assert!(shift.elapsed_minutes() > Decimal::ZERO);

        let reversed = ShiftInput::new(end, start, Decimal::ZERO, rate());
        assert!(reversed.elapsed_minutes() < Decimal::ZERO);
    }

    #[test]
    fn test_elapsed_minutes_fractional_seconds() {
        let start = at(2, 9, 0);
        let end = start + chrono::Duration::milliseconds(90_500);
        let shift = ShiftInput::new(start, end, Decimal::ZERO, rate());
        // 90.5 s
        assert_eq!(shift.elapsed_minutes(), Decimal::new(905, 1) / Decimal::from(60));
    }

    #[test]
    fn test_shift_deserialization_with_offsets_and_defaults() {
        let json = r#"{
            "start_time": "2026-03-02T09:00:00+02:00",
            "end_time": "2026-03-02T17:30:00+02:00",
            "rate": { "base_rate": "100", "currency": "ILS" }
        }"#;

        let shift: ShiftInput = serde_json::from_str(json).unwrap();
        assert_eq!(shift.start_time, at(2, 7, 0));
        assert_eq!(shift.break_minutes, Decimal::ZERO);
        assert_eq!(shift.thresholds, ThresholdConfig::default());
        assert_eq!(shift.elapsed_minutes(), Decimal::new(510, 0));
    }

    #[test]
    fn test_with_thresholds_replaces_defaults() {
        let thresholds = ThresholdConfig::new(
            Decimal::new(420, 0),
            Decimal::new(60, 0),
            Decimal::new(125, 2),
            Decimal::new(15, 1),
        )
        .unwrap();
        let shift = ShiftInput::new(at(2, 9, 0), at(2, 17, 0), Decimal::ZERO, rate())
            .with_thresholds(thresholds.clone());
        assert_eq!(shift.thresholds, thresholds);
    }
}
