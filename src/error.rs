//! Error types for the Shift Earnings Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing shift earnings,
//! resolving rates, or loading configuration.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable reason attached to an [`EngineError::InvalidInput`].
///
/// # Example
///
/// ```
/// use shift_earnings::error::InvalidInputReason;
///
/// assert_eq!(InvalidInputReason::BreakExceedsDuration.code(), "BREAK_EXCEEDS_DURATION");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvalidInputReason {
    /// The shift ends at or before it starts, or a duration is negative.
    NegativeDuration,
    /// The unpaid break is as long as or longer than the elapsed shift time.
    BreakExceedsDuration,
    /// The hourly base rate is zero or negative.
    NonPositiveRate,
}

impl InvalidInputReason {
    /// Returns the reason code as exposed to callers.
    pub fn code(&self) -> &'static str {
        match self {
            InvalidInputReason::NegativeDuration => "NEGATIVE_DURATION",
            InvalidInputReason::BreakExceedsDuration => "BREAK_EXCEEDS_DURATION",
            InvalidInputReason::NonPositiveRate => "NON_POSITIVE_RATE",
        }
    }
}

impl fmt::Display for InvalidInputReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The main error type for the Shift Earnings Engine.
///
/// # Example
///
/// ```
/// use shift_earnings::error::{EngineError, InvalidInputReason};
///
/// let error = EngineError::InvalidInput {
///     field: "break_minutes".to_string(),
///     reason: InvalidInputReason::BreakExceedsDuration,
///     message: "break of 45 minutes is not shorter than the 30 minute shift".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid input 'break_minutes' (BREAK_EXCEEDS_DURATION): break of 45 minutes is not shorter than the 30 minute shift"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A shift input failed validation.
    #[error("Invalid input '{field}' ({reason}): {message}")]
    InvalidInput {
        /// The offending input field.
        field: String,
        /// The machine-readable reason.
        reason: InvalidInputReason,
        /// A description of what made the input invalid.
        message: String,
    },

    /// A threshold configuration was out of range.
    #[error("Invalid threshold '{field}': {message}")]
    InvalidThresholds {
        /// The threshold field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No rate exists under the requested identifier.
    #[error("Rate not found: {rate_id}")]
    RateNotFound {
        /// The identifier that was looked up.
        rate_id: String,
    },

    /// The rate book contained inconsistent data.
    #[error("Invalid rate book: {message}")]
    InvalidRateBook {
        /// A description of the inconsistency.
        message: String,
    },

    /// A value grew beyond the range of the decimal type.
    #[error("Arithmetic overflow while computing {operation}")]
    ArithmeticOverflow {
        /// The quantity that was being computed.
        operation: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Builds an [`EngineError::InvalidInput`].
    pub(crate) fn invalid_input(
        field: &str,
        reason: InvalidInputReason,
        message: impl Into<String>,
    ) -> Self {
        EngineError::InvalidInput {
            field: field.to_string(),
            reason,
            message: message.into(),
        }
    }

    /// Builds an [`EngineError::ArithmeticOverflow`].
    pub(crate) fn overflow(operation: &str) -> Self {
        EngineError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
