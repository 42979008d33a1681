//! Request types for the shift earnings API.
//!
//! This module defines the JSON request structures for the `/shifts/compute`
//! and `/shifts/summary` endpoints, and their conversion into engine inputs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{RateProvider, resolve_rate};
use crate::config::ThresholdConfig;
use crate::error::EngineResult;
use crate::models::{AuditStep, Rate, ShiftInput};

/// A single shift in a request.
///
/// Exactly one of `rate` and `rate_id` must be given. Timestamps may carry
/// any UTC offset; they are normalized to UTC.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// When the shift started.
    pub start_time: DateTime<Utc>,
    /// When the shift ended.
    pub end_time: DateTime<Utc>,
    /// Unpaid break in minutes.
    #[serde(default)]
    pub break_minutes: Decimal,
    /// An inline rate.
    #[serde(default)]
    pub rate: Option<Rate>,
    /// A rate identifier from the loaded rate book.
    #[serde(default)]
    pub rate_id: Option<String>,
    /// Thresholds for this shift only.
    #[serde(default)]
    pub thresholds: Option<ThresholdConfig>,
}

/// Request body for the `/shifts/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// The shifts to compute and summarize.
    pub shifts: Vec<ShiftRequest>,
    /// Thresholds for every shift that does not carry its own.
    #[serde(default)]
    pub thresholds: Option<ThresholdConfig>,
}

/// How a request names its rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateSelection<'a> {
    /// The rate was given inline.
    Inline(Rate),
    /// The rate is looked up by identifier.
    ById(&'a str),
}

/// A rate selection problem in a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateSelectionError {
    /// Neither `rate` nor `rate_id` was given.
    Missing,
    /// Both `rate` and `rate_id` were given.
    Ambiguous,
}

impl RateSelectionError {
    /// Returns a message describing the problem.
    pub fn message(&self) -> &'static str {
        match self {
            RateSelectionError::Missing => "one of 'rate' or 'rate_id' is required",
            RateSelectionError::Ambiguous => "only one of 'rate' or 'rate_id' may be given",
        }
    }
}

/// A request shift turned into engine input.
#[derive(Debug, Clone)]
pub struct ResolvedShift {
    /// The engine input.
    pub input: ShiftInput,
    /// The rate lookup step, when the rate was given by identifier.
    pub rate_lookup: Option<AuditStep>,
}

impl ShiftRequest {
    /// Returns how this shift names its rate.
    pub fn rate_selection(&self) -> Result<RateSelection<'_>, RateSelectionError> {
        match (&self.rate, &self.rate_id) {
            (Some(rate), None) => Ok(RateSelection::Inline(*rate)),
            (None, Some(rate_id)) => Ok(RateSelection::ById(rate_id)),
            (None, None) => Err(RateSelectionError::Missing),
            (Some(_), Some(_)) => Err(RateSelectionError::Ambiguous),
        }
    }

    /// Builds the engine input for this shift.
    ///
    /// A rate given by identifier is resolved through `provider`. Thresholds
    /// on the shift win over `fallback_thresholds`.
    pub fn resolve<P: RateProvider + ?Sized>(
        &self,
        selection: RateSelection<'_>,
        provider: &P,
        fallback_thresholds: &ThresholdConfig,
    ) -> EngineResult<ResolvedShift> {
        let (rate, rate_lookup) = match selection {
            RateSelection::Inline(rate) => (rate, None),
            RateSelection::ById(rate_id) => {
                let lookup = resolve_rate(provider, rate_id, 1)?;
                (lookup.rate, Some(lookup.audit_step))
            }
        };

        let thresholds = self
            .thresholds
            .clone()
            .unwrap_or_else(|| fallback_thresholds.clone());

        let input = ShiftInput::new(self.start_time, self.end_time, self.break_minutes, rate)
            .with_thresholds(thresholds);

        Ok(ResolvedShift { input, rate_lookup })
    }
}
