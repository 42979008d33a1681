//! Configuration types for shift computation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Currency;

/// Default regular threshold: 8 hours.
pub const DEFAULT_REGULAR_THRESHOLD_MINUTES: Decimal = Decimal::from_parts(480, 0, 0, false, 0);

/// Default span of the first overtime tier: 2 hours.
pub const DEFAULT_OVERTIME_TIER1_MINUTES: Decimal = Decimal::from_parts(120, 0, 0, false, 0);

/// Default first-tier overtime multiplier (125%).
pub const DEFAULT_OVERTIME_TIER1_MULTIPLIER: Decimal = Decimal::from_parts(125, 0, 0, false, 2);

/// Default second-tier overtime multiplier (150%).
pub const DEFAULT_OVERTIME_TIER2_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Tier thresholds and multipliers.
///
/// A `ThresholdConfig` is always valid: minute spans are non-negative and
/// multipliers are positive. Both [`ThresholdConfig::new`] and
/// deserialization enforce this.
///
/// # Example
///
/// ```
/// use shift_earnings::config::ThresholdConfig;
/// use rust_decimal::Decimal;
///
/// let thresholds = ThresholdConfig::default();
/// assert_eq!(thresholds.regular_threshold_minutes(), Decimal::new(480, 0));
/// assert_eq!(thresholds.overtime_tier2_multiplier(), Decimal::new(15, 1));
///
/// let bad = ThresholdConfig::new(
///     Decimal::new(-1, 0),
///     Decimal::new(120, 0),
///     Decimal::new(125, 2),
///     Decimal::new(15, 1),
/// );
/// assert!(bad.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ThresholdFile")]
pub struct ThresholdConfig {
    regular_threshold_minutes: Decimal,
    overtime_tier1_minutes: Decimal,
    overtime_tier1_multiplier: Decimal,
    overtime_tier2_multiplier: Decimal,
}

impl ThresholdConfig {
    /// Creates a validated threshold configuration.
    pub fn new(
        regular_threshold_minutes: Decimal,
        overtime_tier1_minutes: Decimal,
        overtime_tier1_multiplier: Decimal,
        overtime_tier2_multiplier: Decimal,
    ) -> EngineResult<Self> {
        non_negative("regular_threshold_minutes", regular_threshold_minutes)?;
        non_negative("overtime_tier1_minutes", overtime_tier1_minutes)?;
        positive("overtime_tier1_multiplier", overtime_tier1_multiplier)?;
        positive("overtime_tier2_multiplier", overtime_tier2_multiplier)?;

        Ok(Self {
            regular_threshold_minutes,
            overtime_tier1_minutes,
            overtime_tier1_multiplier,
            overtime_tier2_multiplier,
        })
    }

    /// Worked minutes up to this value are regular.
    pub fn regular_threshold_minutes(&self) -> Decimal {
        self.regular_threshold_minutes
    }

    /// Span of minutes beyond the regular threshold paid at tier 1.
    pub fn overtime_tier1_minutes(&self) -> Decimal {
        self.overtime_tier1_minutes
    }

    /// Multiplier applied to the base rate for tier 1 overtime.
    pub fn overtime_tier1_multiplier(&self) -> Decimal {
        self.overtime_tier1_multiplier
    }

    /// Multiplier applied to the base rate for tier 2 overtime.
    pub fn overtime_tier2_multiplier(&self) -> Decimal {
        self.overtime_tier2_multiplier
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            regular_threshold_minutes: DEFAULT_REGULAR_THRESHOLD_MINUTES,
            overtime_tier1_minutes: DEFAULT_OVERTIME_TIER1_MINUTES,
            overtime_tier1_multiplier: DEFAULT_OVERTIME_TIER1_MULTIPLIER,
            overtime_tier2_multiplier: DEFAULT_OVERTIME_TIER2_MULTIPLIER,
        }
    }
}

fn non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::InvalidThresholds {
            field: field.to_string(),
            message: format!("must not be negative, got {}", value),
        });
    }
    Ok(())
}

fn positive(field: &str, value: Decimal) -> EngineResult<()> {
    if value <= Decimal::ZERO {
        return Err(EngineError::InvalidThresholds {
            field: field.to_string(),
            message: format!("must be positive, got {}", value),
        });
    }
    Ok(())
}

/// Threshold configuration as written in `thresholds.yaml` or a request body.
///
/// Every key is optional and falls back to its default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdFile {
    /// Worked minutes up to this value are regular.
    #[serde(default = "default_regular_threshold_minutes")]
    pub regular_threshold_minutes: Decimal,
    /// Span of the first overtime tier in minutes.
    #[serde(default = "default_overtime_tier1_minutes")]
    pub overtime_tier1_minutes: Decimal,
    /// First-tier overtime multiplier.
    #[serde(default = "default_overtime_tier1_multiplier")]
    pub overtime_tier1_multiplier: Decimal,
    /// Second-tier overtime multiplier.
    #[serde(default = "default_overtime_tier2_multiplier")]
    pub overtime_tier2_multiplier: Decimal,
}

fn default_regular_threshold_minutes() -> Decimal {
    DEFAULT_REGULAR_THRESHOLD_MINUTES
}

fn default_overtime_tier1_minutes() -> Decimal {
    DEFAULT_OVERTIME_TIER1_MINUTES
}

fn default_overtime_tier1_multiplier() -> Decimal {
    DEFAULT_OVERTIME_TIER1_MULTIPLIER
}

fn default_overtime_tier2_multiplier() -> Decimal {
    DEFAULT_OVERTIME_TIER2_MULTIPLIER
}

impl TryFrom<ThresholdFile> for ThresholdConfig {
    type Error = EngineError;

    fn try_from(file: ThresholdFile) -> EngineResult<Self> {
        ThresholdConfig::new(
            file.regular_threshold_minutes,
            file.overtime_tier1_minutes,
            file.overtime_tier1_multiplier,
            file.overtime_tier2_multiplier,
        )
    }
}

/// A single rate offered by an employer.
#[derive(Debug, Clone, Deserialize)]
pub struct RateEntryConfig {
    /// Identifier the rate is looked up by.
    pub id: String,
    /// Human-readable label (e.g., "Weekday").
    #[serde(default)]
    pub label: String,
    /// The hourly base rate.
    pub base_rate: Decimal,
    /// The currency of the rate.
    #[serde(default)]
    pub currency: Currency,
}

/// An employer and its rates.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployerConfig {
    /// Unique identifier for the employer.
    pub id: String,
    /// The employer's display name.
    pub name: String,
    /// Rates offered by this employer.
    #[serde(default)]
    pub rates: Vec<RateEntryConfig>,
}

/// Rates configuration file structure (`rates.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct RatesFile {
    /// Employers with their rates.
    #[serde(default)]
    pub employers: Vec<EmployerConfig>,
}
