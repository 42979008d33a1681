//! Rate lookup functionality.
//!
//! Shifts reference their pay rate by identifier. This module defines the
//! [`RateProvider`] seam that resolves an identifier into a plain [`Rate`]
//! value, once per computation.

use crate::error::EngineResult;
use crate::models::{AuditStep, Rate};

/// Resolves rate identifiers into rate values.
pub trait RateProvider {
    /// Returns the rate registered under `rate_id`.
    ///
    /// Fails with [`EngineError::RateNotFound`](crate::error::EngineError::RateNotFound)
    /// if no such rate exists.
    fn rate(&self, rate_id: &str) -> EngineResult<Rate>;
}

/// The result of a rate lookup, including the rate and audit step.
#[derive(Debug, Clone)]
pub struct RateLookupResult {
    /// The resolved rate.
    pub rate: Rate,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// Resolves a rate through a provider and records the lookup.
///
/// # Examples
///
/// ```
/// use shift_earnings::calculation::{RateProvider, resolve_rate};
/// use shift_earnings::error::{EngineError, EngineResult};
/// use shift_earnings::models::{Currency, Rate};
/// use rust_decimal::Decimal;
///
/// struct FixedRate;
///
/// impl RateProvider for FixedRate {
///     fn rate(&self, rate_id: &str) -> EngineResult<Rate> {
///         match rate_id {
///             "weekday" => Ok(Rate::new(Decimal::new(100, 0), Currency::Ils)),
///             _ => Err(EngineError::RateNotFound { rate_id: rate_id.to_string() }),
///         }
///     }
/// }
///
/// let result = resolve_rate(&FixedRate, "weekday", 1).unwrap();
/// assert_eq!(result.rate.base_rate, Decimal::new(100, 0));
/// assert_eq!(result.audit_step.rule_id, "rate_lookup");
/// ```
pub fn resolve_rate<P: RateProvider + ?Sized>(
    provider: &P,
    rate_id: &str,
    step_number: u32,
) -> EngineResult<RateLookupResult> {
    let rate = provider.rate(rate_id)?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "rate_lookup".to_string(),
        rule_name: "Rate Lookup".to_string(),
        input: serde_json::json!({
            "rate_id": rate_id
        }),
        output: serde_json::json!({
            "base_rate": rate.base_rate.normalize().to_string(),
            "currency": rate.currency.code()
        }),
        reasoning: format!(
            "Resolved rate '{}' to {} {} per hour",
            rate_id,
            rate.base_rate.normalize(),
            rate.currency
        ),
    };

    Ok(RateLookupResult { rate, audit_step })
}
