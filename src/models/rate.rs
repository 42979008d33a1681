//! Pay rate model and related types.
//!
//! This module defines the [`Rate`] value object and the [`Currency`] enum
//! used to price worked time.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The currencies a pay rate may be expressed in.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Israeli new shekel.
    #[default]
    Ils,
    /// United States dollar.
    Usd,
    /// Euro.
    Eur,
}

impl Currency {
    /// Returns the number of decimal places of the currency's minor unit.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_earnings::models::Currency;
    ///
    /// assert_eq!(Currency::Ils.minor_unit_digits(), 2);
    /// ```
    pub fn minor_unit_digits(&self) -> u32 {
        match self {
            Currency::Ils | Currency::Usd | Currency::Eur => 2,
        }
    }

    /// Returns the ISO 4217 code of the currency.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Ils => "ILS",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A resolved hourly pay rate.
///
/// Rates are plain values: once resolved from a rate provider they are
/// passed by value into the computation.
///
/// # Example
///
/// ```
/// use shift_earnings::models::{Currency, Rate};
/// use rust_decimal::Decimal;
///
/// let rate = Rate::new(Decimal::new(4550, 2), Currency::Usd);
/// assert_eq!(rate.base_rate.to_string(), "45.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    /// The hourly base rate before any overtime multiplier.
    pub base_rate: Decimal,
    /// The currency the rate is paid in.
    #[serde(default)]
    pub currency: Currency,
}

impl Rate {
    /// Creates a rate from a base hourly amount and currency.
    pub fn new(base_rate: Decimal, currency: Currency) -> Self {
        Self {
            base_rate,
            currency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_serializes_as_iso_code() {
        assert_eq!(serde_json::to_string(&Currency::Ils).unwrap(), "\"ILS\"");
        assert_eq!(serde_json::to_string(&Currency::Usd).unwrap(), "\"USD\"");
        assert_eq!(serde_json::to_string(&Currency::Eur).unwrap(), "\"EUR\"");
    }

    #[test]
    fn test_currency_rejects_unknown_code() {
        let result: Result<Currency, _> = serde_json::from_str("\"GBP\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_currency_defaults_to_ils() {
        assert_eq!(Currency::default(), Currency::Ils);
    }

    #[test]
    fn test_rate_deserializes_numeric_and_string_amounts() {
        let rate: Rate = serde_json::from_str(r#"{"base_rate": 100, "currency": "ILS"}"#).unwrap();
        assert_eq!(rate.base_rate, Decimal::new(100, 0));

        let rate: Rate = serde_json::from_str(r#"{"base_rate": "42.75", "currency": "EUR"}"#).unwrap();
        assert_eq!(rate.base_rate, Decimal::new(4275, 2));
        assert_eq!(rate.currency, Currency::Eur);
    }

    #[test]
    fn test_rate_currency_is_optional() {
        let rate: Rate = serde_json::from_str(r#"{"base_rate": "35"}"#).unwrap();
        assert_eq!(rate.currency, Currency::Ils);
    }
}
