//! In-memory rate book.
//!
//! A [`RateBook`] maps rate identifiers to the employer rate they name. It is
//! built once from `rates.yaml` and is read-only afterwards.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::calculation::RateProvider;
use crate::error::{EngineError, EngineResult};
use crate::models::Rate;

use super::types::RatesFile;

/// A rate registered in the rate book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateEntry {
    /// The identifier of the employer offering the rate.
    pub employer_id: String,
    /// The employer's display name.
    pub employer_name: String,
    /// Human-readable label of the rate.
    pub label: String,
    /// The resolved rate value.
    pub rate: Rate,
}

/// Rates indexed by identifier.
///
/// # Example
///
/// ```
/// use shift_earnings::config::{RateBook, RatesFile};
/// use shift_earnings::calculation::RateProvider;
///
/// let file: RatesFile = serde_yaml::from_str(
///     "employers:\n  - id: cafe\n    name: Corner Cafe\n    rates:\n      - id: cafe_weekday\n        base_rate: 42.5\n",
/// ).unwrap();
/// let book = RateBook::from_file(file).unwrap();
///
/// assert_eq!(book.len(), 1);
/// assert_eq!(book.rate("cafe_weekday").unwrap().base_rate.to_string(), "42.5");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RateBook {
    entries: HashMap<String, RateEntry>,
}

impl RateBook {
    /// Builds a rate book from a parsed rates file.
    ///
    /// Fails with [`EngineError::InvalidRateBook`] if a rate identifier is
    /// used twice or a base rate is not positive.
    pub fn from_file(file: RatesFile) -> EngineResult<Self> {
        let mut entries = HashMap::new();

        for employer in file.employers {
            for rate in employer.rates {
                if rate.base_rate <= Decimal::ZERO {
                    return Err(EngineError::InvalidRateBook {
                        message: format!(
                            "rate '{}' of employer '{}' must be positive, got {}",
                            rate.id, employer.id, rate.base_rate
                        ),
                    });
                }

                let entry = RateEntry {
                    employer_id: employer.id.clone(),
                    employer_name: employer.name.clone(),
                    label: rate.label,
                    rate: Rate::new(rate.base_rate, rate.currency),
                };

                if entries.insert(rate.id.clone(), entry).is_some() {
                    return Err(EngineError::InvalidRateBook {
                        message: format!("duplicate rate id '{}'", rate.id),
                    });
                }
            }
        }

        Ok(Self { entries })
    }

    /// Returns the entry registered under `rate_id`.
    pub fn get(&self, rate_id: &str) -> Option<&RateEntry> {
        self.entries.get(rate_id)
    }

    /// Returns all entries offered by one employer, sorted by rate id.
    pub fn rates_for_employer(&self, employer_id: &str) -> Vec<(&str, &RateEntry)> {
        let mut rates: Vec<_> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.employer_id == employer_id)
            .map(|(id, entry)| (id.as_str(), entry))
            .collect();
        rates.sort_by(|a, b| a.0.cmp(b.0));
        rates
    }

    /// Returns the number of registered rates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no rates are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl RateProvider for RateBook {
    fn rate(&self, rate_id: &str) -> EngineResult<Rate> {
        self.get(rate_id)
            .map(|entry| entry.rate)
            .ok_or_else(|| EngineError::RateNotFound {
                rate_id: rate_id.to_string(),
            })
    }
}
