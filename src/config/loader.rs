//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading thresholds and
//! the rate book from YAML files.

use std::fs;
use std::path::Path;

use crate::calculation::RateProvider;
use crate::error::{EngineError, EngineResult};
use crate::models::Rate;

use super::rate_book::RateBook;
use super::types::{RatesFile, ThresholdConfig};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── thresholds.yaml   # Tier thresholds and multipliers (every key optional)
/// └── rates.yaml        # Employers and their hourly rates
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_earnings::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Regular threshold: {} minutes", loader.thresholds().regular_threshold_minutes());
/// # Ok::<(), shift_earnings::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    thresholds: ThresholdConfig,
    rate_book: RateBook,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, contains invalid YAML,
    /// holds out-of-range thresholds, or defines an inconsistent rate book.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let thresholds = Self::load_yaml::<ThresholdConfig>(&path.join("thresholds.yaml"))?;

        let rates_file = Self::load_yaml::<RatesFile>(&path.join("rates.yaml"))?;
        let rate_book = RateBook::from_file(rates_file)?;

        Ok(Self {
            thresholds,
            rate_book,
        })
    }

    /// Creates a loader from already-built parts.
    pub fn from_parts(thresholds: ThresholdConfig, rate_book: RateBook) -> Self {
        Self {
            thresholds,
            rate_book,
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the configured default thresholds.
    pub fn thresholds(&self) -> &ThresholdConfig {
        &self.thresholds
    }

    /// Returns the rate book.
    pub fn rate_book(&self) -> &RateBook {
        &self.rate_book
    }
}

impl RateProvider for ConfigLoader {
    fn rate(&self, rate_id: &str) -> EngineResult<Rate> {
        self.rate_book.rate(rate_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Currency;
    use rust_decimal::Decimal;
    use std::path::PathBuf;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "shift-earnings-{}-{}",
            name,
            uuid::Uuid::new_v4()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.thresholds(), &ThresholdConfig::default());
        assert!(!loader.rate_book().is_empty());
    }

    #[test]
    fn test_loaded_rates_resolve() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let rate = loader.rate("cafe_weekday").unwrap();
        assert_eq!(rate.base_rate, dec("100"));
        assert_eq!(rate.currency, Currency::Ils);

        let rate = loader.rate("studio_contract").unwrap();
        assert_eq!(rate.base_rate, dec("50"));
        assert_eq!(rate.currency, Currency::Usd);
    }

    #[test]
    fn test_unknown_rate_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert!(matches!(
            loader.rate("unknown"),
            Err(EngineError::RateNotFound { .. })
        ));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("thresholds.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_rates_file() {
        let dir = scratch_dir("missing-rates");
        fs::write(dir.join("thresholds.yaml"), "regular_threshold_minutes: 480\n").unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigNotFound { path }) => assert!(path.contains("rates.yaml")),
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_load_invalid_thresholds_returns_parse_error() {
        let dir = scratch_dir("bad-thresholds");
        fs::write(dir.join("thresholds.yaml"), "overtime_tier1_multiplier: -1.25\n").unwrap();
        fs::write(dir.join("rates.yaml"), "employers: []\n").unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert!(path.contains("thresholds.yaml"));
                assert!(message.contains("overtime_tier1_multiplier"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_load_custom_thresholds() {
        let dir = scratch_dir("custom");
        fs::write(
            dir.join("thresholds.yaml"),
            "regular_threshold_minutes: 510\novertime_tier1_minutes: 90\n",
        )
        .unwrap();
        fs::write(dir.join("rates.yaml"), "employers: []\n").unwrap();

        let loader = ConfigLoader::load(&dir).unwrap();
        assert_eq!(loader.thresholds().regular_threshold_minutes(), dec("510"));
        assert_eq!(loader.thresholds().overtime_tier1_minutes(), dec("90"));
        assert!(loader.rate_book().is_empty());

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_from_parts() {
        let loader = ConfigLoader::from_parts(ThresholdConfig::default(), RateBook::default());
        assert!(loader.rate_book().is_empty());
        assert!(loader.rate("anything").is_err());
    }
}
