//! Configuration loading and management for the Shift Earnings Engine.
//!
//! This module provides functionality to load tier thresholds and the rate
//! book from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use shift_earnings::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Known rates: {}", config.rate_book().len());
//! ```

mod loader;
mod rate_book;
mod types;

pub use loader::ConfigLoader;
pub use rate_book::{RateBook, RateEntry};
pub use types::{
    DEFAULT_OVERTIME_TIER1_MINUTES, DEFAULT_OVERTIME_TIER1_MULTIPLIER,
    DEFAULT_OVERTIME_TIER2_MULTIPLIER, DEFAULT_REGULAR_THRESHOLD_MINUTES, EmployerConfig,
    RateEntryConfig, RatesFile, ThresholdConfig, ThresholdFile,
};
