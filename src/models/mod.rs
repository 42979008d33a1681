//! Core data models for the Shift Earnings Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod computation;
mod rate;
mod shift;
mod summary;

pub use computation::{AuditStep, ShiftComputation, ShiftExplanation};
pub use rate::{Currency, Rate};
pub use shift::ShiftInput;
pub use summary::{CurrencyTotals, PeriodSummary};
