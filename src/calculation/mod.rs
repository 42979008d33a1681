//! Calculation logic for the shift earnings engine.
//!
//! This module contains the computation pipeline for a single shift: input
//! validation, partition of worked minutes into the regular and two overtime
//! tiers, tiered earnings, and output rounding. It also provides rate lookup
//! through a [`RateProvider`] and summaries over several computed shifts.

mod earnings;
mod rate_lookup;
mod rounding;
mod shift_computation;
mod summary;
mod tiers;
mod validation;

pub use earnings::{
    TierEarnings, calculate_tier_earnings, minutes_to_hours, tier_amount,
    tier_hourly_rate,
};
pub use rate_lookup::{RateLookupResult, RateProvider, resolve_rate};
pub use rounding::{
    HOURS_DECIMAL_PLACES, MINUTES_DECIMAL_PLACES, round_hours, round_minutes, round_money,
    round_tiers,
};
pub use shift_computation::{compute, compute_shift, explain_shift};
pub use summary::summarize_shifts;
pub use tiers::{TierBreakdown, partition_minutes};
pub use validation::validate_shift;
