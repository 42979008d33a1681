//! Shift Earnings Engine
//!
//! This crate derives worked time and earnings for a single work shift: the
//! worked minutes are split into a regular tier and two overtime tiers, and
//! each tier is paid at the hourly rate times its multiplier.
//!
//! The computation itself is a pure function ([`calculation::compute_shift`]).
//! Configuration loading, rate lookup, multi-shift summaries and a thin HTTP
//! adapter surround it.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
