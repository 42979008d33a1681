//! HTTP API module for the shift earnings engine.
//!
//! This module exposes the engine over a small REST surface: single shift
//! computation with an audit trail, and multi-shift summaries.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{RateSelection, RateSelectionError, ResolvedShift, ShiftRequest, SummaryRequest};
pub use response::{ApiError, ApiErrorResponse, SummaryResponse};
pub use state::AppState;
