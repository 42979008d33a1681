//! HTTP request handlers for the shift earnings API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute, explain_shift, summarize_shifts};
use crate::config::{ConfigLoader, ThresholdConfig};
use crate::error::EngineError;

use super::request::{ResolvedShift, ShiftRequest, SummaryRequest};
use super::response::{ApiError, ApiErrorResponse, SummaryResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/shifts/compute", post(compute_handler))
        .route("/shifts/summary", post(summary_handler))
        .with_state(state)
}

/// Handler for POST /shifts/compute.
///
/// Accepts a single shift and returns its computation with audit steps.
async fn compute_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShiftRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing shift computation request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let config = state.config();

    let resolved = match resolve_shift(&request, config, config.thresholds()) {
        Ok(resolved) => resolved,
        Err(error) => return error_response(correlation_id, error),
    };

    let first_step = if resolved.rate_lookup.is_some() { 2 } else { 1 };
    match explain_shift(&resolved.input, first_step) {
        Ok(mut explanation) => {
            if let Some(lookup) = resolved.rate_lookup {
                explanation.audit_steps.insert(0, lookup);
            }
            info!(
                correlation_id = %correlation_id,
                total_minutes = %explanation.computation.total_minutes,
                total_earnings = %explanation.computation.total_earnings,
                currency = %explanation.computation.currency,
                has_overtime = explanation.computation.has_overtime(),
                duration_us = start_time.elapsed().as_micros(),
                "Shift computed successfully"
            );
            json_response(StatusCode::OK, explanation)
        }
        Err(err) => error_response(correlation_id, err.into()),
    }
}

/// Handler for POST /shifts/summary.
///
/// Computes every shift in the request and summarizes them. The first
/// failing shift rejects the whole request.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing shift summary request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let config = state.config();
    let thresholds = request.thresholds.as_ref().unwrap_or(config.thresholds());

    let mut computations = Vec::with_capacity(request.shifts.len());
    for (index, shift) in request.shifts.iter().enumerate() {
        let computation = resolve_shift(shift, config, thresholds)
            .and_then(|resolved| compute(&resolved.input).map_err(ApiErrorResponse::from));

        match computation {
            Ok(computation) => computations.push(computation),
            Err(error) => {
                warn!(
                    correlation_id = %correlation_id,
                    shift_index = index,
                    code = %error.error.code,
                    "Shift in summary rejected"
                );
                return error_response(correlation_id, error.for_shift(index));
            }
        }
    }

    let summary = match summarize_shifts(&computations) {
        Ok(summary) => summary,
        Err(err) => return error_response(correlation_id, err.into()),
    };
    info!(
        correlation_id = %correlation_id,
        shifts_count = summary.shift_count,
        currencies = summary.totals.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Shift summary completed successfully"
    );

    json_response(
        StatusCode::OK,
        SummaryResponse {
            shifts: computations,
            summary,
        },
    )
}

/// Turns a request shift into engine input, resolving its rate.
fn resolve_shift(
    request: &ShiftRequest,
    config: &ConfigLoader,
    fallback_thresholds: &ThresholdConfig,
) -> Result<ResolvedShift, ApiErrorResponse> {
    let selection = request
        .rate_selection()
        .map_err(|err| ApiErrorResponse::bad_request(ApiError::validation_error(err.message())))?;

    request
        .resolve(selection, config, fallback_thresholds)
        .map_err(|err: EngineError| err.into())
}

/// Maps a JSON extraction failure onto an API error.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") || body_text.contains("Invalid threshold") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    json_response(StatusCode::BAD_REQUEST, error)
}

fn error_response(correlation_id: Uuid, error: ApiErrorResponse) -> Response {
    warn!(
        correlation_id = %correlation_id,
        status = error.status.as_u16(),
        code = %error.error.code,
        "Request failed"
    );
    json_response(error.status, error.error)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
