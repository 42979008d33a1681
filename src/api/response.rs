//! Response types for the shift earnings API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{PeriodSummary, ShiftComputation};

/// Response body for the `/shifts/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Each shift's computation, in request order.
    pub shifts: Vec<ShiftComputation>,
    /// Totals over all shifts, grouped by currency.
    pub summary: PeriodSummary,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }

    /// Places the error within the shift at `index` of a batch request.
    ///
    /// The field in `details` gains a `shifts[index].` prefix.
    pub fn for_shift(mut self, index: usize) -> Self {
        let prefix = format!("shifts[{}]", index);
        self.error.details = Some(match self.error.details.take() {
            Some(field) => format!("{}.{}", prefix, field),
            None => prefix,
        });
        self
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidInput {
                field,
                reason,
                message,
            } => ApiErrorResponse::bad_request(ApiError::with_details(reason.code(), message, field)),
            EngineError::InvalidThresholds { field, message } => ApiErrorResponse::bad_request(
                ApiError::with_details("VALIDATION_ERROR", message, field),
            ),
            EngineError::RateNotFound { rate_id } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "RATE_NOT_FOUND",
                    format!("Rate not found: {}", rate_id),
                    "rate_id",
                ))
            }
            EngineError::ArithmeticOverflow { operation } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "VALUE_OUT_OF_RANGE",
                    format!("Values too large to compute {}", operation),
                    operation,
                ))
            }
            EngineError::InvalidRateBook { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Invalid rate book", message),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidInputReason;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_invalid_input_uses_reason_code() {
        let engine_error = EngineError::InvalidInput {
            field: "break_minutes".to_string(),
            reason: InvalidInputReason::BreakExceedsDuration,
            message: "break too long".to_string(),
        };
        let response: ApiErrorResponse = engine_error.into();

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "BREAK_EXCEEDS_DURATION");
        assert_eq!(response.error.details.as_deref(), Some("break_minutes"));
    }

    #[test]
    fn test_rate_not_found_is_client_error() {
        let response: ApiErrorResponse = EngineError::RateNotFound {
            rate_id: "night".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "RATE_NOT_FOUND");
        assert!(response.error.message.contains("night"));
    }

    #[test]
    fn test_overflow_is_client_error() {
        let response: ApiErrorResponse = EngineError::ArithmeticOverflow {
            operation: "regular earnings".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "VALUE_OUT_OF_RANGE");
        assert_eq!(response.error.details.as_deref(), Some("regular earnings"));
    }

    #[test]
    fn test_config_errors_are_server_errors() {
        let response: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "rates.yaml".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_for_shift_prefixes_field() {
        let response: ApiErrorResponse = EngineError::InvalidInput {
            field: "end_time".to_string(),
            reason: InvalidInputReason::NegativeDuration,
            message: "shift must end after it starts".to_string(),
        }
        .into();

        let response = response.for_shift(2);
        assert_eq!(response.error.details.as_deref(), Some("shifts[2].end_time"));
        assert_eq!(response.error.code, "NEGATIVE_DURATION");
    }
}
