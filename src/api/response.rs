//! Response types for the SAC Calculation Engine API.
//!
//! This module defines the success envelopes stamped onto calculation
//! results and the error response structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{BonusResult, SalaryForPeriodResult};

/// Envelope returned by the `/bonus` endpoint.
///
/// The calculation metadata lives here, keeping the inner [`BonusResult`]
/// a plain value object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The employee the calculation is for.
    pub employee_id: String,
    /// The semester token as received.
    pub semester: String,
    /// The bonus determination.
    pub result: BonusResult,
}

/// Envelope returned by the `/salary-for-period` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryForPeriodResponse {
    /// Unique identifier for this resolution.
    pub calculation_id: Uuid,
    /// When the resolution was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the resolution.
    pub engine_version: String,
    /// The employee the resolution is for.
    pub employee_id: String,
    /// The target period as received.
    pub period: String,
    /// The resolved compensation.
    pub result: SalaryForPeriodResult,
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

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidPeriod { token } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_PERIOD",
                    format!("Invalid period token: {}", token),
                    "Periods use the YYYY-MM format",
                ),
            },
            EngineError::SourceUnavailable { source, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "SOURCE_UNAVAILABLE",
                    format!("Data source '{}' unavailable", source),
                    message,
                ),
            },
        }
    }
}
