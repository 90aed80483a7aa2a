//! HTTP request handlers for the SAC Calculation Engine API.
//!
//! This module contains the handler functions for both endpoints. The
//! router is stateless: every request carries its own data, and the
//! handlers only wire the collections into the pure calculators.

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    InMemoryEmployeeSource, InMemoryPayrollSource, InMemorySalaryHistorySource, calculate_bonus,
    resolve_salary_for_period,
};

use super::request::{BonusCalculationRequest, SalaryForPeriodRequest};
use super::response::{ApiError, BonusResponse, SalaryForPeriodResponse};

/// Creates the API router with all endpoints.
pub fn create_router() -> Router {
    Router::new()
        .route("/bonus", post(bonus_handler))
        .route("/salary-for-period", post(salary_for_period_handler))
}

/// Converts a JSON extraction rejection into the API error body.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
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
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for the POST /bonus endpoint.
///
/// Accepts an employee, a semester token, and the payroll history, and
/// returns the bonus determination. An unparseable semester token is not a
/// request error: it yields a 200 with the degraded non-corresponding
/// result, so roster-wide report generation survives bad rows.
async fn bonus_handler(
    payload: Result<Json<BonusCalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing bonus calculation request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let result = calculate_bonus(&request.employee, &request.semester, &request.payroll_history);

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee.id,
        semester = %request.semester,
        corresponds = result.corresponds,
        amount = %result.amount,
        reason = %result.reason,
        "Bonus calculation completed"
    );

    let response = BonusResponse {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: request.employee.id,
        semester: request.semester,
        result,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for the POST /salary-for-period endpoint.
///
/// Wraps the request's collections in in-memory sources and walks the
/// resolution precedence chain. Always answers 200 for a well-formed
/// request; exhausted lookups surface as the `not_found` source.
async fn salary_for_period_handler(
    payload: Result<Json<SalaryForPeriodRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary-for-period request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let history = InMemorySalaryHistorySource::new(&request.salary_history);
    let payroll = InMemoryPayrollSource::new(&request.payroll_history);
    let employees = InMemoryEmployeeSource::new(request.employee.as_slice());

    let result = resolve_salary_for_period(
        &request.employee_id,
        &request.period,
        &history,
        &payroll,
        &employees,
    );

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        period = %request.period,
        source = ?result.source,
        "Salary resolution completed"
    );

    let response = SalaryForPeriodResponse {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: request.employee_id,
        period: request.period.to_string(),
        result,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}
