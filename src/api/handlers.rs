//! HTTP request handlers for the capacity planner API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::reduce;
use crate::error::EngineError;
use crate::models::{CalculationResult, Region};
use crate::report::{ascii_file_name, breakdown_to_csv, export_file_name};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, HolidayEntry, HolidaysResponse, RegionResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/calculate/csv", post(calculate_csv_handler))
        .route("/regions", get(regions_handler))
        .route("/holidays/:region/:year", get(holidays_handler))
        .with_state(state)
}

fn json_error(status: StatusCode, error: ApiError) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn engine_error_response(err: EngineError) -> Response {
    let api_error: ApiErrorResponse = err.into();
    json_error(api_error.status, api_error.error)
}

/// Maps a JSON extraction failure to an API error.
fn rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::malformed_json(body_text)
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
    }
}

/// Parses the request body and runs the calculation, logging the outcome.
fn run_calculation(
    state: &AppState,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<CalculationResult, Response> {
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return Err(json_error(
                StatusCode::BAD_REQUEST,
                rejection_error(rejection, correlation_id),
            ));
        }
    };

    let start_time = Instant::now();
    match perform_calculation(state, request) {
        Ok(result) => {
            let duration = start_time.elapsed();
            if result.trace.skipped_dates > 0 {
                warn!(
                    correlation_id = %correlation_id,
                    year = result.year,
                    region = %result.region,
                    skipped_dates = result.trace.skipped_dates,
                    "No holiday data for some weekdays; plannable hours are incomplete"
                );
            }
            info!(
                correlation_id = %correlation_id,
                year = result.year,
                region = %result.region,
                plannable_hours = result.metrics.per_year,
                skipped_dates = result.trace.skipped_dates,
                duration_us = duration.as_micros(),
                "Calculation completed successfully"
            );
            Ok(result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            Err(engine_error_response(err))
        }
    }
}

/// Merges the request over the profile, validates it and reduces the
/// (cached) work calendar.
fn perform_calculation(
    state: &AppState,
    request: CalculationRequest,
) -> Result<CalculationResult, EngineError> {
    let input = request.into_input(state.config().default_input())?;
    input.validate()?;

    let calendar = state
        .calendars()
        .resolve(input.year, input.region, state.holidays());
    Ok(reduce(&calendar, &input))
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a calculation request and returns the full calculation result.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    match run_calculation(&state, payload, correlation_id) {
        Ok(result) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(result),
        )
            .into_response(),
        Err(response) => response,
    }
}

/// Handler for POST /calculate/csv endpoint.
///
/// Accepts the same request as `/calculate` and returns the breakdown as a
/// CSV attachment.
async fn calculate_csv_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing CSV export request");

    let result = match run_calculation(&state, payload, correlation_id) {
        Ok(result) => result,
        Err(response) => return response,
    };

    match breakdown_to_csv(&result.breakdown) {
        Ok(csv) => {
            let file_name = ascii_file_name(&export_file_name(result.year, result.region));
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", file_name),
                    ),
                ],
                csv,
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "CSV export failed"
            );
            engine_error_response(err)
        }
    }
}

/// Handler for GET /regions endpoint.
async fn regions_handler() -> Json<Vec<RegionResponse>> {
    Json(Region::ALL.into_iter().map(RegionResponse::from).collect())
}

/// Handler for GET /holidays/:region/:year endpoint.
///
/// Lists the public holidays of a state. Unknown regions and years without
/// holiday data are rejected with 400.
async fn holidays_handler(
    State(state): State<AppState>,
    Path((region, year)): Path<(String, String)>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let lookup = region.parse::<Region>().and_then(|region| {
        let year = year.trim().parse::<i32>().map_err(|_| {
            EngineError::invalid_input("year", format!("'{}' is not a calendar year", year))
        })?;
        let holidays = state.holidays().holidays_in_year(year, region)?;
        Ok((region, year, holidays))
    });

    match lookup {
        Ok((region, year, holidays)) => {
            info!(
                correlation_id = %correlation_id,
                year,
                region = %region,
                holidays = holidays.len(),
                "Listed public holidays"
            );
            Json(HolidaysResponse {
                year,
                region,
                holidays: holidays.into_iter().map(HolidayEntry::from).collect(),
            })
            .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Holiday lookup failed"
            );
            engine_error_response(err)
        }
    }
}
