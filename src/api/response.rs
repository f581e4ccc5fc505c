//! Response types for the capacity planner API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API, plus the small listing types returned by the lookup
//! endpoints.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{PublicHoliday, Region};

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
            EngineError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_INPUT",
                    format!("Invalid input field '{}': {}", field, message),
                    field,
                ),
            },
            EngineError::UnknownRegion { code } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNKNOWN_REGION",
                    format!("Unknown region code: {}", code),
                    "Use one of the 16 two-letter state codes listed by GET /regions",
                ),
            },
            EngineError::UnknownDeductionUnit { unit } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNKNOWN_DEDUCTION_UNIT",
                    format!("Unknown deduction unit: {}", unit),
                    "Supported units are yearly_hours, weekly_hours and percent_of_base",
                ),
            },
            EngineError::CalendarLookup { date, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "CALENDAR_LOOKUP",
                    format!("Holiday lookup failed for {}", date),
                    message,
                ),
            },
            EngineError::Export { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("EXPORT_ERROR", "Export failed", message),
            },
        }
    }
}

/// A federal state as listed by `GET /regions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionResponse {
    /// The two-letter code.
    pub code: Region,
    /// The German display name.
    pub name: String,
}

impl From<Region> for RegionResponse {
    fn from(region: Region) -> Self {
        Self {
            code: region,
            name: region.name().to_string(),
        }
    }
}

/// Body of `GET /holidays/:region/:year`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaysResponse {
    /// The calendar year.
    pub year: i32,
    /// The federal state.
    pub region: Region,
    /// Holidays in date order.
    pub holidays: Vec<HolidayEntry>,
}

/// One holiday in a [`HolidaysResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayEntry {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The German name of the holiday.
    pub name: String,
    /// Whether the holiday falls on Monday to Friday.
    pub on_workday: bool,
}

impl From<PublicHoliday> for HolidayEntry {
    fn from(holiday: PublicHoliday) -> Self {
        Self {
            on_workday: holiday.falls_on_workday(),
            date: holiday.date,
            name: holiday.name,
        }
    }
}
