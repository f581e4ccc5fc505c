//! HTTP API module for the capacity planner.
//!
//! This module provides the REST API endpoints for calculating plannable
//! hours, exporting the breakdown as CSV and listing regions and holidays.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, DeductionItemRequest};
pub use response::{ApiError, HolidayEntry, HolidaysResponse, RegionResponse};
pub use state::AppState;
