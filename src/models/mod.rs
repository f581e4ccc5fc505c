//! Core data models for the capacity planner.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod input;
mod region;
mod work_calendar;

use chrono::{Datelike, NaiveDate, Weekday};

pub use calculation_result::{
    Breakdown, BreakdownEntry, BreakdownKind, CalculationResult, CalculationTrace,
    DeductionTraceEntry, PlannableMetrics,
};
pub use input::{
    CalculationInput, DeductionItem, DeductionUnit, HOURS_PER_LEAP_YEAR, HOURS_PER_WEEK,
};
pub use region::Region;
pub use work_calendar::{PublicHoliday, WorkCalendar};

/// Returns `true` for Monday through Friday.
pub fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
