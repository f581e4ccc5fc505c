//! Work calendar resolution.
//!
//! This module turns a year and a federal state into workday counts. Holiday
//! data comes from a [`HolidaySource`]; [`GermanHolidays`] provides the
//! statutory holidays of all 16 states, and [`CalendarCache`] memoizes
//! resolved calendars for long-running services.

mod cache;
mod german_holidays;
mod holiday_source;
mod resolver;

pub use cache::{CalendarCache, DEFAULT_CACHE_CAPACITY};
pub use german_holidays::{
    FIRST_SUPPORTED_YEAR, GermanHolidays, LAST_SUPPORTED_YEAR, easter_sunday,
};
pub use holiday_source::HolidaySource;
pub use resolver::resolve_work_calendar;
