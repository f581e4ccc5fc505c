//! Work calendar and public holiday models.
//!
//! This module contains the [`WorkCalendar`] produced by the calendar
//! resolver and the [`PublicHoliday`] entries listed by holiday sources.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Region;

/// A named public holiday for a region.
///
/// # Example
///
/// ```
/// use capacity_planner::models::{PublicHoliday, Region};
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2026, 10, 3).unwrap(),
///     name: "Tag der Deutschen Einheit".to_string(),
///     region: Region::Berlin,
/// };
/// // 2026-10-03 is a Saturday
/// assert!(!holiday.falls_on_workday());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The German name of the holiday (e.g., "Fronleichnam").
    pub name: String,
    /// The region the holiday was resolved for.
    pub region: Region,
}

impl PublicHoliday {
    /// Returns `true` if the holiday falls on Monday through Friday.
    pub fn falls_on_workday(&self) -> bool {
        super::is_weekday(self.date)
    }
}

/// Workday counts for one year and region.
///
/// `gross_workdays` counts Monday-Friday slots that are not public holidays;
/// `holidays_on_workdays` counts Monday-Friday slots that are. Weekday slots
/// the holiday source could not classify are counted in `skipped_dates` and
/// belong to neither.
///
/// # Example
///
/// ```
/// use capacity_planner::models::{Region, WorkCalendar};
///
/// let calendar = WorkCalendar::new(2026, Region::Hessen, 220, 10);
/// assert_eq!(calendar.weekday_slots(), 230);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkCalendar {
    /// The calendar year.
    pub year: i32,
    /// The region whose holidays were applied.
    pub region: Region,
    /// Weekday slots that are not public holidays.
    pub gross_workdays: u32,
    /// Weekday slots that are public holidays.
    pub holidays_on_workdays: u32,
    /// Weekday slots the holiday source could not classify.
    #[serde(default)]
    pub skipped_dates: u32,
}

impl WorkCalendar {
    /// Creates a calendar with known counts and no skipped dates.
    pub fn new(year: i32, region: Region, gross_workdays: u32, holidays_on_workdays: u32) -> Self {
        Self {
            year,
            region,
            gross_workdays,
            holidays_on_workdays,
            skipped_dates: 0,
        }
    }

    /// Returns the number of classified weekday slots.
    pub fn weekday_slots(&self) -> u32 {
        self.gross_workdays + self.holidays_on_workdays
    }
}
