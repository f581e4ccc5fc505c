//! Workday classification for a calendar year.

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use crate::models::{Region, WorkCalendar, is_weekday};

use super::HolidaySource;

/// Classifies every day of `year` and counts workdays and weekday holidays.
///
/// Weekends are always excluded. Each Monday-Friday date is looked up in
/// `holidays`: holidays count towards `holidays_on_workdays`, all other
/// weekdays towards `gross_workdays`. A failed lookup skips that single date
/// (counted in `skipped_dates`) instead of aborting.
///
/// Leap years are handled: all 366 days of a leap year are enumerated.
///
/// # Example
///
/// ```
/// use capacity_planner::calendar::{GermanHolidays, resolve_work_calendar};
/// use capacity_planner::models::Region;
///
/// let calendar = resolve_work_calendar(2025, Region::NordrheinWestfalen, &GermanHolidays);
/// assert_eq!(calendar.gross_workdays, 251);
/// assert_eq!(calendar.holidays_on_workdays, 10);
/// ```
pub fn resolve_work_calendar<S>(year: i32, region: Region, holidays: &S) -> WorkCalendar
where
    S: HolidaySource + ?Sized,
{
    let mut calendar = WorkCalendar::new(year, region, 0, 0);

    let Some(first_day) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        warn!(year, region = %region, "Year cannot be represented; no days classified");
        return calendar;
    };

    for date in first_day
        .iter_days()
        .take_while(|date| date.year() == year)
        .filter(|date| is_weekday(*date))
    {
        match holidays.is_public_holiday(date, region) {
            Ok(true) => calendar.holidays_on_workdays += 1,
            Ok(false) => calendar.gross_workdays += 1,
            Err(err) => {
                calendar.skipped_dates += 1;
                debug!(date = %date, error = %err, "Skipping unclassifiable date");
            }
        }
    }

    if calendar.skipped_dates > 0 {
        warn!(
            year,
            region = %region,
            skipped_dates = calendar.skipped_dates,
            "Holiday source could not classify some weekdays"
        );
    }

    calendar
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::GermanHolidays;
    use crate::error::{EngineError, EngineResult};

    /// Treats every Monday as a holiday and fails for the 1st of each month.
    struct MondaysOffFailingFirsts;

    impl HolidaySource for MondaysOffFailingFirsts {
        fn is_public_holiday(&self, date: NaiveDate, _region: Region) -> EngineResult<bool> {
            if date.day() == 1 {
                return Err(EngineError::CalendarLookup {
                    date,
                    message: "no data".to_string(),
                });
            }
            Ok(date.weekday() == chrono::Weekday::Mon)
        }
    }

    struct NoHolidays;

    impl HolidaySource for NoHolidays {
        fn is_public_holiday(&self, _date: NaiveDate, _region: Region) -> EngineResult<bool> {
            Ok(false)
        }
    }

    #[test]
    fn test_nw_2025() {
        let calendar = resolve_work_calendar(2025, Region::NordrheinWestfalen, &GermanHolidays);
        assert_eq!(calendar.gross_workdays, 251);
        assert_eq!(calendar.holidays_on_workdays, 10);
        assert_eq!(calendar.skipped_dates, 0);
    }

    #[test]
    fn test_leap_year_includes_december_31() {
        // 2024 has 262 weekdays; 31 Dec 2024 is a Tuesday
        let calendar = resolve_work_calendar(2024, Region::NordrheinWestfalen, &GermanHolidays);
        assert_eq!(calendar.gross_workdays, 251);
        assert_eq!(calendar.holidays_on_workdays, 11);

        let plain = resolve_work_calendar(2024, Region::NordrheinWestfalen, &NoHolidays);
        assert_eq!(plain.gross_workdays, 262);
    }

    #[test]
    fn test_regions_differ() {
        let saxony = resolve_work_calendar(2025, Region::Sachsen, &GermanHolidays);
        assert_eq!(saxony.gross_workdays, 250);
        assert_eq!(saxony.holidays_on_workdays, 11);

        let bavaria = resolve_work_calendar(2026, Region::Bayern, &GermanHolidays);
        assert_eq!(bavaria.gross_workdays, 252);
        assert_eq!(bavaria.holidays_on_workdays, 9);
    }

    #[test]
    fn test_lookup_failures_skip_dates() {
        let calendar = resolve_work_calendar(2025, Region::Berlin, &MondaysOffFailingFirsts);

        // 2025 has 261 weekdays
        let weekday_firsts = (1..=12)
            .filter(|m| is_weekday(NaiveDate::from_ymd_opt(2025, *m, 1).unwrap()))
            .count() as u32;
        assert_eq!(calendar.skipped_dates, weekday_firsts);
        assert_eq!(calendar.weekday_slots() + calendar.skipped_dates, 261);
        assert!(calendar.holidays_on_workdays > 0);
    }

    #[test]
    fn test_unsupported_year_skips_every_weekday() {
        let calendar = resolve_work_calendar(1980, Region::Hamburg, &GermanHolidays);
        assert_eq!(calendar.gross_workdays, 0);
        assert_eq!(calendar.holidays_on_workdays, 0);
        assert_eq!(calendar.skipped_dates, 262);
    }

    #[test]
    fn test_deterministic() {
        let first = resolve_work_calendar(2027, Region::Hessen, &GermanHolidays);
        let second = resolve_work_calendar(2027, Region::Hessen, &GermanHolidays);
        assert_eq!(first, second);
    }
}
