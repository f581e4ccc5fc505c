//! Public holidays of the German federal states.
//!
//! Holidays are either fixed-date or defined relative to Easter Sunday, which
//! is computed with Oudin's algorithm for the Gregorian calendar.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::{PublicHoliday, Region};

use super::HolidaySource;

/// First year the holiday rules are defined for.
pub const FIRST_SUPPORTED_YEAR: i32 = 1995;

/// Last year the holiday rules are defined for.
pub const LAST_SUPPORTED_YEAR: i32 = 2099;

/// Statutory public holidays for the 16 German federal states.
///
/// Nationwide holidays apply everywhere; state holidays follow the current
/// state laws, including the introductions of Reformation Day in the northern
/// states (2018), International Women's Day in Berlin (2019) and
/// Mecklenburg-Vorpommern (2023), and World Children's Day in Thuringia
/// (2019). Holidays observed only in individual municipalities are not
/// included.
///
/// # Example
///
/// ```
/// use capacity_planner::calendar::{GermanHolidays, HolidaySource};
/// use capacity_planner::models::Region;
/// use chrono::NaiveDate;
///
/// let holidays = GermanHolidays;
/// let corpus_christi = NaiveDate::from_ymd_opt(2026, 6, 4).unwrap();
///
/// assert!(holidays.is_public_holiday(corpus_christi, Region::NordrheinWestfalen).unwrap());
/// assert!(!holidays.is_public_holiday(corpus_christi, Region::Berlin).unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GermanHolidays;

impl GermanHolidays {
    /// Returns `true` if the rules cover `year`.
    pub fn supports_year(year: i32) -> bool {
        (FIRST_SUPPORTED_YEAR..=LAST_SUPPORTED_YEAR).contains(&year)
    }

    /// Lists the public holidays of `region` in `year`, ordered by date.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CalendarLookup`] if the year is outside
    /// [`FIRST_SUPPORTED_YEAR`]..=[`LAST_SUPPORTED_YEAR`].
    pub fn holidays_for(&self, year: i32, region: Region) -> EngineResult<Vec<PublicHoliday>> {
        let holidays = holiday_dates(year, region)?
            .into_iter()
            .map(|(date, name)| PublicHoliday {
                date,
                name: name.to_string(),
                region,
            })
            .collect();
        Ok(holidays)
    }
}

impl HolidaySource for GermanHolidays {
    fn is_public_holiday(&self, date: NaiveDate, region: Region) -> EngineResult<bool> {
        let dates = holiday_dates(date.year(), region)?;
        Ok(dates.iter().any(|(holiday, _)| *holiday == date))
    }

    fn holidays_in_year(&self, year: i32, region: Region) -> EngineResult<Vec<PublicHoliday>> {
        self.holidays_for(year, region)
    }
}

/// Computes Easter Sunday for a Gregorian year.
///
/// # Example
///
/// ```
/// use capacity_planner::calendar::easter_sunday;
/// use chrono::NaiveDate;
///
/// assert_eq!(easter_sunday(2025), NaiveDate::from_ymd_opt(2025, 4, 20));
/// ```
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let g = year % 19;
    let c = year / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (year + year / 4 + i + 2 - c + c / 4) % 7;
    let p = i - j;
    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

fn unsupported(date: NaiveDate, message: String) -> EngineError {
    EngineError::CalendarLookup { date, message }
}

fn holiday_dates(year: i32, region: Region) -> EngineResult<Vec<(NaiveDate, &'static str)>> {
    use Region::*;

    let new_year = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(NaiveDate::MIN);
    if !GermanHolidays::supports_year(year) {
        return Err(unsupported(
            new_year,
            format!(
                "year {} outside supported range {}-{}",
                year, FIRST_SUPPORTED_YEAR, LAST_SUPPORTED_YEAR
            ),
        ));
    }

    let date = |month: u32, day: u32| {
        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| unsupported(new_year, format!("invalid date {}-{}-{}", year, month, day)))
    };
    let easter = easter_sunday(year)
        .ok_or_else(|| unsupported(new_year, format!("no Easter date for {}", year)))?;
    let after_easter = |days: i64| easter + Duration::days(days);

    let mut days = vec![
        (date(1, 1)?, "Neujahr"),
        (after_easter(-2), "Karfreitag"),
        (after_easter(1), "Ostermontag"),
        (date(5, 1)?, "Tag der Arbeit"),
        (after_easter(39), "Christi Himmelfahrt"),
        (after_easter(50), "Pfingstmontag"),
        (date(10, 3)?, "Tag der Deutschen Einheit"),
        (date(12, 25)?, "Erster Weihnachtstag"),
        (date(12, 26)?, "Zweiter Weihnachtstag"),
    ];

    if matches!(region, BadenWuerttemberg | Bayern | SachsenAnhalt) {
        days.push((date(1, 6)?, "Heilige Drei Könige"));
    }
    if (region == Berlin && year >= 2019) || (region == MecklenburgVorpommern && year >= 2023) {
        days.push((date(3, 8)?, "Internationaler Frauentag"));
    }
    if region == Brandenburg {
        days.push((easter, "Ostersonntag"));
        days.push((after_easter(49), "Pfingstsonntag"));
    }
    // One-off anniversaries of the end of the Second World War.
    if region == Berlin && (year == 2020 || year == 2025) {
        days.push((date(5, 8)?, "Tag der Befreiung"));
    }
    if matches!(
        region,
        BadenWuerttemberg | Bayern | Hessen | NordrheinWestfalen | RheinlandPfalz | Saarland
    ) {
        days.push((after_easter(60), "Fronleichnam"));
    }
    if region == Saarland {
        days.push((date(8, 15)?, "Mariä Himmelfahrt"));
    }
    if region == Thueringen && year >= 2019 {
        days.push((date(9, 20)?, "Weltkindertag"));
    }
    if observes_reformation_day(year, region) {
        days.push((date(10, 31)?, "Reformationstag"));
    }
    if matches!(
        region,
        BadenWuerttemberg | Bayern | NordrheinWestfalen | RheinlandPfalz | Saarland
    ) {
        days.push((date(11, 1)?, "Allerheiligen"));
    }
    if region == Sachsen {
        days.push((repentance_day(date(11, 22)?), "Buß- und Bettag"));
    }

    days.sort_by_key(|(date, _)| *date);
    Ok(days)
}

fn observes_reformation_day(year: i32, region: Region) -> bool {
    use Region::*;

    match region {
        Brandenburg | MecklenburgVorpommern | Sachsen | SachsenAnhalt | Thueringen => true,
        Bremen | Hamburg | Niedersachsen | SchleswigHolstein => year >= 2017,
        // 500th anniversary of the Reformation, observed nationwide.
        _ => year == 2017,
    }
}

/// The Wednesday before 23 November, given 22 November.
fn repentance_day(november_22: NaiveDate) -> NaiveDate {
    let days_since_wednesday = (november_22.weekday().num_days_from_monday() + 5) % 7;
    november_22 - Duration::days(i64::from(days_since_wednesday))
}
