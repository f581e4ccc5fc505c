//! The holiday source abstraction.

use chrono::{Datelike, NaiveDate};

use crate::error::EngineResult;
use crate::models::{PublicHoliday, Region};

/// A read-only source of public holiday data.
///
/// Implementations must be deterministic and safe to share between threads.
/// A lookup that cannot be answered (e.g. an unsupported year) returns an
/// error; callers decide whether that aborts or merely skips the date.
pub trait HolidaySource: Send + Sync {
    /// Returns `true` if `date` is a public holiday in `region`.
    fn is_public_holiday(&self, date: NaiveDate, region: Region) -> EngineResult<bool>;

    /// Lists the public holidays of `region` in `year`, ordered by date.
    ///
    /// The default implementation probes every day of the year and names
    /// each hit "Public holiday"; sources that know holiday names override
    /// it. The first failed lookup aborts the listing.
    fn holidays_in_year(&self, year: i32, region: Region) -> EngineResult<Vec<PublicHoliday>> {
        let mut holidays = Vec::new();
        let Some(first_day) = NaiveDate::from_ymd_opt(year, 1, 1) else {
            return Ok(holidays);
        };

        for date in first_day.iter_days().take_while(|date| date.year() == year) {
            if self.is_public_holiday(date, region)? {
                holidays.push(PublicHoliday {
                    date,
                    name: "Public holiday".to_string(),
                    region,
                });
            }
        }
        Ok(holidays)
    }
}

impl<T: HolidaySource + ?Sized> HolidaySource for &T {
    fn is_public_holiday(&self, date: NaiveDate, region: Region) -> EngineResult<bool> {
        (**self).is_public_holiday(date, region)
    }

    fn holidays_in_year(&self, year: i32, region: Region) -> EngineResult<Vec<PublicHoliday>> {
        (**self).holidays_in_year(year, region)
    }
}

impl<T: HolidaySource + ?Sized> HolidaySource for std::sync::Arc<T> {
    fn is_public_holiday(&self, date: NaiveDate, region: Region) -> EngineResult<bool> {
        (**self).is_public_holiday(date, region)
    }

    fn holidays_in_year(&self, year: i32, region: Region) -> EngineResult<Vec<PublicHoliday>> {
        (**self).holidays_in_year(year, region)
    }
}
