//! Memoization of resolved work calendars.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use tracing::debug;

use crate::models::{Region, WorkCalendar};

use super::{HolidaySource, resolve_work_calendar};

/// Default number of calendars kept: every state for 128 years.
pub const DEFAULT_CACHE_CAPACITY: usize = 16 * 128;

/// Caches [`WorkCalendar`]s by `(year, region)`.
///
/// Only calendars are cached, never calculation results. A calendar with
/// skipped dates or no classified days is returned but not stored, and once `capacity` calendars
/// are held new ones are resolved on every call.
///
/// # Example
///
/// ```
/// use capacity_planner::calendar::{CalendarCache, GermanHolidays};
/// use capacity_planner::models::Region;
///
/// let cache = CalendarCache::default();
/// let first = cache.resolve(2026, Region::Hamburg, &GermanHolidays);
/// let second = cache.resolve(2026, Region::Hamburg, &GermanHolidays);
/// assert_eq!(first, second);
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug)]
pub struct CalendarCache {
    calendars: RwLock<HashMap<(i32, Region), WorkCalendar>>,
    capacity: usize,
}

impl Default for CalendarCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }
}

impl CalendarCache {
    /// Creates a cache holding at most `capacity` calendars.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            calendars: RwLock::new(HashMap::new()),
            capacity,
        }
    }

    /// Returns the cached calendar or resolves and stores it.
    pub fn resolve<S>(&self, year: i32, region: Region, holidays: &S) -> WorkCalendar
    where
        S: HolidaySource + ?Sized,
    {
        let key = (year, region);
        if let Some(calendar) = self
            .calendars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return *calendar;
        }

        debug!(year, region = %region, "Resolving work calendar");
        let calendar = resolve_work_calendar(year, region, holidays);
        if calendar.skipped_dates > 0 || calendar.weekday_slots() == 0 {
            return calendar;
        }

        let mut calendars = self.calendars.write().unwrap_or_else(PoisonError::into_inner);
        if calendars.len() < self.capacity {
            calendars.insert(key, calendar);
        } else {
            debug!(year, region = %region, capacity = self.capacity, "Calendar cache full");
        }
        calendar
    }

    /// Returns the number of cached calendars.
    pub fn len(&self) -> usize {
        self.calendars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::GermanHolidays;
    use crate::error::EngineResult;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingSource {
        lookups: AtomicUsize,
    }

    impl HolidaySource for CountingSource {
        fn is_public_holiday(&self, _date: NaiveDate, _region: Region) -> EngineResult<bool> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            Ok(false)
        }
    }

    #[test]
    fn test_second_resolve_hits_cache() {
        let source = CountingSource::default();
        let cache = CalendarCache::default();

        let first = cache.resolve(2025, Region::Bremen, &source);
        let lookups_after_first = source.lookups.load(Ordering::SeqCst);
        let second = cache.resolve(2025, Region::Bremen, &source);

        assert_eq!(first, second);
        assert_eq!(lookups_after_first, 261);
        assert_eq!(source.lookups.load(Ordering::SeqCst), 261);
    }

    #[test]
    fn test_keys_by_year_and_region() {
        let source = CountingSource::default();
        let cache = CalendarCache::default();
        assert!(cache.is_empty());

        cache.resolve(2025, Region::Bremen, &source);
        cache.resolve(2026, Region::Bremen, &source);
        cache.resolve(2025, Region::Hessen, &source);

        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_incomplete_calendar_not_cached() {
        let cache = CalendarCache::default();

        let calendar = cache.resolve(1980, Region::Bayern, &GermanHolidays);

        assert_eq!(calendar.skipped_dates, 262);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_unrepresentable_year_not_cached() {
        let cache = CalendarCache::default();

        let calendar = cache.resolve(i32::MAX, Region::Bayern, &GermanHolidays);

        assert_eq!(calendar.weekday_slots(), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_capacity_bounds_entries() {
        let source = CountingSource::default();
        let cache = CalendarCache::with_capacity(2);

        for year in 2025..2030 {
            cache.resolve(year, Region::Bremen, &source);
        }
        assert_eq!(cache.len(), 2);

        // a cached year is still served from memory
        let lookups = source.lookups.load(Ordering::SeqCst);
        cache.resolve(2025, Region::Bremen, &source);
        assert_eq!(source.lookups.load(Ordering::SeqCst), lookups);
    }
}
