//! Application state for the capacity planner API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calendar::{CalendarCache, GermanHolidays, HolidaySource};
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded planning profile, the holiday source and the calendar cache.
/// All of them are read-only apart from the cache, which synchronizes
/// internally.
#[derive(Clone)]
pub struct AppState {
    /// The loaded planning profile.
    config: Arc<ConfigLoader>,
    /// Where holiday data comes from.
    holidays: Arc<dyn HolidaySource>,
    /// Resolved calendars by year and region.
    calendars: Arc<CalendarCache>,
}

impl AppState {
    /// Creates a new application state with the statutory German holidays.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_holiday_source(config, Arc::new(GermanHolidays))
    }

    /// Creates a new application state with a custom holiday source.
    pub fn with_holiday_source(config: ConfigLoader, holidays: Arc<dyn HolidaySource>) -> Self {
        Self {
            config: Arc::new(config),
            holidays,
            calendars: Arc::new(CalendarCache::default()),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the holiday source.
    pub fn holidays(&self) -> &dyn HolidaySource {
        self.holidays.as_ref()
    }

    /// Returns the calendar cache.
    pub fn calendars(&self) -> &CalendarCache {
        &self.calendars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Region;

    #[test]
    fn test_app_state_is_clone() {
        // axum requires Clone state
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_calendar_cache() {
        let state = AppState::new(ConfigLoader::default());
        let clone = state.clone();

        state
            .calendars()
            .resolve(2026, Region::Saarland, state.holidays());
        assert_eq!(clone.calendars().len(), 1);
    }
}
