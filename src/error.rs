//! Error types for the capacity planner.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading profiles, resolving
//! work calendars and exporting results.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the capacity planner.
///
/// All fallible operations in the crate return this error type. Degenerate
/// arithmetic (zero workdays, zero weeks) is never an error; the engine
/// reports the dependent figure as `0` instead.
///
/// # Example
///
/// ```
/// use capacity_planner::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/profile.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/profile.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A calculation input field failed boundary validation.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A region code is not one of the supported federal states.
    #[error("Unknown region code: {code}")]
    UnknownRegion {
        /// The code that was not recognized.
        code: String,
    },

    /// A deduction unit string is not one of the recognized units.
    #[error("Unknown deduction unit: {unit}")]
    UnknownDeductionUnit {
        /// The unit string that was not recognized.
        unit: String,
    },

    /// The holiday source could not classify a date.
    #[error("Holiday lookup failed for {date}: {message}")]
    CalendarLookup {
        /// The date that could not be classified.
        date: NaiveDate,
        /// A description of the lookup failure.
        message: String,
    },

    /// Writing an export failed.
    #[error("Export failed: {message}")]
    Export {
        /// A description of the export failure.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/profile.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/profile.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = EngineError::invalid_input("buffer_rate_percent", "must be between 0 and 100");
        assert_eq!(
            error.to_string(),
            "Invalid input field 'buffer_rate_percent': must be between 0 and 100"
        );
    }

    #[test]
    fn test_unknown_region_displays_code() {
        let error = EngineError::UnknownRegion {
            code: "XX".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown region code: XX");
    }

    #[test]
    fn test_unknown_unit_displays_unit() {
        let error = EngineError::UnknownDeductionUnit {
            unit: "days".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown deduction unit: days");
    }

    #[test]
    fn test_calendar_lookup_displays_date_and_message() {
        let error = EngineError::CalendarLookup {
            date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            message: "year outside supported range".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Holiday lookup failed for 1990-01-01: year outside supported range"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unknown_region() -> EngineResult<()> {
            Err(EngineError::UnknownRegion {
                code: "ZZ".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_unknown_region()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
