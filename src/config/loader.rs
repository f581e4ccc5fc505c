//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading planning
//! profiles from YAML files.

use std::fs;
use std::path::Path;

use chrono::{Datelike, Utc};

use crate::error::{EngineError, EngineResult};
use crate::models::CalculationInput;

use super::types::PlanningProfile;

/// Loads and provides access to a planning profile.
///
/// A profile is validated when it is loaded, so an out-of-range rate in the
/// YAML file is reported as a parse error instead of surfacing later as a
/// failed calculation.
///
/// # Example
///
/// ```no_run
/// use capacity_planner::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default_profile.yaml").unwrap();
/// println!("Loaded profile: {}", loader.profile().profile.name);
///
/// let input = loader.default_input();
/// println!("Planning {} for {}", input.year, input.region);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    profile: PlanningProfile,
}

impl ConfigLoader {
    /// Loads a planning profile from the specified file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the profile (e.g., "./config/default_profile.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML or unknown region/unit codes
    /// - A value is out of range (e.g. a rate above 100 %)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use capacity_planner::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default_profile.yaml")?;
    /// # Ok::<(), capacity_planner::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let profile = Self::load_yaml::<PlanningProfile>(path)?;
        Self::from_profile(profile, &path.display().to_string())
    }

    /// Parses a planning profile from a YAML string.
    ///
    /// `origin` names the source in error messages.
    pub fn from_yaml_str(yaml: &str, origin: &str) -> EngineResult<Self> {
        let profile: PlanningProfile =
            serde_yaml::from_str(yaml).map_err(|e| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;
        Self::from_profile(profile, origin)
    }

    fn from_profile(profile: PlanningProfile, origin: &str) -> EngineResult<Self> {
        profile
            .to_input(current_year())
            .validate()
            .map_err(|e| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self { profile })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded planning profile.
    pub fn profile(&self) -> &PlanningProfile {
        &self.profile
    }

    /// Returns the profile as a calculation input for the current year,
    /// unless the profile pins a year.
    pub fn default_input(&self) -> CalculationInput {
        self.profile.to_input(current_year())
    }
}

/// Returns the current calendar year (UTC).
pub fn current_year() -> i32 {
    Utc::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Region;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_path() -> &'static str {
        "./config/default_profile.yaml"
    }

    fn write_profile(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_shipped_profile() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        let input = loader.default_input();
        assert_eq!(input.region, Region::NordrheinWestfalen);
        assert_eq!(input.weekly_contract_hours, Decimal::new(40, 0));
        assert_eq!(input.vacation_days, 30);
        assert_eq!(input.year, current_year());
    }

    #[test]
    fn test_load_profile_from_file() {
        let file = write_profile("calendar:\n  region: BE\n  year: 2025\ncontract:\n  vacation_days: 25\n");

        let loader = ConfigLoader::load(file.path()).unwrap();
        let input = loader.default_input();

        assert_eq!(input.region, Region::Berlin);
        assert_eq!(input.year, 2025);
        assert_eq!(input.vacation_days, 25);
        assert_eq!(input.weekly_contract_hours, Decimal::new(40, 0));
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/profile.yaml");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("profile.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let file = write_profile("contract: [unclosed\n");

        match ConfigLoader::load(file.path()) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert_eq!(path, file.path().display().to_string());
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_region_returns_parse_error() {
        let result = ConfigLoader::from_yaml_str("calendar:\n  region: XX\n", "inline");

        match result {
            Err(EngineError::ConfigParseError { path, .. }) => assert_eq!(path, "inline"),
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_rate_returns_parse_error() {
        let yaml = "buffer:\n  enabled: true\n  rate_percent: 120\n";

        match ConfigLoader::from_yaml_str(yaml, "inline") {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("buffer_rate_percent"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_default_loader_uses_form_defaults() {
        let loader = ConfigLoader::default();
        assert_eq!(loader.profile().profile.name, "Default capacity profile");
        assert!(loader.default_input().use_meetings);
    }
}
