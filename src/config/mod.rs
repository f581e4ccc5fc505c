//! Configuration loading for the capacity planner.
//!
//! This module loads planning profiles from YAML files. A profile holds the
//! default parameters of a calculation; front ends override individual
//! values per request.
//!
//! # Example
//!
//! ```no_run
//! use capacity_planner::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default_profile.yaml").unwrap();
//! println!("Loaded profile: {}", config.profile().profile.name);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, current_year};
pub use types::{
    CalendarSettings, ContractSettings, MeetingSettings, PlanningProfile, ProfileMetadata,
    RateDeduction,
};
