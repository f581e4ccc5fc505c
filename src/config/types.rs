//! Configuration types for planning profiles.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from a planning profile YAML file. Every section and
//! field is optional; missing values fall back to the defaults of the
//! capacity form (NW, 40 h/week, 30 vacation days, 8 % sick leave,
//! 2.5 h/week meetings, 10 % buffer).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CalculationInput, DeductionItem, Region};

/// Metadata about the profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileMetadata {
    /// The human-readable name of the profile.
    pub name: String,
    /// An optional description, e.g. the team it applies to.
    pub description: Option<String>,
}

impl Default for ProfileMetadata {
    fn default() -> Self {
        Self {
            name: "Default capacity profile".to_string(),
            description: None,
        }
    }
}

/// Which calendar to plan against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarSettings {
    /// The federal state whose holidays apply.
    pub region: Region,
    /// The calendar year; the current year when omitted.
    pub year: Option<i32>,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            region: Region::NordrheinWestfalen,
            year: None,
        }
    }
}

/// Contractual working time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractSettings {
    /// Contractual hours per week.
    pub weekly_hours: Decimal,
    /// Vacation days per year.
    pub vacation_days: u32,
}

impl Default for ContractSettings {
    fn default() -> Self {
        Self {
            weekly_hours: Decimal::new(40, 0),
            vacation_days: 30,
        }
    }
}

/// A percentage deduction that can be switched on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateDeduction {
    /// Whether the deduction applies.
    pub enabled: bool,
    /// The rate in percent.
    pub rate_percent: Decimal,
}

/// Internal meetings that can be switched on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeetingSettings {
    /// Whether meetings are deducted.
    pub enabled: bool,
    /// Meeting hours per week.
    pub hours_per_week: Decimal,
}

impl Default for MeetingSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            hours_per_week: Decimal::new(25, 1),
        }
    }
}

fn default_sick_leave() -> RateDeduction {
    RateDeduction {
        enabled: true,
        rate_percent: Decimal::new(8, 0),
    }
}

fn default_buffer() -> RateDeduction {
    RateDeduction {
        enabled: true,
        rate_percent: Decimal::new(10, 0),
    }
}

/// A planning profile: default parameters for a calculation.
///
/// # Example
///
/// ```
/// use capacity_planner::config::PlanningProfile;
/// use capacity_planner::models::Region;
///
/// let profile: PlanningProfile = serde_yaml::from_str("calendar:\n  region: BY\n").unwrap();
/// assert_eq!(profile.calendar.region, Region::Bayern);
/// assert_eq!(profile.contract.vacation_days, 30);
///
/// let input = profile.to_input(2026);
/// assert_eq!(input.year, 2026);
/// assert!(input.use_buffer);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningProfile {
    /// Profile metadata.
    #[serde(default)]
    pub profile: ProfileMetadata,
    /// Calendar settings.
    #[serde(default)]
    pub calendar: CalendarSettings,
    /// Contract settings.
    #[serde(default)]
    pub contract: ContractSettings,
    /// Sick leave as a percentage of net hours.
    #[serde(default = "default_sick_leave")]
    pub sick_leave: RateDeduction,
    /// Internal meetings.
    #[serde(default)]
    pub meetings: MeetingSettings,
    /// Buffer for unplanned work.
    #[serde(default = "default_buffer")]
    pub buffer: RateDeduction,
    /// User-defined deductions applied to every calculation.
    #[serde(default)]
    pub additional_deductions: Vec<DeductionItem>,
}

impl Default for PlanningProfile {
    fn default() -> Self {
        Self {
            profile: ProfileMetadata::default(),
            calendar: CalendarSettings::default(),
            contract: ContractSettings::default(),
            sick_leave: default_sick_leave(),
            meetings: MeetingSettings::default(),
            buffer: default_buffer(),
            additional_deductions: Vec::new(),
        }
    }
}

impl PlanningProfile {
    /// Builds a calculation input from the profile.
    ///
    /// # Arguments
    ///
    /// * `current_year` - Used when the profile does not pin a year
    pub fn to_input(&self, current_year: i32) -> CalculationInput {
        CalculationInput {
            year: self.calendar.year.unwrap_or(current_year),
            region: self.calendar.region,
            weekly_contract_hours: self.contract.weekly_hours,
            vacation_days: self.contract.vacation_days,
            use_sick_leave: self.sick_leave.enabled,
            sick_leave_rate_percent: self.sick_leave.rate_percent,
            use_meetings: self.meetings.enabled,
            meeting_hours_per_week: self.meetings.hours_per_week,
            use_buffer: self.buffer.enabled,
            buffer_rate_percent: self.buffer.rate_percent,
            additional_deductions: self.additional_deductions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DeductionUnit;

    #[test]
    fn test_defaults_match_capacity_form() {
        let input = PlanningProfile::default().to_input(2026);

        assert_eq!(input.region, Region::NordrheinWestfalen);
        assert_eq!(input.weekly_contract_hours, Decimal::new(40, 0));
        assert_eq!(input.vacation_days, 30);
        assert!(input.use_sick_leave);
        assert_eq!(input.sick_leave_rate_percent, Decimal::new(8, 0));
        assert!(input.use_meetings);
        assert_eq!(input.meeting_hours_per_week, Decimal::new(25, 1));
        assert!(input.use_buffer);
        assert_eq!(input.buffer_rate_percent, Decimal::new(10, 0));
        assert!(input.additional_deductions.is_empty());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let profile: PlanningProfile = serde_yaml::from_str("{}").unwrap();
        assert_eq!(profile, PlanningProfile::default());
    }

    #[test]
    fn test_pinned_year_wins_over_current_year() {
        let yaml = "calendar:\n  region: SN\n  year: 2027\n";
        let profile: PlanningProfile = serde_yaml::from_str(yaml).unwrap();

        let input = profile.to_input(2026);
        assert_eq!(input.year, 2027);
        assert_eq!(input.region, Region::Sachsen);
    }

    #[test]
    fn test_full_profile_parses() {
        let yaml = r#"
profile:
  name: Platform team
  description: Part-time contracts
calendar:
  region: HH
contract:
  weekly_hours: 30
  vacation_days: 28
sick_leave:
  enabled: false
  rate_percent: 0
meetings:
  enabled: true
  hours_per_week: 4
buffer:
  enabled: true
  rate_percent: 15
additional_deductions:
  - name: Training
    value: 40
    unit: yearly_hours
  - name: On-call
    value: 2
    unit: "Stunden / Woche"
"#;
        let profile: PlanningProfile = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(profile.profile.name, "Platform team");
        assert_eq!(profile.contract.weekly_hours, Decimal::new(30, 0));
        assert!(!profile.sick_leave.enabled);
        assert_eq!(profile.buffer.rate_percent, Decimal::new(15, 0));
        assert_eq!(profile.additional_deductions.len(), 2);
        assert_eq!(
            profile.additional_deductions[1].unit,
            DeductionUnit::WeeklyHours
        );
    }
}
