//! Calculation input models.
//!
//! This module defines [`CalculationInput`], the immutable record a front end
//! hands to the engine, together with the user-defined [`DeductionItem`]s.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::Region;

/// Hours in a week; caps contractual, meeting and weekly deduction hours.
pub const HOURS_PER_WEEK: u32 = 168;

/// Hours in a leap year; caps yearly deduction items.
pub const HOURS_PER_LEAP_YEAR: u32 = 8784;

/// The unit a [`DeductionItem`] value is expressed in.
///
/// The German labels of the capacity form are accepted as aliases
/// when deserializing.
///
/// # Example
///
/// ```
/// use capacity_planner::models::DeductionUnit;
///
/// let unit: DeductionUnit = serde_json::from_str("\"weekly_hours\"").unwrap();
/// assert_eq!(unit, DeductionUnit::WeeklyHours);
///
/// let unit: DeductionUnit = serde_json::from_str("\"% vom Jahr\"").unwrap();
/// assert_eq!(unit, DeductionUnit::PercentOfBase);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionUnit {
    /// Hours per year, taken as-is.
    #[serde(alias = "Stunden / Jahr")]
    YearlyHours,
    /// Hours per week, multiplied by the net work weeks.
    #[serde(alias = "Stunden / Woche")]
    WeeklyHours,
    /// Percentage of the base percentage reference.
    #[serde(alias = "% vom Jahr")]
    PercentOfBase,
}

impl DeductionUnit {
    /// Returns the serialized identifier of the unit.
    pub fn as_str(self) -> &'static str {
        match self {
            DeductionUnit::YearlyHours => "yearly_hours",
            DeductionUnit::WeeklyHours => "weekly_hours",
            DeductionUnit::PercentOfBase => "percent_of_base",
        }
    }

    /// Returns the largest value an item in this unit may carry.
    pub fn max_value(self) -> Decimal {
        match self {
            DeductionUnit::YearlyHours => Decimal::from(HOURS_PER_LEAP_YEAR),
            DeductionUnit::WeeklyHours => Decimal::from(HOURS_PER_WEEK),
            DeductionUnit::PercentOfBase => Decimal::ONE_HUNDRED,
        }
    }

    /// Returns a short human-readable unit suffix.
    pub fn suffix(self) -> &'static str {
        match self {
            DeductionUnit::YearlyHours => "h/year",
            DeductionUnit::WeeklyHours => "h/week",
            DeductionUnit::PercentOfBase => "% of base",
        }
    }
}

impl fmt::Display for DeductionUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DeductionUnit {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "yearly_hours" | "Stunden / Jahr" => Ok(DeductionUnit::YearlyHours),
            "weekly_hours" | "Stunden / Woche" => Ok(DeductionUnit::WeeklyHours),
            "percent_of_base" | "% vom Jahr" => Ok(DeductionUnit::PercentOfBase),
            _ => Err(EngineError::UnknownDeductionUnit {
                unit: s.to_string(),
            }),
        }
    }
}

/// A user-defined deduction, e.g. training time or on-call duty.
///
/// Names are display labels only; items sharing a name are summed into one
/// breakdown entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionItem {
    /// The display label.
    pub name: String,
    /// The non-negative amount, interpreted according to `unit`.
    pub value: Decimal,
    /// The unit of `value`.
    pub unit: DeductionUnit,
}

impl DeductionItem {
    /// Creates a new deduction item.
    pub fn new(name: impl Into<String>, value: Decimal, unit: DeductionUnit) -> Self {
        Self {
            name: name.into(),
            value,
            unit,
        }
    }
}

/// All parameters of a single plannable-hours calculation.
///
/// Rates and hour figures are only meaningful when their `use_*` flag is set;
/// the engine ignores them otherwise.
///
/// # Example
///
/// ```
/// use capacity_planner::models::{CalculationInput, Region};
/// use rust_decimal::Decimal;
///
/// let input = CalculationInput {
///     year: 2026,
///     region: Region::NordrheinWestfalen,
///     weekly_contract_hours: Decimal::new(40, 0),
///     vacation_days: 30,
///     use_sick_leave: false,
///     sick_leave_rate_percent: Decimal::ZERO,
///     use_meetings: false,
///     meeting_hours_per_week: Decimal::ZERO,
///     use_buffer: true,
///     buffer_rate_percent: Decimal::new(10, 0),
///     additional_deductions: vec![],
/// };
/// assert!(input.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// The target calendar year.
    pub year: i32,
    /// The federal state whose holidays apply.
    pub region: Region,
    /// Contractual hours per week.
    pub weekly_contract_hours: Decimal,
    /// Vacation days, counted in workdays.
    pub vacation_days: u32,
    /// Whether sick leave is deducted.
    pub use_sick_leave: bool,
    /// Expected sick leave as a percentage of net hours.
    pub sick_leave_rate_percent: Decimal,
    /// Whether internal meetings are deducted.
    pub use_meetings: bool,
    /// Internal meeting hours per week.
    pub meeting_hours_per_week: Decimal,
    /// Whether an unplanned-work buffer is deducted.
    pub use_buffer: bool,
    /// Buffer as a percentage of the hours left before the buffer.
    pub buffer_rate_percent: Decimal,
    /// User-defined deductions, in display order.
    #[serde(default)]
    pub additional_deductions: Vec<DeductionItem>,
}

impl CalculationInput {
    /// Validates the input at the boundary, before it reaches the engine.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] naming the first offending field:
    /// - `weekly_contract_hours` not in `(0, 168]`
    /// - `sick_leave_rate_percent` or `buffer_rate_percent` outside `[0, 100]`
    /// - `meeting_hours_per_week` not in `[0, 168]`
    /// - a deduction item value negative or above its unit's
    ///   [`max_value`](DeductionUnit::max_value)
    pub fn validate(&self) -> EngineResult<()> {
        if self.weekly_contract_hours <= Decimal::ZERO {
            return Err(EngineError::invalid_input(
                "weekly_contract_hours",
                "must be greater than 0",
            ));
        }
        if self.weekly_contract_hours > Decimal::from(HOURS_PER_WEEK) {
            return Err(EngineError::invalid_input(
                "weekly_contract_hours",
                format!("must not exceed {}", HOURS_PER_WEEK),
            ));
        }
        validate_percent("sick_leave_rate_percent", self.sick_leave_rate_percent)?;
        if self.meeting_hours_per_week < Decimal::ZERO {
            return Err(EngineError::invalid_input(
                "meeting_hours_per_week",
                "must not be negative",
            ));
        }
        if self.meeting_hours_per_week > Decimal::from(HOURS_PER_WEEK) {
            return Err(EngineError::invalid_input(
                "meeting_hours_per_week",
                format!("must not exceed {}", HOURS_PER_WEEK),
            ));
        }
        validate_percent("buffer_rate_percent", self.buffer_rate_percent)?;

        for (index, item) in self.additional_deductions.iter().enumerate() {
            if item.value < Decimal::ZERO {
                return Err(EngineError::invalid_input(
                    format!("additional_deductions[{}].value", index),
                    format!("deduction '{}' must not be negative", item.name),
                ));
            }
            if item.value > item.unit.max_value() {
                return Err(EngineError::invalid_input(
                    format!("additional_deductions[{}].value", index),
                    format!(
                        "deduction '{}' must not exceed {} {}",
                        item.name,
                        item.unit.max_value(),
                        item.unit.suffix()
                    ),
                ));
            }
        }

        Ok(())
    }
}

fn validate_percent(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(EngineError::invalid_input(
            field,
            "must be between 0 and 100",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> CalculationInput {
        CalculationInput {
            year: 2026,
            region: Region::NordrheinWestfalen,
            weekly_contract_hours: Decimal::new(40, 0),
            vacation_days: 30,
            use_sick_leave: true,
            sick_leave_rate_percent: Decimal::new(8, 0),
            use_meetings: true,
            meeting_hours_per_week: Decimal::new(25, 1),
            use_buffer: true,
            buffer_rate_percent: Decimal::new(10, 0),
            additional_deductions: vec![],
        }
    }

    fn assert_invalid_field(input: &CalculationInput, expected_field: &str) {
        match input.validate() {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("Expected InvalidInput for {}, got {:?}", expected_field, other),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn test_zero_weekly_hours_rejected() {
        let mut input = valid_input();
        input.weekly_contract_hours = Decimal::ZERO;
        assert_invalid_field(&input, "weekly_contract_hours");
    }

    #[test]
    fn test_weekly_hours_above_week_rejected() {
        let mut input = valid_input();
        input.weekly_contract_hours = Decimal::new(169, 0);
        assert_invalid_field(&input, "weekly_contract_hours");
    }

    #[test]
    fn test_sick_rate_above_100_rejected() {
        let mut input = valid_input();
        input.sick_leave_rate_percent = Decimal::new(1001, 1);
        assert_invalid_field(&input, "sick_leave_rate_percent");
    }

    #[test]
    fn test_negative_buffer_rate_rejected() {
        let mut input = valid_input();
        input.buffer_rate_percent = Decimal::new(-1, 0);
        assert_invalid_field(&input, "buffer_rate_percent");
    }

    #[test]
    fn test_boundary_rates_accepted() {
        let mut input = valid_input();
        input.sick_leave_rate_percent = Decimal::ZERO;
        input.buffer_rate_percent = Decimal::ONE_HUNDRED;
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_negative_meeting_hours_rejected() {
        let mut input = valid_input();
        input.meeting_hours_per_week = Decimal::new(-5, 1);
        assert_invalid_field(&input, "meeting_hours_per_week");
    }

    #[test]
    fn test_negative_deduction_value_rejected() {
        let mut input = valid_input();
        input.additional_deductions = vec![
            DeductionItem::new("Training", Decimal::new(40, 0), DeductionUnit::YearlyHours),
            DeductionItem::new("On-call", Decimal::new(-2, 0), DeductionUnit::WeeklyHours),
        ];
        assert_invalid_field(&input, "additional_deductions[1].value");
    }

    #[test]
    fn test_meeting_hours_above_week_rejected() {
        let mut input = valid_input();
        input.meeting_hours_per_week = Decimal::from_str("10000000000000000000000000000").unwrap();
        assert_invalid_field(&input, "meeting_hours_per_week");
    }

    #[test]
    fn test_deduction_values_capped_per_unit() {
        let cases = [
            (DeductionUnit::YearlyHours, "8784.1"),
            (DeductionUnit::WeeklyHours, "168.5"),
            (DeductionUnit::PercentOfBase, "100.01"),
            (DeductionUnit::WeeklyHours, "10000000000000000000000000000"),
        ];

        for (unit, value) in cases {
            let mut input = valid_input();
            input.additional_deductions = vec![DeductionItem::new(
                "Training",
                Decimal::from_str(value).unwrap(),
                unit,
            )];
            assert_invalid_field(&input, "additional_deductions[0].value");
        }
    }

    #[test]
    fn test_deduction_values_at_cap_accepted() {
        let mut input = valid_input();
        input.meeting_hours_per_week = Decimal::from(HOURS_PER_WEEK);
        input.additional_deductions = vec![
            DeductionItem::new(
                "Support",
                Decimal::from(HOURS_PER_LEAP_YEAR),
                DeductionUnit::YearlyHours,
            ),
            DeductionItem::new(
                "On-call",
                Decimal::from(HOURS_PER_WEEK),
                DeductionUnit::WeeklyHours,
            ),
            DeductionItem::new(
                "Administration",
                Decimal::ONE_HUNDRED,
                DeductionUnit::PercentOfBase,
            ),
        ];
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_unit_parses_identifiers_and_german_labels() {
        assert_eq!(
            "yearly_hours".parse::<DeductionUnit>().unwrap(),
            DeductionUnit::YearlyHours
        );
        assert_eq!(
            "Stunden / Woche".parse::<DeductionUnit>().unwrap(),
            DeductionUnit::WeeklyHours
        );
        assert_eq!(
            "% vom Jahr".parse::<DeductionUnit>().unwrap(),
            DeductionUnit::PercentOfBase
        );
    }

    #[test]
    fn test_unknown_unit_rejected() {
        match "days_per_year".parse::<DeductionUnit>() {
            Err(EngineError::UnknownDeductionUnit { unit }) => assert_eq!(unit, "days_per_year"),
            other => panic!("Expected UnknownDeductionUnit, got {:?}", other),
        }
        assert!(serde_json::from_str::<DeductionUnit>("\"days_per_year\"").is_err());
    }

    #[test]
    fn test_deserialize_input_from_json() {
        let json = r#"{
            "year": 2026,
            "region": "BY",
            "weekly_contract_hours": 38.5,
            "vacation_days": 28,
            "use_sick_leave": false,
            "sick_leave_rate_percent": 0,
            "use_meetings": true,
            "meeting_hours_per_week": "2.5",
            "use_buffer": false,
            "buffer_rate_percent": 0,
            "additional_deductions": [
                { "name": "Training", "value": 40, "unit": "yearly_hours" }
            ]
        }"#;

        let input: CalculationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.region, Region::Bayern);
        assert_eq!(input.weekly_contract_hours, Decimal::new(385, 1));
        assert_eq!(input.meeting_hours_per_week, Decimal::new(25, 1));
        assert_eq!(input.additional_deductions.len(), 1);
        assert_eq!(input.additional_deductions[0].unit, DeductionUnit::YearlyHours);
    }
}
