//! Request types for the capacity planner API.
//!
//! This module defines the JSON request structure shared by the
//! `/calculate` and `/calculate/csv` endpoints. Every field is optional;
//! missing fields are taken from the loaded planning profile.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{CalculationInput, DeductionItem, DeductionUnit, Region};

/// Request body for the calculation endpoints.
///
/// # Example
///
/// ```
/// use capacity_planner::api::CalculationRequest;
/// use capacity_planner::config::PlanningProfile;
/// use capacity_planner::models::Region;
///
/// let request: CalculationRequest =
///     serde_json::from_str(r#"{ "region": "by", "vacation_days": 28 }"#).unwrap();
/// let input = request.into_input(PlanningProfile::default().to_input(2026)).unwrap();
///
/// assert_eq!(input.region, Region::Bayern);
/// assert_eq!(input.vacation_days, 28);
/// assert_eq!(input.year, 2026);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The calendar year.
    #[serde(default)]
    pub year: Option<i32>,
    /// The two-letter state code, case-insensitive.
    #[serde(default)]
    pub region: Option<String>,
    /// Contractual hours per week.
    #[serde(default)]
    pub weekly_contract_hours: Option<Decimal>,
    /// Vacation days per year.
    #[serde(default)]
    pub vacation_days: Option<u32>,
    /// Whether sick leave is deducted.
    #[serde(default)]
    pub use_sick_leave: Option<bool>,
    /// Sick leave rate in percent.
    #[serde(default)]
    pub sick_leave_rate_percent: Option<Decimal>,
    /// Whether meetings are deducted.
    #[serde(default)]
    pub use_meetings: Option<bool>,
    /// Meeting hours per week.
    #[serde(default)]
    pub meeting_hours_per_week: Option<Decimal>,
    /// Whether the buffer is deducted.
    #[serde(default)]
    pub use_buffer: Option<bool>,
    /// Buffer rate in percent.
    #[serde(default)]
    pub buffer_rate_percent: Option<Decimal>,
    /// User-defined deductions; replaces the profile's list when present.
    #[serde(default)]
    pub additional_deductions: Option<Vec<DeductionItemRequest>>,
}

/// A user-defined deduction in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeductionItemRequest {
    /// The display label.
    pub name: String,
    /// The amount.
    pub value: Decimal,
    /// The unit identifier, e.g. `weekly_hours`.
    pub unit: String,
}

impl TryFrom<DeductionItemRequest> for DeductionItem {
    type Error = crate::error::EngineError;

    fn try_from(req: DeductionItemRequest) -> Result<Self, Self::Error> {
        let unit: DeductionUnit = req.unit.parse()?;
        Ok(DeductionItem::new(req.name, req.value, unit))
    }
}

impl CalculationRequest {
    /// Overlays the request on `defaults`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRegion` or `UnknownDeductionUnit` for unrecognized
    /// codes. Range checks are left to [`CalculationInput::validate`].
    pub fn into_input(self, defaults: CalculationInput) -> EngineResult<CalculationInput> {
        let region = match self.region {
            Some(code) => code.parse::<Region>()?,
            None => defaults.region,
        };

        let additional_deductions = match self.additional_deductions {
            Some(items) => items
                .into_iter()
                .map(DeductionItem::try_from)
                .collect::<EngineResult<Vec<_>>>()?,
            None => defaults.additional_deductions,
        };

        Ok(CalculationInput {
            year: self.year.unwrap_or(defaults.year),
            region,
            weekly_contract_hours: self
                .weekly_contract_hours
                .unwrap_or(defaults.weekly_contract_hours),
            vacation_days: self.vacation_days.unwrap_or(defaults.vacation_days),
            use_sick_leave: self.use_sick_leave.unwrap_or(defaults.use_sick_leave),
            sick_leave_rate_percent: self
                .sick_leave_rate_percent
                .unwrap_or(defaults.sick_leave_rate_percent),
            use_meetings: self.use_meetings.unwrap_or(defaults.use_meetings),
            meeting_hours_per_week: self
                .meeting_hours_per_week
                .unwrap_or(defaults.meeting_hours_per_week),
            use_buffer: self.use_buffer.unwrap_or(defaults.use_buffer),
            buffer_rate_percent: self
                .buffer_rate_percent
                .unwrap_or(defaults.buffer_rate_percent),
            additional_deductions,
        })
    }
}
