//! Sick leave and internal meeting deductions.
//!
//! These two categories are deducted before any user-defined item, and the
//! hours left after them form the base for percentage items.

use rust_decimal::Decimal;

use crate::models::CalculationInput;

use super::work_hours::WorkHoursBasis;

/// Sick leave, meetings and the resulting percentage base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardDeductions {
    /// Expected sick leave hours per year.
    pub sickness_hours: Decimal,
    /// Internal meeting hours per year.
    pub meeting_hours_yearly: Decimal,
    /// Net hours minus sickness and meetings; the base for
    /// [`PercentOfBase`](crate::models::DeductionUnit::PercentOfBase) items.
    pub base_percentage_reference: Decimal,
}

/// Deducts sick leave and internal meetings from the net hours.
///
/// Sick leave is a percentage of the net hours before deductions; meetings
/// are weekly hours times net work weeks. A disabled category contributes
/// exactly zero, whatever its rate field holds.
///
/// # Example
///
/// ```
/// use capacity_planner::calculation::{calculate_standard_deductions, calculate_work_hours_basis};
/// use capacity_planner::models::{CalculationInput, Region, WorkCalendar};
/// use rust_decimal::Decimal;
///
/// let input = CalculationInput {
///     year: 2026,
///     region: Region::Hessen,
///     weekly_contract_hours: Decimal::new(40, 0),
///     vacation_days: 30,
///     use_sick_leave: true,
///     sick_leave_rate_percent: Decimal::new(5, 0),
///     use_meetings: true,
///     meeting_hours_per_week: Decimal::new(2, 0),
///     use_buffer: false,
///     buffer_rate_percent: Decimal::ZERO,
///     additional_deductions: vec![],
/// };
/// let calendar = WorkCalendar::new(2026, Region::Hessen, 220, 10);
/// let basis = calculate_work_hours_basis(&calendar, input.weekly_contract_hours, input.vacation_days);
/// let deductions = calculate_standard_deductions(&basis, &input);
///
/// assert_eq!(deductions.sickness_hours, Decimal::new(76, 0));
/// assert_eq!(deductions.meeting_hours_yearly, Decimal::new(76, 0));
/// assert_eq!(deductions.base_percentage_reference, Decimal::new(1368, 0));
/// ```
pub fn calculate_standard_deductions(
    basis: &WorkHoursBasis,
    input: &CalculationInput,
) -> StandardDeductions {
    let sickness_hours = if input.use_sick_leave {
        basis.net_hours_before_deductions * input.sick_leave_rate_percent / Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    let meeting_hours_yearly = if input.use_meetings {
        basis.net_work_weeks * input.meeting_hours_per_week
    } else {
        Decimal::ZERO
    };

    StandardDeductions {
        sickness_hours,
        meeting_hours_yearly,
        base_percentage_reference: basis.net_hours_before_deductions
            - sickness_hours
            - meeting_hours_yearly,
    }
}
