//! The hours reduction engine.
//!
//! [`reduce`] runs the full derivation from a resolved [`WorkCalendar`] to a
//! [`CalculationResult`]; [`calculate`] adds input validation and calendar
//! resolution in front of it.

use tracing::debug;

use crate::calendar::{HolidaySource, resolve_work_calendar};
use crate::error::EngineResult;
use crate::models::{CalculationInput, CalculationResult, CalculationTrace, WorkCalendar};

use super::breakdown::{BreakdownInputs, build_breakdown};
use super::buffer::apply_buffer;
use super::deduction_items::calculate_deduction_items;
use super::metrics::calculate_metrics;
use super::standard_deductions::calculate_standard_deductions;
use super::work_hours::calculate_work_hours_basis;

/// Reduces a work calendar to plannable hours.
///
/// The calculation is pure: it performs no I/O and never fails. Degenerate
/// inputs such as vacation exceeding the workdays produce zeros rather than
/// errors. The input is expected to have passed
/// [`CalculationInput::validate`].
///
/// # Example
///
/// ```
/// use capacity_planner::calculation::reduce;
/// use capacity_planner::models::{CalculationInput, Region, WorkCalendar};
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
/// let calendar = WorkCalendar::new(2026, Region::NordrheinWestfalen, 220, 10);
///
/// let result = reduce(&calendar, &input);
/// assert_eq!(result.metrics.per_year, 1368);
/// assert_eq!(result.breakdown.get("Unplanned buffer"), Some(152));
/// ```
pub fn reduce(calendar: &WorkCalendar, input: &CalculationInput) -> CalculationResult {
    let basis =
        calculate_work_hours_basis(calendar, input.weekly_contract_hours, input.vacation_days);
    let standard = calculate_standard_deductions(&basis, input);
    let items = calculate_deduction_items(
        &input.additional_deductions,
        basis.net_work_weeks,
        standard.base_percentage_reference,
    );
    let buffer = apply_buffer(
        standard.base_percentage_reference,
        items.total_additional_hours,
        input.use_buffer,
        input.buffer_rate_percent,
    );

    let metrics = calculate_metrics(
        buffer.final_plannable_hours,
        basis.net_workdays,
        basis.net_work_weeks,
        calendar.gross_workdays,
        basis.daily_hours,
    );

    let breakdown = build_breakdown(&BreakdownInputs {
        final_plannable_hours: buffer.final_plannable_hours,
        vacation_days: input.vacation_days,
        holidays_on_workdays: calendar.holidays_on_workdays,
        daily_hours: basis.daily_hours,
        sickness_hours: standard.sickness_hours,
        meeting_hours_yearly: standard.meeting_hours_yearly,
        buffer_hours: buffer.buffer_hours,
        deduction_items: &items.aggregated,
    });

    let trace = CalculationTrace {
        year: calendar.year,
        region: calendar.region,
        gross_workdays: calendar.gross_workdays,
        holidays_on_workdays: calendar.holidays_on_workdays,
        skipped_dates: calendar.skipped_dates,
        vacation_days: input.vacation_days,
        net_workdays: basis.net_workdays,
        weekly_contract_hours: input.weekly_contract_hours,
        daily_hours: basis.daily_hours,
        net_hours_before_deductions: basis.net_hours_before_deductions,
        net_work_weeks: basis.net_work_weeks,
        use_sick_leave: input.use_sick_leave,
        sick_leave_rate_percent: input.sick_leave_rate_percent,
        sickness_hours: standard.sickness_hours,
        use_meetings: input.use_meetings,
        meeting_hours_per_week: input.meeting_hours_per_week,
        meeting_hours_yearly: standard.meeting_hours_yearly,
        base_percentage_reference: standard.base_percentage_reference,
        additional_deductions: items.trace_entries,
        total_additional_hours: items.total_additional_hours,
        hours_before_buffer: buffer.hours_before_buffer,
        use_buffer: input.use_buffer,
        buffer_rate_percent: input.buffer_rate_percent,
        buffer_hours: buffer.buffer_hours,
        final_plannable_hours: buffer.final_plannable_hours,
    };

    CalculationResult {
        year: calendar.year,
        region: calendar.region,
        metrics,
        breakdown,
        trace,
    }
}

/// Validates the input, resolves its calendar and reduces it.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`](crate::error::EngineError::InvalidInput)
/// if the input fails validation. Holiday lookup failures are not errors;
/// they show up as `skipped_dates` in the trace.
pub fn calculate<S>(input: &CalculationInput, holidays: &S) -> EngineResult<CalculationResult>
where
    S: HolidaySource + ?Sized,
{
    input.validate()?;

    let calendar = resolve_work_calendar(input.year, input.region, holidays);
    debug!(
        year = input.year,
        region = %input.region,
        gross_workdays = calendar.gross_workdays,
        holidays_on_workdays = calendar.holidays_on_workdays,
        "Resolved work calendar"
    );

    Ok(reduce(&calendar, input))
}
