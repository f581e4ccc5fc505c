//! Human-readable walkthrough of a calculation.

use std::fmt;

use rust_decimal::Decimal;

use crate::models::CalculationTrace;

/// Shown with every result: the figures are yearly projections.
pub const PROJECTION_NOTICE: &str = "These figures are a yearly projection. Monthly and weekly \
values are mathematical averages and do not reflect seasonal variation. Use them as a \
strategic basis rather than a month-by-month plan.";

fn hours(value: Decimal) -> String {
    format!("{:.1}", value.round_dp(1))
}

/// Renders a [`CalculationTrace`] as a step-by-step walkthrough.
///
/// # Example
///
/// ```
/// use capacity_planner::calculation::reduce;
/// use capacity_planner::models::{CalculationInput, Region, WorkCalendar};
/// use capacity_planner::report::Explanation;
/// use rust_decimal::Decimal;
///
/// let input = CalculationInput {
///     year: 2026,
///     region: Region::Bayern,
///     weekly_contract_hours: Decimal::new(40, 0),
///     vacation_days: 30,
///     use_sick_leave: false,
///     sick_leave_rate_percent: Decimal::ZERO,
///     use_meetings: false,
///     meeting_hours_per_week: Decimal::ZERO,
///     use_buffer: false,
///     buffer_rate_percent: Decimal::ZERO,
///     additional_deductions: vec![],
/// };
/// let result = reduce(&WorkCalendar::new(2026, Region::Bayern, 220, 10), &input);
///
/// let text = Explanation(&result.trace).to_string();
/// assert!(text.contains("Net workdays: = 190 days"));
/// assert!(text.contains("Plannable project hours per year: = 1520.0 h"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Explanation<'a>(pub &'a CalculationTrace);

impl fmt::Display for Explanation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let trace = self.0;

        writeln!(
            f,
            "How the plannable hours for {} ({}) are calculated",
            trace.year,
            trace.region.name()
        )?;
        writeln!(f)?;

        writeln!(f, "1. Net workdays")?;
        writeln!(
            f,
            "   Workdays in the year (Mon-Fri, excluding public holidays): {}",
            trace.gross_workdays
        )?;
        if trace.skipped_dates > 0 {
            writeln!(
                f,
                "   ({} weekdays could not be classified and were left out)",
                trace.skipped_dates
            )?;
        }
        writeln!(f, "   Minus vacation days: -{}", trace.vacation_days)?;
        writeln!(f, "   Net workdays: = {} days", trace.net_workdays)?;
        writeln!(f)?;

        writeln!(f, "2. Available hours")?;
        writeln!(
            f,
            "   Net workdays times daily contract hours ({:.2} h)",
            trace.daily_hours.round_dp(2)
        )?;
        writeln!(
            f,
            "   Net hours before deductions: = {} h",
            hours(trace.net_hours_before_deductions)
        )?;
        writeln!(f)?;

        writeln!(f, "3. Variable deductions")?;
        if trace.use_sick_leave {
            writeln!(
                f,
                "   Sick leave ({}% of the hours basis): -{} h",
                trace.sick_leave_rate_percent.normalize(),
                hours(trace.sickness_hours)
            )?;
        } else {
            writeln!(f, "   Sick leave: not applied")?;
        }
        if trace.use_meetings {
            writeln!(
                f,
                "   Internal meetings ({} h/week): -{} h",
                trace.meeting_hours_per_week.normalize(),
                hours(trace.meeting_hours_yearly)
            )?;
        } else {
            writeln!(f, "   Internal meetings: not applied")?;
        }
        if !trace.additional_deductions.is_empty() {
            writeln!(f, "   Custom deductions:")?;
            for item in &trace.additional_deductions {
                writeln!(
                    f,
                    "     {} ({} {}): -{} h",
                    item.name,
                    item.value.normalize(),
                    item.unit.suffix(),
                    hours(item.yearly_hours)
                )?;
            }
        }
        writeln!(
            f,
            "   Hours before buffer: = {} h",
            hours(trace.hours_before_buffer)
        )?;
        writeln!(f)?;

        writeln!(f, "4. Buffer")?;
        if trace.use_buffer {
            writeln!(
                f,
                "   Buffer for unplanned work ({}% of the subtotal): -{} h",
                trace.buffer_rate_percent.normalize(),
                hours(trace.buffer_hours)
            )?;
        } else {
            writeln!(f, "   Buffer for unplanned work: not applied")?;
        }
        write!(
            f,
            "   Plannable project hours per year: = {} h",
            hours(trace.final_plannable_hours)
        )
    }
}
