//! Headline metrics derived from the final plannable hours.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::PlannableMetrics;

/// Months per year used for the monthly average.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Rounds hours to a whole number, ties to even. Values beyond the `i64`
/// range saturate.
///
/// Every reported figure is rounded on its own; sums of rounded figures may
/// therefore drift from the rounded sum by a few hours.
///
/// # Example
///
/// ```
/// use capacity_planner::calculation::round_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_hours(Decimal::new(1265, 1)), 126);
/// assert_eq!(round_hours(Decimal::new(1275, 1)), 128);
/// assert_eq!(round_hours(Decimal::new(12667, 2)), 127);
/// ```
pub fn round_hours(hours: Decimal) -> i64 {
    let rounded = hours.round();
    rounded.to_i64().unwrap_or(if rounded.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Computes the headline metrics.
///
/// Every ratio with a zero denominator yields 0 instead of an error.
///
/// # Arguments
///
/// * `final_plannable_hours` - Hours left for project work
/// * `net_workdays` - Workdays after vacation
/// * `net_work_weeks` - Net workdays divided by five
/// * `gross_workdays` - Workdays before vacation
/// * `daily_hours` - Contractual hours per workday
///
/// # Example
///
/// ```
/// use capacity_planner::calculation::calculate_metrics;
/// use rust_decimal::Decimal;
///
/// let metrics = calculate_metrics(Decimal::new(1520, 0), 190, Decimal::new(38, 0), 220, Decimal::new(8, 0));
/// assert_eq!(metrics.per_month, 127);
/// assert_eq!(metrics.availability_percent, 86);
/// ```
pub fn calculate_metrics(
    final_plannable_hours: Decimal,
    net_workdays: u32,
    net_work_weeks: Decimal,
    gross_workdays: u32,
    daily_hours: Decimal,
) -> PlannableMetrics {
    let per_week = if net_work_weeks > Decimal::ZERO {
        final_plannable_hours / net_work_weeks
    } else {
        Decimal::ZERO
    };

    let per_day = if net_workdays > 0 {
        final_plannable_hours / Decimal::from(net_workdays)
    } else {
        Decimal::ZERO
    };

    let gross_hours = Decimal::from(gross_workdays) * daily_hours;
    let availability = if gross_hours > Decimal::ZERO {
        final_plannable_hours / gross_hours * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    PlannableMetrics {
        per_year: round_hours(final_plannable_hours),
        per_month: round_hours(final_plannable_hours / Decimal::from(MONTHS_PER_YEAR)),
        per_week: round_hours(per_week),
        per_day: round_hours(per_day),
        availability_percent: round_hours(availability),
    }
}
