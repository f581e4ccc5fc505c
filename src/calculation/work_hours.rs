//! Net workdays and the contractual hours basis.
//!
//! This module covers the first four reduction steps: vacation is taken off
//! the gross workdays, contractual weekly hours are spread over five workdays,
//! and the net workdays are converted into hours and work weeks.

use rust_decimal::Decimal;

use crate::models::WorkCalendar;

/// Workdays per contractual week.
pub const WORKDAYS_PER_WEEK: u32 = 5;

/// The hours basis every later deduction works from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkHoursBasis {
    /// Gross workdays minus vacation days, floored at zero.
    pub net_workdays: u32,
    /// Contractual hours per workday.
    pub daily_hours: Decimal,
    /// Net workdays times daily hours.
    pub net_hours_before_deductions: Decimal,
    /// Net workdays divided by five; zero when there are no net workdays.
    pub net_work_weeks: Decimal,
}

/// Computes the net workdays and the hours basis.
///
/// # Arguments
///
/// * `calendar` - The resolved work calendar
/// * `weekly_contract_hours` - Contractual hours per week
/// * `vacation_days` - Vacation, in workdays
///
/// # Example
///
/// ```
/// use capacity_planner::calculation::calculate_work_hours_basis;
/// use capacity_planner::models::{Region, WorkCalendar};
/// use rust_decimal::Decimal;
///
/// let calendar = WorkCalendar::new(2026, Region::Bayern, 220, 10);
/// let basis = calculate_work_hours_basis(&calendar, Decimal::new(40, 0), 30);
///
/// assert_eq!(basis.net_workdays, 190);
/// assert_eq!(basis.daily_hours, Decimal::new(8, 0));
/// assert_eq!(basis.net_hours_before_deductions, Decimal::new(1520, 0));
/// assert_eq!(basis.net_work_weeks, Decimal::new(38, 0));
/// ```
pub fn calculate_work_hours_basis(
    calendar: &WorkCalendar,
    weekly_contract_hours: Decimal,
    vacation_days: u32,
) -> WorkHoursBasis {
    let net_workdays = calendar.gross_workdays.saturating_sub(vacation_days);
    let daily_hours = weekly_contract_hours / Decimal::from(WORKDAYS_PER_WEEK);
    let net_hours_before_deductions = Decimal::from(net_workdays) * daily_hours;
    let net_work_weeks = if net_workdays > 0 {
        Decimal::from(net_workdays) / Decimal::from(WORKDAYS_PER_WEEK)
    } else {
        Decimal::ZERO
    };

    WorkHoursBasis {
        net_workdays,
        daily_hours,
        net_hours_before_deductions,
        net_work_weeks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Region;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn calendar(gross_workdays: u32) -> WorkCalendar {
        WorkCalendar::new(2026, Region::Niedersachsen, gross_workdays, 9)
    }

    #[test]
    fn test_net_workdays_subtracts_vacation() {
        let basis = calculate_work_hours_basis(&calendar(251), dec("40"), 30);
        assert_eq!(basis.net_workdays, 221);
    }

    #[test]
    fn test_vacation_exceeding_workdays_clamps_to_zero() {
        let basis = calculate_work_hours_basis(&calendar(20), dec("40"), 30);
        assert_eq!(basis.net_workdays, 0);
        assert_eq!(basis.net_hours_before_deductions, Decimal::ZERO);
        assert_eq!(basis.net_work_weeks, Decimal::ZERO);
        assert_eq!(basis.daily_hours, dec("8"));
    }

    #[test]
    fn test_vacation_equal_to_workdays_gives_zero() {
        let basis = calculate_work_hours_basis(&calendar(30), dec("40"), 30);
        assert_eq!(basis.net_workdays, 0);
        assert_eq!(basis.net_work_weeks, Decimal::ZERO);
    }

    #[test]
    fn test_part_time_daily_hours() {
        let basis = calculate_work_hours_basis(&calendar(251), dec("38.5"), 28);
        assert_eq!(basis.daily_hours, dec("7.7"));
        assert_eq!(basis.net_hours_before_deductions, dec("1717.1"));
        assert_eq!(basis.net_work_weeks, dec("44.6"));
    }
}
