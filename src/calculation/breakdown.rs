//! Yearly hours breakdown for display and export.

use rust_decimal::Decimal;

use crate::models::{Breakdown, BreakdownKind};

use super::metrics::round_hours;

/// The unrounded yearly hours of each breakdown category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownInputs<'a> {
    /// Hours left for project work.
    pub final_plannable_hours: Decimal,
    /// Vacation days as entered.
    pub vacation_days: u32,
    /// Holidays falling on weekdays.
    pub holidays_on_workdays: u32,
    /// Contractual hours per workday.
    pub daily_hours: Decimal,
    /// Deducted sick leave hours.
    pub sickness_hours: Decimal,
    /// Deducted meeting hours.
    pub meeting_hours_yearly: Decimal,
    /// Deducted buffer hours.
    pub buffer_hours: Decimal,
    /// Deduction item hours summed by name.
    pub deduction_items: &'a [(String, Decimal)],
}

fn builtin(breakdown: &mut Breakdown, kind: BreakdownKind, hours: Decimal) {
    if let Some(label) = kind.label() {
        breakdown.add(label, kind, round_hours(hours));
    }
}

/// Builds the breakdown, rounding every value before it is inserted.
///
/// Project work, vacation and holidays are always present. Sickness,
/// meetings and the buffer appear only with positive hours. Each deduction
/// item name gets its own entry; a name matching an existing label adds to
/// that entry instead.
pub fn build_breakdown(inputs: &BreakdownInputs<'_>) -> Breakdown {
    let mut breakdown = Breakdown::default();

    builtin(
        &mut breakdown,
        BreakdownKind::ProjectWork,
        inputs.final_plannable_hours,
    );
    builtin(
        &mut breakdown,
        BreakdownKind::Vacation,
        Decimal::from(inputs.vacation_days) * inputs.daily_hours,
    );
    builtin(
        &mut breakdown,
        BreakdownKind::Holidays,
        Decimal::from(inputs.holidays_on_workdays) * inputs.daily_hours,
    );

    for (kind, hours) in [
        (BreakdownKind::Sickness, inputs.sickness_hours),
        (BreakdownKind::InternalMeetings, inputs.meeting_hours_yearly),
        (BreakdownKind::UnplannedBuffer, inputs.buffer_hours),
    ] {
        if hours > Decimal::ZERO {
            builtin(&mut breakdown, kind, hours);
        }
    }

    for (name, hours) in inputs.deduction_items {
        breakdown.add(name.as_str(), BreakdownKind::Custom, round_hours(*hours));
    }

    breakdown
}
