//! Calculation result models for the capacity planner.
//!
//! This module contains the [`CalculationResult`] type and its associated
//! structures: the headline [`PlannableMetrics`], the hours [`Breakdown`] and
//! the [`CalculationTrace`] recording every intermediate value.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{DeductionUnit, Region};

/// Headline figures of a calculation, each rounded to whole hours.
///
/// The monthly, weekly and daily figures are yearly averages, not
/// calendar-specific values.
///
/// # Example
///
/// ```
/// use capacity_planner::models::PlannableMetrics;
///
/// let metrics = PlannableMetrics {
///     per_year: 1520,
///     per_month: 127,
///     per_week: 40,
///     per_day: 8,
///     availability_percent: 86,
/// };
/// assert_eq!(metrics.labeled()[1], ("Plannable hours per month", 127));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannableMetrics {
    /// Plannable hours per year.
    pub per_year: i64,
    /// Plannable hours per month (yearly figure / 12).
    pub per_month: i64,
    /// Plannable hours per net work week.
    pub per_week: i64,
    /// Plannable hours per net workday.
    pub per_day: i64,
    /// Plannable hours as a percentage of gross workday hours.
    pub availability_percent: i64,
}

impl PlannableMetrics {
    /// Returns the metrics as display label / value pairs.
    pub fn labeled(&self) -> [(&'static str, i64); 5] {
        [
            ("Plannable hours per year", self.per_year),
            ("Plannable hours per month", self.per_month),
            ("Plannable hours per week", self.per_week),
            ("Plannable hours per day", self.per_day),
            ("Real availability %", self.availability_percent),
        ]
    }
}

/// The kind of activity a breakdown entry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakdownKind {
    /// Hours left for project work.
    ProjectWork,
    /// Vacation hours.
    Vacation,
    /// Public holidays falling on workdays.
    Holidays,
    /// Expected sick leave.
    Sickness,
    /// Internal meetings.
    InternalMeetings,
    /// Buffer for unplanned work.
    UnplannedBuffer,
    /// A user-defined deduction.
    Custom,
}

impl BreakdownKind {
    /// Returns the display label of a built-in category.
    ///
    /// Custom entries carry their own label and return `None`.
    pub fn label(self) -> Option<&'static str> {
        match self {
            BreakdownKind::ProjectWork => Some("Project work"),
            BreakdownKind::Vacation => Some("Vacation"),
            BreakdownKind::Holidays => Some("Holidays"),
            BreakdownKind::Sickness => Some("Sickness"),
            BreakdownKind::InternalMeetings => Some("Internal meetings"),
            BreakdownKind::UnplannedBuffer => Some("Unplanned buffer"),
            BreakdownKind::Custom => None,
        }
    }
}

/// One category of the yearly hours breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    /// The display label.
    pub label: String,
    /// The kind of activity.
    pub kind: BreakdownKind,
    /// Whole hours per year.
    pub hours: i64,
}

/// The yearly hours partitioned into named categories, in insertion order.
///
/// Labels are unique: adding hours under an existing label accumulates into
/// that entry and keeps its kind.
///
/// # Example
///
/// ```
/// use capacity_planner::models::{Breakdown, BreakdownKind};
///
/// let mut breakdown = Breakdown::default();
/// breakdown.add("Project work", BreakdownKind::ProjectWork, 1200);
/// breakdown.add("Training", BreakdownKind::Custom, 40);
/// breakdown.add("Training", BreakdownKind::Custom, 8);
///
/// assert_eq!(breakdown.len(), 2);
/// assert_eq!(breakdown.get("Training"), Some(48));
/// assert_eq!(breakdown.total(), 1248);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breakdown {
    entries: Vec<BreakdownEntry>,
}

impl Breakdown {
    /// Adds hours under `label`, merging with an existing entry of that label.
    pub fn add(&mut self, label: impl Into<String>, kind: BreakdownKind, hours: i64) {
        let label = label.into();
        match self.entries.iter_mut().find(|entry| entry.label == label) {
            Some(entry) => entry.hours += hours,
            None => self.entries.push(BreakdownEntry { label, kind, hours }),
        }
    }

    /// Returns the hours recorded under `label`.
    pub fn get(&self, label: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.hours)
    }

    /// Returns the entries in insertion order.
    pub fn entries(&self) -> &[BreakdownEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the sum of all (rounded) entries.
    pub fn total(&self) -> i64 {
        self.entries.iter().map(|entry| entry.hours).sum()
    }

    /// Returns the entries with positive hours, largest first.
    ///
    /// Entries with equal hours keep their insertion order.
    pub fn positive_by_hours_desc(&self) -> Vec<&BreakdownEntry> {
        let mut entries: Vec<&BreakdownEntry> =
            self.entries.iter().filter(|entry| entry.hours > 0).collect();
        entries.sort_by(|a, b| b.hours.cmp(&a.hours));
        entries
    }
}

/// A deduction item that contributed hours, as recorded in the trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionTraceEntry {
    /// The display label of the item.
    pub name: String,
    /// The value as entered.
    pub value: Decimal,
    /// The unit of the value.
    pub unit: DeductionUnit,
    /// The converted yearly hours.
    pub yearly_hours: Decimal,
}

/// Every intermediate value of one reduction pass, unrounded.
///
/// The trace is written once while reducing and never recomputed; it exists
/// so front ends can show how the headline figures were reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationTrace {
    /// The calendar year.
    pub year: i32,
    /// The region whose holidays were applied.
    pub region: Region,
    /// Weekday slots that are not public holidays.
    pub gross_workdays: u32,
    /// Weekday slots that are public holidays.
    pub holidays_on_workdays: u32,
    /// Weekday slots the holiday source could not classify.
    pub skipped_dates: u32,
    /// Vacation days as entered.
    pub vacation_days: u32,
    /// Gross workdays minus vacation, floored at zero.
    pub net_workdays: u32,
    /// Contractual hours per week.
    pub weekly_contract_hours: Decimal,
    /// Contractual hours per workday.
    pub daily_hours: Decimal,
    /// Net workdays times daily hours.
    pub net_hours_before_deductions: Decimal,
    /// Net workdays divided by five.
    pub net_work_weeks: Decimal,
    /// Whether sick leave was deducted.
    pub use_sick_leave: bool,
    /// Sick leave rate as entered.
    pub sick_leave_rate_percent: Decimal,
    /// Deducted sick leave hours.
    pub sickness_hours: Decimal,
    /// Whether meetings were deducted.
    pub use_meetings: bool,
    /// Meeting hours per week as entered.
    pub meeting_hours_per_week: Decimal,
    /// Deducted meeting hours per year.
    pub meeting_hours_yearly: Decimal,
    /// Base for percentage deduction items.
    pub base_percentage_reference: Decimal,
    /// Deduction items that contributed hours, in input order.
    pub additional_deductions: Vec<DeductionTraceEntry>,
    /// Sum of all deduction item hours.
    pub total_additional_hours: Decimal,
    /// Hours left before the buffer is applied.
    pub hours_before_buffer: Decimal,
    /// Whether the buffer was deducted.
    pub use_buffer: bool,
    /// Buffer rate as entered.
    pub buffer_rate_percent: Decimal,
    /// Deducted buffer hours.
    pub buffer_hours: Decimal,
    /// Hours left for project work, floored at zero.
    pub final_plannable_hours: Decimal,
}

/// The complete result of a plannable-hours calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The calendar year.
    pub year: i32,
    /// The region whose holidays were applied.
    pub region: Region,
    /// Headline figures.
    pub metrics: PlannableMetrics,
    /// Yearly hours by category.
    pub breakdown: Breakdown,
    /// Every intermediate value of the calculation.
    pub trace: CalculationTrace,
}
