//! Calculation logic for the capacity planner.
//!
//! This module contains the hours reduction engine and its individual
//! stages: the contractual hours basis, sick leave and meeting deductions,
//! user-defined deduction items, the unplanned-work buffer, headline metrics
//! and the yearly breakdown.

mod breakdown;
mod buffer;
mod deduction_items;
mod engine;
mod metrics;
mod standard_deductions;
mod work_hours;

pub use breakdown::{BreakdownInputs, build_breakdown};
pub use buffer::{BufferResult, apply_buffer};
pub use deduction_items::{DeductionItemsResult, calculate_deduction_items, convert_to_yearly_hours};
pub use engine::{calculate, reduce};
pub use metrics::{MONTHS_PER_YEAR, calculate_metrics, round_hours};
pub use standard_deductions::{StandardDeductions, calculate_standard_deductions};
pub use work_hours::{WORKDAYS_PER_WEEK, WorkHoursBasis, calculate_work_hours_basis};
