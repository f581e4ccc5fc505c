//! User-defined deduction items.
//!
//! Each item is converted to yearly hours according to its unit. Items that
//! share a display name are summed, so two "Training" entries end up as a
//! single breakdown line.

use rust_decimal::Decimal;

use crate::models::{DeductionItem, DeductionTraceEntry, DeductionUnit};

/// The converted deduction items of one calculation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeductionItemsResult {
    /// Items that contributed positive hours, in input order.
    pub trace_entries: Vec<DeductionTraceEntry>,
    /// Positive hours summed by name, in order of first appearance, unrounded.
    pub aggregated: Vec<(String, Decimal)>,
    /// Sum of every item's yearly hours.
    pub total_additional_hours: Decimal,
}

/// Converts a single item to yearly hours.
///
/// Items with a value of zero or below contribute nothing. A percentage item
/// can still come out negative when the base itself is negative.
///
/// # Arguments
///
/// * `item` - The deduction item
/// * `net_work_weeks` - Net work weeks of the year
/// * `base_percentage_reference` - Base for percentage items
///
/// # Example
///
/// ```
/// use capacity_planner::calculation::convert_to_yearly_hours;
/// use capacity_planner::models::{DeductionItem, DeductionUnit};
/// use rust_decimal::Decimal;
///
/// let on_call = DeductionItem::new("On-call", Decimal::new(5, 0), DeductionUnit::WeeklyHours);
/// let hours = convert_to_yearly_hours(&on_call, Decimal::new(38, 0), Decimal::new(1368, 0));
/// assert_eq!(hours, Decimal::new(190, 0));
/// ```
pub fn convert_to_yearly_hours(
    item: &DeductionItem,
    net_work_weeks: Decimal,
    base_percentage_reference: Decimal,
) -> Decimal {
    if item.value <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    match item.unit {
        DeductionUnit::YearlyHours => item.value,
        DeductionUnit::WeeklyHours => item.value * net_work_weeks,
        DeductionUnit::PercentOfBase => {
            base_percentage_reference * item.value / Decimal::ONE_HUNDRED
        }
    }
}

/// Converts all items and sums them by name.
///
/// Every percentage item is taken from the same `base_percentage_reference`,
/// so list order never changes the result. Only items with positive yearly
/// hours are traced and aggregated, but every item counts towards
/// `total_additional_hours`.
pub fn calculate_deduction_items(
    items: &[DeductionItem],
    net_work_weeks: Decimal,
    base_percentage_reference: Decimal,
) -> DeductionItemsResult {
    let mut result = DeductionItemsResult::default();

    for item in items {
        let yearly_hours = convert_to_yearly_hours(item, net_work_weeks, base_percentage_reference);
        result.total_additional_hours += yearly_hours;

        if yearly_hours <= Decimal::ZERO {
            continue;
        }

        result.trace_entries.push(DeductionTraceEntry {
            name: item.name.clone(),
            value: item.value,
            unit: item.unit,
            yearly_hours,
        });

        match result
            .aggregated
            .iter_mut()
            .find(|(name, _)| *name == item.name)
        {
            Some((_, hours)) => *hours += yearly_hours,
            None => result.aggregated.push((item.name.clone(), yearly_hours)),
        }
    }

    result
}
