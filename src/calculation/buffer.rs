//! Unplanned-work buffer and the final plannable hours.

use rust_decimal::Decimal;

/// The result of applying the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferResult {
    /// Base reference minus all deduction items.
    pub hours_before_buffer: Decimal,
    /// Deducted buffer hours.
    pub buffer_hours: Decimal,
    /// Hours left for project work, never negative.
    pub final_plannable_hours: Decimal,
}

/// Applies the buffer to the hours left after deduction items.
///
/// The buffer is a percentage of `hours_before_buffer`. The final plannable
/// hours are floored at zero; `hours_before_buffer` itself is not.
///
/// # Arguments
///
/// * `base_percentage_reference` - Hours after sickness and meetings
/// * `total_additional_hours` - Sum of all deduction items
/// * `use_buffer` - Whether the buffer is deducted
/// * `buffer_rate_percent` - Buffer rate; ignored when `use_buffer` is false
///
/// # Example
///
/// ```
/// use capacity_planner::calculation::apply_buffer;
/// use rust_decimal::Decimal;
///
/// let result = apply_buffer(Decimal::new(1520, 0), Decimal::ZERO, true, Decimal::new(10, 0));
/// assert_eq!(result.buffer_hours, Decimal::new(152, 0));
/// assert_eq!(result.final_plannable_hours, Decimal::new(1368, 0));
/// ```
pub fn apply_buffer(
    base_percentage_reference: Decimal,
    total_additional_hours: Decimal,
    use_buffer: bool,
    buffer_rate_percent: Decimal,
) -> BufferResult {
    let hours_before_buffer = base_percentage_reference - total_additional_hours;
    let buffer_hours = if use_buffer {
        hours_before_buffer * buffer_rate_percent / Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    BufferResult {
        hours_before_buffer,
        buffer_hours,
        final_plannable_hours: (hours_before_buffer - buffer_hours).max(Decimal::ZERO),
    }
}
