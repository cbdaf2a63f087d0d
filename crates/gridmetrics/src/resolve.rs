//! Width resolution for grid columns.
//!
//! Resolution runs in two passes. The first turns percentage widths into
//! pixels. The second hands whatever the explicit columns left over to the
//! deferred columns (those with no width at all). Both passes return fresh
//! column values; the input slice is never modified.

use crate::column::Column;
use crate::width::ColumnWidth;

/// Resolve percentage widths against `total_width`.
///
/// Percentages become `floor(pct * total_width / 100)` pixels. Pixel widths,
/// including an explicit `0`, are kept as is. Deferred columns stay deferred.
pub fn resolve_explicit_widths(columns: &[Column], total_width: usize) -> Vec<Column> {
    columns
        .iter()
        .map(|column| match column.width {
            Some(width @ ColumnWidth::Percent(_)) => Column {
                width: Some(ColumnWidth::Pixels(width.resolve(total_width))),
                ..column.clone()
            },
            _ => column.clone(),
        })
        .collect()
}

/// Sum of the explicit widths after percentage resolution.
///
/// Deferred columns contribute nothing. Unresolved percentages also count as
/// zero, so callers should run [`resolve_explicit_widths`] first. Saturates at
/// `usize::MAX`.
pub fn explicit_width_sum(columns: &[Column]) -> usize {
    columns
        .iter()
        .filter_map(Column::resolved_width)
        .fold(0, usize::saturating_add)
}

/// Share `unallocated_width` among the deferred columns.
///
/// When nothing is left (`unallocated_width <= 0`) every deferred column gets
/// exactly `min_column_width`. Otherwise each gets
/// `max(unallocated_width / deferred_count, min_column_width)`, with the
/// division floored and both operands fixed for the whole pass. The last
/// deferred column also picks up whatever is still unallocated after that,
/// so without minimum clamping the deferred widths add up to
/// `unallocated_width` exactly.
///
/// Columns are served first come, first served: when the minimum pushes early
/// columns over their share nothing is taken back from them, and the total
/// may exceed `unallocated_width`.
pub fn distribute_deferred_widths(
    columns: &[Column],
    unallocated_width: i64,
    min_column_width: usize,
) -> Vec<Column> {
    let deferred_count = columns.iter().filter(|c| c.is_deferred()).count();
    if deferred_count == 0 {
        return columns.to_vec();
    }

    let min_width = to_signed(min_column_width);
    let share = unallocated_width.div_euclid(deferred_count as i64);
    let mut remaining_width = unallocated_width;
    let mut deferred_remaining = deferred_count;

    columns
        .iter()
        .map(|column| {
            if !column.is_deferred() {
                return column.clone();
            }

            let width = if unallocated_width <= 0 {
                min_column_width
            } else {
                let mut width = share.max(min_width);
                remaining_width = remaining_width.saturating_sub(width);
                deferred_remaining -= 1;

                if deferred_remaining == 0 && remaining_width > 0 {
                    width = width.saturating_add(remaining_width);
                }
                to_unsigned(width).max(min_column_width)
            };

            log::trace!(
                "deferred column '{}' gets {}px (share {}, min {})",
                column.key,
                width,
                share,
                min_column_width
            );

            Column {
                width: Some(ColumnWidth::Pixels(width)),
                ..column.clone()
            }
        })
        .collect()
}

pub(crate) fn to_signed(px: usize) -> i64 {
    i64::try_from(px).unwrap_or(i64::MAX)
}

fn to_unsigned(px: i64) -> usize {
    usize::try_from(px).unwrap_or(0)
}
