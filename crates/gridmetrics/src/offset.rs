//! Left offsets for resolved columns.

use crate::column::Column;

/// Lay the columns out left to right, starting at 0.
///
/// Every width must already be resolved to pixels. An unresolved width is a
/// caller bug; in release builds it is treated as zero-width. Offsets
/// saturate at `usize::MAX`.
pub fn assign_offsets(columns: &[Column]) -> Vec<Column> {
    let mut left = 0;
    columns
        .iter()
        .map(|column| {
            debug_assert!(
                column.resolved_width().is_some(),
                "column '{}' has no resolved width",
                column.key
            );
            let placed = Column {
                left,
                ..column.clone()
            };
            left = left.saturating_add(column.resolved_width().unwrap_or(0));
            placed
        })
        .collect()
}
