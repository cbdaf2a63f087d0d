//! Full layout recalculation and column resizing.

use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::columns::Columns;
use crate::error::Result;
use crate::offset::assign_offsets;
use crate::resolve::{
    distribute_deferred_widths, explicit_width_sum, resolve_explicit_widths, to_signed,
};
use crate::traits::ScrollbarSize;
use crate::width::ColumnWidth;

/// A complete column layout.
///
/// Produced by [`recalculate`] and [`resize_column`]; never modified in place.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMetrics {
    /// Columns in display order.
    pub columns: Columns,
    /// Pixels available to the whole grid.
    pub total_width: usize,
    /// Floor applied to deferred columns and to resize requests.
    pub min_column_width: usize,
    /// Sum of the columns that carried their own width, after percentage
    /// resolution.
    ///
    /// Deferred columns are **not** included, even though they have widths
    /// once the layout is computed. Use [`ColumnMetrics::columns_width`] for
    /// the full extent of the laid out columns.
    #[serde(default)]
    pub width: usize,
}

impl ColumnMetrics {
    /// Create an uncomputed layout.
    pub fn new(columns: impl Into<Columns>, total_width: usize, min_column_width: usize) -> Self {
        ColumnMetrics {
            columns: columns.into(),
            total_width,
            min_column_width,
            width: 0,
        }
    }

    /// Sum of every column's resolved width.
    pub fn columns_width(&self) -> usize {
        self.columns.total_width()
    }

    /// Recompute this layout. See [`recalculate`].
    pub fn recalculate(&self, show_scrollbar: bool, scrollbar: &impl ScrollbarSize) -> Self {
        recalculate(self, show_scrollbar, scrollbar)
    }

    /// Resize one column and recompute. See [`try_resize_column`].
    pub fn resize(
        &self,
        index: usize,
        width: usize,
        show_scrollbar: bool,
        scrollbar: &impl ScrollbarSize,
    ) -> Result<Self> {
        try_resize_column(self, index, width, show_scrollbar, scrollbar)
    }
}

/// Compute widths and offsets for every column.
///
/// Percentages are resolved against `total_width`. Whatever the explicit
/// columns and the scrollbar leave over is shared among the deferred columns
/// (see [`distribute_deferred_widths`]), then offsets are assigned left to
/// right. The result keeps `total_width`, `min_column_width` and the frozen
/// marker of the input; its `width` is the explicit-column sum only.
///
/// Never fails: a negative leftover just collapses deferred columns to the
/// minimum width, and the laid out columns may then exceed `total_width`.
///
/// ```rust
/// use gridmetrics::{recalculate, Column, ColumnMetrics};
///
/// let metrics = ColumnMetrics::new(
///     vec![Column::new("a").fixed(100), Column::new("b"), Column::new("c")],
///     300,
///     50,
/// );
/// let laid_out = recalculate(&metrics, false, &17usize);
///
/// let widths: Vec<_> = laid_out.columns.iter().map(|c| c.resolved_width()).collect();
/// let lefts: Vec<_> = laid_out.columns.iter().map(|c| c.left).collect();
/// assert_eq!(widths, vec![Some(100), Some(100), Some(100)]);
/// assert_eq!(lefts, vec![0, 100, 200]);
/// assert_eq!(laid_out.width, 100);
/// ```
pub fn recalculate(
    metrics: &ColumnMetrics,
    show_scrollbar: bool,
    scrollbar: &impl ScrollbarSize,
) -> ColumnMetrics {
    let columns = resolve_explicit_widths(&metrics.columns, metrics.total_width);

    let width = explicit_width_sum(&columns);
    let scrollbar_width = scrollbar.size(show_scrollbar);
    let unallocated_width = to_signed(metrics.total_width)
        .saturating_sub(to_signed(width))
        .saturating_sub(to_signed(scrollbar_width));

    let columns = distribute_deferred_widths(&columns, unallocated_width, metrics.min_column_width);
    let columns = assign_offsets(&columns);

    log::debug!(
        "recalculated {} columns: total {}px, explicit {}px, scrollbar {}px, unallocated {}px",
        columns.len(),
        metrics.total_width,
        width,
        scrollbar_width,
        unallocated_width
    );

    ColumnMetrics {
        columns: metrics.columns.replaced(columns),
        total_width: metrics.total_width,
        min_column_width: metrics.min_column_width,
        width,
    }
}

/// Set one column's width and recompute the whole layout.
///
/// The new width is clamped to `min_column_width`, and the column becomes an
/// explicit-width column. All other columns are resolved again from scratch,
/// exactly as [`recalculate`] would.
///
/// # Panics
///
/// Panics if `index` is out of range. Use [`try_resize_column`] when the
/// index comes from untrusted input.
pub fn resize_column(
    metrics: &ColumnMetrics,
    index: usize,
    width: usize,
    show_scrollbar: bool,
    scrollbar: &impl ScrollbarSize,
) -> ColumnMetrics {
    match try_resize_column(metrics, index, width, show_scrollbar, scrollbar) {
        Ok(resized) => resized,
        Err(err) => panic!("resize_column: {}", err),
    }
}

/// Like [`resize_column`], but returns
/// [`MetricsError::ColumnOutOfRange`](crate::MetricsError::ColumnOutOfRange)
/// instead of panicking.
pub fn try_resize_column(
    metrics: &ColumnMetrics,
    index: usize,
    width: usize,
    show_scrollbar: bool,
    scrollbar: &impl ScrollbarSize,
) -> Result<ColumnMetrics> {
    let column = metrics.columns.column(index)?;
    let updated = Column {
        width: Some(ColumnWidth::Pixels(width.max(metrics.min_column_width))),
        ..column.clone()
    };

    log::debug!(
        "resizing column '{}' at {} to {}px (requested {}px)",
        updated.key,
        index,
        width.max(metrics.min_column_width),
        width
    );

    let resized = ColumnMetrics {
        columns: metrics.columns.with_column(index, updated)?,
        ..metrics.clone()
    };

    Ok(recalculate(&resized, show_scrollbar, scrollbar))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MetricsError;

    fn widths(metrics: &ColumnMetrics) -> Vec<usize> {
        metrics
            .columns
            .iter()
            .map(|c| c.resolved_width().unwrap())
            .collect()
    }

    fn lefts(metrics: &ColumnMetrics) -> Vec<usize> {
        metrics.columns.iter().map(|c| c.left).collect()
    }

    #[test]
    fn recalculate_fixed_and_deferred() {
        let metrics = ColumnMetrics::new(
            vec![
                Column::new("a").fixed(100),
                Column::new("b"),
                Column::new("c"),
            ],
            300,
            50,
        );
        let out = recalculate(&metrics, false, &17usize);
        assert_eq!(widths(&out), vec![100, 100, 100]);
        assert_eq!(lefts(&out), vec![0, 100, 200]);
        assert_eq!(out.width, 100);
        assert_eq!(out.total_width, 300);
        assert_eq!(out.min_column_width, 50);
    }

    #[test]
    fn recalculate_subtracts_scrollbar() {
        let metrics = ColumnMetrics::new(vec![Column::new("a"), Column::new("b")], 217, 0);
        let out = recalculate(&metrics, true, &17usize);
        assert_eq!(widths(&out), vec![100, 100]);

        let out = recalculate(&metrics, false, &17usize);
        assert_eq!(widths(&out), vec![108, 109]);
    }

    #[test]
    fn recalculate_percent_columns() {
        let metrics = ColumnMetrics::new(
            vec![Column::new("a").percent(50), Column::new("b")],
            200,
            10,
        );
        let out = recalculate(&metrics, false, &0usize);
        assert_eq!(widths(&out), vec![100, 100]);
        assert_eq!(out.width, 100);
    }

    #[test]
    fn recalculate_width_excludes_deferred() {
        let metrics = ColumnMetrics::new(
            vec![Column::new("a").fixed(30), Column::new("b"), Column::new("c").fixed(20)],
            500,
            0,
        );
        let out = recalculate(&metrics, false, &0usize);
        assert_eq!(out.width, 50);
        assert_eq!(out.columns_width(), 500);
    }

    #[test]
    fn recalculate_overflowing_explicit_columns() {
        let metrics = ColumnMetrics::new(
            vec![Column::new("a").fixed(400), Column::new("b")],
            300,
            60,
        );
        let out = recalculate(&metrics, true, &17usize);
        assert_eq!(widths(&out), vec![400, 60]);
        assert_eq!(lefts(&out), vec![0, 400]);
    }

    #[test]
    fn recalculate_huge_widths_do_not_overflow() {
        let metrics = ColumnMetrics::new(
            vec![Column::new("a").fixed(usize::MAX), Column::new("b").fixed(1)],
            0,
            0,
        );
        let out = recalculate(&metrics, true, &usize::MAX);
        assert_eq!(out.width, usize::MAX);
        assert_eq!(lefts(&out), vec![0, usize::MAX]);

        let metrics = ColumnMetrics::new(
            vec![Column::new("a").fixed(usize::MAX), Column::new("b")],
            100,
            20,
        );
        let out = recalculate(&metrics, false, &0usize);
        assert_eq!(widths(&out), vec![usize::MAX, 20]);
        assert_eq!(lefts(&out), vec![0, usize::MAX]);
    }

    #[test]
    fn recalculate_keeps_explicit_widths_below_minimum() {
        let metrics = ColumnMetrics::new(
            vec![
                Column::new("spacer").fixed(0),
                Column::new("a").fixed(10),
                Column::new("b").percent(1),
                Column::new("c"),
            ],
            400,
            50,
        );
        let out = recalculate(&metrics, false, &0usize);
        assert_eq!(widths(&out), vec![0, 10, 4, 386]);
        assert_eq!(lefts(&out), vec![0, 0, 10, 14]);
    }

    #[test]
    fn recalculate_empty() {
        let out = recalculate(&ColumnMetrics::new(Columns::default(), 300, 50), true, &17usize);
        assert!(out.columns.is_empty());
        assert_eq!(out.width, 0);
    }

    #[test]
    fn recalculate_leaves_input_untouched() {
        let metrics =
            ColumnMetrics::new(vec![Column::new("a").percent(10), Column::new("b")], 100, 0);
        let before = metrics.clone();
        let _ = recalculate(&metrics, false, &0usize);
        assert_eq!(metrics, before);
    }

    #[test]
    fn recalculate_keeps_frozen_marker() {
        let metrics = ColumnMetrics::new(Columns::frozen(vec![Column::new("a")]), 100, 0);
        let out = recalculate(&metrics, false, &0usize);
        assert!(out.columns.is_frozen());
        assert!(!Columns::ptr_eq(&out.columns, &metrics.columns));
    }

    #[test]
    fn recalculate_closure_scrollbar() {
        let metrics = ColumnMetrics::new(vec![Column::new("a")], 100, 0);
        let probe = |shown: bool| -> usize { if shown { 20 } else { 0 } };
        let out = recalculate(&metrics, true, &probe);
        assert_eq!(widths(&out), vec![80]);
    }

    #[test]
    fn resize_reads_back_clamped_width() {
        let metrics = recalculate(
            &ColumnMetrics::new(vec![Column::new("a"), Column::new("b")], 400, 50),
            false,
            &0usize,
        );

        let out = resize_column(&metrics, 0, 120, false, &0usize);
        assert_eq!(out.columns[0].resolved_width(), Some(120));

        let out = resize_column(&metrics, 0, 10, false, &0usize);
        assert_eq!(out.columns[0].resolved_width(), Some(50));
    }

    #[test]
    fn resize_recomputes_deferred_columns() {
        let metrics = ColumnMetrics::new(
            vec![Column::new("a").fixed(100), Column::new("b"), Column::new("c")],
            400,
            20,
        );
        let out = resize_column(&metrics, 0, 200, false, &0usize);
        assert_eq!(widths(&out), vec![200, 100, 100]);
        assert_eq!(lefts(&out), vec![0, 200, 300]);
        assert_eq!(out.width, 200);
    }

    #[test]
    fn resize_keeps_identity() {
        let metrics =
            ColumnMetrics::new(vec![Column::new("a").named("Alpha").resizable()], 100, 0);
        let out = resize_column(&metrics, 0, 30, false, &0usize);
        assert_eq!(out.columns[0].key, "a");
        assert_eq!(out.columns[0].name.as_deref(), Some("Alpha"));
        assert!(out.columns[0].resizable);
    }

    #[test]
    fn try_resize_out_of_range() {
        let metrics = ColumnMetrics::new(vec![Column::new("a")], 100, 0);
        assert_eq!(
            try_resize_column(&metrics, 1, 30, false, &0usize),
            Err(MetricsError::ColumnOutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    #[should_panic(expected = "column index 4 is out of range")]
    fn resize_out_of_range_panics() {
        let metrics = ColumnMetrics::new(vec![Column::new("a")], 100, 0);
        let _ = resize_column(&metrics, 4, 30, false, &0usize);
    }

    #[test]
    fn method_forms_match_free_functions() {
        let metrics = ColumnMetrics::new(vec![Column::new("a"), Column::new("b")], 100, 0);
        assert_eq!(metrics.recalculate(true, &10usize), recalculate(&metrics, true, &10usize));
        assert_eq!(
            metrics.resize(1, 70, false, &0usize).unwrap(),
            resize_column(&metrics, 1, 70, false, &0usize)
        );
    }
}
