//! Collaborators injected by the view layer.
//!
//! The layout core does not know how wide the platform's scrollbar is, which
//! column fields matter for re-rendering, or whether the caller treats its
//! column sequences as immutable. Each of these is a single-method trait with
//! a blanket impl for closures, so callers can pass either a named strategy or
//! an inline function.

use crate::column::Column;
use crate::columns::Columns;

/// Space reserved for a vertical scrollbar.
///
/// `usize` implements this as a fixed allowance that only applies while the
/// scrollbar is shown.
///
/// ```rust
/// use gridmetrics::ScrollbarSize;
///
/// assert_eq!(17usize.size(true), 17);
/// assert_eq!(17usize.size(false), 0);
/// ```
pub trait ScrollbarSize {
    /// Pixels taken by the scrollbar when `show_scrollbar` is set.
    fn size(&self, show_scrollbar: bool) -> usize;
}

impl ScrollbarSize for usize {
    fn size(&self, show_scrollbar: bool) -> usize {
        if show_scrollbar {
            *self
        } else {
            0
        }
    }
}

impl<F> ScrollbarSize for F
where
    F: Fn(bool) -> usize,
{
    fn size(&self, show_scrollbar: bool) -> usize {
        self(show_scrollbar)
    }
}

/// Decides whether a column sequence may be compared by identity alone.
pub trait ImmutabilityProbe {
    /// True when `columns` is never edited in place.
    fn is_immutable(&self, columns: &Columns) -> bool;
}

/// Trusts the sequence's own frozen marker.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrozenMarker;

impl ImmutabilityProbe for FrozenMarker {
    fn is_immutable(&self, columns: &Columns) -> bool {
        columns.is_frozen()
    }
}

/// Treats every sequence as mutable, forcing a column-by-column comparison.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverFrozen;

impl ImmutabilityProbe for NeverFrozen {
    fn is_immutable(&self, _columns: &Columns) -> bool {
        false
    }
}

impl<F> ImmutabilityProbe for F
where
    F: Fn(&Columns) -> bool,
{
    fn is_immutable(&self, columns: &Columns) -> bool {
        self(columns)
    }
}

/// Per-column equality used by the structural comparison.
pub trait ColumnComparer {
    /// True when `a` and `b` describe the same column for layout purposes.
    fn same_column(&self, a: &Column, b: &Column) -> bool;
}

/// Compares every caller-defined field, ignoring the computed offset.
///
/// See [`same_column`](crate::same_column).
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultComparer;

impl ColumnComparer for DefaultComparer {
    fn same_column(&self, a: &Column, b: &Column) -> bool {
        crate::equality::same_column(a, b)
    }
}

impl<F> ColumnComparer for F
where
    F: Fn(&Column, &Column) -> bool,
{
    fn same_column(&self, a: &Column, b: &Column) -> bool {
        self(a, b)
    }
}
