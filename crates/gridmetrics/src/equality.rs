//! Deciding whether two column layouts need a recompute.
//!
//! Comparison is two-tiered. When both sequences are known to be immutable,
//! instance identity is the answer and no column is looked at: the same
//! instance means nothing changed, a different instance means something may
//! have. Two separately built but identical frozen sequences therefore
//! compare as *different*. Otherwise columns are matched up by key and
//! compared one by one, ignoring order.

use std::collections::HashMap;

use crate::column::Column;
use crate::columns::Columns;
use crate::traits::{ColumnComparer, FrozenMarker, ImmutabilityProbe};

/// Shallow comparison of every caller-defined column field.
///
/// The computed `left` offset is ignored.
pub fn same_column(a: &Column, b: &Column) -> bool {
    a.key == b.key
        && a.name == b.name
        && a.width == b.width
        && a.resizable == b.resizable
        && a.sortable == b.sortable
        && a.locked == b.locked
}

/// Compare two column sequences, trusting their frozen markers.
///
/// Equivalent to [`same_columns_with`] using [`FrozenMarker`] as the probe.
///
/// ```rust
/// use gridmetrics::{same_column, same_columns, Column, Columns};
///
/// let prev = Columns::new(vec![Column::new("a"), Column::new("b").fixed(40)]);
/// let next = Columns::new(vec![Column::new("b").fixed(40), Column::new("a")]);
/// assert!(same_columns(&prev, &next, &same_column));
///
/// let renamed = Columns::new(vec![Column::new("a"), Column::new("z").fixed(40)]);
/// assert!(!same_columns(&prev, &renamed, &same_column));
/// ```
pub fn same_columns(prev: &Columns, next: &Columns, comparer: &impl ColumnComparer) -> bool {
    same_columns_with(prev, next, comparer, &FrozenMarker)
}

/// Compare two column sequences with an explicit immutability probe.
///
/// If `probe` reports both sequences immutable, returns whether they are the
/// same instance. Otherwise the sequences are equal when they have the same
/// length, every key appears in both, and `comparer` accepts each pair of
/// same-keyed columns.
pub fn same_columns_with(
    prev: &Columns,
    next: &Columns,
    comparer: &impl ColumnComparer,
    probe: &impl ImmutabilityProbe,
) -> bool {
    if probe.is_immutable(prev) && probe.is_immutable(next) {
        return Columns::ptr_eq(prev, next);
    }

    compare_each_column(prev, next, comparer)
}

fn compare_each_column(prev: &[Column], next: &[Column], comparer: &impl ColumnComparer) -> bool {
    if prev.len() != next.len() {
        return false;
    }

    let prev_by_key: HashMap<&str, &Column> = prev.iter().map(|c| (c.key.as_str(), c)).collect();
    let next_by_key: HashMap<&str, &Column> = next.iter().map(|c| (c.key.as_str(), c)).collect();

    let next_matches = next.iter().all(|column| {
        prev_by_key
            .get(column.key.as_str())
            .is_some_and(|prev_column| comparer.same_column(prev_column, column))
    });
    if !next_matches {
        return false;
    }

    // Same length and every next key found in prev can still hide a
    // mismatch when keys repeat, so check the other direction too.
    prev.iter()
        .all(|column| next_by_key.contains_key(column.key.as_str()))
}
