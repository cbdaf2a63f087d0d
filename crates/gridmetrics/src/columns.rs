//! Shared, ordered column sequences.
//!
//! [`Columns`] is an `Arc`-backed slice of [`Column`]s. Cloning it shares the
//! storage, so two handles cloned from one another are the *same instance*
//! ([`Columns::ptr_eq`]). A sequence may also carry a frozen marker: a promise
//! from the caller that the sequence is only ever replaced, never edited, so
//! instance identity implies content identity. The equality checker uses
//! that promise to skip the per-column walk.

use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::error::{MetricsError, Result};

/// An ordered, cheaply clonable sequence of columns.
///
/// `PartialEq` compares contents (including computed offsets); use
/// [`same_columns`](crate::same_columns) for layout-relevant equality and
/// [`Columns::ptr_eq`] for instance identity.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "Vec<Column>", into = "Vec<Column>")]
pub struct Columns {
    inner: Arc<[Column]>,
    frozen: bool,
}

impl Columns {
    /// Create a mutable (not frozen) sequence.
    pub fn new(columns: Vec<Column>) -> Self {
        Columns {
            inner: columns.into(),
            frozen: false,
        }
    }

    /// Create a frozen sequence.
    pub fn frozen(columns: Vec<Column>) -> Self {
        Columns {
            inner: columns.into(),
            frozen: true,
        }
    }

    /// Mark this sequence as frozen. Shares storage with `self`.
    pub fn freeze(mut self) -> Self {
        self.frozen = true;
        self
    }

    /// Whether the caller promised never to edit this sequence in place.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// True when both handles point at the same storage.
    pub fn ptr_eq(a: &Columns, b: &Columns) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    /// Get the column at `index`.
    pub fn column(&self, index: usize) -> Result<&Column> {
        self.inner.get(index).ok_or(MetricsError::ColumnOutOfRange {
            index,
            len: self.inner.len(),
        })
    }

    /// Find a column by key.
    pub fn by_key(&self, key: &str) -> Option<&Column> {
        self.inner.iter().find(|c| c.key == key)
    }

    /// Return a new sequence with the column at `index` replaced.
    ///
    /// The frozen marker carries over to the new sequence.
    pub fn with_column(&self, index: usize, column: Column) -> Result<Columns> {
        let len = self.inner.len();
        if index >= len {
            return Err(MetricsError::ColumnOutOfRange { index, len });
        }

        let mut columns = self.inner.to_vec();
        columns[index] = column;
        Ok(self.replaced(columns))
    }

    /// Build a new sequence that keeps this one's frozen marker.
    pub(crate) fn replaced(&self, columns: Vec<Column>) -> Columns {
        Columns {
            inner: columns.into(),
            frozen: self.frozen,
        }
    }

    /// Sum of the resolved widths.
    pub fn total_width(&self) -> usize {
        self.inner
            .iter()
            .map(|c| c.resolved_width().unwrap_or(0))
            .fold(0, usize::saturating_add)
    }

    /// Copy the columns out into a `Vec`.
    pub fn to_vec(&self) -> Vec<Column> {
        self.inner.to_vec()
    }
}

impl Default for Columns {
    fn default() -> Self {
        Columns::new(Vec::new())
    }
}

impl Deref for Columns {
    type Target = [Column];

    fn deref(&self) -> &[Column] {
        &self.inner
    }
}

impl PartialEq for Columns {
    fn eq(&self, other: &Self) -> bool {
        self.inner[..] == other.inner[..]
    }
}

impl Eq for Columns {}

impl From<Vec<Column>> for Columns {
    fn from(columns: Vec<Column>) -> Self {
        Columns::new(columns)
    }
}

impl From<Columns> for Vec<Column> {
    fn from(columns: Columns) -> Self {
        columns.to_vec()
    }
}

impl FromIterator<Column> for Columns {
    fn from_iter<I: IntoIterator<Item = Column>>(iter: I) -> Self {
        Columns::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Columns {
    type Item = &'a Column;
    type IntoIter = std::slice::Iter<'a, Column>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
