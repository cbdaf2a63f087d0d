//! Column definitions.

use serde::{Deserialize, Serialize};

use crate::width::ColumnWidth;

/// A single grid column.
///
/// `key` identifies the column; it is what the equality checker matches on.
/// `width` is `None` for a deferred column, whose width is computed from the
/// space the other columns leave over. `left` is computed by the layout and
/// never needs to be supplied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Unique column identifier.
    pub key: String,
    /// Display title shown by the view layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Explicit width, or `None` to share the remaining space.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<ColumnWidth>,
    /// Left offset in pixels, filled in by the layout.
    #[serde(default)]
    pub left: usize,
    /// Whether the user may drag this column's edge.
    #[serde(default)]
    pub resizable: bool,
    /// Whether the column header sorts rows.
    #[serde(default)]
    pub sortable: bool,
    /// Whether the view layer pins this column to the left edge.
    #[serde(default)]
    pub locked: bool,
}

impl Column {
    /// Create a deferred column with the given key.
    pub fn new(key: impl Into<String>) -> Self {
        Column {
            key: key.into(),
            name: None,
            width: None,
            left: 0,
            resizable: false,
            sortable: false,
            locked: false,
        }
    }

    /// Set the display title.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set an explicit width.
    pub fn width(mut self, width: impl Into<ColumnWidth>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Set a pixel width (shorthand for `.width(ColumnWidth::Pixels(px))`).
    pub fn fixed(self, px: usize) -> Self {
        self.width(ColumnWidth::Pixels(px))
    }

    /// Set a percentage width (shorthand for `.width(ColumnWidth::Percent(pct))`).
    pub fn percent(self, pct: u32) -> Self {
        self.width(ColumnWidth::Percent(pct))
    }

    /// Mark the column as resizable.
    pub fn resizable(mut self) -> Self {
        self.resizable = true;
        self
    }

    /// Mark the column as sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Pin the column to the left edge.
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    /// True when the column has no width of its own.
    pub fn is_deferred(&self) -> bool {
        self.width.is_none()
    }

    /// The width in pixels, once percentages and deferred widths are resolved.
    pub fn resolved_width(&self) -> Option<usize> {
        self.width.and_then(|w| w.as_pixels())
    }

    /// Pixel offset of the right edge (`left + width`).
    pub fn right(&self) -> usize {
        self.left.saturating_add(self.resolved_width().unwrap_or(0))
    }
}
