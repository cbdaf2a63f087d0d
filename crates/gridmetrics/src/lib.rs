//! gridmetrics - Column widths and offsets for data grids.
//!
//! Given a list of column definitions and the pixel width of a grid,
//! gridmetrics works out how wide every column is and where it starts. It
//! also answers the question a view layer asks before doing any of that
//! work: did the columns actually change?
//!
//! # Quick Start
//!
//! ```rust
//! use gridmetrics::{recalculate, resize_column, Column, ColumnMetrics};
//!
//! // 17px is reserved for the scrollbar while it is visible.
//! const SCROLLBAR: usize = 17;
//!
//! let metrics = ColumnMetrics::new(
//!     vec![
//!         Column::new("id").fixed(60),
//!         Column::new("title"),
//!         Column::new("owner").percent(20),
//!         Column::new("status"),
//!     ],
//!     1017,
//!     80,
//! );
//!
//! let laid_out = recalculate(&metrics, true, &SCROLLBAR);
//! let widths: Vec<_> = laid_out.columns.iter().map(|c| c.resolved_width()).collect();
//! assert_eq!(widths, vec![Some(60), Some(368), Some(203), Some(369)]);
//!
//! // Dragging a column edge replaces that column's width and lays out again.
//! let resized = resize_column(&laid_out, 0, 20, true, &SCROLLBAR);
//! assert_eq!(resized.columns[0].resolved_width(), Some(80));
//! ```
//!
//! # Width Rules
//!
//! | Column width | Result |
//! |--------------|--------|
//! | `Pixels(n)` | Exactly `n` pixels, `0` included |
//! | `Percent(p)` | `floor(p * total_width / 100)` pixels |
//! | unset | A share of what is left after the above and the scrollbar |
//!
//! Unset ("deferred") columns split the leftover space evenly, never going
//! below `min_column_width`; the last one absorbs the rounding remainder. If
//! nothing is left they all get exactly `min_column_width`, and the grid is
//! allowed to overflow.
//!
//! # Change Detection
//!
//! [`same_columns`] compares sequences by key, ignoring order and computed
//! offsets. Sequences marked frozen ([`Columns::frozen`]) are compared by
//! instance instead, which is much cheaper but only sound when frozen
//! sequences are never edited in place.
//!
//! # Collaborators
//!
//! The scrollbar size, the per-column comparison and the immutability check
//! are injected through [`ScrollbarSize`], [`ColumnComparer`] and
//! [`ImmutabilityProbe`]. Closures implement all three.

mod column;
mod columns;
mod equality;
mod error;
mod metrics;
mod offset;
mod resolve;
mod traits;
mod width;

// Re-export public API
pub use column::Column;
pub use columns::Columns;
pub use equality::{same_column, same_columns, same_columns_with};
pub use error::{MetricsError, Result};
pub use metrics::{recalculate, resize_column, try_resize_column, ColumnMetrics};
pub use offset::assign_offsets;
pub use resolve::{distribute_deferred_widths, explicit_width_sum, resolve_explicit_widths};
pub use traits::{
    ColumnComparer, DefaultComparer, FrozenMarker, ImmutabilityProbe, NeverFrozen, ScrollbarSize,
};
pub use width::ColumnWidth;
