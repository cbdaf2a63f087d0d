//! Error types for the gridmetrics crate.

use thiserror::Error;

/// Errors that can occur when parsing column definitions or editing a layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricsError {
    /// A width string is neither a pixel count nor a `N%` percentage.
    #[error("invalid column width '{value}': {reason}")]
    InvalidWidth { value: String, reason: &'static str },

    /// A column index does not exist in the layout.
    #[error("column index {index} is out of range for a layout with {len} columns")]
    ColumnOutOfRange { index: usize, len: usize },
}

/// Result type for gridmetrics operations.
pub type Result<T> = std::result::Result<T, MetricsError>;
