//! Column width values.
//!
//! A column either carries an explicit width or leaves it unset. Unset widths
//! are modelled as `Option::None` on [`Column`](crate::Column); this module
//! only deals with the explicit forms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MetricsError;

/// An explicit column width.
///
/// Serializes as a number for [`ColumnWidth::Pixels`] and as a `"N%"` string
/// for [`ColumnWidth::Percent`].
///
/// ```rust
/// use gridmetrics::ColumnWidth;
///
/// let half: ColumnWidth = "50%".parse().unwrap();
/// assert_eq!(half, ColumnWidth::Percent(50));
/// assert_eq!(half.resolve(200), 100);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WidthRaw", into = "WidthRaw")]
pub enum ColumnWidth {
    /// Width in pixels. Zero is a valid explicit width.
    Pixels(usize),
    /// Percentage of the grid's total width, floored to whole pixels.
    Percent(u32),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum WidthRaw {
    Pixels(usize),
    Text(String),
}

impl From<ColumnWidth> for WidthRaw {
    fn from(width: ColumnWidth) -> Self {
        match width {
            ColumnWidth::Pixels(px) => WidthRaw::Pixels(px),
            ColumnWidth::Percent(_) => WidthRaw::Text(width.to_string()),
        }
    }
}

impl TryFrom<WidthRaw> for ColumnWidth {
    type Error = MetricsError;

    fn try_from(raw: WidthRaw) -> Result<Self, Self::Error> {
        match raw {
            WidthRaw::Pixels(px) => Ok(ColumnWidth::Pixels(px)),
            WidthRaw::Text(s) => s.parse(),
        }
    }
}

impl ColumnWidth {
    /// Create a pixel width.
    pub fn pixels(px: usize) -> Self {
        ColumnWidth::Pixels(px)
    }

    /// Create a percentage width.
    pub fn percent(pct: u32) -> Self {
        ColumnWidth::Percent(pct)
    }

    /// Whether this width depends on the grid's total width.
    pub fn is_percent(&self) -> bool {
        matches!(self, ColumnWidth::Percent(_))
    }

    /// The pixel value, if this width is already in pixels.
    pub fn as_pixels(&self) -> Option<usize> {
        match self {
            ColumnWidth::Pixels(px) => Some(*px),
            ColumnWidth::Percent(_) => None,
        }
    }

    /// Resolve to pixels against `total_width`.
    ///
    /// Percentages are floored: `floor(pct * total_width / 100)`.
    pub fn resolve(&self, total_width: usize) -> usize {
        match self {
            ColumnWidth::Pixels(px) => *px,
            ColumnWidth::Percent(pct) => {
                let px = u128::from(*pct) * total_width as u128 / 100;
                usize::try_from(px).unwrap_or(usize::MAX)
            }
        }
    }
}

impl From<usize> for ColumnWidth {
    fn from(px: usize) -> Self {
        ColumnWidth::Pixels(px)
    }
}

impl fmt::Display for ColumnWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnWidth::Pixels(px) => write!(f, "{}", px),
            ColumnWidth::Percent(pct) => write!(f, "{}%", pct),
        }
    }
}

impl FromStr for ColumnWidth {
    type Err = MetricsError;

    /// Parse `"120"` as pixels and `"50%"` as a percentage.
    ///
    /// Only ASCII digit runs are accepted, so whitespace, signs, decimals and
    /// units other than `%` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| MetricsError::InvalidWidth {
            value: s.to_string(),
            reason,
        };

        let (digits, is_percent) = match s.strip_suffix('%') {
            Some(digits) => (digits, true),
            None => (s, false),
        };

        if digits.is_empty() {
            return Err(invalid("expected digits like '120' or '50%'"));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected digits like '120' or '50%'"));
        }

        if is_percent {
            digits
                .parse::<u32>()
                .map(ColumnWidth::Percent)
                .map_err(|_| invalid("percentage is too large"))
        } else {
            digits
                .parse::<usize>()
                .map(ColumnWidth::Pixels)
                .map_err(|_| invalid("pixel width is too large"))
        }
    }
}
