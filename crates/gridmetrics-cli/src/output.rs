//! Output mode control.
//!
//! [`OutputMode`] decides how a computed layout is printed: as an aligned
//! table (styled or plain) or serialized as JSON/YAML.

use anyhow::{Context, Result};
use clap::ValueEnum;
use console::style;
use gridmetrics::ColumnMetrics;

/// Controls how output is rendered.
///
/// This is the user-facing enum for the `--output` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Auto-detect: a terminal gets Term, a pipe gets Text
    #[default]
    Auto,
    /// Table with terminal styling
    Term,
    /// Plain table
    Text,
    /// Serialize the layout as JSON
    Json,
    /// Serialize the layout as YAML
    Yaml,
}

impl OutputMode {
    /// Resolves Auto mode to Term or Text based on whether stdout is a terminal.
    ///
    /// For non-Auto modes, returns self unchanged.
    pub fn resolve_auto(&self) -> OutputMode {
        match self {
            OutputMode::Auto => {
                if console::Term::stdout().features().colors_supported() {
                    OutputMode::Term
                } else {
                    OutputMode::Text
                }
            }
            other => *other,
        }
    }
}

/// Render a computed layout in the given mode.
pub fn render(metrics: &ColumnMetrics, mode: OutputMode) -> Result<String> {
    match mode.resolve_auto() {
        OutputMode::Json => {
            let mut json =
                serde_json::to_string_pretty(metrics).context("failed to serialize as JSON")?;
            json.push('\n');
            Ok(json)
        }
        OutputMode::Yaml => serde_yaml::to_string(metrics).context("failed to serialize as YAML"),
        OutputMode::Term => Ok(render_table(metrics, true)),
        OutputMode::Text | OutputMode::Auto => Ok(render_table(metrics, false)),
    }
}

/// Render the layout as a `key / width / left` table with a summary line.
pub fn render_table(metrics: &ColumnMetrics, styled: bool) -> String {
    let key_width = metrics
        .columns
        .iter()
        .map(|c| console::measure_text_width(&c.key))
        .chain(std::iter::once(3))
        .max()
        .unwrap_or(3);

    let mut out = String::new();
    let header = format!(
        "{}  {:>7}  {:>7}",
        console::pad_str("key", key_width, console::Alignment::Left, None),
        "width",
        "left"
    );
    if styled {
        out.push_str(&style(header).bold().to_string());
    } else {
        out.push_str(&header);
    }
    out.push('\n');

    for column in metrics.columns.iter() {
        let width = column
            .resolved_width()
            .map(|w| w.to_string())
            .unwrap_or_else(|| "-".to_string());
        let key = console::pad_str(&column.key, key_width, console::Alignment::Left, None);
        if styled {
            out.push_str(&format!(
                "{}  {:>7}  {:>7}\n",
                style(key).cyan(),
                width,
                style(column.left).dim()
            ));
        } else {
            out.push_str(&format!("{}  {:>7}  {:>7}\n", key, width, column.left));
        }
    }

    let summary = format!(
        "width {}  columns {}  total {}",
        metrics.width,
        metrics.columns_width(),
        metrics.total_width
    );
    if styled {
        out.push_str(&style(summary).dim().to_string());
    } else {
        out.push_str(&summary);
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridmetrics::{recalculate, Column};

    fn laid_out() -> ColumnMetrics {
        let metrics = ColumnMetrics::new(
            vec![Column::new("id").fixed(40), Column::new("title")],
            200,
            20,
        );
        recalculate(&metrics, false, &0usize)
    }

    #[test]
    fn plain_table() {
        let table = render(&laid_out(), OutputMode::Text).unwrap();
        let expected = "\
key      width     left
id          40        0
title      160       40
width 40  columns 200  total 200
";
        assert_eq!(table, expected);
    }

    #[test]
    fn json_output_parses_back() {
        let json = render(&laid_out(), OutputMode::Json).unwrap();
        let parsed: ColumnMetrics = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, laid_out());
    }

    #[test]
    fn yaml_output_has_offsets() {
        let yaml = render(&laid_out(), OutputMode::Yaml).unwrap();
        assert!(yaml.contains("left: 40"));
        assert!(yaml.contains("total_width: 200"));
    }

    #[test]
    fn explicit_modes_do_not_resolve() {
        assert_eq!(OutputMode::Json.resolve_auto(), OutputMode::Json);
        assert_eq!(OutputMode::Text.resolve_auto(), OutputMode::Text);
    }
}
