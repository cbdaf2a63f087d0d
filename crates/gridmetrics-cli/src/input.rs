//! Loading layout descriptions from disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use gridmetrics::{Column, ColumnMetrics};
use serde::Deserialize;

use crate::config::Config;

/// A layout description as written by the user.
///
/// `total_width` and `min_column_width` are optional; missing values come
/// from the [`Config`].
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutFile {
    pub columns: Vec<Column>,
    #[serde(default)]
    pub total_width: Option<usize>,
    #[serde(default)]
    pub min_column_width: Option<usize>,
}

/// Serialization format of a layout file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Pick the format from the file extension; anything but YAML is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                InputFormat::Yaml
            }
            _ => InputFormat::Json,
        }
    }
}

impl LayoutFile {
    /// Parse a layout description in the given format.
    pub fn parse(text: &str, format: InputFormat) -> Result<Self> {
        match format {
            InputFormat::Json => serde_json::from_str(text).context("invalid JSON layout"),
            InputFormat::Yaml => serde_yaml::from_str(text).context("invalid YAML layout"),
        }
    }

    /// Read and parse a layout file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read layout file {}", path.display()))?;
        let layout = LayoutFile::parse(&text, InputFormat::from_path(path))
            .with_context(|| format!("in layout file {}", path.display()))?;

        log::debug!(
            "loaded {} columns from {}",
            layout.columns.len(),
            path.display()
        );
        Ok(layout)
    }

    /// Fill in missing widths from `config` and `overrides`, producing an
    /// uncomputed layout.
    ///
    /// Precedence: command-line override, then the file, then the config.
    pub fn into_metrics(self, config: &Config, overrides: &Overrides) -> ColumnMetrics {
        let total_width = overrides
            .total_width
            .or(self.total_width)
            .unwrap_or(config.total_width);
        let min_column_width = overrides
            .min_column_width
            .or(self.min_column_width)
            .unwrap_or(config.min_column_width);

        ColumnMetrics::new(self.columns, total_width, min_column_width)
    }
}

/// Command-line values that take precedence over the layout file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    pub total_width: Option<usize>,
    pub min_column_width: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn format_from_extension() {
        assert_eq!(InputFormat::from_path(&PathBuf::from("a.yaml")), InputFormat::Yaml);
        assert_eq!(InputFormat::from_path(&PathBuf::from("a.YML")), InputFormat::Yaml);
        assert_eq!(InputFormat::from_path(&PathBuf::from("a.json")), InputFormat::Json);
        assert_eq!(InputFormat::from_path(&PathBuf::from("layout")), InputFormat::Json);
    }

    #[test]
    fn parse_json() {
        let layout = LayoutFile::parse(
            r#"{"columns": [{"key": "a", "width": "50%"}, {"key": "b"}], "total_width": 400}"#,
            InputFormat::Json,
        )
        .unwrap();
        assert_eq!(layout.columns.len(), 2);
        assert_eq!(layout.total_width, Some(400));
        assert_eq!(layout.min_column_width, None);
    }

    #[test]
    fn parse_rejects_bad_width() {
        let err = LayoutFile::parse(
            r#"{"columns": [{"key": "a", "width": "half"}]}"#,
            InputFormat::Json,
        )
        .unwrap_err();
        assert!(format!("{:#}", err).contains("invalid JSON layout"));
    }

    #[test]
    fn precedence() {
        let layout = LayoutFile {
            columns: vec![Column::new("a")],
            total_width: Some(500),
            min_column_width: None,
        };
        let config = Config::default();

        let metrics = layout.clone().into_metrics(&config, &Overrides::default());
        assert_eq!(metrics.total_width, 500);
        assert_eq!(metrics.min_column_width, config.min_column_width);

        let overrides = Overrides {
            total_width: Some(900),
            min_column_width: Some(10),
        };
        let metrics = layout.into_metrics(&config, &overrides);
        assert_eq!(metrics.total_width, 900);
        assert_eq!(metrics.min_column_width, 10);
        assert!(!metrics.columns.is_frozen());
    }
}
