//! Command-line definition and command execution.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use gridmetrics::{
    recalculate, same_column, same_columns, try_resize_column, Column, ColumnMetrics, Columns,
};
use simplelog::LevelFilter;

use crate::config::Config;
use crate::input::{LayoutFile, Overrides};
use crate::output::{render, OutputMode};

/// Compute grid column widths and offsets from a layout description.
#[derive(Debug, Parser)]
#[command(name = "gridmetrics", version)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// YAML file with default total width, minimum width and scrollbar size
    #[arg(long, global = true, env = "GRIDMETRICS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Lay out every column
    Recalc(LayoutArgs),

    /// Lay out the columns, then resize one of them
    Resize {
        #[command(flatten)]
        layout: LayoutArgs,

        /// Position of the column to resize
        #[arg(long)]
        index: usize,

        /// Requested width in pixels (raised to the minimum column width)
        #[arg(long)]
        width: usize,
    },

    /// Check whether two layout files describe the same columns
    Compare {
        prev: PathBuf,
        next: PathBuf,

        /// Only compare column keys, not widths or flags
        #[arg(long)]
        by_key: bool,

        /// Treat both column lists as frozen and compare by instance
        #[arg(long)]
        frozen: bool,
    },
}

#[derive(Debug, Args)]
pub struct LayoutArgs {
    /// Layout file (.json, .yaml or .yml)
    pub file: PathBuf,

    /// Grid width in pixels, overriding the file
    #[arg(long)]
    pub total_width: Option<usize>,

    /// Minimum width for deferred and resized columns, overriding the file
    #[arg(long)]
    pub min_column_width: Option<usize>,

    /// Reserve space for a vertical scrollbar
    #[arg(long)]
    pub scrollbar: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputMode::Auto)]
    pub output: OutputMode,
}

impl LayoutArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            total_width: self.total_width,
            min_column_width: self.min_column_width,
        }
    }

    fn load(&self, config: &Config) -> Result<ColumnMetrics> {
        let layout = LayoutFile::load(&self.file)?;
        Ok(layout.into_metrics(config, &self.overrides()))
    }
}

impl Cli {
    /// Log level selected by `-v` flags.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// What a command printed and whether it succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub success: bool,
}

impl Outcome {
    fn ok(output: String) -> Self {
        Outcome {
            output,
            success: true,
        }
    }
}

/// Run a parsed command line.
pub fn run(cli: &Cli) -> Result<Outcome> {
    let config = Config::load(cli.config.as_deref())?;

    match &cli.command {
        Command::Recalc(args) => {
            let metrics = args.load(&config)?;
            let laid_out = recalculate(&metrics, args.scrollbar, &config.scrollbar_size);
            Ok(Outcome::ok(render(&laid_out, args.output)?))
        }
        Command::Resize {
            layout,
            index,
            width,
        } => {
            let metrics = layout.load(&config)?;
            let laid_out = recalculate(&metrics, layout.scrollbar, &config.scrollbar_size);
            let resized = try_resize_column(
                &laid_out,
                *index,
                *width,
                layout.scrollbar,
                &config.scrollbar_size,
            )
            .with_context(|| format!("cannot resize column in {}", layout.file.display()))?;
            Ok(Outcome::ok(render(&resized, layout.output)?))
        }
        Command::Compare {
            prev,
            next,
            by_key,
            frozen,
        } => {
            let (prev_columns, next_columns) = load_pair(prev, next, *frozen)?;
            let same = if *by_key {
                same_columns(&prev_columns, &next_columns, &|a: &Column, b: &Column| {
                    a.key == b.key
                })
            } else {
                same_columns(&prev_columns, &next_columns, &same_column)
            };

            let output = if same { "same\n" } else { "different\n" };
            Ok(Outcome {
                output: output.to_string(),
                success: same,
            })
        }
    }
}

/// Load the two column lists to compare.
///
/// With `frozen`, the same path loads a single shared instance, so the
/// identity check can succeed.
fn load_pair(prev: &Path, next: &Path, frozen: bool) -> Result<(Columns, Columns)> {
    let load = |path: &Path| -> Result<Columns> {
        let layout = LayoutFile::load(path)?;
        Ok(if frozen {
            Columns::frozen(layout.columns)
        } else {
            Columns::new(layout.columns)
        })
    };

    let prev_columns = load(prev)?;
    let next_columns = if frozen && prev == next {
        log::debug!("{} compared with itself, sharing one instance", prev.display());
        prev_columns.clone()
    } else {
        load(next)?
    };
    Ok((prev_columns, next_columns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_resize() {
        let cli = Cli::try_parse_from([
            "gridmetrics",
            "resize",
            "layout.json",
            "--index",
            "2",
            "--width",
            "150",
            "--scrollbar",
            "-o",
            "json",
        ])
        .unwrap();

        match cli.command {
            Command::Resize {
                layout,
                index,
                width,
            } => {
                assert_eq!(layout.file, PathBuf::from("layout.json"));
                assert_eq!(index, 2);
                assert_eq!(width, 150);
                assert!(layout.scrollbar);
                assert_eq!(layout.output, OutputMode::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn verbosity_levels() {
        let quiet = Cli::try_parse_from(["gridmetrics", "recalc", "a.json"]).unwrap();
        assert_eq!(quiet.log_level(), LevelFilter::Warn);
        let loud = Cli::try_parse_from(["gridmetrics", "-vv", "recalc", "a.json"]).unwrap();
        assert_eq!(loud.log_level(), LevelFilter::Trace);
    }
}
