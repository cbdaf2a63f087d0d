//! gridmetrics-cli - inspect grid column layouts from the command line.
//!
//! Reads a JSON or YAML layout description, runs it through
//! [`gridmetrics`], and prints the computed widths and offsets.
//!
//! ```text
//! $ gridmetrics recalc layout.yaml --total-width 800 --scrollbar -o text
//! key      width     left
//! id          60        0
//! title      523       60
//! owner      200      583
//! width 260  columns 783  total 800
//! ```

pub mod cli;
pub mod config;
pub mod input;
pub mod output;

pub use cli::{run, Cli, Command, Outcome};
pub use config::Config;
