use std::process::ExitCode;

use clap::Parser;
use gridmetrics_cli::{run, Cli};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with JSON/YAML on stdout.
    let _ = TermLogger::init(
        cli.log_level(),
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    match run(&cli) {
        Ok(outcome) => {
            print!("{}", outcome.output);
            if outcome.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(2)
        }
    }
}
