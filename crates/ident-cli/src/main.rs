//! ident - author/committer identity lines
//!
//! # Examples
//!
//! ```bash
//! # Canonical line for the configured committer, right now
//! ident committer
//!
//! # Fixed values
//! ident format --name "A U Thor" --email author@example.com --when 1142878449000 --tz -300
//!
//! # Pieces of the format
//! ident sanitize "  <odd>\nname  "
//! ident timezone 330
//! ```

use ident_cli::{Cli, CliErrorResult, execute, logger};
use ident_config::Config;
use ident_core::SystemClock;

use std::process::ExitCode;

use chrono::Local;
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> CliErrorResult<String> {
    let mut config = Config::load()?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.validate()?;

    let log_file = config.log_file_path()?;
    logger::initialize(
        config.logging.level,
        log_file.as_deref(),
        config.logging.colored,
    )?;
    config.log_summary();

    execute(&cli.command, &config.user, &SystemClock, &Local)
}
