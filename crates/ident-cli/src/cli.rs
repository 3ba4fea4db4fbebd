use crate::commands::Commands;

use ident_config::LogLevel;

use clap::Parser;

#[derive(Parser)]
#[command(name = "ident")]
#[command(about = "Build and format author/committer identity lines")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Override logging.level from config (off, error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,
}
