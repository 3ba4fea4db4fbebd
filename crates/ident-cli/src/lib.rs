//! ident-cli library
//!
//! Argument definitions, command execution and logger setup for the `ident`
//! binary, exported so they can be tested without spawning a process.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::{Commands, TimeArgs, execute};
pub use error::{CliError, Result as CliErrorResult};
