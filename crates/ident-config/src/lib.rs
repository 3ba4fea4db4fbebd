mod config;
mod error;
mod log_level;
mod logging_config;
mod system;
mod user_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use user_config::UserConfig;

const CONFIG_DIR_ENV: &str = "IDENT_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".ident";
const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_HOST_NAME: &str = "localhost";
