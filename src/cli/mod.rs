//! Command-line interface: argument parsing, configuration merging and
//! the `serve` / `migrate` command handlers.

pub mod config_merger;
pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

pub use config_merger::ConfigurationMerger;
pub use executor::execute_command;
pub use parser::{Cli, Commands, Environment, LogLevel};

use crate::config::{ConfigError, Settings};
use crate::logger::{LoggerError, init_logger};

/// Loads configuration files and applies the CLI overrides.
///
/// # Errors
/// Returns ConfigError if loading, merging or validation fails
pub fn load_and_merge_config(cli: &Cli) -> Result<Settings, ConfigError> {
    ConfigurationMerger::from_cli(cli)?.merge_cli_args(cli)
}

/// Installs the global tracing subscriber described by `settings.logger`.
pub fn init_logger_from_settings(settings: &Settings) -> Result<(), LoggerError> {
    init_logger(&settings.logger)
}
