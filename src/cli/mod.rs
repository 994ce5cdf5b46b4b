//! CLI module for quill-rs
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing with clap
//! - Configuration loading with CLI argument overrides
//! - Command execution and validation
//! - Command handlers for serve and migrate operations

pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

pub use executor::{execute_command, wants_server};
pub use parser::{Cli, Commands, Environment, LogLevel};

use crate::config::ConfigLoader;
use crate::config::settings::Settings;
use crate::logger::init_logger;

/// Load configuration and apply CLI argument overrides
///
/// Loading order:
/// 1. The explicit `--config` file, or the layered directory files
/// 2. `QUILL__*` environment variable overrides
/// 3. CLI argument overrides (host, port, log level, verbosity)
///
/// The merged settings are validated before being returned.
pub fn load_and_merge_config(cli: &Cli) -> anyhow::Result<Settings> {
    let environment = cli
        .env
        .clone()
        .map(crate::config::Environment::from)
        .unwrap_or_else(crate::config::Environment::from_env);

    let mut settings = match &cli.config {
        Some(path) => ConfigLoader::load_file(path)?,
        None => ConfigLoader::new(environment).load()?,
    };

    apply_cli_overrides(&mut settings, cli);

    settings.validate()?;
    Ok(settings)
}

/// Initialize logger from settings
pub fn init_logger_from_settings(settings: &Settings) -> anyhow::Result<()> {
    init_logger(settings.logger.clone())
}

fn apply_cli_overrides(settings: &mut Settings, cli: &Cli) {
    if let Some(Commands::Serve {
        host,
        port,
        log_level,
        ..
    }) = &cli.command
    {
        if let Some(host) = host {
            settings.server.host = host.clone();
        }
        if let Some(port) = port {
            settings.server.port = *port;
        }
        if let Some(level) = log_level {
            settings.logger.level = level.as_str().to_string();
        }
    }

    // --log-level wins over the global verbosity flags
    let log_level_set = matches!(
        &cli.command,
        Some(Commands::Serve {
            log_level: Some(_),
            ..
        })
    );
    if !log_level_set {
        if cli.verbose {
            settings.logger.level = "debug".to_string();
        } else if cli.quiet {
            settings.logger.level = "error".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_overrides_host_and_port() {
        let cli =
            Cli::try_parse_from(["quill-rs", "serve", "--host", "0.0.0.0", "--port", "9000"])
                .unwrap();
        let mut settings = Settings::default();

        apply_cli_overrides(&mut settings, &cli);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 9000);
    }

    #[test]
    fn test_verbose_sets_debug_level() {
        let cli = Cli::try_parse_from(["quill-rs", "--verbose", "serve"]).unwrap();
        let mut settings = Settings::default();

        apply_cli_overrides(&mut settings, &cli);
        assert_eq!(settings.logger.level, "debug");
    }

    #[test]
    fn test_quiet_sets_error_level() {
        let cli = Cli::try_parse_from(["quill-rs", "--quiet"]).unwrap();
        let mut settings = Settings::default();

        apply_cli_overrides(&mut settings, &cli);
        assert_eq!(settings.logger.level, "error");
    }

    #[test]
    fn test_log_level_flag_wins_over_verbose() {
        let cli =
            Cli::try_parse_from(["quill-rs", "--verbose", "serve", "--log-level", "warn"])
                .unwrap();
        let mut settings = Settings::default();

        apply_cli_overrides(&mut settings, &cli);
        assert_eq!(settings.logger.level, "warn");
    }
}
