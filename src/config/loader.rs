//! Configuration loader for quill-rs
//!
//! This module provides the `ConfigLoader` struct that handles loading
//! configuration from multiple sources with proper precedence.

use std::path::{Path, PathBuf};

use config::{Config, Environment as EnvSource, File, FileFormat};

use crate::config::environment::Environment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for configuration directory
const CONFIG_DIR_ENV: &str = "QUILL_CONFIG_DIR";

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "QUILL";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Configuration loader that handles layered configuration loading.
///
/// Layers, from lowest to highest precedence: `default.toml`, the
/// environment-specific file, `local.toml`, then `QUILL__*` environment
/// variables. Every file layer is optional.
pub struct ConfigLoader {
    config_dir: PathBuf,
    environment: Environment,
}

impl ConfigLoader {
    /// Create a loader for the given environment using the default directory.
    ///
    /// The directory can be overridden through `QUILL_CONFIG_DIR`.
    pub fn new(environment: Environment) -> Self {
        let config_dir = std::env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR));
        Self {
            config_dir,
            environment,
        }
    }

    /// Create a loader rooted at a specific configuration directory.
    pub fn with_config_dir<P: AsRef<Path>>(config_dir: P, environment: Environment) -> Self {
        Self {
            config_dir: config_dir.as_ref().to_path_buf(),
            environment,
        }
    }

    /// Load settings from every layer.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let builder = Config::builder()
            .add_source(self.file_source("default"))
            .add_source(self.file_source(self.environment.as_str()))
            .add_source(self.file_source("local"))
            .add_source(
                EnvSource::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            );

        let settings: Settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }

    /// Load settings from a single explicit configuration file.
    ///
    /// Environment variables still apply on top, but the layered directory
    /// files are skipped. The file must exist.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Settings, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let settings: Settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .add_source(
                EnvSource::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    fn file_source(&self, name: &str) -> File<config::FileSourceFile, FileFormat> {
        File::from(self.config_dir.join(format!("{name}.toml")))
            .format(FileFormat::Toml)
            .required(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_with_missing_directory_yields_defaults() {
        let loader =
            ConfigLoader::with_config_dir("definitely/not/a/real/dir", Environment::Test);
        let settings = loader.load().unwrap();
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.application.name, "quill-rs");
    }

    #[test]
    fn test_environment_file_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("default.toml"),
            "[server]\nport = 4000\nhost = \"0.0.0.0\"\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("test.toml"), "[server]\nport = 4567\n").unwrap();

        let loader = ConfigLoader::with_config_dir(dir.path(), Environment::Test);
        let settings = loader.load().unwrap();
        assert_eq!(settings.server.port, 4567);
        assert_eq!(settings.server.host, "0.0.0.0");
    }

    #[test]
    fn test_load_file_missing_is_an_error() {
        let result = ConfigLoader::load_file("does-not-exist.toml");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_file_reads_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[database]\nurl = \"postgres://localhost/quill\"\n").unwrap();

        let settings = ConfigLoader::load_file(&path).unwrap();
        assert_eq!(settings.database.url, "postgres://localhost/quill");
    }
}
