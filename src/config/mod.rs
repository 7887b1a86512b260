//! Application configuration module
//!
//! This module provides type-safe configuration loading using the `config`
//! and `dotenvy` crates. Values come from built-in defaults, an optional
//! configuration file and environment variables with the `STRATEGY_CANVAS`
//! prefix; nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use strategy_canvas::config::{init_tracing, AppConfig};
//!
//! let config = AppConfig::load(None).expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! init_tracing(&config.logging).expect("Failed to initialize logging");
//! ```

mod error;
mod logging;
mod output;

pub use error::{ConfigError, ValidationError};
pub use logging::{init_tracing, LogFormat, LoggingConfig};
pub use output::{AnalysisConfig, OutputConfig};

use std::path::Path;

use serde::Deserialize;

/// Base name of the configuration file looked up in the working directory.
const DEFAULT_FILE_STEM: &str = "strategy-canvas";

/// Root application configuration
///
/// Every section has defaults, so an empty environment loads successfully.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Log level and format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Result output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Analysis defaults
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl AppConfig {
    /// Load configuration
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads `path` if given, otherwise `strategy-canvas.{toml,yaml,json}`
    ///    when present
    /// 3. Reads environment variables with `STRATEGY_CANVAS` prefix
    /// 4. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `STRATEGY_CANVAS__LOGGING__FORMAT=json` -> `logging.format = json`
    /// - `STRATEGY_CANVAS__ANALYSIS__DEFAULT_DEPTH=quick`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an explicit file is missing or any value
    /// cannot be parsed into its expected type.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_FILE_STEM).required(false),
        };

        let config = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::default()
                    .prefix("STRATEGY_CANVAS")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::AnalysisDepth;
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::Builder;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("STRATEGY_CANVAS__LOGGING__LEVEL");
        env::remove_var("STRATEGY_CANVAS__LOGGING__FORMAT");
        env::remove_var("STRATEGY_CANVAS__OUTPUT__PRETTY");
        env::remove_var("STRATEGY_CANVAS__ANALYSIS__DEFAULT_DEPTH");
    }

    fn config_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_sources() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let file = config_file(".toml", "");
        let config = AppConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.output.pretty);
        assert_eq!(config.analysis.default_depth, AnalysisDepth::Detailed);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let file = config_file(
            ".toml",
            "[logging]\nlevel = \"debug\"\nformat = \"json\"\n\n[analysis]\ndefault_depth = \"quick\"\n",
        );
        let config = AppConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.analysis.default_depth, AnalysisDepth::Quick);
    }

    #[test]
    fn test_environment_overrides_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let file = config_file(".yaml", "output:\n  pretty: true\n");
        env::set_var("STRATEGY_CANVAS__OUTPUT__PRETTY", "false");
        env::set_var("STRATEGY_CANVAS__LOGGING__FORMAT", "json");
        let result = AppConfig::load(Some(file.path()));
        clear_env();

        let config = result.unwrap();
        assert!(!config.output.pretty);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validate_rejects_unknown_level() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("STRATEGY_CANVAS__LOGGING__LEVEL", "chatty");
        let file = config_file(".toml", "");
        let result = AppConfig::load(Some(file.path()));
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::UnknownLogLevel(_))
        ));
    }
}
