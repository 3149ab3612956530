//! Configuration types and loading for the application.

use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::paths::write_default_config;
use crate::support::SupportStatus;
use crate::{AppPaths, Result, env_prefix};

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
#[schemars(
    title = "Application Configuration",
    description = "Main configuration for the application"
)]
pub struct AppConfig {
    /// JSON Schema reference for editor support.
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    #[schemars(skip)]
    pub schema: Option<String>,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Exit message behavior.
    pub exit_message: ExitMessageConfig,

    /// Known support relationship of the current user.
    pub support: SupportStatus,
}

impl AppConfig {
    /// Load configuration from file and environment, creating defaults if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read, parsed, or written.
    pub fn load(paths: &AppPaths, dry_run: bool) -> Result<Self> {
        if !paths.config_file.exists() {
            if dry_run {
                log::info!(
                    "dry-run: would create default config at {}",
                    paths.config_file.display()
                );
            } else {
                write_default_config(&paths.config_file)?;
            }
        }

        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed.
    pub fn load_from_path(config_file: &Path) -> Result<Self> {
        Self::load_with_environment(config_file, app_environment())
    }

    /// Load configuration from `config_file` with `environment` as the
    /// highest-priority source.
    pub(crate) fn load_with_environment(
        config_file: &Path,
        environment: Environment,
    ) -> Result<Self> {
        let built = Config::builder()
            .set_default("logging.level", "warn")?
            .set_default("exit_message.display", true)?
            .set_default("support.contributor", false)?
            .set_default("support.sponsor", false)?
            .add_source(
                File::from(config_file)
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(environment)
            .build()?;

        let config: Self = built.try_deserialize()?;
        log::debug!(
            "loaded config from {}: display exit message = {}",
            config_file.display(),
            config.exit_message.display
        );
        Ok(config)
    }
}

/// Environment source for `WTF__SECTION__KEY` style overrides.
fn app_environment() -> Environment {
    Environment::with_prefix(env_prefix().as_str()).separator("__")
}

/// Environment source that sees only `vars` instead of the process environment.
#[cfg(test)]
pub(crate) fn isolated_environment(vars: &[(&str, &str)]) -> Environment {
    let vars: config::Map<String, String> = vars
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect();
    app_environment().source(Some(vars))
}

/// Logging configuration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
#[schemars(description = "Logging configuration")]
pub struct LoggingConfig {
    /// Log level used when no verbosity flag is given (error, warn, info, debug, trace).
    #[schemars(default = "default_log_level")]
    pub level: LogLevel,
}

/// Log level enumeration for schema validation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only emit error-level messages.
    Error,
    /// Emit warnings and errors (default).
    #[default]
    Warn,
    /// Emit informational messages and above.
    Info,
    /// Emit debug diagnostics and above.
    Debug,
    /// Emit all messages including fine-grained traces.
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

const fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

/// Exit message configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
#[schemars(description = "Exit message configuration")]
pub struct ExitMessageConfig {
    /// Show the thank-you or sponsorship message when wtf exits.
    pub display: bool,
}

impl Default for ExitMessageConfig {
    fn default() -> Self {
        Self { display: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_isolated(path: &Path) -> Result<AppConfig> {
        AppConfig::load_with_environment(path, isolated_environment(&[]))
    }

    fn temp_config(name: &str, body: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("wtf-core-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        let path = dir.join("config.toml");
        std::fs::write(&path, body).expect("write temp config");
        path
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.exit_message.display);
        assert_eq!(config.support, SupportStatus::default());
        assert_eq!(config.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("wtf-core-does-not-exist/config.toml");
        let config = load_isolated(&path).expect("load defaults");
        assert!(config.exit_message.display);
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_config(
            "load",
            "[logging]\nlevel = \"debug\"\n\n[exit_message]\ndisplay = false\n\n[support]\nsponsor = true\n",
        );
        let config = load_isolated(&path).expect("load config");
        assert!(!config.exit_message.display);
        assert_eq!(config.support, SupportStatus::new(false, true));
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let path = temp_config("invalid", "[exit_message]\ndisplay = \"sometimes\"\n");
        let err = load_isolated(&path).expect_err("invalid bool");
        assert!(matches!(err, crate::CoreError::Config(_)));
    }

    #[test]
    fn test_environment_overrides_file() {
        let path = temp_config(
            "env",
            "[exit_message]\ndisplay = true\n\n[support]\nsponsor = false\n",
        );
        let environment = isolated_environment(&[
            ("WTF__EXIT_MESSAGE__DISPLAY", "false"),
            ("WTF__SUPPORT__SPONSOR", "true"),
        ]);
        let config =
            AppConfig::load_with_environment(&path, environment).expect("load with overrides");
        assert!(!config.exit_message.display);
        assert_eq!(config.support, SupportStatus::new(false, true));
    }

    #[test]
    fn test_unprefixed_variables_are_ignored() {
        let path = temp_config("unprefixed", "[support]\ncontributor = true\n");
        let environment = isolated_environment(&[("SUPPORT__CONTRIBUTOR", "false")]);
        let config = AppConfig::load_with_environment(&path, environment).expect("load config");
        assert!(config.support.is_contributor);
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(log::LevelFilter::from(LogLevel::Trace), log::LevelFilter::Trace);
        assert_eq!(log::LevelFilter::from(LogLevel::Warn), log::LevelFilter::Warn);
    }
}
