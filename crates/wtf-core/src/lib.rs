//! Core library for wtf - exit messages and email display names.
//!
//! This crate provides:
//! - Exit message selection based on a user's support relationship
//! - Display name derivation from email addresses
//! - A pluggable text emphasis capability (plain or ANSI)
//! - Configuration loading and management
//! - XDG-compliant config path resolution
//! - Schema and example config generation

pub mod config;
pub mod emphasis;
pub mod error;
pub mod exit_message;
pub mod names;
pub mod paths;
pub mod schema;
pub mod support;

pub use self::config::{AppConfig, ExitMessageConfig, LogLevel, LoggingConfig};
pub use emphasis::{Emphasis, Emphasize};
pub use error::{CoreError, Result};
pub use exit_message::{ExitAudience, SPONSOR_URL, exit_message};
pub use names::{name_from_email, names_from_emails};
pub use paths::AppPaths;
pub use schema::{generate_example_config, generate_schema, write_generated_files};
pub use support::SupportStatus;

/// Application name used for config directories and environment prefix.
pub const APP_NAME: &str = "wtf";

/// Returns the environment variable prefix for this application.
#[must_use]
pub fn env_prefix() -> String {
    APP_NAME
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}
