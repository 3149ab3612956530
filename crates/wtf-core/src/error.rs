//! Error types for the core library.
//!
//! Only the configuration and filesystem surfaces can fail. Exit message
//! selection and name derivation are total and never produce a `CoreError`.

use thiserror::Error;

/// Core library error type.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A configuration-related error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A path resolution or validation error.
    #[error("path error: {0}")]
    Path(String),

    /// An I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

impl From<config::ConfigError> for CoreError {
    fn from(e: config::ConfigError) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for CoreError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let err: CoreError = std::io::Error::other("disk gone").into();
        assert!(matches!(err, CoreError::Io(_)));
        assert_eq!(err.to_string(), "IO error: disk gone");
    }

    #[test]
    fn test_config_error_message() {
        let err = CoreError::from(config::ConfigError::Message("bad key".to_string()));
        assert_eq!(err.to_string(), "configuration error: bad key");
    }
}
