use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or resolving a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A field has the wrong shape or names an element that cannot go there.
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },
    /// Configuration file does not exist.
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
    /// Configuration file is not valid JSON.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// Atomic write operation failed.
    #[error("Atomic write failed: {0}")]
    WriteFailed(String),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// True for shape/content errors, as opposed to I/O failures
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, ConfigError::InvalidConfig { .. })
    }
}
