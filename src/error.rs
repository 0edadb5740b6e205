//! Domain error types for tvpicker
//!
//! The picker itself has no recoverable failures; errors only arise at the
//! edges: terminal setup and config files.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for tvpicker
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Result type alias for PickerError
pub type Result<T> = std::result::Result<T, PickerError>;

/// Result type alias for ConfigError
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Invalid {
            field: "focused_scale",
            reason: "must be positive".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for 'focused_scale': must be positive"
        );

        let top: PickerError = err.into();
        assert!(top.to_string().starts_with("Config error:"));
    }
}
