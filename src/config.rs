//! Configuration file support for tvpicker.
//!
//! Configuration is loaded from `~/.config/tvpicker/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/tvpicker/config.toml
//! focused_scale = 1.2
//! pressed_scale = 0.9
//! cancel_title = "Cancel"
//! list_height = 5
//! modal = false
//!
//! [cell]
//! horizontal_padding = 4
//! vertical_padding = 2
//! item_spacing = 1
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult, Result};
use crate::picker::{CANCEL_TITLE, CellMetrics, DEFAULT_FOCUSED_SCALE, DEFAULT_PRESSED_SCALE};

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scale of a focused cell
    pub focused_scale: f64,

    /// Scale of a cell while the select button is held
    pub pressed_scale: f64,

    /// Label of the cancel control
    pub cancel_title: String,

    /// Rows given to the cell list
    pub list_height: u16,

    /// Present as a modal instead of pushing onto the navigation stack
    pub modal: bool,

    /// Cell padding override; terminal metrics when absent
    pub cell: Option<CellMetrics>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            focused_scale: DEFAULT_FOCUSED_SCALE,
            pressed_scale: DEFAULT_PRESSED_SCALE,
            cancel_title: CANCEL_TITLE.to_string(),
            list_height: 5,
            modal: false,
            cell: None,
        }
    }
}

impl Config {
    /// Load configuration from the default config file path.
    pub fn load() -> Result<Self> {
        Self::load_or_default(&Self::config_path())
    }

    /// Load `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Ok(Self::load_from(path)?)
    }

    /// Load and validate a configuration file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        for (field, scale) in [
            ("focused_scale", self.focused_scale),
            ("pressed_scale", self.pressed_scale),
        ] {
            if !(scale.is_finite() && scale > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be positive, got {}", scale),
                });
            }
        }
        if self.list_height == 0 {
            return Err(ConfigError::Invalid {
                field: "list_height",
                reason: "must be at least 1".to_string(),
            });
        }
        if let Some(cell) = &self.cell {
            for (field, value) in [
                ("cell.horizontal_padding", cell.horizontal_padding),
                ("cell.vertical_padding", cell.vertical_padding),
                ("cell.item_spacing", cell.item_spacing),
            ] {
                if !(value.is_finite() && value >= 0.0) {
                    return Err(ConfigError::Invalid {
                        field,
                        reason: format!("must not be negative, got {}", value),
                    });
                }
            }
        }
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tvpicker")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over environment and config file values.
    pub fn with_overrides(mut self, modal: Option<bool>) -> Self {
        if let Some(modal) = modal.or_else(Self::modal_from_env) {
            self.modal = modal;
        }
        self
    }

    fn modal_from_env() -> Option<bool> {
        let value = std::env::var("TVPICKER_MODAL").ok()?;
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Some(true),
            "0" | "false" | "no" => Some(false),
            _ => None,
        }
    }

    /// Cell metrics to lay out with, in terminal units.
    pub fn cell_metrics(&self) -> CellMetrics {
        self.cell.unwrap_or_else(CellMetrics::terminal)
    }
}
