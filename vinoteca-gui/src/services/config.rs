//! GUI configuration service
//!
//! Handles persistent user preferences for the chart display.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from loading or saving the GUI config
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or write the config file
    #[error("Config IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the config file
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Failed to serialize the config
    #[error("Config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// GUI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    /// Draw numeric values at the radar markers
    pub show_values: bool,

    /// Draw axis labels outside the rim
    pub show_axis_labels: bool,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            show_values: true,
            show_axis_labels: true,
        }
    }
}

impl GuiConfig {
    /// Get the config file path
    fn config_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "vinoteca")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| {
                std::env::var("HOME")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("."))
                    .join(".config")
                    .join("vinoteca")
            })
            .join("gui.toml")
    }

    /// Load config from disk, falling back to defaults
    pub fn load() -> Self {
        let path = Self::config_path();
        match Self::load_from(&path) {
            Ok(config) => {
                log::debug!("Loaded GUI config from {:?}", path);
                config
            }
            Err(ConfigError::Io(_)) => Self::default(),
            Err(e) => {
                log::warn!("Failed to load GUI config: {}", e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path();
        self.save_to(&path)?;
        log::debug!("Saved GUI config to {:?}", path);
        Ok(())
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shows_everything() {
        let config = GuiConfig::default();
        assert!(config.show_values);
        assert!(config.show_axis_labels);
    }

    #[test]
    fn test_save_and_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("gui.toml");

        let config = GuiConfig {
            show_values: false,
            show_axis_labels: true,
        };
        config.save_to(&path).unwrap();

        let back = GuiConfig::load_from(&path).unwrap();
        assert!(!back.show_values);
        assert!(back.show_axis_labels);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = GuiConfig::load_from(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: GuiConfig = toml::from_str("show_values = false").unwrap();
        assert!(!config.show_values);
        assert!(config.show_axis_labels);
    }
}
