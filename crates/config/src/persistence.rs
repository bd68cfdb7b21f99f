//! Configuration persistence for user preferences.
//!
//! This module provides functionality to save and load user preferences
//! to disk using platform-standard configuration directories. The only
//! durable preference is the theme flag; it is read once at startup and
//! written on every toggle.

use crate::types::ColorTheme;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by configuration persistence.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to determine project directories")]
    NoProjectDirs,
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// User preferences that persist across application runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PersistedState {
    /// Selected color theme.
    #[serde(default)]
    pub theme: ColorTheme,
}

/// Manages loading and saving user configuration to disk.
pub struct ConfigManager {
    /// Path to the configuration file.
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new `ConfigManager` using platform-standard config directories.
    ///
    /// # Errors
    /// Returns an error if `ProjectDirs::from` fails (should be rare).
    pub fn new() -> Result<Self, ConfigError> {
        let proj_dirs = directories::ProjectDirs::from("se", "optiklab", "optiklab")
            .ok_or(ConfigError::NoProjectDirs)?;

        let config_path = proj_dirs.config_dir().join("config.json");
        Ok(Self { config_path })
    }

    /// Creates a `ConfigManager` backed by an explicit file path.
    ///
    /// Used by tests and by callers that manage their own config location.
    pub fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Returns the path to the configuration file.
    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Loads persisted state from disk.
    ///
    /// Returns default state if the file doesn't exist or cannot be read.
    pub fn load(&self) -> PersistedState {
        match self.load_inner() {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(
                    path = %self.config_path.display(),
                    error = %e,
                    "Failed to load config, using defaults"
                );
                PersistedState::default()
            }
        }
    }

    fn load_inner(&self) -> Result<PersistedState, ConfigError> {
        let content = std::fs::read_to_string(&self.config_path)?;
        let state: PersistedState = serde_json::from_str(&content)?;
        Ok(state)
    }

    /// Saves persisted state to disk.
    ///
    /// # Errors
    /// Returns an error if the parent directory cannot be created
    /// or the file cannot be written.
    pub fn save(&self, state: &PersistedState) -> Result<(), ConfigError> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.config_path, content)?;

        tracing::debug!(
            path = %self.config_path.display(),
            "Config saved successfully"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persisted_state_default() {
        let state = PersistedState::default();
        assert_eq!(state.theme, ColorTheme::Light);
    }

    #[test]
    fn test_serialize_deserialize() {
        let state = PersistedState {
            theme: ColorTheme::Dark,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: PersistedState = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.theme, ColorTheme::Dark);
    }

    #[test]
    fn test_missing_theme_field_defaults() {
        // Older config files may predate the theme key.
        let deserialized: PersistedState = serde_json::from_str("{}").unwrap();
        assert_eq!(deserialized.theme, ColorTheme::Light);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_path(dir.path().join("nested").join("config.json"));

        let state = PersistedState {
            theme: ColorTheme::Dark,
        };
        manager.save(&state).unwrap();

        assert_eq!(manager.load(), state);
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_path(dir.path().join("does-not-exist.json"));

        assert_eq!(manager.load(), PersistedState::default());
    }

    #[test]
    fn test_load_corrupt_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json at all").unwrap();

        let manager = ConfigManager::with_path(path);
        assert_eq!(manager.load(), PersistedState::default());
    }
}
