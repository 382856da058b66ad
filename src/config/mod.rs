//! Configuration management for devpad.
//!
//! Handles persistence and loading of user preferences.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Persisted user preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Show projects whose record is marked inactive
    #[serde(default)]
    pub show_inactive: bool,

    /// Override for the storage directory; the platform config directory is
    /// used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from disk, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Directory holding projects, categories, and sheets
    pub fn storage_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.storage_dir {
            return Ok(dir.clone());
        }
        Ok(dirs::config_dir()
            .context("Could not find config directory")?
            .join("devpad"))
    }

    /// Get the path to the config file
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not find config directory")?;

        Ok(config_dir.join("devpad").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.show_inactive);
        assert!(config.storage_dir.is_none());
    }

    #[test]
    fn test_explicit_storage_dir_wins() {
        let config = Config {
            storage_dir: Some(PathBuf::from("/tmp/devpad-test")),
            ..Default::default()
        };
        assert_eq!(
            config.storage_dir().unwrap(),
            PathBuf::from("/tmp/devpad-test")
        );
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            show_inactive: true,
            storage_dir: None,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("storage_dir"));

        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert!(parsed.show_inactive);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let parsed: Config = serde_json::from_str("{}").unwrap();
        assert!(!parsed.show_inactive);
        assert!(parsed.storage_dir.is_none());
    }
}
