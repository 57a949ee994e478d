//! RON config loader
//!
//! Loads generation parameters from RON files, with fallback to defaults.

use std::fs;
use std::path::Path;

use super::config::GenerationConfig;
use crate::error::Result;

/// Default location of the generation config
pub const DEFAULT_CONFIG_PATH: &str = "assets/data/dungeon.ron";

/// Reads and writes generation configs
pub struct DataLoader;

impl DataLoader {
    /// Load and validate a config file
    pub fn load_config(path: impl AsRef<Path>) -> Result<GenerationConfig> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: GenerationConfig = ron::from_str(&content)?;
        config.validate()?;
        log::info!("Loaded generation config from {:?}", path.as_ref());
        Ok(config)
    }

    /// Load a config file, falling back to defaults when it is missing or bad
    pub fn load_or_default(path: impl AsRef<Path>) -> GenerationConfig {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("No config at {:?}, using defaults", path);
            return GenerationConfig::default();
        }
        Self::load_config(path).unwrap_or_else(|e| {
            log::warn!("Failed to load {:?}: {}. Using defaults.", path, e);
            GenerationConfig::default()
        })
    }

    /// Write a config as pretty RON, creating parent directories
    pub fn save_config(config: &GenerationConfig, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = ron::ser::to_string_pretty(config, ron::ser::PrettyConfig::default())?;
        fs::write(path, content)?;
        log::info!("Wrote generation config to {:?}", path);
        Ok(())
    }

    /// Export the default config for easy editing
    pub fn export_default(path: impl AsRef<Path>) -> Result<()> {
        Self::save_config(&GenerationConfig::default(), path)
    }
}
