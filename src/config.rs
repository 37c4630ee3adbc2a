//! Configuration for frontdesk
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FRONTDESK_*)
//! 3. Project config (./frontdesk.toml)
//! 4. User config (~/.config/frontdesk/config.toml)
//! 5. Built-in defaults (lowest priority)

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{FrontdeskError, FrontdeskResult};

/// Resolved application configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub hotel: HotelConfig,
    pub storage: StorageConfig,
}

/// `[hotel]` section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HotelConfig {
    /// Name used when starting without a data file
    pub name: String,
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            name: "Grand Hotel".to_string(),
        }
    }
}

/// `[storage]` section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Default path of the JSON data file
    pub data_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("hotel_data.json"),
        }
    }
}

/// Non-fatal configuration warning surfaced to CLI users
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Dotted path of the unknown key (e.g. "hotel.colour")
    pub key: String,
    pub file: PathBuf,
}

impl Config {
    /// Load from a TOML file, discarding warnings
    pub fn load(path: &Path) -> FrontdeskResult<Self> {
        Ok(Self::load_with_warnings(path)?.0)
    }

    /// Load from a TOML file and collect unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> FrontdeskResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_keys: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);
        let config: Config = serde_ignored::deserialize(deserializer, |p| {
            unknown_keys.push(p.to_string());
        })
        .map_err(|e| FrontdeskError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_keys
            .into_iter()
            .map(|key| ConfigWarning {
                key,
                file: path.to_path_buf(),
            })
            .collect();

        Ok((config, warnings))
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> (Self, Vec<ConfigWarning>) {
        if let Some(root) = project_root {
            let project_config = root.join("frontdesk.toml");
            if project_config.exists() {
                if let Ok((config, warnings)) = Self::load_with_warnings(&project_config) {
                    return (with_env_overrides(config), warnings);
                }
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("frontdesk/config.toml");
            if user_config.exists() {
                if let Ok((config, warnings)) = Self::load_with_warnings(&user_config) {
                    return (with_env_overrides(config), warnings);
                }
            }
        }

        (with_env_overrides(Config::default()), Vec::new())
    }
}

/// Apply environment variable overrides (FRONTDESK_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    if let Ok(name) = std::env::var("FRONTDESK_HOTEL_NAME") {
        if !name.is_empty() {
            config.hotel.name = name;
        }
    }
    if let Ok(file) = std::env::var("FRONTDESK_DATA_FILE") {
        if !file.is_empty() {
            config.storage.data_file = PathBuf::from(file);
        }
    }
    config
}
