//! Game configuration (TOML)
//!
//! ```toml
//! map_path = "map.txt"
//! steps = 22
//! inventory_capacity = 2
//! log_file = "cave.log"
//! ```
//!
//! Every key is optional; missing keys take the defaults below.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::{DEFAULT_MAP_FILE, INVENTORY_LIMIT, INVENTORY_MAX, START_STEPS};

/// User-configurable game settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Map file to build the board from
    pub map_path: PathBuf,
    /// Steps available per round
    pub steps: u32,
    /// Inventory slots
    pub inventory_capacity: usize,
    /// Log destination; logging goes to stderr (plain mode) or nowhere (TUI) when unset
    pub log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            map_path: PathBuf::from(DEFAULT_MAP_FILE),
            steps: START_STEPS,
            inventory_capacity: INVENTORY_MAX,
            log_file: None,
        }
    }
}

impl GameConfig {
    /// Parse a configuration from TOML text and check its bounds
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate(path)?;
        Ok(config)
    }

    /// Reject values the game cannot honor
    pub fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        if self.inventory_capacity > INVENTORY_LIMIT {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                reason: format!(
                    "inventory_capacity must be at most {}, got {}",
                    INVENTORY_LIMIT, self.inventory_capacity
                ),
            });
        }
        Ok(())
    }

    /// Load a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Load a configuration file, using defaults when it does not exist.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }
}
