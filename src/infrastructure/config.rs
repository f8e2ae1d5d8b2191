//! Configuration management

use crate::domain::DEFAULT_CATEGORY;
use crate::error::{NoteError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the workspace metadata directory
pub const WORKSPACE_DIR: &str = ".notedesk";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Category used by `add` when none is given
    #[serde(default = "default_category")]
    pub default_category: String,
    pub created: DateTime<Utc>,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            default_category: default_category(),
            created: Utc::now(),
        }
    }

    /// Load config from .notedesk/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(WORKSPACE_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                NoteError::NotNotedeskDirectory(path.to_path_buf())
            } else {
                NoteError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| NoteError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .notedesk/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let workspace_dir = path.join(WORKSPACE_DIR);
        let config_path = workspace_dir.join("config.toml");

        if !workspace_dir.exists() {
            fs::create_dir(&workspace_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| NoteError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}
