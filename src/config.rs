//! Configuration file management for persistent settings.
//!
//! Stores user preferences in ~/.byteout/config.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::locale::Locale;

/// User configuration that persists between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Language for diagnostic messages
    #[serde(default)]
    pub locale: Locale,
    /// Whether to print the offending line with a caret under it
    #[serde(default = "default_show_context")]
    pub show_context: bool,
}

fn default_show_context() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            locale: Locale::English,
            show_context: true,
        }
    }
}

impl Config {
    /// Get the config directory path (~/.byteout)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".byteout"))
    }

    /// Get the config file path (~/.byteout/config.json)
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load config from file, or return default if not found
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Config::default(),
        }
    }

    /// Load config from a specific file, or return default if unreadable
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_json(&contents),
            Err(_) => Config::default(),
        }
    }

    /// Parse config contents, falling back to defaults if they are malformed
    pub fn from_json(contents: &str) -> Self {
        serde_json::from_str(contents).unwrap_or_default()
    }

    /// Save config to ~/.byteout/config.json, returning where it went
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path().ok_or(Error::ConfigDir)?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to a specific file, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent()
            && !dir.exists()
        {
            fs::create_dir_all(dir)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }
}
