//! Configuration handling for the TUI

use crate::options::SelectOption;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
const CONFIG_ENV: &str = "REGISTRATION_TUI_CONFIG";

const DEFAULT_MASK_CHAR: char = '•';

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegistrationConfig {
    /// Character used to mask password fields
    pub mask_char: Option<char>,
    /// Replaces the built-in qualification options
    pub qualification_options: Option<Vec<SelectOption>>,
    /// Show the key hint line under the form
    pub show_help: Option<bool>,
}

impl RegistrationConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("io", "registration", "registration-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from a specific file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: RegistrationConfig = serde_json::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn mask_char(&self) -> char {
        self.mask_char.unwrap_or(DEFAULT_MASK_CHAR)
    }

    pub fn show_help(&self) -> bool {
        self.show_help.unwrap_or(true)
    }
}
