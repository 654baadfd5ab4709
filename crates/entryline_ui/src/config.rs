//! Configuration management for the line editor
//!
//! Settings are read from a TOML file; every field is optional and falls back
//! to its default.

use anyhow::{Context, Result};
use entryline_hal::{ConsoleColor, TextColors};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::buffer::MAX_LEN;
use crate::error::{EditorError, EditorResult};
use crate::history::DEFAULT_HISTORY_LIMIT;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Maximum characters in one line; further input is dropped
    pub max_len: usize,

    /// Submitted lines kept in memory
    pub history_limit: usize,

    /// Colors of the line being edited
    pub command_colors: TextColors,

    /// Colors of the prompt written by `read_line_with_prompt`
    pub prompt_colors: TextColors,

    /// Ring the terminal bell when input is dropped at capacity
    pub bell_on_overflow: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_len: MAX_LEN,
            history_limit: DEFAULT_HISTORY_LIMIT,
            command_colors: TextColors::new(ConsoleColor::Grey, ConsoleColor::Black),
            prompt_colors: TextColors::new(ConsoleColor::DarkCyan, ConsoleColor::Black),
            bell_on_overflow: false,
        }
    }
}

impl EditorConfig {
    /// Parse a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Load `path` if given, else the default location if that file exists,
    /// else the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// `<config dir>/entryline/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("entryline").join("config.toml"))
    }

    pub fn validate(&self) -> EditorResult<()> {
        if self.max_len == 0 {
            return Err(EditorError::InvalidConfig(
                "max_len must be at least 1".to_string(),
            ));
        }
        if self.history_limit == 0 {
            return Err(EditorError::InvalidConfig(
                "history_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
