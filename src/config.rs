//! Configuration loading and management
//!
//! Handles parsing of `tsk.toml` configuration files. Only presentation is
//! configurable: column widths and completion markers used when rendering
//! task lists. Stored task text is never truncated; these settings shape
//! display output only.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Config file name looked up in the working directory.
pub const CONFIG_FILE: &str = "tsk.toml";

/// Narrowest allowed list column, leaving room for the `...` ellipsis.
const MIN_COLUMN_WIDTH: usize = 8;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Display configuration
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Display-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Title column width in the list view
    #[serde(default = "default_title_width")]
    pub title_width: usize,

    /// Description column width in the list view
    #[serde(default = "default_description_width")]
    pub description_width: usize,

    /// Marker rendered for completed tasks
    #[serde(default = "default_complete_marker")]
    pub complete_marker: String,

    /// Marker rendered for pending tasks
    #[serde(default = "default_pending_marker")]
    pub pending_marker: String,
}

fn default_title_width() -> usize {
    40
}

fn default_description_width() -> usize {
    60
}

fn default_complete_marker() -> String {
    "✓".to_string()
}

fn default_pending_marker() -> String {
    " ".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title_width: default_title_width(),
            description_width: default_description_width(),
            complete_marker: default_complete_marker(),
            pending_marker: default_pending_marker(),
        }
    }
}

impl Config {
    /// Loads configuration from an explicit path, or from `tsk.toml` in the
    /// working directory when one exists. Defaults apply when no file is
    /// found; an explicit path that does not exist is an error.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let config = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::ConfigNotFound(path.to_path_buf()));
                }
                Self::parse(&std::fs::read_to_string(path)?)?
            }
            None => {
                let default_path = PathBuf::from(CONFIG_FILE);
                if default_path.exists() {
                    Self::parse(&std::fs::read_to_string(&default_path)?)?
                } else {
                    Config::default()
                }
            }
        };

        config.validate()?;
        Ok(config)
    }

    fn parse(content: &str) -> Result<Config> {
        Ok(toml::from_str(content)?)
    }

    fn validate(&self) -> Result<()> {
        self.display.validate()
    }
}

impl DisplayConfig {
    /// Marker string for the given completion state.
    pub fn marker(&self, is_complete: bool) -> &str {
        if is_complete {
            &self.complete_marker
        } else {
            &self.pending_marker
        }
    }

    fn validate(&self) -> Result<()> {
        if self.title_width < MIN_COLUMN_WIDTH {
            return Err(Error::InvalidConfig(format!(
                "display.title_width must be >= {MIN_COLUMN_WIDTH}"
            )));
        }
        if self.description_width < MIN_COLUMN_WIDTH {
            return Err(Error::InvalidConfig(format!(
                "display.description_width must be >= {MIN_COLUMN_WIDTH}"
            )));
        }
        if self.complete_marker.chars().count() != 1 {
            return Err(Error::InvalidConfig(
                "display.complete_marker must be a single character".to_string(),
            ));
        }
        if self.pending_marker.chars().count() != 1 {
            return Err(Error::InvalidConfig(
                "display.pending_marker must be a single character".to_string(),
            ));
        }
        Ok(())
    }
}
