//! Configuration handling for the TUI

use crate::ui::DEFAULT_DIALOG_WIDTH;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default PageUp/PageDown distance
pub const DEFAULT_SCROLL_STEP: u16 = 10;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Lines moved by PageUp/PageDown
    pub scroll_step: Option<u16>,
    /// Maximum width of the error dialog
    pub dialog_max_width: Option<u16>,
    /// Document opened last, reopened when no path is given
    pub last_document: Option<PathBuf>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "json-explorer", "json-explorer-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    pub fn scroll_step(&self) -> usize {
        usize::from(self.scroll_step.unwrap_or(DEFAULT_SCROLL_STEP).max(1))
    }

    /// Dialog width, never narrower than the dialog's fixed text
    pub fn dialog_max_width(&self) -> u16 {
        self.dialog_max_width
            .unwrap_or(DEFAULT_DIALOG_WIDTH)
            .max(MIN_DIALOG_WIDTH)
    }
}

/// Narrowest dialog that fits the hint line
const MIN_DIALOG_WIDTH: u16 = 34;
