// SPDX-License-Identifier: MPL-2.0
//! User preferences, stored as `settings.toml`.
//!
//! The file carries a `[general]` table (language, theme mode) and a
//! `[window]` table (startup size). Every table and key is optional;
//! whatever is missing falls back to its default, so a hand-trimmed file
//! stays loadable. The directory comes from [`crate::app::paths`] and
//! honors the same override cascade.

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub window: WindowConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// BCP 47 language tag. `None` follows the system locale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Startup window size in logical pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "default_width")]
    pub width: f32,

    #[serde(default = "default_height")]
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

fn default_width() -> f32 {
    DEFAULT_WINDOW_WIDTH
}

fn default_height() -> f32 {
    DEFAULT_WINDOW_HEIGHT
}

fn config_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the preferences from the resolved config directory.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the preferences, optionally from an explicit directory.
///
/// A missing file is a clean first launch. An unreadable or unparseable
/// file yields the defaults plus a warning key for the notification layer,
/// so a broken config never blocks startup.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = config_file_path(base_dir) else {
        return (Config::default(), None);
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(_) => (
            Config::default(),
            Some("notification-config-load-error".to_string()),
        ),
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Writes the preferences to the resolved config directory.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Writes the preferences, optionally to an explicit directory.
///
/// When no config directory can be resolved at all, the save is skipped;
/// preferences then simply don't persist across runs.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match config_file_path(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Ok(()),
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml::to_string_pretty(config)?)?;
    Ok(())
}
