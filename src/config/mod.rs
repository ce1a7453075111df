// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use wipedeck::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::domain::slider::{CompareHeight, Constraints, EdgeBuffer, MinSeparation};
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "WipeDeck";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Whether the one-shot entrance demonstration plays when the comparator
    /// first becomes visible.
    #[serde(default)]
    pub entrance_demo: Option<bool>,
    #[serde(default)]
    pub min_separation: Option<f32>,
    #[serde(default)]
    pub edge_buffer: Option<f32>,
    #[serde(default)]
    pub compare_height: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: ThemeMode::System,
            entrance_demo: Some(true),
            min_separation: None,
            edge_buffer: None,
            compare_height: None,
        }
    }
}

impl Config {
    /// Divider constraints with out-of-range values clamped through the
    /// domain newtypes.
    #[must_use]
    pub fn constraints(&self) -> Constraints {
        Constraints {
            min_separation: self
                .min_separation
                .map(MinSeparation::new)
                .unwrap_or_default(),
            edge_buffer: self.edge_buffer.map(EdgeBuffer::new).unwrap_or_default(),
        }
    }

    /// Height of the comparison surface.
    #[must_use]
    pub fn compare_height(&self) -> CompareHeight {
        self.compare_height
            .map(CompareHeight::new)
            .unwrap_or_default()
    }

    /// Whether the entrance demonstration is enabled (defaults to true).
    #[must_use]
    pub fn entrance_demo_enabled(&self) -> bool {
        self.entrance_demo.unwrap_or(true)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Resolves the config file path, honoring an optional directory override
/// from the CLI (used by tests and packaging).
fn resolve_config_path(dir_override: Option<&Path>) -> Option<PathBuf> {
    match dir_override {
        Some(dir) => Some(dir.join(CONFIG_FILE)),
        None => get_default_config_path(),
    }
}

pub fn load() -> Result<Config> {
    load_with_dir(None)
}

pub fn load_with_dir(dir_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = resolve_config_path(dir_override) {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
