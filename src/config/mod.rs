// SPDX-License-Identifier: MPL-2.0
//! This module handles the demo configuration, including loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[control]` - Selection mode, animation and initial segments
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_SEGMENTS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_segments::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::segmented::{SegmentItem, SelectionMode};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// One initial segment. Entries with neither a title nor an image are skipped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SegmentConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Path to an image file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<PathBuf>,
}

/// Segmented control settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControlConfig {
    /// Selection mode of the configurable control.
    #[serde(default)]
    pub selection_mode: SelectionMode,

    /// Fade and slide duration in milliseconds.
    #[serde(
        default = "default_animation_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub animation_ms: Option<u64>,

    /// Whether inserts and removals triggered from the demo are animated.
    #[serde(
        default = "default_animate_changes",
        skip_serializing_if = "Option::is_none"
    )]
    pub animate_changes: Option<bool>,

    /// Initial segments. Empty means the demo picks localized defaults.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<SegmentConfig>,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            selection_mode: SelectionMode::default(),
            animation_ms: default_animation_ms(),
            animate_changes: default_animate_changes(),
            segments: Vec::new(),
        }
    }
}

impl ControlConfig {
    /// Animation duration, clamped to the supported range.
    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(clamp_animation_ms(
            self.animation_ms.unwrap_or(DEFAULT_ANIMATION_MS),
        ))
    }

    /// Converts configured segments to items, skipping empty entries.
    #[must_use]
    pub fn segment_items(&self) -> Vec<SegmentItem> {
        self.segments
            .iter()
            .enumerate()
            .filter_map(|(index, segment)| {
                let item =
                    SegmentItem::from_parts(segment.title.as_deref(), segment.image.as_deref());
                if item.is_none() {
                    log::warn!("skipping segment {index} in config: no title or image");
                }
                item
            })
            .collect()
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Demo configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Segmented control settings.
    #[serde(default)]
    pub control: ControlConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

#[allow(clippy::unnecessary_wraps)]
fn default_animation_ms() -> Option<u64> {
    Some(DEFAULT_ANIMATION_MS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_animate_changes() -> Option<bool> {
    Some(true)
}

/// Clamps an animation duration to `MIN_ANIMATION_MS..=MAX_ANIMATION_MS`.
#[must_use]
pub fn clamp_animation_ms(value: u64) -> u64 {
    value.clamp(MIN_ANIMATION_MS, MAX_ANIMATION_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("failed to load {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
