// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[editor]` - Frame size, corner radius, export quality and format, accepted types
//! - `[output]` - Where the demo host writes saved avatars
//! - `[labels]` - Replacement text for any UI message id
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_AVATAR_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_avatar::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.editor.size = Some(256);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::media::export::{ExportFormat, Quality};
use crate::media::loader::AllowedTypes;
use crate::ui::avatar_editor::{AvatarEditorOptions, BorderRadius};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Avatar editor settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorConfig {
    /// Side length of the square frame, in pixels.
    #[serde(default = "default_size", skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,

    /// Preview corner radius in percent.
    #[serde(
        default = "default_border_radius",
        skip_serializing_if = "Option::is_none"
    )]
    pub border_radius: Option<f32>,

    /// Export quality (0.0 to 1.0).
    #[serde(default = "default_quality", skip_serializing_if = "Option::is_none")]
    pub quality: Option<f32>,

    /// Export raster format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_format: Option<ExportFormat>,

    /// MIME types accepted from the file picker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_types: Option<Vec<String>>,

    /// Scale increment for the zoom buttons.
    #[serde(default = "default_zoom_step", skip_serializing_if = "Option::is_none")]
    pub zoom_step: Option<f32>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            border_radius: default_border_radius(),
            quality: default_quality(),
            export_format: Some(ExportFormat::default()),
            allowed_types: None,
            zoom_step: default_zoom_step(),
        }
    }
}

/// Output settings used by the bundled host application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OutputConfig {
    /// File the saved avatar is written to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_path: Option<PathBuf>,
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub editor: EditorConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// Message id to replacement text.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

impl Config {
    /// Builds the editor options, clamping out-of-range values.
    pub fn editor_options(&self) -> AvatarEditorOptions {
        let editor = &self.editor;
        AvatarEditorOptions {
            size: editor.size.unwrap_or(DEFAULT_FRAME_SIZE),
            border_radius: BorderRadius::new(
                editor
                    .border_radius
                    .unwrap_or(DEFAULT_BORDER_RADIUS_PERCENT),
            ),
            quality: Quality::new(editor.quality.unwrap_or(DEFAULT_QUALITY)),
            export_format: editor.export_format.unwrap_or_default(),
            allowed_types: editor
                .allowed_types
                .clone()
                .map(AllowedTypes::new)
                .unwrap_or_default(),
            zoom_step: clamp_zoom_step(editor.zoom_step.unwrap_or(DEFAULT_ZOOM_STEP)),
        }
    }
}

/// Ensures zoom step values stay inside the supported range so persisted
/// configs cannot request nonsensical increments.
pub fn clamp_zoom_step(value: f32) -> f32 {
    value.clamp(MIN_ZOOM_STEP, MAX_ZOOM_STEP)
}

fn default_size() -> Option<u32> {
    Some(DEFAULT_FRAME_SIZE)
}

fn default_border_radius() -> Option<f32> {
    Some(DEFAULT_BORDER_RADIUS_PERCENT)
}

fn default_quality() -> Option<f32> {
    Some(DEFAULT_QUALITY)
}

fn default_zoom_step() -> Option<f32> {
    Some(DEFAULT_ZOOM_STEP)
}

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!("Failed to load config from {}: {err}", path.display());
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
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_config_path_with_override(None) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
