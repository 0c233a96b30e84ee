// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration: reading user
//! preferences from `settings.toml` and writing the default file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[search]` - Pixabay endpoint, API key and query parameters
//! - `[gallery]` - Image cache sizing
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `IMAGE_FINDER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use image_finder::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! println!("{} images per page", config.search.per_page().value());
//!
//! // Write settings.toml with defaults if it is missing
//! config::init_default(None).expect("Failed to write default config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::search::PerPage;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

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

/// Search API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Pixabay endpoint.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Pixabay API key. `PIXABAY_API_KEY` and `--api-key` take precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Hits per page (3 to 200).
    #[serde(default = "default_per_page", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,

    /// `image_type` filter (all, photo, illustration, vector).
    #[serde(default = "default_image_type")]
    pub image_type: String,

    /// `orientation` filter (all, horizontal, vertical).
    #[serde(default = "default_orientation")]
    pub orientation: String,

    /// Only return images suitable for all ages.
    #[serde(default)]
    pub safe_search: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: None,
            per_page: default_per_page(),
            image_type: default_image_type(),
            orientation: default_orientation(),
            safe_search: false,
        }
    }
}

impl SearchConfig {
    /// Returns the clamped page size.
    #[must_use]
    pub fn per_page(&self) -> PerPage {
        PerPage::new(self.per_page.unwrap_or(DEFAULT_PER_PAGE))
    }

    /// Resolves the API key: CLI value, then environment, then this config.
    ///
    /// Blank values are skipped at every level.
    #[must_use]
    pub fn resolve_api_key(&self, cli_key: Option<String>) -> Option<String> {
        let env_key = std::env::var(ENV_API_KEY).ok();
        [cli_key, env_key, self.api_key.clone()]
            .into_iter()
            .flatten()
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
    }
}

/// Gallery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Number of full-size images kept in memory.
    #[serde(
        default = "default_image_cache_entries",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_cache_entries: Option<usize>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            image_cache_entries: default_image_cache_entries(),
        }
    }
}

impl GalleryConfig {
    /// Returns the clamped full-size image cache capacity.
    #[must_use]
    pub fn image_cache_entries(&self) -> usize {
        self.image_cache_entries
            .unwrap_or(DEFAULT_IMAGE_CACHE_ENTRIES)
            .clamp(MIN_IMAGE_CACHE_ENTRIES, MAX_IMAGE_CACHE_ENTRIES)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Search API settings.
    #[serde(default)]
    pub search: SearchConfig,

    /// Gallery settings.
    #[serde(default)]
    pub gallery: GalleryConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_per_page() -> Option<u32> {
    Some(DEFAULT_PER_PAGE)
}

fn default_image_type() -> String {
    DEFAULT_IMAGE_TYPE.to_string()
}

fn default_orientation() -> String {
    DEFAULT_ORIENTATION.to_string()
}

fn default_image_cache_entries() -> Option<usize> {
    Some(DEFAULT_IMAGE_CACHE_ENTRIES)
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
                    tracing::warn!(path = %path.display(), error = %err, "failed to load config");
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

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// Writes a default `settings.toml` unless one already exists.
///
/// Returns the path of the config file and whether it was created.
pub fn init_default(base_dir: Option<PathBuf>) -> Result<Option<(PathBuf, bool)>> {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return Ok(None);
    };
    if path.exists() {
        return Ok(Some((path, false)));
    }
    save_to_path(&Config::default(), &path)?;
    Ok(Some((path, true)))
}
