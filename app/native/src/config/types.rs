//! Configuration types for Cardgrid.
//!
//! This module provides the configuration types and loading functionality.
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! canonical layout tables.

use std::fs;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Configuration file names, in lookup order.
const CONFIG_FILE_NAMES: [&str; 2] = ["config.jsonc", "config.json"];

/// Legacy single-file configuration names in the home directory.
const LEGACY_CONFIG_FILE_NAMES: [&str; 2] = [".cardgrid.jsonc", ".cardgrid.json"];

/// Sizing preset for one screen-size tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TierPreset {
    /// Minimum width of a single-column card, in pixels.
    pub min_card_width: f64,
    /// Maximum width of a single-column card, in pixels.
    pub max_card_width: f64,
    /// Spacing between cards, in pixels.
    pub spacing: f64,
}

impl TierPreset {
    /// Creates a new preset.
    #[must_use]
    pub const fn new(min_card_width: f64, max_card_width: f64, spacing: f64) -> Self {
        Self { min_card_width, max_card_width, spacing }
    }
}

/// Grid geometry configuration.
///
/// Controls how the container width is turned into a column count and
/// per-class card sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    /// Containers narrower than this use the narrow preset.
    /// Default: 400
    pub narrow_breakpoint: f64,

    /// Containers narrower than this (and not narrow) use the medium preset.
    /// Default: 800
    pub medium_breakpoint: f64,

    /// Preset for narrow (phone) containers.
    pub narrow: TierPreset,

    /// Preset for medium (large phone / small tablet) containers.
    pub medium: TierPreset,

    /// Preset for wide (tablet / desktop) containers.
    pub wide: TierPreset,

    /// Padding applied on both horizontal edges of the container.
    /// Default: 20
    pub horizontal_padding: f64,

    /// Height of a regular card before the small-screen multiplier.
    /// Default: 120
    pub base_height: f64,

    /// Height multiplier applied to narrow containers.
    /// Default: 0.9
    pub small_screen_multiplier: f64,

    /// Maximum number of columns in landscape orientation.
    /// Default: 8
    pub max_columns_landscape: u32,

    /// Maximum number of columns in portrait orientation.
    /// Default: 6
    pub max_columns_portrait: u32,

    /// Height factor for compact cards, relative to the base height.
    /// Default: 0.8
    pub compact_height_factor: f64,

    /// Height factor for wide and extra-wide cards, relative to the base height.
    /// Default: 1.2
    pub wide_height_factor: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            narrow_breakpoint: 400.0,
            medium_breakpoint: 800.0,
            narrow: TierPreset::new(120.0, 180.0, 8.0),
            medium: TierPreset::new(140.0, 220.0, 12.0),
            wide: TierPreset::new(160.0, 260.0, 16.0),
            horizontal_padding: 20.0,
            base_height: 120.0,
            small_screen_multiplier: 0.9,
            max_columns_landscape: 8,
            max_columns_portrait: 6,
            compact_height_factor: 0.8,
            wide_height_factor: 1.2,
        }
    }
}

/// Character-count thresholds used to classify card sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SizingConfig {
    /// Total length above which a card is extra-wide.
    /// Default: 200
    pub extra_wide_total: usize,

    /// Total length above which a card is wide.
    /// Default: 120
    pub wide_total: usize,

    /// Title length above which a card is wide.
    /// Default: 60
    pub wide_title: usize,

    /// Description length above which a card is wide.
    /// Default: 80
    pub wide_description: usize,

    /// Total length below which a card is compact.
    /// Default: 30
    pub compact_total: usize,

    /// Answer count above which a quiz is large.
    /// Default: 4
    pub quiz_large_answers: u32,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            extra_wide_total: 200,
            wide_total: 120,
            wide_title: 60,
            wide_description: 80,
            compact_total: 30,
            quiz_large_answers: 4,
        }
    }
}

/// Title and priority of a single card group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupSpec {
    /// Title shown in the group header.
    pub title: String,
    /// Group priority; higher priorities are laid out first.
    pub priority: i32,
}

impl GroupSpec {
    fn new(title: &str, priority: i32) -> Self {
        Self { title: title.to_string(), priority }
    }
}

/// Card grouping configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupingConfig {
    /// Group holding active quiz cards.
    pub quizzes: GroupSpec,

    /// Group holding active non-quiz cards.
    pub materials: GroupSpec,

    /// Group holding completed cards of any kind.
    pub completed: GroupSpec,

    /// The quiz header is shown only when the group has more than this many cards.
    /// Default: 1
    pub quiz_header_min: usize,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            quizzes: GroupSpec::new("Quizzes", 100),
            materials: GroupSpec::new("Materials", 80),
            completed: GroupSpec::new("Completed", 10),
            quiz_header_min: 1,
        }
    }
}

/// Root configuration for the layout engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// JSON Schema reference, ignored at runtime.
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Grid geometry.
    pub grid: GridConfig,

    /// Size classification thresholds.
    pub sizing: SizingConfig,

    /// Card grouping.
    pub grouping: GroupingConfig,
}

/// Errors that can occur while loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// No configuration file was found.
    NotFound,
    /// The configuration file could not be read.
    IoError(std::io::Error),
    /// The configuration file contains invalid JSON.
    ParseError(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Configuration file not found"),
            Self::IoError(err) => write!(f, "Failed to read configuration file: {err}"),
            Self::ParseError(err) => write!(f, "Failed to parse configuration file: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound => None,
            Self::IoError(err) => Some(err),
            Self::ParseError(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err) }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self { Self::ParseError(err) }
}

/// Returns the possible configuration file paths in priority order.
///
/// The function checks the following locations (both `.jsonc` and `.json` variants):
/// 1. `$XDG_CONFIG_HOME/cardgrid/config.jsonc` when the variable is set
/// 2. `~/.config/cardgrid/config.jsonc` or `config.json`
/// 3. The platform configuration directory (`dirs::config_dir()`)
/// 4. `~/.cardgrid.jsonc` or `~/.cardgrid.json`
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        let dir = PathBuf::from(xdg_config).join("cardgrid");
        for filename in CONFIG_FILE_NAMES {
            paths.push(dir.join(filename));
        }
    }

    if let Some(home) = dirs::home_dir() {
        let dir = home.join(".config").join("cardgrid");
        for filename in CONFIG_FILE_NAMES {
            let path = dir.join(filename);
            // XDG_CONFIG_HOME might be ~/.config
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let dir = config_dir.join("cardgrid");
        for filename in CONFIG_FILE_NAMES {
            let path = dir.join(filename);
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }

    if let Some(home) = dirs::home_dir() {
        for filename in LEGACY_CONFIG_FILE_NAMES {
            paths.push(home.join(filename));
        }
    }

    paths
}

/// Parses a configuration from a JSONC string.
///
/// # Errors
///
/// Returns `ConfigError::ParseError` if the string is not valid JSON after
/// comments are stripped.
pub fn parse_config(contents: &str) -> Result<LayoutConfig, ConfigError> {
    let reader = json_comments::StripComments::new(contents.as_bytes());
    Ok(serde_json::from_reader(reader)?)
}

/// Loads the configuration from a specific file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist.
/// Returns `ConfigError::IoError` if the file could not be read.
/// Returns `ConfigError::ParseError` if the file contains invalid JSON.
pub fn load_config_from_path(path: &Path) -> Result<(LayoutConfig, PathBuf), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound);
    }

    let file = fs::File::open(path)?;
    let reader = json_comments::StripComments::new(file);
    let config: LayoutConfig = serde_json::from_reader(reader)?;
    Ok((config, path.to_path_buf()))
}

/// Loads the configuration from the first available config file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no configuration file exists in any expected location.
/// Returns `ConfigError::IoError` if a configuration file exists but could not be read.
/// Returns `ConfigError::ParseError` if the configuration file contains invalid JSON.
pub fn load_config() -> Result<(LayoutConfig, PathBuf), ConfigError> {
    for path in config_paths() {
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    Err(ConfigError::NotFound)
}
