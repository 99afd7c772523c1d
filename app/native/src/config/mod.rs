//! Configuration module for Cardgrid.
//!
//! This module provides configuration types and loading functionality.
//!
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.

pub mod types;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub use types::{
    ConfigError, GridConfig, GroupSpec, GroupingConfig, LayoutConfig, SizingConfig, TierPreset,
    config_paths, load_config as load_config_default, load_config_from_path, parse_config,
};

/// Global configuration instance, loaded once at startup.
static CONFIG: OnceLock<LayoutConfig> = OnceLock::new();

/// Path to the currently loaded configuration file.
static CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Custom config path override (set via CLI --config flag).
static CUSTOM_CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Sets a custom configuration file path to use instead of the default search paths.
///
/// This must be called before `init()` or `get_config()` to take effect.
///
/// # Returns
///
/// `true` if the path was set successfully, `false` if a path was already set.
pub fn set_custom_config_path(path: PathBuf) -> bool { CUSTOM_CONFIG_PATH.set(path).is_ok() }

/// Loads the configuration from disk.
///
/// Returns the loaded configuration, or a default configuration if loading fails.
fn load_or_default() -> LayoutConfig {
    let result = CUSTOM_CONFIG_PATH
        .get()
        .map_or_else(load_config_default, |path| load_config_from_path(path));

    match result {
        Ok((config, path)) => {
            tracing::debug!(path = %path.display(), "config: loaded configuration");
            let _ = CONFIG_PATH.set(path);
            config
        }
        Err(ConfigError::NotFound) => {
            tracing::debug!("config: no configuration file found, using defaults");
            LayoutConfig::default()
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to load configuration, using defaults");
            LayoutConfig::default()
        }
    }
}

/// Initializes and returns the global configuration instance.
///
/// This function is idempotent - calling it multiple times will return
/// the same configuration instance.
pub fn init() -> &'static LayoutConfig { CONFIG.get_or_init(load_or_default) }

/// Returns the global configuration instance, initializing it if necessary.
#[must_use]
pub fn get_config() -> &'static LayoutConfig { init() }

/// Returns the path of the loaded configuration file, if any.
#[must_use]
pub fn config_path() -> Option<&'static Path> { CONFIG_PATH.get().map(PathBuf::as_path) }
