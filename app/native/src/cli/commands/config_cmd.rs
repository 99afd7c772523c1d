//! Config CLI commands.
//!
//! Commands for managing the Cardgrid configuration file.

use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::cli::output;
use crate::config::{self, LayoutConfig, config_paths};
use crate::error::CardGridError;

/// Schema URL written into generated configuration files.
const SCHEMA_URL: &str =
    "https://raw.githubusercontent.com/cardgrid/cardgrid/main/cardgrid.schema.json";

/// Config management commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum ConfigCommands {
    /// Write a configuration file containing every default value.
    #[command(
        name = "init",
        after_long_help = r#"Examples:
  cardgrid config init                          # Create config at default location
  cardgrid config init --force                  # Overwrite existing config
  cardgrid config init --path ~/cardgrid.jsonc  # Create at custom path
  cardgrid config init --stdout                 # Print defaults to stdout"#
    )]
    Init {
        /// Overwrite existing configuration file if it exists.
        #[arg(long, short)]
        force: bool,

        /// Custom path for the configuration file.
        /// If not specified, uses the first search path.
        #[arg(long, short, value_name = "PATH")]
        path: Option<PathBuf>,

        /// Print the configuration to stdout instead of writing to a file.
        #[arg(long)]
        stdout: bool,
    },

    /// Print the effective configuration as JSON.
    Show,

    /// Show the configuration file search paths.
    ///
    /// Indicates which file is currently in use (if any).
    Path,
}

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cmd: &ConfigCommands) -> Result<(), CardGridError> {
    match cmd {
        ConfigCommands::Init { force, path, stdout } => {
            if *stdout {
                println!("{}", default_config_json()?);
                Ok(())
            } else {
                init_config(*force, path.clone())
            }
        }
        ConfigCommands::Show => {
            output::print_highlighted_json(&serde_json::to_value(config::get_config())?);
            Ok(())
        }
        ConfigCommands::Path => {
            show_config_path();
            Ok(())
        }
    }
}

/// Serializes the default configuration with its `$schema` reference.
fn default_config_json() -> Result<String, CardGridError> {
    let config = LayoutConfig { schema: Some(SCHEMA_URL.to_string()), ..LayoutConfig::default() };
    Ok(serde_json::to_string_pretty(&config)?)
}

/// Writes the default configuration, refusing to overwrite unless forced.
fn write_default_config(path: &Path, force: bool) -> Result<(), CardGridError> {
    if path.exists() && !force {
        return Err(CardGridError::ConfigError(format!(
            "Configuration file already exists at: {}\nUse --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, default_config_json()? + "\n").map_err(|e| {
        CardGridError::ConfigError(format!("Failed to create config file {}: {e}", path.display()))
    })
}

/// Initialize a new configuration file.
fn init_config(force: bool, custom_path: Option<PathBuf>) -> Result<(), CardGridError> {
    let config_path = custom_path.unwrap_or_else(|| {
        config_paths().into_iter().next().unwrap_or_else(|| PathBuf::from("config.jsonc"))
    });

    write_default_config(&config_path, force)?;
    println!("Configuration file created at: {}", config_path.display());
    Ok(())
}

/// Show the configuration file search paths.
fn show_config_path() {
    println!("Configuration file search paths (in priority order):\n");

    let mut found_config = false;

    for (i, path) in config_paths().iter().enumerate() {
        let exists = path.exists();
        let marker = if exists && !found_config {
            found_config = true;
            " (active)"
        } else if exists {
            " (exists)"
        } else {
            ""
        };

        println!("  {}. {}{}", i + 1, path.display(), marker);
    }

    if let Some(path) = config::config_path() {
        println!("\nLoaded: {}", path.display());
    } else if !found_config {
        println!("\nNo configuration file found.");
        println!("Run 'cardgrid config init' to create one.");
    }
}
