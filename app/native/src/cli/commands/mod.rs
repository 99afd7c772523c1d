//! CLI command definitions using Clap.
//!
//! This module defines all CLI commands and their arguments, organized into
//! domain-specific submodules:
//!
//! - `config_cmd` - Configuration file commands
//! - `layout` - Layout, grid and classification commands
//! - `types` - Shared argument types and card input parsing

use std::io;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};

use crate::error::CardGridError;
use crate::{config, schema};

pub mod config_cmd;
pub mod layout;
pub mod types;

pub use config_cmd::ConfigCommands;
pub use layout::{ClassifyArgs, GridArgs, LayoutArgs};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Cardgrid CLI - Adaptive layout engine for flashcard study grids.
#[derive(Parser, Debug)]
#[command(name = "cardgrid")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a custom configuration file.
    ///
    /// Overrides the default configuration file search paths.
    /// Supports JSONC format (JSON with comments).
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Run a layout pass over a set of cards.
    ///
    /// Reads cards as JSON (a bare array or an object with a "cards" field)
    /// from a file or stdin and prints the resulting layout tree.
    #[command(after_long_help = r#"Examples:
  cardgrid layout -i cards.json                  # Table summary at 1200x800
  cardgrid layout -i cards.json -W 375 -H 812    # Phone portrait
  cat cards.json | cardgrid layout --json        # Full layout tree as JSON"#)]
    Layout(LayoutArgs),

    /// Print the grid configuration for a container size.
    ///
    /// Shows the screen tier, column count, spacing and every card size the
    /// layout engine would use.
    #[command(after_long_help = r#"Examples:
  cardgrid grid -W 768 -H 1024         # Tablet portrait
  cardgrid grid -W 1440 -H 900 --json  # Desktop, as JSON"#)]
    Grid(GridArgs),

    /// Print the size class of each card.
    Classify(ClassifyArgs),

    /// Configuration file management commands.
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Output Cardgrid configuration JSON Schema.
    ///
    /// Outputs a JSON Schema to stdout that describes the structure of the
    /// Cardgrid configuration file. Can be redirected to a file for use with
    /// editors that support JSON Schema validation.
    Schema,

    /// Generate shell completions.
    ///
    /// Outputs shell completion script to stdout for the specified shell.
    /// Can be used with eval or redirected to a file.
    ///
    /// Usage:
    ///   eval "$(cardgrid completions --shell zsh)"
    ///   cardgrid completions --shell fish > ~/.config/fish/completions/cardgrid.fish
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Returns the custom config path if specified via --config flag.
    #[must_use]
    pub fn config_path(&self) -> Option<std::path::PathBuf> {
        self.config.as_ref().map(std::path::PathBuf::from)
    }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub fn execute(&self) -> Result<(), CardGridError> {
        if let Some(path_buf) = self.config_path() {
            if !path_buf.exists() {
                return Err(CardGridError::ConfigError(format!(
                    "Configuration file not found: {}",
                    path_buf.display()
                )));
            }
            config::set_custom_config_path(path_buf);
        }

        match &self.command {
            Commands::Layout(args) => layout::execute_layout(args),
            Commands::Grid(args) => layout::execute_grid(args),
            Commands::Classify(args) => layout::execute_classify(args),
            Commands::Config(cmd) => config_cmd::execute(cmd),

            Commands::Schema => {
                println!("{}", schema::generate_schema_json());
                Ok(())
            }

            Commands::Completions { shell } => {
                Self::print_completions(*shell);
                Ok(())
            }
        }
    }

    /// Print shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, "cardgrid", &mut io::stdout());
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    // ========================================================================
    // CLI parsing tests
    // ========================================================================

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_schema() {
        let cli = Cli::try_parse_from(["cardgrid", "schema"]).unwrap();
        assert!(matches!(cli.command, Commands::Schema));
    }

    #[test]
    fn test_cli_parses_completions_zsh() {
        let cli = Cli::try_parse_from(["cardgrid", "completions", "--shell", "zsh"]).unwrap();
        match cli.command {
            Commands::Completions { shell } => assert_eq!(shell, Shell::Zsh),
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_parses_layout_defaults() {
        let cli = Cli::try_parse_from(["cardgrid", "layout"]).unwrap();
        match cli.command {
            Commands::Layout(args) => {
                assert_eq!(args.geometry.width, 1200.0);
                assert_eq!(args.geometry.height, 800.0);
                assert!(args.input.input.is_none());
                assert!(!args.json);
            }
            _ => panic!("Expected Layout command"),
        }
    }

    #[test]
    fn test_cli_parses_layout_geometry_and_input() {
        let cli = Cli::try_parse_from([
            "cardgrid", "layout", "-W", "375", "-H", "812", "-i", "cards.json", "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Layout(args) => {
                assert_eq!(args.geometry.width, 375.0);
                assert_eq!(args.geometry.height, 812.0);
                assert_eq!(args.input.input, Some(PathBuf::from("cards.json")));
                assert!(args.json);
            }
            _ => panic!("Expected Layout command"),
        }
    }

    #[test]
    fn test_cli_parses_grid() {
        let cli = Cli::try_parse_from(["cardgrid", "grid", "--width", "768"]).unwrap();
        match cli.command {
            Commands::Grid(args) => {
                assert_eq!(args.geometry.width, 768.0);
                assert!(!args.json);
            }
            _ => panic!("Expected Grid command"),
        }
    }

    #[test]
    fn test_cli_parses_classify_json() {
        let cli = Cli::try_parse_from(["cardgrid", "classify", "-j"]).unwrap();
        assert!(matches!(cli.command, Commands::Classify(ClassifyArgs { json: true, .. })));
    }

    #[test]
    fn test_cli_parses_config_path() {
        let cli = Cli::try_parse_from(["cardgrid", "config", "path"]).unwrap();
        assert!(matches!(cli.command, Commands::Config(ConfigCommands::Path)));
    }

    #[test]
    fn test_app_version_is_not_empty() {
        assert!(!APP_VERSION.is_empty());
    }

    // ========================================================================
    // --config flag tests
    // ========================================================================

    #[test]
    fn test_cli_parses_config_flag() {
        let cli = Cli::try_parse_from(["cardgrid", "--config", "/path/to/config.json", "schema"])
            .unwrap();
        assert_eq!(cli.config, Some("/path/to/config.json".to_string()));
        assert!(matches!(cli.command, Commands::Schema));
    }

    #[test]
    fn test_cli_parses_config_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["cardgrid", "grid", "-c", "/path/to/config.json"]).unwrap();
        assert_eq!(cli.config_path(), Some(PathBuf::from("/path/to/config.json")));
    }

    #[test]
    fn test_cli_config_path_returns_none_when_not_specified() {
        let cli = Cli::try_parse_from(["cardgrid", "schema"]).unwrap();
        assert!(cli.config_path().is_none());
    }

    #[test]
    fn test_execute_rejects_missing_config_file() {
        let cli =
            Cli::try_parse_from(["cardgrid", "--config", "/nonexistent/cardgrid.jsonc", "schema"])
                .unwrap();
        let err = cli.execute().unwrap_err();
        assert!(matches!(err, CardGridError::ConfigError(_)));
    }
}
