//! CLI module for Cardgrid.
//!
//! This module provides the command-line interface for running layout passes,
//! inspecting grid geometry and size classes, and managing configuration.

mod commands;
mod output;

use clap::Parser;
pub use commands::Cli;

use crate::error::CardGridError;

/// Runs the CLI.
///
/// Parses command-line arguments and executes the appropriate command.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn run() -> Result<(), CardGridError> {
    let cli = Cli::parse();
    cli.execute()
}
