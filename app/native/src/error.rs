//! Error types for Cardgrid.
//!
//! The layout engine itself is total and never fails. These errors cover the
//! surrounding shell: configuration loading, card input parsing and the CLI.

use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur outside a layout pass.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum CardGridError {
    /// Invalid command arguments.
    #[error("{0}")]
    InvalidArguments(String),
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// IO error.
    #[error("IO error: {0}")]
    IoError(String),
    /// Card input could not be parsed.
    #[error("Input error: {0}")]
    InputError(String),
    /// Generic command error.
    #[error("{0}")]
    CommandError(String),
}

impl From<std::io::Error> for CardGridError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err.to_string()) }
}

impl From<serde_json::Error> for CardGridError {
    fn from(err: serde_json::Error) -> Self { Self::InputError(err.to_string()) }
}

impl From<ConfigError> for CardGridError {
    fn from(err: ConfigError) -> Self { Self::ConfigError(err.to_string()) }
}

impl From<String> for CardGridError {
    fn from(msg: String) -> Self { Self::CommandError(msg) }
}

impl From<&str> for CardGridError {
    fn from(msg: &str) -> Self { Self::CommandError(msg.to_string()) }
}
