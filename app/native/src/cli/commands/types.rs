//! Shared types used across CLI commands.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use serde::Deserialize;

use crate::card::Card;
use crate::error::CardGridError;

/// Container geometry shared by the layout and grid commands.
#[derive(Args, Debug, Clone, Copy, PartialEq)]
pub struct GeometryArgs {
    /// Container width in pixels.
    #[arg(long, short = 'W', default_value_t = 1200.0)]
    pub width: f64,

    /// Container height in pixels.
    #[arg(long, short = 'H', default_value_t = 800.0)]
    pub height: f64,
}

/// Where card JSON is read from.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct InputArgs {
    /// Path to a JSON file with the cards. Reads stdin when omitted or `-`.
    #[arg(long, short, value_name = "PATH")]
    pub input: Option<PathBuf>,
}

impl InputArgs {
    /// Reads and parses the cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or is not valid card JSON.
    pub fn read_cards(&self) -> Result<Vec<Card>, CardGridError> {
        let content = match self.input.as_deref() {
            Some(path) if path != Path::new("-") => {
                std::fs::read_to_string(path).map_err(|e| {
                    CardGridError::IoError(format!("Failed to read {}: {e}", path.display()))
                })?
            }
            _ => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
        };

        parse_cards(&content)
    }
}

/// Accepted card document shapes.
#[derive(Deserialize)]
#[serde(untagged)]
enum CardDocument {
    List(Vec<Card>),
    Wrapped { cards: Vec<Card> },
}

/// Parses cards from either a bare JSON array or a `{ "cards": [...] }` object.
///
/// # Errors
///
/// Returns `CardGridError::InputError` if the content matches neither shape.
pub fn parse_cards(content: &str) -> Result<Vec<Card>, CardGridError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    match serde_json::from_str::<CardDocument>(content) {
        Ok(CardDocument::List(cards) | CardDocument::Wrapped { cards }) => Ok(cards),
        Err(err) => Err(CardGridError::InputError(format!(
            "Expected a JSON array of cards or an object with a \"cards\" field: {err}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardKind;

    const CARD: &str = r#"{"id": "00000000-0000-0000-0000-000000000001", "title": "T"}"#;

    #[test]
    fn test_parse_cards_array() {
        let cards = parse_cards(&format!("[{CARD}]")).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].kind, CardKind::Regular);
    }

    #[test]
    fn test_parse_cards_wrapped() {
        let cards = parse_cards(&format!(r#"{{"cards": [{CARD}, {CARD}]}}"#)).unwrap();
        assert_eq!(cards.len(), 2);
    }

    #[test]
    fn test_parse_cards_blank_is_empty() {
        assert!(parse_cards("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_cards_invalid() {
        let err = parse_cards(r#"{"id": 3}"#).unwrap_err();
        assert!(matches!(err, CardGridError::InputError(_)));
    }

    #[test]
    fn test_read_cards_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cards.json");
        std::fs::write(&path, format!("[{CARD}]")).unwrap();

        let input = InputArgs { input: Some(path) };
        assert_eq!(input.read_cards().unwrap().len(), 1);
    }

    #[test]
    fn test_read_cards_missing_file() {
        let input = InputArgs { input: Some(PathBuf::from("/nonexistent/cards.json")) };
        assert!(matches!(input.read_cards(), Err(CardGridError::IoError(_))));
    }
}
