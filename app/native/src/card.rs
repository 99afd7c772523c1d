//! Study card data model.
//!
//! Cards are owned by the persistence layer. The layout engine only reads
//! them, and only for the duration of a single layout pass.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of study card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardKind {
    /// A short fact, typically a single sentence.
    ShortFact,
    /// A regular material card, possibly spanning several paragraphs.
    #[default]
    Regular,
    /// A multiple-choice quiz.
    Quiz,
}

/// A single study card as supplied by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: Uuid,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub kind: CardKind,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub is_both_sides: bool,
    #[serde(default)]
    pub module_id: Option<Uuid>,
    #[serde(default = "unix_epoch")]
    pub created_at: DateTime<Utc>,
    /// Number of answer options, as parsed upstream from the quiz encoding.
    ///
    /// Only meaningful for [`CardKind::Quiz`]. Malformed (negative) counts are
    /// treated as zero.
    #[serde(default)]
    pub answer_count: i32,
}

impl Card {
    /// Creates a card with the given content and defaults for everything else.
    #[must_use]
    pub fn new(id: Uuid, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            kind: CardKind::Regular,
            is_completed: false,
            is_both_sides: false,
            module_id: None,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            answer_count: 0,
        }
    }

    /// Creates a quiz card with the given number of answer options.
    #[must_use]
    pub fn quiz(id: Uuid, title: impl Into<String>, answer_count: i32) -> Self {
        Self {
            kind: CardKind::Quiz,
            answer_count,
            ..Self::new(id, title, String::new())
        }
    }

    /// Sets the card kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: CardKind) -> Self {
        self.kind = kind;
        self
    }

    /// Marks the card as completed.
    #[must_use]
    pub const fn completed(mut self) -> Self {
        self.is_completed = true;
        self
    }

    /// Returns the answer count with malformed values clamped to zero.
    #[must_use]
    pub fn answer_options(&self) -> u32 { u32::try_from(self.answer_count).unwrap_or(0) }
}

const fn unix_epoch() -> DateTime<Utc> { DateTime::<Utc>::UNIX_EPOCH }
