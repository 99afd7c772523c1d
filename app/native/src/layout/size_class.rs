//! Card size classification.
//!
//! Maps a card's content to one of six discrete size classes using
//! character-count heuristics. Classification is pure and total: every card
//! maps to exactly one class.

use serde::{Deserialize, Serialize};

use crate::card::{Card, CardKind};
use crate::config::SizingConfig;

/// Discrete bucket describing how much grid space a card needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizeClass {
    Compact,
    Regular,
    Wide,
    ExtraWide,
    Quiz,
    QuizLarge,
}

impl SizeClass {
    /// All size classes, in ascending placement priority.
    pub const ALL: [Self; 6] = [
        Self::Compact,
        Self::Regular,
        Self::Wide,
        Self::ExtraWide,
        Self::Quiz,
        Self::QuizLarge,
    ];

    /// Number of grid columns the class occupies.
    #[must_use]
    pub const fn column_span(self) -> u32 {
        match self {
            Self::Compact | Self::Regular => 1,
            Self::Wide | Self::Quiz | Self::QuizLarge => 2,
            Self::ExtraWide => 3,
        }
    }

    /// Column span clamped to the configured column count.
    #[must_use]
    pub fn span_within(self, columns: u32) -> u32 { self.column_span().min(columns.max(1)) }

    /// Priority used for in-row ordering; higher sorts first.
    #[must_use]
    pub const fn placement_priority(self) -> u8 {
        match self {
            Self::Compact => 1,
            Self::Regular => 2,
            Self::Wide => 3,
            Self::ExtraWide => 4,
            Self::Quiz => 5,
            Self::QuizLarge => 6,
        }
    }

    /// Returns true for quiz classes.
    #[must_use]
    pub const fn is_quiz(self) -> bool { matches!(self, Self::Quiz | Self::QuizLarge) }

    /// Number of stacked companion levels next to a quiz of this class.
    #[must_use]
    pub const fn companion_levels(self) -> usize {
        match self {
            Self::QuizLarge => 3,
            _ => 2,
        }
    }
}

impl std::fmt::Display for SizeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Compact => "compact",
            Self::Regular => "regular",
            Self::Wide => "wide",
            Self::ExtraWide => "extra-wide",
            Self::Quiz => "quiz",
            Self::QuizLarge => "quiz-large",
        };
        f.write_str(name)
    }
}

/// Classifies a card using the default thresholds.
#[must_use]
pub fn classify(card: &Card) -> SizeClass { classify_with(card, &SizingConfig::default()) }

/// Classifies a card using the given thresholds.
///
/// Rules, in order:
/// 1. Quizzes are `QuizLarge` above `quiz_large_answers` options, else `Quiz`.
/// 2. Otherwise, by title/description length: `ExtraWide`, `Wide`, `Compact`,
///    falling back to `Regular`.
#[must_use]
pub fn classify_with(card: &Card, sizing: &SizingConfig) -> SizeClass {
    if card.kind == CardKind::Quiz {
        return if card.answer_options() > sizing.quiz_large_answers {
            SizeClass::QuizLarge
        } else {
            SizeClass::Quiz
        };
    }

    let title_len = card.title.chars().count();
    let description_len = card.description.chars().count();
    let total = title_len + description_len;

    if total > sizing.extra_wide_total {
        SizeClass::ExtraWide
    } else if total > sizing.wide_total
        || title_len > sizing.wide_title
        || description_len > sizing.wide_description
    {
        SizeClass::Wide
    } else if total < sizing.compact_total {
        SizeClass::Compact
    } else {
        SizeClass::Regular
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn card(title_len: usize, description_len: usize) -> Card {
        Card::new(Uuid::from_u128(1), "t".repeat(title_len), "d".repeat(description_len))
    }

    // ========================================================================
    // Quiz Classification
    // ========================================================================

    #[test]
    fn test_quiz_with_four_answers_is_quiz() {
        let quiz = Card::quiz(Uuid::from_u128(1), "Q", 4);
        assert_eq!(classify(&quiz), SizeClass::Quiz);
    }

    #[test]
    fn test_quiz_with_five_answers_is_large() {
        let quiz = Card::quiz(Uuid::from_u128(1), "Q", 5);
        assert_eq!(classify(&quiz), SizeClass::QuizLarge);
    }

    #[test]
    fn test_quiz_ignores_text_length() {
        let mut quiz = Card::quiz(Uuid::from_u128(1), "x".repeat(500), 2);
        quiz.description = "y".repeat(500);
        assert_eq!(classify(&quiz), SizeClass::Quiz);
    }

    #[test]
    fn test_quiz_with_negative_answers_is_quiz() {
        let quiz = Card::quiz(Uuid::from_u128(1), "Q", -10);
        assert_eq!(classify(&quiz), SizeClass::Quiz);
    }

    // ========================================================================
    // Length Thresholds
    // ========================================================================

    #[test]
    fn test_extra_wide_above_200_total() {
        assert_eq!(classify(&card(50, 151)), SizeClass::ExtraWide);
        assert_eq!(classify(&card(50, 150)), SizeClass::Wide);
    }

    #[test]
    fn test_wide_above_120_total() {
        assert_eq!(classify(&card(50, 71)), SizeClass::Wide);
        assert_eq!(classify(&card(50, 70)), SizeClass::Regular);
    }

    #[test]
    fn test_wide_by_long_title() {
        assert_eq!(classify(&card(61, 0)), SizeClass::Wide);
        assert_eq!(classify(&card(60, 0)), SizeClass::Regular);
    }

    #[test]
    fn test_wide_by_long_description() {
        assert_eq!(classify(&card(0, 81)), SizeClass::Wide);
        assert_eq!(classify(&card(0, 80)), SizeClass::Regular);
    }

    #[test]
    fn test_compact_below_30_total() {
        assert_eq!(classify(&card(10, 19)), SizeClass::Compact);
        assert_eq!(classify(&card(10, 20)), SizeClass::Regular);
        assert_eq!(classify(&card(0, 0)), SizeClass::Compact);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 20 two-byte characters: 40 bytes but only 20 chars.
        let c = Card::new(Uuid::from_u128(1), "é".repeat(20), "");
        assert_eq!(classify(&c), SizeClass::Compact);
    }

    #[test]
    fn test_short_fact_uses_length_rules() {
        let c = card(5, 5).with_kind(CardKind::ShortFact);
        assert_eq!(classify(&c), SizeClass::Compact);
    }

    #[test]
    fn test_custom_thresholds() {
        let sizing = SizingConfig { wide_total: 95, ..SizingConfig::default() };
        assert_eq!(classify_with(&card(50, 46), &sizing), SizeClass::Wide);
        assert_eq!(classify(&card(50, 46)), SizeClass::Regular);
    }

    // ========================================================================
    // Class Properties
    // ========================================================================

    #[test]
    fn test_column_spans() {
        assert_eq!(SizeClass::Compact.column_span(), 1);
        assert_eq!(SizeClass::Regular.column_span(), 1);
        assert_eq!(SizeClass::Wide.column_span(), 2);
        assert_eq!(SizeClass::ExtraWide.column_span(), 3);
        assert_eq!(SizeClass::Quiz.column_span(), 2);
        assert_eq!(SizeClass::QuizLarge.column_span(), 2);
    }

    #[test]
    fn test_span_within_clamps_to_columns() {
        assert_eq!(SizeClass::ExtraWide.span_within(2), 2);
        assert_eq!(SizeClass::ExtraWide.span_within(6), 3);
    }

    #[test]
    fn test_priorities_are_strictly_ascending() {
        for pair in SizeClass::ALL.windows(2) {
            assert!(pair[0].placement_priority() < pair[1].placement_priority());
        }
    }

    #[test]
    fn test_only_quiz_classes_are_quiz() {
        let quiz: Vec<_> = SizeClass::ALL.into_iter().filter(|c| c.is_quiz()).collect();
        assert_eq!(quiz, vec![SizeClass::Quiz, SizeClass::QuizLarge]);
    }

    #[test]
    fn test_companion_levels() {
        assert_eq!(SizeClass::Quiz.companion_levels(), 2);
        assert_eq!(SizeClass::QuizLarge.companion_levels(), 3);
    }
}
