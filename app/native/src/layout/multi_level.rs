//! Multi-level arrangement - companions stacked beside a quiz card.
//!
//! A quiz anchors its row and keeps its own two columns. The remaining
//! columns hold two (quiz) or three (large quiz) stacked levels of
//! companions, filled first-fit per level:
//!
//! ```text
//! columns = 6, QuizLarge, companions c1..c5 (span 1 each)
//!
//! +-------+----+----+----+----+
//! |       | c1 | c2 | c3 | c4 |   level 0
//! |       +----+----+----+----+
//! | quiz  | c5 |                  level 1
//! |       +----+
//! |       |                       level 2
//! +-------+
//! ```
//!
//! A companion that fits no level is returned as overflow, which the
//! assembler records on the tree as dropped.

use smallvec::SmallVec;

use super::ClassifiedCard;
use super::packing::PackedRow;

/// Maximum number of companion levels.
pub const MAX_LEVELS: usize = 3;

/// Companions assigned to one level, in placement order.
pub type Level<'a> = PackedRow<'a>;

/// Result of arranging one quiz-anchored row.
#[derive(Debug, Clone)]
pub struct MultiLevelArrangement<'a> {
    pub quiz: ClassifiedCard<'a>,
    /// Columns available to each level.
    pub available_columns: u32,
    pub levels: SmallVec<[Level<'a>; MAX_LEVELS]>,
    /// Companions that fit no level, in input order.
    pub overflow: Vec<ClassifiedCard<'a>>,
}

impl MultiLevelArrangement<'_> {
    /// Total span of the companions on one level.
    #[must_use]
    pub fn level_span(&self, level: usize, columns: u32) -> u32 {
        self.levels.get(level).map_or(0, |lane| super::packing::row_span(lane, columns))
    }

    /// Number of companions placed across all levels.
    #[must_use]
    pub fn placed_count(&self) -> usize { self.levels.iter().map(|lane| lane.len()).sum() }
}

/// Splits a packed row into its quiz anchor and companions.
///
/// Returns `None` unless the row holds exactly one quiz card.
#[must_use]
pub fn split_quiz_row<'a>(
    row: &[ClassifiedCard<'a>],
) -> Option<(ClassifiedCard<'a>, Vec<ClassifiedCard<'a>>)> {
    let mut quizzes = row.iter().filter(|c| c.class.is_quiz());
    let quiz = *quizzes.next()?;
    if quizzes.next().is_some() {
        return None;
    }

    let companions = row.iter().filter(|c| !c.class.is_quiz()).copied().collect();
    Some((quiz, companions))
}

/// Distributes companions into stacked levels beside a quiz card.
///
/// Each companion goes to the first level whose running span plus its own
/// span stays within `columns - 2`.
#[must_use]
pub fn arrange<'a>(
    quiz: ClassifiedCard<'a>,
    companions: &[ClassifiedCard<'a>],
    columns: u32,
) -> MultiLevelArrangement<'a> {
    let available_columns = columns.saturating_sub(quiz.class.span_within(columns));
    let level_count = quiz.class.companion_levels().min(MAX_LEVELS);

    let mut levels: SmallVec<[Level<'a>; MAX_LEVELS]> =
        (0..level_count).map(|_| Level::new()).collect();
    let mut widths = [0u32; MAX_LEVELS];
    let mut overflow = Vec::new();

    for companion in companions {
        let span = companion.class.span_within(columns);
        let slot = (0..level_count).find(|&level| widths[level] + span <= available_columns);

        match slot {
            Some(level) => {
                widths[level] += span;
                levels[level].push(*companion);
            }
            None => overflow.push(*companion),
        }
    }

    MultiLevelArrangement { quiz, available_columns, levels, overflow }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::card::Card;
    use crate::layout::SizeClass;

    fn cards(count: usize) -> Vec<Card> {
        (0..count).map(|i| Card::new(Uuid::from_u128(i as u128), "", "")).collect()
    }

    fn with_classes<'a>(cards: &'a [Card], classes: &[SizeClass]) -> Vec<ClassifiedCard<'a>> {
        cards.iter().zip(classes).map(|(card, &class)| ClassifiedCard { card, class }).collect()
    }

    fn level_ids(arrangement: &MultiLevelArrangement<'_>) -> Vec<Vec<u128>> {
        arrangement
            .levels
            .iter()
            .map(|lane| lane.iter().map(|c| c.card.id.as_u128()).collect())
            .collect()
    }

    #[test]
    fn test_quiz_large_three_levels() {
        use SizeClass::{Compact, QuizLarge};
        let cards = cards(6);
        let row = with_classes(&cards, &[QuizLarge, Compact, Compact, Compact, Compact, Compact]);

        let arrangement = arrange(row[0], &row[1..], 6);

        assert_eq!(arrangement.available_columns, 4);
        assert_eq!(arrangement.levels.len(), 3);
        assert_eq!(level_ids(&arrangement), vec![vec![1, 2, 3, 4], vec![5], vec![]]);
        assert!(arrangement.overflow.is_empty());
    }

    #[test]
    fn test_quiz_two_levels() {
        use SizeClass::{Compact, Quiz};
        let cards = cards(2);
        let row = with_classes(&cards, &[Quiz, Compact]);

        let arrangement = arrange(row[0], &row[1..], 6);
        assert_eq!(arrangement.levels.len(), 2);
        assert_eq!(arrangement.placed_count(), 1);
    }

    #[test]
    fn test_first_fit_backfills_earlier_level() {
        use SizeClass::{Compact, ExtraWide, Quiz, Wide};
        let cards = cards(4);
        let row = with_classes(&cards, &[Quiz, ExtraWide, Wide, Compact]);

        // available = 4: EW(3) -> L0, Wide(2) -> L1, Compact(1) -> L0 (3 + 1 = 4)
        let arrangement = arrange(row[0], &row[1..], 6);
        assert_eq!(level_ids(&arrangement), vec![vec![1, 3], vec![2]]);
    }

    #[test]
    fn test_overflow_when_no_level_fits() {
        use SizeClass::{Quiz, Wide};
        let cards = cards(4);
        let row = with_classes(&cards, &[Quiz, Wide, Wide, Wide]);

        // available = 2: one wide per level, third overflows
        let arrangement = arrange(row[0], &row[1..], 4);
        assert_eq!(level_ids(&arrangement), vec![vec![1], vec![2]]);
        assert_eq!(arrangement.overflow.len(), 1);
        assert_eq!(arrangement.overflow[0].card.id.as_u128(), 3);
    }

    #[test]
    fn test_two_columns_leave_no_room() {
        use SizeClass::{Compact, Quiz};
        let cards = cards(2);
        let row = with_classes(&cards, &[Quiz, Compact]);

        let arrangement = arrange(row[0], &row[1..], 2);
        assert_eq!(arrangement.available_columns, 0);
        assert_eq!(arrangement.placed_count(), 0);
        assert_eq!(arrangement.overflow.len(), 1);
    }

    #[test]
    fn test_level_span_never_exceeds_available() {
        use SizeClass::{Compact, ExtraWide, QuizLarge, Regular, Wide};
        let cards = cards(8);
        let classes = [QuizLarge, Wide, ExtraWide, Compact, Wide, Regular, ExtraWide, Compact];
        let row = with_classes(&cards, &classes);

        for columns in 2..=8 {
            let arrangement = arrange(row[0], &row[1..], columns);
            for level in 0..arrangement.levels.len() {
                assert!(arrangement.level_span(level, columns) <= arrangement.available_columns);
            }
            assert_eq!(arrangement.placed_count() + arrangement.overflow.len(), 7);
        }
    }

    #[test]
    fn test_split_quiz_row() {
        use SizeClass::{Compact, Quiz};
        let cards = cards(3);
        let row = with_classes(&cards, &[Compact, Quiz, Compact]);

        let (quiz, companions) = split_quiz_row(&row).unwrap();
        assert_eq!(quiz.card.id.as_u128(), 1);
        assert_eq!(companions.len(), 2);
    }

    #[test]
    fn test_split_rejects_rows_without_single_quiz() {
        use SizeClass::{Compact, Quiz};
        let cards = cards(3);
        assert!(split_quiz_row(&with_classes(&cards, &[Compact, Compact])).is_none());
        assert!(split_quiz_row(&with_classes(&cards, &[Quiz, Compact, Quiz])).is_none());
    }
}
