//! Row packing and in-row ordering.
//!
//! Packing is a single-pass greedy first-fit over the group's cards in input
//! order. It is a bin-packing heuristic, not an optimal packing: a card that
//! does not fit closes the current row even if a later card would have.
//!
//! ```text
//! columns = 6, spans: [1, 1, 2, 3, 1, 2]
//!
//! +---+---+-------+
//! | 1 | 1 |   2   |            row 0: 1 + 1 + 2 = 4 (3 would overflow)
//! +---+---+-------+---+
//! |     3     | 1 |   2   |    row 1: 3 + 1 + 2 = 6
//! +-----------+---+-------+
//! ```
//!
//! Once a quiz joins a row, the row's budget becomes the quiz's companion
//! levels: each further card needs room on some level of `columns - quiz span`
//! columns, first-fit, exactly as [`arrange`](super::arrange) places them.

use smallvec::SmallVec;

use super::multi_level::MAX_LEVELS;
use super::{ClassifiedCard, SizeClass};

/// Inline capacity for packed rows; no grid has more than 8 columns by default.
///
/// Quiz rows with stacked levels can hold more and spill to the heap.
pub const ROW_INLINE_CAP: usize = 8;

/// Cards packed into one row, in placement order.
pub type PackedRow<'a> = SmallVec<[ClassifiedCard<'a>; ROW_INLINE_CAP]>;

/// Running column usage of the row being packed.
#[derive(Debug, Default)]
struct RowBudget {
    span: u32,
    lanes: Option<QuizLanes>,
}

/// Companion levels beside the row's quiz.
#[derive(Debug)]
struct QuizLanes {
    available: u32,
    count: usize,
    widths: [u32; MAX_LEVELS],
}

impl QuizLanes {
    fn new(quiz: SizeClass, columns: u32) -> Self {
        Self {
            available: columns.saturating_sub(quiz.span_within(columns)),
            count: quiz.companion_levels().min(MAX_LEVELS),
            widths: [0; MAX_LEVELS],
        }
    }

    fn slot(&self, span: u32) -> Option<usize> {
        (0..self.count).find(|&level| self.widths[level] + span <= self.available)
    }
}

impl RowBudget {
    fn starting_with(class: SizeClass, columns: u32) -> Self {
        let lanes = class.is_quiz().then(|| QuizLanes::new(class, columns));
        Self { span: class.span_within(columns), lanes }
    }

    /// Records the card if the row has room for it.
    fn admit(&mut self, class: SizeClass, columns: u32) -> bool {
        let span = class.span_within(columns);

        if let Some(lanes) = &mut self.lanes {
            if class.is_quiz() {
                return false;
            }
            let Some(level) = lanes.slot(span) else {
                return false;
            };
            lanes.widths[level] += span;
            return true;
        }

        if self.span + span > columns {
            return false;
        }

        if class.is_quiz() {
            // Cards already in the row total at most `columns - quiz span`,
            // so first-fit puts every one of them on level 0.
            let mut lanes = QuizLanes::new(class, columns);
            lanes.widths[0] = self.span;
            self.lanes = Some(lanes);
        }
        self.span += span;
        true
    }
}

/// Packs cards into rows that fit the grid.
///
/// Rows without a quiz fit within `columns`. A quiz card never joins a row
/// that already holds a quiz, so every row has at most one quiz anchor, and
/// its companions always fit the levels [`arrange`](super::arrange) builds.
#[must_use]
pub fn pack_rows<'a>(cards: &[ClassifiedCard<'a>], columns: u32) -> Vec<PackedRow<'a>> {
    let mut rows = Vec::new();
    let mut current = PackedRow::new();
    let mut budget = RowBudget::default();

    for classified in cards {
        if !budget.admit(classified.class, columns) {
            if !current.is_empty() {
                rows.push(std::mem::take(&mut current));
            }
            budget = RowBudget::starting_with(classified.class, columns);
        }
        current.push(*classified);
    }

    if !current.is_empty() {
        rows.push(current);
    }

    rows
}

/// Total column span of a row.
#[must_use]
pub fn row_span(row: &[ClassifiedCard<'_>], columns: u32) -> u32 {
    row.iter().map(|c| c.class.span_within(columns)).sum()
}

/// Re-orders a row by descending placement priority.
///
/// Rows containing a quiz keep packer order; their placement is handled by
/// the multi-level arrangement instead. The sort is stable, so cards of equal
/// priority keep their relative order.
pub fn optimize_row(row: &mut [ClassifiedCard<'_>]) {
    if row.iter().any(|c| c.class.is_quiz()) {
        return;
    }

    row.sort_by(|a, b| b.class.placement_priority().cmp(&a.class.placement_priority()));
}
