//! Layout tree handed to the rendering layer.
//!
//! `LayoutTree -> LayoutGroup[] -> LayoutRow[] -> PositionedCard`. Positions
//! are row-local pixel offsets; the renderer stacks rows and group headers.
//! The tree carries no styling, animation timing or gesture state.

use serde::Serialize;
use uuid::Uuid;

use super::SizeClass;
use super::grid::GridConfiguration;
use super::grouping::GroupKind;

/// A card with its resolved size and row-local position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedCard {
    pub id: Uuid,
    pub size_class: SizeClass,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Tree-wide render order, used by the renderer to stagger entry transitions.
    pub order: usize,
}

/// One horizontal band of the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum LayoutRow {
    /// Cards placed side by side.
    #[serde(rename_all = "camelCase")]
    Flat { height: f64, cards: Vec<PositionedCard> },
    /// A quiz card with companion levels stacked beside it.
    #[serde(rename_all = "camelCase")]
    QuizAnchored { height: f64, quiz: PositionedCard, levels: Vec<Vec<PositionedCard>> },
}

impl LayoutRow {
    /// Height of the row in pixels.
    #[must_use]
    pub const fn height(&self) -> f64 {
        match self {
            Self::Flat { height, .. } | Self::QuizAnchored { height, .. } => *height,
        }
    }

    /// Returns the quiz anchor, if any.
    #[must_use]
    pub const fn quiz(&self) -> Option<&PositionedCard> {
        match self {
            Self::Flat { .. } => None,
            Self::QuizAnchored { quiz, .. } => Some(quiz),
        }
    }

    /// Iterates over every card in the row, quiz anchor first.
    pub fn cards(&self) -> Box<dyn Iterator<Item = &PositionedCard> + '_> {
        match self {
            Self::Flat { cards, .. } => Box::new(cards.iter()),
            Self::QuizAnchored { quiz, levels, .. } => {
                Box::new(std::iter::once(quiz).chain(levels.iter().flatten()))
            }
        }
    }

    /// Total column span occupied by the row.
    ///
    /// For quiz rows this is the quiz span plus the widest level.
    #[must_use]
    pub fn column_span(&self, columns: u32) -> u32 {
        let span = |card: &PositionedCard| card.size_class.span_within(columns);
        match self {
            Self::Flat { cards, .. } => cards.iter().map(span).sum(),
            Self::QuizAnchored { quiz, levels, .. } => {
                let widest = levels.iter().map(|lane| lane.iter().map(span).sum()).max();
                span(quiz) + widest.unwrap_or(0)
            }
        }
    }
}

/// A laid-out group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutGroup {
    pub kind: GroupKind,
    pub title: String,
    pub priority: i32,
    pub show_header: bool,
    pub is_completed: bool,
    pub rows: Vec<LayoutRow>,
}

/// A companion that could not be placed beside its quiz card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DroppedCard {
    pub id: Uuid,
    pub size_class: SizeClass,
    pub group: GroupKind,
    /// The quiz card whose row the companion was packed into.
    pub quiz_id: Uuid,
}

/// The complete result of one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutTree {
    pub configuration: GridConfiguration,
    pub groups: Vec<LayoutGroup>,
    pub dropped: Vec<DroppedCard>,
}

impl LayoutTree {
    /// Creates an empty tree for the given configuration.
    #[must_use]
    pub const fn empty(configuration: GridConfiguration) -> Self {
        Self { configuration, groups: Vec::new(), dropped: Vec::new() }
    }

    /// Column count the tree was laid out for.
    #[must_use]
    pub const fn columns(&self) -> u32 { self.configuration.columns }

    /// Returns true if the tree has no groups.
    #[must_use]
    pub const fn is_empty(&self) -> bool { self.groups.is_empty() }

    /// Number of rows across all groups.
    #[must_use]
    pub fn row_count(&self) -> usize { self.groups.iter().map(|g| g.rows.len()).sum() }

    /// Iterates over every placed card in render order.
    pub fn placed_cards(&self) -> impl Iterator<Item = &PositionedCard> {
        self.groups.iter().flat_map(|g| g.rows.iter()).flat_map(LayoutRow::cards)
    }

    /// IDs of every placed card in render order.
    #[must_use]
    pub fn placed_ids(&self) -> Vec<Uuid> { self.placed_cards().map(|c| c.id).collect() }

    /// Number of placed cards.
    #[must_use]
    pub fn card_count(&self) -> usize { self.placed_cards().count() }
}
