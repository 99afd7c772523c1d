//! Adaptive card layout engine.
//!
//! Given a collection of study cards and a container size, the engine
//! classifies each card, groups the cards, packs every group into rows under
//! the column budget and arranges companions beside quiz cards. The result is
//! a [`LayoutTree`] for the rendering layer.
//!
//! # Pipeline
//!
//! - **Classify**: card content to a [`SizeClass`] (`size_class`)
//! - **Configure**: container size to a [`GridConfiguration`] (`grid`)
//! - **Group**: quizzes, materials and completed cards (`grouping`)
//! - **Pack**: greedy first-fit rows by column span (`packing`)
//! - **Optimize**: non-quiz rows sorted by placement priority (`packing`)
//! - **Arrange**: companion levels beside quiz cards (`multi_level`)
//!
//! Every pass is a pure, synchronous function of `(cards, geometry, config)`.
//! Nothing is cached between passes, so concurrent passes are independent and
//! the caller simply keeps the most recent result.

pub mod grid;
pub mod grouping;
pub mod multi_level;
pub mod packing;
pub mod size_class;
pub mod tree;

pub use grid::{CardSize, GridConfiguration, ScreenTier};
pub use grouping::{CardGroup, GroupKind, group_cards};
pub use multi_level::{MultiLevelArrangement, arrange, split_quiz_row};
pub use packing::{PackedRow, optimize_row, pack_rows, row_span};
pub use size_class::{SizeClass, classify, classify_with};
pub use tree::{DroppedCard, LayoutGroup, LayoutRow, LayoutTree, PositionedCard};

use crate::card::Card;
use crate::config::LayoutConfig;

// ============================================================================
// Classified Card
// ============================================================================

/// A card paired with its size class for the duration of one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedCard<'a> {
    pub card: &'a Card,
    pub class: SizeClass,
}

/// Classifies every card, preserving input order.
#[must_use]
pub fn classify_cards<'a>(cards: &'a [Card], config: &LayoutConfig) -> Vec<ClassifiedCard<'a>> {
    cards
        .iter()
        .map(|card| ClassifiedCard { card, class: classify_with(card, &config.sizing) })
        .collect()
}

// ============================================================================
// Main Layout Function
// ============================================================================

/// Lays out cards in a container using the default configuration.
///
/// # Arguments
///
/// * `cards` - Cards to arrange (in order)
/// * `container_width` - Width of the container in pixels
/// * `container_height` - Height of the container in pixels
#[must_use]
pub fn calculate_layout(
    cards: &[Card],
    container_width: f64,
    container_height: f64,
) -> LayoutTree {
    calculate_layout_with_config(cards, container_width, container_height, &LayoutConfig::default())
}

/// Lays out cards in a container.
///
/// # Arguments
///
/// * `cards` - Cards to arrange (in order)
/// * `container_width` - Width of the container in pixels
/// * `container_height` - Height of the container in pixels
/// * `config` - Grid presets, size thresholds and grouping
#[must_use]
pub fn calculate_layout_with_config(
    cards: &[Card],
    container_width: f64,
    container_height: f64,
    config: &LayoutConfig,
) -> LayoutTree {
    let configuration =
        GridConfiguration::calculate_with(container_width, container_height, &config.grid);

    if cards.is_empty() {
        return LayoutTree::empty(configuration);
    }

    let classified = classify_cards(cards, config);
    let groups = group_cards(&classified, &config.grouping);

    let mut assembler = Assembler { configuration: &configuration, order: 0, dropped: Vec::new() };
    let groups = groups.iter().map(|group| assembler.assemble_group(group)).collect();
    let dropped = assembler.dropped;

    let tree = LayoutTree { configuration, groups, dropped };

    tracing::debug!(
        cards = cards.len(),
        columns = tree.columns(),
        groups = tree.groups.len(),
        rows = tree.row_count(),
        dropped = tree.dropped.len(),
        "layout: pass complete"
    );

    tree
}

// ============================================================================
// Assembly
// ============================================================================

/// Per-pass state for turning packed groups into positioned rows.
struct Assembler<'c> {
    configuration: &'c GridConfiguration,
    /// Next render order index.
    order: usize,
    dropped: Vec<DroppedCard>,
}

impl Assembler<'_> {
    fn assemble_group(&mut self, group: &CardGroup<'_>) -> LayoutGroup {
        let columns = self.configuration.columns;
        let mut rows = Vec::new();

        for mut packed in pack_rows(&group.cards, columns) {
            optimize_row(&mut packed);

            let Some((quiz, companions)) = split_quiz_row(&packed) else {
                rows.push(self.flat_row(&packed));
                continue;
            };

            let arrangement = arrange(quiz, &companions, columns);
            rows.push(self.quiz_row(&arrangement));

            // The packer admits companions by the same first-fit rule, so this
            // only reports cards a caller-built arrangement could not place.
            for companion in &arrangement.overflow {
                tracing::debug!(
                    card = %companion.card.id,
                    quiz = %quiz.card.id,
                    "layout: companion does not fit beside quiz, dropped"
                );
                self.dropped.push(DroppedCard {
                    id: companion.card.id,
                    size_class: companion.class,
                    group: group.kind,
                    quiz_id: quiz.card.id,
                });
            }
        }

        LayoutGroup {
            kind: group.kind,
            title: group.title.clone(),
            priority: group.priority,
            show_header: group.show_header,
            is_completed: group.is_completed,
            rows,
        }
    }

    fn next_order(&mut self) -> usize {
        let order = self.order;
        self.order += 1;
        order
    }

    fn position(
        &mut self,
        card: ClassifiedCard<'_>,
        x: f64,
        y: f64,
        size: CardSize,
    ) -> PositionedCard {
        PositionedCard {
            id: card.card.id,
            size_class: card.class,
            x,
            y,
            width: size.width,
            height: size.height,
            order: self.next_order(),
        }
    }

    /// Places cards left to right with grid spacing between them.
    fn place_lane(
        &mut self,
        lane: &[ClassifiedCard<'_>],
        start_x: f64,
        y: f64,
        max_height: Option<f64>,
    ) -> Vec<PositionedCard> {
        let spacing = self.configuration.spacing;
        let mut x = start_x;

        lane.iter()
            .map(|&card| {
                let mut size = self.configuration.size_of(card.class);
                if let Some(limit) = max_height {
                    size.height = size.height.min(limit);
                }
                let placed = self.position(card, x, y, size);
                x += size.width + spacing;
                placed
            })
            .collect()
    }

    fn flat_row(&mut self, row: &[ClassifiedCard<'_>]) -> LayoutRow {
        let cards = self.place_lane(row, 0.0, 0.0, None);
        let height = cards.iter().map(|c| c.height).fold(0.0, f64::max);
        LayoutRow::Flat { height, cards }
    }

    /// Places the quiz on the left and its levels stacked to its right.
    ///
    /// Each occupied level gets an equal share of the quiz height, so the
    /// stacked levels never extend below the quiz card. First-fit only opens a
    /// level once the ones above it are in use, so occupied levels come first.
    #[allow(clippy::cast_precision_loss)]
    fn quiz_row(&mut self, arrangement: &MultiLevelArrangement<'_>) -> LayoutRow {
        let spacing = self.configuration.spacing;
        let quiz_size = self.configuration.size_of(arrangement.quiz.class);
        let quiz = self.position(arrangement.quiz, 0.0, 0.0, quiz_size);

        let occupied = arrangement.levels.iter().filter(|lane| !lane.is_empty()).count();
        let level_count = occupied.max(1) as f64;
        let lane_height = (level_count - 1.0).mul_add(-spacing, quiz_size.height) / level_count;
        let lane_x = quiz_size.width + spacing;

        let levels = arrangement
            .levels
            .iter()
            .enumerate()
            .map(|(index, lane)| {
                let y = (index as f64) * (lane_height + spacing);
                self.place_lane(lane, lane_x, y, Some(lane_height))
            })
            .collect();

        LayoutRow::QuizAnchored { height: quiz_size.height, quiz, levels }
    }
}

// ============================================================================
// Tests
// ============================================================================
