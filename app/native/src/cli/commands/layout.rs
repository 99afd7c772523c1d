//! Layout CLI commands.
//!
//! Commands that run the layout engine and print its results.

use clap::Args;
use colored::Colorize;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::types::{GeometryArgs, InputArgs};
use crate::card::{Card, CardKind};
use crate::cli::output;
use crate::config::{self, LayoutConfig};
use crate::error::CardGridError;
use crate::layout::{
    GridConfiguration, LayoutGroup, LayoutRow, LayoutTree, PositionedCard, SizeClass,
    calculate_layout_with_config, classify_with,
};

/// Arguments for the `layout` command.
#[derive(Args, Debug)]
pub struct LayoutArgs {
    #[command(flatten)]
    pub geometry: GeometryArgs,

    #[command(flatten)]
    pub input: InputArgs,

    /// Output the full layout tree as JSON instead of tables.
    #[arg(long, short = 'j')]
    pub json: bool,
}

/// Arguments for the `grid` command.
#[derive(Args, Debug)]
pub struct GridArgs {
    #[command(flatten)]
    pub geometry: GeometryArgs,

    /// Output in JSON format instead of table format.
    #[arg(long, short = 'j')]
    pub json: bool,
}

/// Arguments for the `classify` command.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output in JSON format instead of table format.
    #[arg(long, short = 'j')]
    pub json: bool,
}

// ============================================================================
// Layout
// ============================================================================

/// Execute the layout command.
///
/// # Errors
///
/// Returns an error if the cards cannot be read or the tree cannot be serialized.
pub fn execute_layout(args: &LayoutArgs) -> Result<(), CardGridError> {
    let cards = args.input.read_cards()?;
    let config = config::get_config();
    let tree = calculate_layout_with_config(
        &cards,
        args.geometry.width,
        args.geometry.height,
        config,
    );

    if args.json {
        output::print_highlighted_json(&serde_json::to_value(&tree)?);
        return Ok(());
    }

    print_tree_summary(&tree, cards.len());
    Ok(())
}

#[derive(Tabled)]
struct PlacementRow {
    #[tabled(rename = "#")]
    order: usize,
    #[tabled(rename = "Row")]
    row: usize,
    #[tabled(rename = "Lane")]
    lane: String,
    #[tabled(rename = "Card")]
    card: String,
    #[tabled(rename = "Class")]
    class: String,
    #[tabled(rename = "X")]
    x: String,
    #[tabled(rename = "Y")]
    y: String,
    #[tabled(rename = "Width")]
    width: String,
    #[tabled(rename = "Height")]
    height: String,
}

impl PlacementRow {
    fn new(row: usize, lane: String, card: &PositionedCard) -> Self {
        Self {
            order: card.order,
            row: row + 1,
            lane,
            card: output::short_id(&card.id),
            class: card.size_class.to_string(),
            x: output::format_px(card.x),
            y: output::format_px(card.y),
            width: output::format_px(card.width),
            height: output::format_px(card.height),
        }
    }
}

/// Flattens a group into table rows. Quiz rows list the anchor, then each lane.
fn placement_rows(group: &LayoutGroup) -> Vec<PlacementRow> {
    let mut rows = Vec::new();

    for (index, row) in group.rows.iter().enumerate() {
        match row {
            LayoutRow::Flat { cards, .. } => {
                rows.extend(cards.iter().map(|card| PlacementRow::new(index, "-".into(), card)));
            }
            LayoutRow::QuizAnchored { quiz, levels, .. } => {
                rows.push(PlacementRow::new(index, "quiz".into(), quiz));
                for (lane, cards) in levels.iter().enumerate() {
                    let label = (lane + 1).to_string();
                    rows.extend(
                        cards.iter().map(|card| PlacementRow::new(index, label.clone(), card)),
                    );
                }
            }
        }
    }

    rows
}

fn print_tree_summary(tree: &LayoutTree, input_count: usize) {
    let geometry = &tree.configuration;
    println!(
        "{} {} columns, {} spacing, {} tier",
        "Grid:".bold(),
        geometry.columns,
        output::format_px(geometry.spacing),
        geometry.tier,
    );

    if tree.is_empty() {
        println!("{}", "No cards to lay out.".dimmed());
        return;
    }

    for group in &tree.groups {
        let cards: usize = group.rows.iter().map(|row| row.cards().count()).sum();
        println!();
        println!(
            "{} {}",
            format!("{} ({cards})", group.title).bold(),
            format!(
                "priority {}, header {}, {} rows",
                group.priority,
                output::format_bool(group.show_header),
                group.rows.len()
            )
            .dimmed()
        );

        let table = Table::new(placement_rows(group))
            .with(Style::rounded())
            .with(Modify::new(Columns::first()).with(Alignment::right()))
            .with(Modify::new(Columns::new(5..9)).with(Alignment::right()))
            .to_string();
        println!("{table}");
    }

    println!();
    println!("Placed {} of {input_count} cards in {} rows.", tree.card_count(), tree.row_count());

    if !tree.dropped.is_empty() {
        println!("{}", format!("Dropped {} companion cards:", tree.dropped.len()).yellow());
        for dropped in &tree.dropped {
            println!(
                "  {} ({}) beside quiz {}",
                output::short_id(&dropped.id),
                dropped.size_class,
                output::short_id(&dropped.quiz_id)
            );
        }
    }
}

// ============================================================================
// Grid
// ============================================================================

/// Execute the grid command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized.
pub fn execute_grid(args: &GridArgs) -> Result<(), CardGridError> {
    #[derive(Tabled)]
    struct SizeRow {
        #[tabled(rename = "Class")]
        class: String,
        #[tabled(rename = "Span")]
        span: u32,
        #[tabled(rename = "Width")]
        width: String,
        #[tabled(rename = "Height")]
        height: String,
    }

    let config = config::get_config();
    let geometry =
        GridConfiguration::calculate_with(args.geometry.width, args.geometry.height, &config.grid);

    if args.json {
        output::print_highlighted_json(&serde_json::to_value(&geometry)?);
        return Ok(());
    }

    let rows: Vec<SizeRow> = SizeClass::ALL
        .iter()
        .map(|&class| {
            let size = geometry.size_of(class);
            SizeRow {
                class: class.to_string(),
                span: class.span_within(geometry.columns),
                width: output::format_px(size.width),
                height: output::format_px(size.height),
            }
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..4)).with(Alignment::right()))
        .to_string();

    println!(
        "{} {} columns, {} spacing, row width {}",
        format!("{}x{}", args.geometry.width, args.geometry.height).bold(),
        geometry.columns,
        output::format_px(geometry.spacing),
        output::format_px(geometry.row_width()),
    );
    println!("{table}");
    Ok(())
}

// ============================================================================
// Classify
// ============================================================================

const fn kind_label(kind: CardKind) -> &'static str {
    match kind {
        CardKind::ShortFact => "short-fact",
        CardKind::Regular => "regular",
        CardKind::Quiz => "quiz",
    }
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct Classification<'a> {
    id: uuid::Uuid,
    title: &'a str,
    size_class: SizeClass,
    column_span: u32,
    placement_priority: u8,
}

fn classifications<'a>(cards: &'a [Card], config: &LayoutConfig) -> Vec<Classification<'a>> {
    cards
        .iter()
        .map(|card| {
            let class = classify_with(card, &config.sizing);
            Classification {
                id: card.id,
                title: &card.title,
                size_class: class,
                column_span: class.column_span(),
                placement_priority: class.placement_priority(),
            }
        })
        .collect()
}

/// Execute the classify command.
///
/// # Errors
///
/// Returns an error if the cards cannot be read.
pub fn execute_classify(args: &ClassifyArgs) -> Result<(), CardGridError> {
    #[derive(Tabled)]
    struct ClassRow {
        #[tabled(rename = "Card")]
        card: String,
        #[tabled(rename = "Title")]
        title: String,
        #[tabled(rename = "Kind")]
        kind: &'static str,
        #[tabled(rename = "Class")]
        class: String,
        #[tabled(rename = "Span")]
        span: u32,
        #[tabled(rename = "Done")]
        completed: String,
    }

    let cards = args.input.read_cards()?;
    let config = config::get_config();
    let results = classifications(&cards, config);

    if args.json {
        output::print_highlighted_json(&serde_json::to_value(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("{}", "No cards.".dimmed());
        return Ok(());
    }

    let rows: Vec<ClassRow> = cards
        .iter()
        .zip(&results)
        .map(|(card, result)| ClassRow {
            card: output::short_id(&card.id),
            title: output::truncate(&card.title, 32),
            kind: kind_label(card.kind),
            class: result.size_class.to_string(),
            span: result.column_span,
            completed: output::format_bool(card.is_completed),
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(4..5)).with(Alignment::right()))
        .with(Modify::new(Columns::new(5..6)).with(Alignment::center()))
        .to_string();

    println!("{}", format!("Cards ({})", cards.len()).bold());
    println!("{table}");
    Ok(())
}
