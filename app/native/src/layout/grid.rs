//! Grid configuration - column count and card sizes for a container.
//!
//! The container width selects one of three screen-size tiers, each with its
//! own minimum/maximum card width and spacing. The column count is the number
//! of minimum-width cards that fit, capped by orientation.
//!
//! # Tiers (defaults)
//!
//! | width      | min card | max card | spacing |
//! |------------|----------|----------|---------|
//! | `< 400`    | 120      | 180      | 8       |
//! | `< 800`    | 140      | 220      | 12      |
//! | otherwise  | 160      | 260      | 16      |
//!
//! Landscape containers allow up to 8 columns, portrait up to 6.

use serde::Serialize;

use super::SizeClass;
use crate::config::{GridConfig, TierPreset};

/// Minimum number of columns in any configuration.
pub const MIN_COLUMNS: u32 = 2;

/// Screen-size tier selected from the container width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenTier {
    Narrow,
    Medium,
    Wide,
}

impl std::fmt::Display for ScreenTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Narrow => write!(f, "narrow"),
            Self::Medium => write!(f, "medium"),
            Self::Wide => write!(f, "wide"),
        }
    }
}

/// Pixel size of a card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardSize {
    pub width: f64,
    pub height: f64,
}

/// Resolved grid geometry for one layout pass.
///
/// The width fields are the unclamped derived widths and may exceed the
/// container in small grids; [`Self::size_of`] gives the width a card is
/// actually placed at.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfiguration {
    pub tier: ScreenTier,
    pub columns: u32,
    pub spacing: f64,
    /// Width of a single-column card.
    pub card_width: f64,
    pub wide_card_width: f64,
    pub extra_wide_card_width: f64,
    pub compact_height: f64,
    pub regular_height: f64,
    pub wide_height: f64,
    pub quiz_height: f64,
    pub quiz_large_height: f64,
}

impl GridConfiguration {
    /// Calculates the configuration for a container using the default presets.
    #[must_use]
    pub fn calculate(width: f64, height: f64) -> Self {
        Self::calculate_with(width, height, &GridConfig::default())
    }

    /// Calculates the configuration for a container.
    ///
    /// A non-positive or non-finite width yields [`Self::fallback`].
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn calculate_with(width: f64, height: f64, grid: &GridConfig) -> Self {
        if !width.is_finite() || width <= 0.0 {
            tracing::trace!(width, "layout: degenerate container width, using fallback grid");
            return Self::fallback(grid);
        }

        let (tier, preset) = select_tier(width, grid);
        let multiplier =
            if tier == ScreenTier::Narrow { grid.small_screen_multiplier } else { 1.0 };

        let available = 2.0f64.mul_add(-grid.horizontal_padding, width);
        let slot = preset.min_card_width + preset.spacing;
        let fitting = if slot > 0.0 { (available / slot).floor() } else { 0.0 };
        let base_columns = if fitting.is_finite() && fitting > f64::from(MIN_COLUMNS) {
            fitting.min(f64::from(u32::MAX)) as u32
        } else {
            MIN_COLUMNS
        };

        let max_columns = if width > height {
            grid.max_columns_landscape
        } else {
            grid.max_columns_portrait
        };
        let columns = base_columns.min(max_columns).max(MIN_COLUMNS);

        let gutters = f64::from(columns - 1) * preset.spacing;
        let card_width = clamp_width((available - gutters) / f64::from(columns), &preset);

        Self::from_parts(tier, columns, card_width, preset.spacing, multiplier, grid)
    }

    /// Minimum configuration used for degenerate containers.
    #[must_use]
    pub fn fallback(grid: &GridConfig) -> Self {
        let preset = grid.narrow;
        let card_width = clamp_width(preset.min_card_width, &preset);
        Self::from_parts(
            ScreenTier::Narrow,
            MIN_COLUMNS,
            card_width,
            preset.spacing,
            grid.small_screen_multiplier,
            grid,
        )
    }

    fn from_parts(
        tier: ScreenTier,
        columns: u32,
        card_width: f64,
        spacing: f64,
        multiplier: f64,
        grid: &GridConfig,
    ) -> Self {
        let base = grid.base_height * multiplier;

        Self {
            tier,
            columns,
            spacing,
            card_width,
            wide_card_width: 2.0f64.mul_add(card_width, spacing),
            extra_wide_card_width: 3.0f64.mul_add(card_width, 2.0 * spacing),
            compact_height: base * grid.compact_height_factor,
            regular_height: base,
            wide_height: base * grid.wide_height_factor,
            quiz_height: 2.0f64.mul_add(base, spacing),
            quiz_large_height: 3.0f64.mul_add(base, 2.0 * spacing),
        }
    }

    /// Width of a card spanning `span` columns, including inner spacing.
    #[must_use]
    pub fn span_width(&self, span: u32) -> f64 {
        let span = span.clamp(1, self.columns);
        f64::from(span).mul_add(self.card_width, f64::from(span - 1) * self.spacing)
    }

    /// Total pixel width of a full row.
    #[must_use]
    pub fn row_width(&self) -> f64 { self.span_width(self.columns) }

    /// Resolved pixel size for a size class.
    ///
    /// Widths follow the class's column span clamped to this grid, so an
    /// extra-wide card in a two-column grid is as wide as the row.
    #[must_use]
    pub fn size_of(&self, class: SizeClass) -> CardSize {
        let width = self.span_width(class.span_within(self.columns));
        let height = match class {
            SizeClass::Compact => self.compact_height,
            SizeClass::Regular => self.regular_height,
            SizeClass::Wide | SizeClass::ExtraWide => self.wide_height,
            SizeClass::Quiz => self.quiz_height,
            SizeClass::QuizLarge => self.quiz_large_height,
        };
        CardSize { width, height }
    }
}

fn select_tier(width: f64, grid: &GridConfig) -> (ScreenTier, TierPreset) {
    if width < grid.narrow_breakpoint {
        (ScreenTier::Narrow, grid.narrow)
    } else if width < grid.medium_breakpoint {
        (ScreenTier::Medium, grid.medium)
    } else {
        (ScreenTier::Wide, grid.wide)
    }
}

/// Clamps a card width into the preset range without panicking on odd presets.
fn clamp_width(width: f64, preset: &TierPreset) -> f64 {
    let clamped = width.max(preset.min_card_width).min(preset.max_card_width);
    if clamped.is_finite() && clamped > 0.0 { clamped } else { 1.0 }
}
