//! Cardgrid - Adaptive layout engine for flashcard study grids.
//!
//! This library turns a collection of study cards and a container size into a
//! layout tree: cards grouped into quizzes, materials and completed work, packed
//! into rows under a responsive column budget, with companion cards stacked
//! beside quiz cards. The `cardgrid` binary exposes the engine on the command
//! line for inspection and scripting.

pub mod card;
pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod schema;

pub use card::{Card, CardKind};
pub use layout::{LayoutTree, calculate_layout, calculate_layout_with_config};
