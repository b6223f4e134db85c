//! Game rules for Filler
//!
//! This module implements the fixed rule set:
//! - Flood-fill capture from each player's start corner
//! - Majority win condition

pub mod fill;
pub mod win;

// Re-exports for convenient access
pub use fill::flood_fill;
pub use win::{outcome, win_threshold, Outcome};
