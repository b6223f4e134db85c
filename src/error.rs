//! Error types for board construction, editing, and move application

use thiserror::Error;

use crate::board::{Color, Player, Pos};

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, FillerError>;

/// Errors reported by the Filler core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FillerError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("at least 3 colors are required so a legal move always exists, got {0}")]
    TooFewColors(u8),

    #[error("grid has {actual} cells, expected {expected}")]
    GridSizeMismatch { expected: usize, actual: usize },

    #[error("color {color} is outside the palette of {num_colors} colors")]
    ColorOutOfRange { color: Color, num_colors: u8 },

    #[error("position ({}, {}) is outside the {width}x{height} board", .pos.x, .pos.y)]
    PositionOutOfRange { pos: Pos, width: usize, height: usize },

    /// The color is out of range or currently held by one of the players
    #[error("color {color} is not a legal move")]
    InvalidMove { color: Color },

    #[error("{0} is a human player, which needs the GUI")]
    HumanInHeadless(Player),
}
