//! Filler: a two-player territory-capture game with an alpha-beta AI
//!
//! Each player owns the territory grown from a fixed corner: player one from
//! the top-right cell, player two from the bottom-left. A move picks a color
//! neither player currently holds; the mover's territory is repainted in that
//! color and absorbs every adjacent cell that already had it. The first
//! player to cover at least half the board with more cells than the other
//! wins.
//!
//! # Architecture
//!
//! - [`board`]: Grid, scores, turn, and move application
//! - [`rules`]: Flood-fill capture and the win condition
//! - [`eval`]: Position evaluation
//! - [`search`]: Depth-limited alpha-beta search
//! - [`player`]: Move providers (human, random, search) and per-turn requests
//! - [`game`]: Match host alternating the two providers
//! - [`config`]: Command-line options
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use filler::{Board, Player, Searcher};
//!
//! let mut board = Board::new(8, 7, 6).unwrap();
//! let result = Searcher::new().search(&board, 4);
//! if let Some(color) = result.best_move {
//!     board.play(color).unwrap();
//! }
//! assert_eq!(board.turn(), Player::Two);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod eval;
pub mod game;
pub mod player;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Color, Player, Pos, DEFAULT_NUM_COLORS};
pub use error::{FillerError, Result};
pub use game::{Match, MatchEvent};
pub use rules::Outcome;
pub use search::{SearchResult, Searcher};
