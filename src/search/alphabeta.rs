//! Alpha-Beta search over cloned boards
//!
//! This module implements the move search for the Filler AI: plain
//! depth-limited minimax with alpha-beta pruning. Player one maximizes the
//! evaluation, player two minimizes it.
//!
//! Every child position is a fresh clone of its parent with one move applied,
//! so the caller's board is never touched. Leaves are evaluated after the
//! last move is applied, one ply past the nominal depth.
//!
//! # Example
//!
//! ```
//! use filler::board::Board;
//! use filler::search::Searcher;
//!
//! let board = Board::new(6, 5, 6).unwrap();
//! let mut searcher = Searcher::new();
//!
//! let result = searcher.search(&board, 4);
//! if let Some(color) = result.best_move {
//!     println!("Best move: color {color}");
//! }
//! ```

use std::time::Instant;

use crate::board::{Board, Color, Player};
use crate::eval::{evaluate, Score, WIN_SCORE};

/// Infinity score for alpha-beta bounds
pub const INF: Score = WIN_SCORE;

/// Depth used by the search player unless configured otherwise
pub const DEFAULT_DEPTH: u8 = 12;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Nodes where the remaining moves were skipped
    pub cutoffs: u64,
    /// Positions scored by the evaluation function
    pub leaves: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` only when the root has no legal move
    pub best_move: Option<Color>,
    /// Minimax value of the root, oriented toward player one
    pub score: Score,
    /// Depth searched
    pub depth: u8,
    /// Total positions generated
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Depth-limited alpha-beta searcher.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Search `depth` plies from `board` and report the best move for the
    /// player to move. A depth of 0 is treated as 1.
    #[must_use]
    pub fn search(&mut self, board: &Board, depth: u8) -> SearchResult {
        self.nodes = 0;
        self.stats = SearchStats::default();

        let depth = depth.max(1);
        let start = Instant::now();
        let (score, best_move) = self.alpha_beta(board, depth, -INF, INF);

        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            time_ms: start.elapsed().as_millis() as u64,
            stats: self.stats.clone(),
        }
    }

    /// Returns the best `(value, move)` at this node.
    ///
    /// Moves are tried in ascending color order. The first move always
    /// becomes the initial best; later moves replace it only when strictly
    /// better for the side to move.
    fn alpha_beta(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
    ) -> (Score, Option<Color>) {
        let maximizing = board.turn() == Player::One;
        let mut best: Option<(Score, Color)> = None;

        for color in board.legal_moves() {
            let mut child = board.clone();
            child.apply_move(color);
            self.nodes += 1;

            let value = if depth > 1 {
                self.alpha_beta(&child, depth - 1, alpha, beta).0
            } else {
                self.stats.leaves += 1;
                evaluate(&child, maximizing)
            };

            let improves = match best {
                None => true,
                Some((best_value, _)) if maximizing => value > best_value,
                Some((best_value, _)) => value < best_value,
            };
            if improves {
                best = Some((value, color));
            }

            if maximizing {
                alpha = alpha.max(value);
            } else {
                beta = beta.min(value);
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        match best {
            Some((value, color)) => (value, Some(color)),
            // Unreachable for boards with more than two colors
            None => (evaluate(board, maximizing), None),
        }
    }
}
