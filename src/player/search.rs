//! Alpha-beta search player

use tracing::info;

use super::{CancelToken, MoveSource};
use crate::board::{Board, Color};
use crate::search::{Searcher, DEFAULT_DEPTH};

/// Runs a fixed-depth alpha-beta search for every move.
///
/// The search is not preemptible: the cancel token is ignored and a started
/// search always runs to completion.
#[derive(Debug, Clone, Copy)]
pub struct MinimaxMoveSource {
    depth: u8,
}

impl Default for MinimaxMoveSource {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl MinimaxMoveSource {
    pub fn new(depth: u8) -> Self {
        Self { depth: depth.max(1) }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }
}

impl MoveSource for MinimaxMoveSource {
    fn get_move(&self, board: &Board, _cancel: &CancelToken) -> Option<Color> {
        info!(player = %board.turn(), depth = self.depth, "Starting alpha-beta search");

        let result = Searcher::new().search(board, self.depth);

        info!(
            color = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            cutoffs = result.stats.cutoffs,
            time_ms = result.time_ms,
            "Search finished"
        );
        result.best_move
    }

    fn name(&self) -> &str {
        "search"
    }
}
