//! Win condition checking
//!
//! A player wins once their territory covers at least half the board
//! (rounded up) and strictly exceeds the opponent's.

use crate::board::Player;

/// State of a game as seen from the scores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Tie,
}

impl Outcome {
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Score a player must reach before the game can end: `ceil(total / 2)`
#[inline]
pub fn win_threshold(total_cells: usize) -> u32 {
    total_cells.div_ceil(2) as u32
}

/// Decide the game from the current scores.
pub fn outcome(scores: [u32; 2], total_cells: usize) -> Outcome {
    let [one, two] = scores;
    if one.max(two) < win_threshold(total_cells) {
        Outcome::InProgress
    } else if one == two {
        Outcome::Tie
    } else if one > two {
        Outcome::Win(Player::One)
    } else {
        Outcome::Win(Player::Two)
    }
}
