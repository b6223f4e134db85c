//! Heuristic evaluation function for Filler board positions
//!
//! Scores are always oriented toward player one: positive values favor
//! player one, negative values favor player two.

use crate::board::{Board, Player};
use crate::rules::Outcome;

/// Search score type
pub type Score = i32;

/// Score of a decided game. No territory differential can reach it.
pub const WIN_SCORE: Score = Score::MAX;

/// Evaluate the board for the search.
///
/// A decided game returns `WIN_SCORE` for a player-one win and `-WIN_SCORE`
/// for a player-two win. Otherwise (including ties) the result is the
/// territory differential `score(One) - score(Two)`.
///
/// The perspective flag names the side the search maximizes for at the node
/// that produced this leaf. Because the differential is already oriented
/// toward player one, the sign of a decided game does not depend on it.
///
/// # Arguments
/// * `board` - The position to evaluate
/// * `_maximizing` - Whether the parent node maximizes (player one to move)
#[must_use]
pub fn evaluate(board: &Board, _maximizing: bool) -> Score {
    match board.winner() {
        Outcome::Win(Player::One) => WIN_SCORE,
        Outcome::Win(Player::Two) => -WIN_SCORE,
        Outcome::InProgress | Outcome::Tie => {
            board.score(Player::One) as Score - board.score(Player::Two) as Score
        }
    }
}
