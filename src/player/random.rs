//! Uniformly random legal moves

use rand::seq::IndexedRandom;
use rand::Rng;

use super::{CancelToken, MoveSource};
use crate::board::{Board, Color};

/// Pick a legal move uniformly at random.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Color> {
    board.legal_moves().choose(rng).copied()
}

/// Plays a uniformly random legal color every turn
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomMoveSource;

impl MoveSource for RandomMoveSource {
    fn get_move(&self, board: &Board, cancel: &CancelToken) -> Option<Color> {
        if cancel.is_cancelled() {
            return None;
        }
        random_move(board, &mut rand::rng())
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    /// one holds 0, two holds 2, five colors leave {1, 3, 4}
    fn board() -> Board {
        Board::from_cells(3, 1, 5, vec![2, 4, 0]).unwrap()
    }

    #[test]
    fn test_random_move_is_roughly_uniform() {
        let board = board();
        assert_eq!(board.legal_moves(), vec![1, 3, 4]);

        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts = [0u32; 5];
        let trials = 6000;
        for _ in 0..trials {
            let color = random_move(&board, &mut rng).unwrap();
            counts[color as usize] += 1;
        }

        assert_eq!(counts[0] + counts[2], 0);
        for color in [1, 3, 4] {
            let share = f64::from(counts[color]) / f64::from(trials);
            assert!((share - 1.0 / 3.0).abs() < 0.05, "color {color}: {share}");
        }
    }

    #[test]
    fn test_source_returns_legal_move() {
        let board = board();
        for _ in 0..50 {
            let color = RandomMoveSource.get_move(&board, &CancelToken::new()).unwrap();
            assert!(board.is_legal(color));
        }
    }

    #[test]
    fn test_source_honors_cancel() {
        let cancel = CancelToken::new();
        cancel.cancel();
        assert_eq!(RandomMoveSource.get_move(&board(), &cancel), None);
    }
}
