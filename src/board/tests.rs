use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use super::*;
use crate::error::FillerError;
use crate::rules::Outcome;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::One.opponent(), Player::Two);
    assert_eq!(Player::Two.opponent(), Player::One);
    assert_eq!(Player::One.index(), 0);
    assert_eq!(Player::Two.index(), 1);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(3, 2);
    assert_eq!(pos.to_index(8), 19);
    assert_eq!(Pos::from_index(19, 8), pos);
}

#[test]
fn test_start_cells_are_opposite_corners() {
    let board = Board::new(8, 7, DEFAULT_NUM_COLORS).unwrap();
    assert_eq!(board.start_cell(Player::One), Pos::new(7, 0));
    assert_eq!(board.start_cell(Player::Two), Pos::new(0, 6));
    assert_eq!(board.turn(), Player::One);
}

#[test]
fn test_rejects_malformed_boards() {
    assert_eq!(
        Board::new(0, 5, 6).unwrap_err(),
        FillerError::InvalidDimensions { width: 0, height: 5 }
    );
    assert_eq!(Board::new(5, 5, 2).unwrap_err(), FillerError::TooFewColors(2));
    assert_eq!(
        Board::from_cells(2, 2, 3, vec![0, 1, 2]).unwrap_err(),
        FillerError::GridSizeMismatch { expected: 4, actual: 3 }
    );
    assert_eq!(
        Board::from_cells(2, 1, 3, vec![0, 3]).unwrap_err(),
        FillerError::ColorOutOfRange { color: 3, num_colors: 3 }
    );
}

#[test]
fn test_legal_moves_exclude_player_colors() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let board = Board::random(5, 4, 6, &mut rng).unwrap();
        let moves = board.legal_moves();
        let one = board.color(Player::One);
        let two = board.color(Player::Two);

        assert!(!moves.contains(&one));
        assert!(!moves.contains(&two));
        let expected = if one == two { 5 } else { 4 };
        assert_eq!(moves.len(), expected);
    }
}

#[test]
fn test_shared_start_color_leaves_one_color_taken() {
    // Both corners start on color 0
    let board = Board::from_cells(2, 2, 4, vec![0, 0, 0, 1]).unwrap();
    assert_eq!(board.color(Player::One), board.color(Player::Two));
    assert_eq!(board.legal_moves(), vec![1, 2, 3]);
}

#[test]
fn test_one_by_two_scenario() {
    let mut board = Board::from_cells(1, 2, 6, vec![0, 1]).unwrap();
    assert_eq!(board.legal_moves(), vec![2, 3, 4, 5]);
    assert_eq!(board.scores(), [1, 1]);

    let mover = board.turn();
    board.play(4).unwrap();
    assert_eq!(board.turn(), mover.opponent());
    assert!(board.score(Player::One) + board.score(Player::Two) <= 2);
    assert_eq!(board.color(Player::One), 4);
}

#[test]
fn test_free_extension_counts_without_recolor() {
    // 2 1 0
    // 2 2 0
    let mut board = Board::from_cells(3, 2, 3, vec![2, 1, 0, 2, 2, 0]).unwrap();
    assert_eq!(board.scores(), [2, 3]);
    assert_eq!(board.legal_moves(), vec![1]);

    board.play(1).unwrap();
    // Two recolored territory cells plus the pre-colored (1, 0)
    assert_eq!(board.score(Player::One), 3);
    assert_eq!(board.get(Pos::new(1, 0)), 1);
    assert_eq!(board.get(Pos::new(2, 0)), 1);
    assert_eq!(board.get(Pos::new(2, 1)), 1);
    assert_eq!(board.turn(), Player::Two);
    assert_eq!(board.winner(), Outcome::Tie);
}

#[test]
fn test_convergent_paths_double_count() {
    // 2 1 0
    // 2 1 0
    // (1, 1) is reached from the forked branch at (1, 0) and again from
    // (2, 1), so it is counted twice and the scores exceed the cell count.
    let mut board = Board::from_cells(3, 2, 3, vec![2, 1, 0, 2, 1, 0]).unwrap();
    assert_eq!(board.scores(), [2, 2]);

    board.play(1).unwrap();
    assert_eq!(board.score(Player::One), 5);
    assert!(board.score(Player::One) + board.score(Player::Two) > 6);
    assert_eq!(board.winner(), Outcome::Win(Player::One));
}

#[test]
fn test_scores_bounded_on_single_row_boards() {
    // A single row has no convergent paths, so territories never overlap
    // once the two corners start on different colors.
    let mut rng = StdRng::seed_from_u64(11);
    let mut checked = 0;
    while checked < 100 {
        let mut board = Board::random(9, 1, 5, &mut rng).unwrap();
        if board.color(Player::One) == board.color(Player::Two) {
            continue;
        }
        checked += 1;

        for _ in 0..30 {
            let total = board.score(Player::One) + board.score(Player::Two);
            assert!(total as usize <= board.total_cells());
            if board.winner().is_over() {
                break;
            }
            let color = *board.legal_moves().choose(&mut rng).unwrap();
            board.play(color).unwrap();
        }
    }
}

#[test]
fn test_winner_follows_scores() {
    // 0 0 0 1 | player one starts at (3, 0), player two at (0, 0)
    let board = Board::from_cells(4, 1, 3, vec![0, 0, 0, 1]).unwrap();
    assert_eq!(board.scores(), [1, 3]);
    assert_eq!(board.winner(), Outcome::Win(Player::Two));

    let board = Board::from_cells(4, 1, 3, vec![0, 2, 2, 1]).unwrap();
    assert_eq!(board.winner(), Outcome::InProgress);
}

#[test]
fn test_play_rejects_illegal_colors() {
    let mut board = Board::from_cells(3, 1, 4, vec![0, 1, 2]).unwrap();
    let before = board.clone();

    for color in [0, 2, 4, 9] {
        assert_eq!(board.play(color), Err(FillerError::InvalidMove { color }));
    }
    assert_eq!(board, before);
}

#[test]
fn test_clone_is_independent() {
    let mut rng = StdRng::seed_from_u64(3);
    let original = Board::random(6, 6, 6, &mut rng).unwrap();
    let snapshot = original.clone();

    let mut copy = original.clone();
    for _ in 0..5 {
        let color = copy.legal_moves()[0];
        copy.play(color).unwrap();
    }

    assert_eq!(original, snapshot);
    assert_ne!(copy.turn(), original.turn());
}

#[test]
fn test_set_cell_edits_without_rescoring() {
    let mut board = Board::from_cells(2, 2, 3, vec![0, 1, 2, 0]).unwrap();
    let scores = board.scores();

    board.set_cell(Pos::new(0, 0), 2).unwrap();
    assert_eq!(board.get(Pos::new(0, 0)), 2);
    assert_eq!(board.scores(), scores);

    assert!(matches!(
        board.set_cell(Pos::new(2, 0), 0),
        Err(FillerError::PositionOutOfRange { .. })
    ));
    assert!(matches!(
        board.set_cell(Pos::new(0, 0), 3),
        Err(FillerError::ColorOutOfRange { .. })
    ));
}

#[test]
fn test_display_rows() {
    let board = Board::from_cells(3, 2, 3, vec![0, 1, 2, 2, 1, 0]).unwrap();
    assert_eq!(board.to_string(), "0 1 2\n2 1 0\n");
}
