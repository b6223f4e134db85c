//! Move providers
//!
//! Every participant in a match, human or AI, is a [`MoveSource`]: given a
//! board it eventually yields one legal color, or nothing if the request was
//! cancelled. The host runs each request on its own thread through
//! [`MoveRequest`] so a slow search never blocks the UI.

mod human;
mod random;
mod request;
mod search;

pub use human::HumanMoveSource;
pub use random::{random_move, RandomMoveSource};
pub use request::{MoveRequest, RequestState};
pub use search::MinimaxMoveSource;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::board::{Board, Color};

/// Cooperative cancellation signal shared between the host and providers
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Anything that can pick a move for the player to move.
pub trait MoveSource: Send + Sync {
    /// Pick a color from `board.legal_moves()`.
    ///
    /// Returns `None` only if `cancel` was observed before a choice was made.
    /// Providers are free to ignore `cancel` once they have started working.
    fn get_move(&self, board: &Board, cancel: &CancelToken) -> Option<Color>;

    /// Short label for logs and the UI
    fn name(&self) -> &str;
}

/// Which kind of provider controls a player slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PlayerKind {
    /// Moves come from the color picker
    #[default]
    Human,
    /// Uniformly random legal moves
    Random,
    /// Alpha-beta search
    Search,
}

impl std::fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "human"),
            PlayerKind::Random => write!(f, "random"),
            PlayerKind::Search => write!(f, "search"),
        }
    }
}

/// The concrete providers a match can be configured with
#[derive(Debug, Clone)]
pub enum MoveProvider {
    Human(HumanMoveSource),
    Random(RandomMoveSource),
    Search(MinimaxMoveSource),
}

impl MoveProvider {
    /// Build a provider for `kind`. Human slots share `human`, which the UI
    /// feeds with picked colors.
    pub fn from_kind(kind: PlayerKind, depth: u8, human: &HumanMoveSource) -> Self {
        match kind {
            PlayerKind::Human => MoveProvider::Human(human.clone()),
            PlayerKind::Random => MoveProvider::Random(RandomMoveSource),
            PlayerKind::Search => MoveProvider::Search(MinimaxMoveSource::new(depth)),
        }
    }
}

impl MoveSource for MoveProvider {
    fn get_move(&self, board: &Board, cancel: &CancelToken) -> Option<Color> {
        match self {
            MoveProvider::Human(source) => source.get_move(board, cancel),
            MoveProvider::Random(source) => source.get_move(board, cancel),
            MoveProvider::Search(source) => source.get_move(board, cancel),
        }
    }

    fn name(&self) -> &str {
        match self {
            MoveProvider::Human(source) => source.name(),
            MoveProvider::Random(source) => source.name(),
            MoveProvider::Search(source) => source.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_token_is_shared() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn test_provider_from_kind() {
        let human = HumanMoveSource::new();
        assert!(matches!(
            MoveProvider::from_kind(PlayerKind::Human, 12, &human),
            MoveProvider::Human(_)
        ));
        assert!(matches!(
            MoveProvider::from_kind(PlayerKind::Random, 12, &human),
            MoveProvider::Random(_)
        ));
        match MoveProvider::from_kind(PlayerKind::Search, 5, &human) {
            MoveProvider::Search(source) => assert_eq!(source.depth(), 5),
            other => panic!("expected search provider, got {other:?}"),
        }
    }

    #[test]
    fn test_provider_delegates() {
        let board = Board::from_cells(3, 1, 4, vec![0, 1, 2]).unwrap();
        let provider = MoveProvider::Search(MinimaxMoveSource::new(2));
        let color = provider.get_move(&board, &CancelToken::new()).unwrap();
        assert!(board.is_legal(color));
        assert_eq!(provider.name(), "search");
    }
}
