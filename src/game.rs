//! Match host: alternates move providers and applies their moves
//!
//! A [`Match`] owns the live board and one provider per player. It issues a
//! single [`MoveRequest`] at a time, applies the answer with
//! [`Board::play`], and only then asks the next player. Providers work on
//! board snapshots, so the live board is only ever changed here.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use filler::board::Board;
//! use filler::game::Match;
//! use filler::player::{MinimaxMoveSource, RandomMoveSource};
//!
//! let board = Board::new(6, 5, 6).unwrap();
//! let mut game = Match::new(
//!     board,
//!     Arc::new(RandomMoveSource),
//!     Arc::new(MinimaxMoveSource::new(3)),
//! );
//! let outcome = game.run();
//! assert!(outcome.is_over());
//! ```

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::board::{Board, Color, Player};
use crate::player::{CancelToken, MoveRequest, MoveSource, RequestState};
use crate::rules::Outcome;

/// What happened during one [`Match::poll`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEvent {
    /// A provider is still thinking (or was just asked)
    Waiting(Player),
    /// A move was applied
    Moved { player: Player, color: Color },
    /// A provider answered with an illegal color; it will be asked again
    Rejected { player: Player, color: Color },
    /// A provider gave up without answering
    Abandoned(Player),
    /// The game is decided
    Finished(Outcome),
}

/// A game in progress between two move providers
pub struct Match {
    board: Board,
    sources: [Arc<dyn MoveSource>; 2],
    pending: Option<MoveRequest>,
    cancel: CancelToken,
    history: Vec<(Player, Color)>,
}

impl Match {
    pub fn new(board: Board, one: Arc<dyn MoveSource>, two: Arc<dyn MoveSource>) -> Self {
        info!(
            width = board.width(),
            height = board.height(),
            colors = board.num_colors(),
            player1 = one.name(),
            player2 = two.name(),
            "Starting match"
        );
        Self {
            board,
            sources: [one, two],
            pending: None,
            cancel: CancelToken::new(),
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct access for the board editor. Pending requests keep working on
    /// their own snapshot.
    #[inline]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.board.winner()
    }

    /// Moves applied so far, in order
    #[inline]
    pub fn history(&self) -> &[(Player, Color)] {
        &self.history
    }

    pub fn source(&self, player: Player) -> &dyn MoveSource {
        self.sources[player.index()].as_ref()
    }

    /// The request currently in flight, if any
    pub fn pending(&self) -> Option<&MoveRequest> {
        self.pending.as_ref()
    }

    /// Advance without blocking: ask the player to move if nobody is being
    /// asked, or collect and apply a finished answer.
    pub fn poll(&mut self) -> MatchEvent {
        let outcome = self.outcome();
        if outcome.is_over() {
            return MatchEvent::Finished(outcome);
        }

        let Some(request) = &self.pending else {
            let player = self.request_move();
            return MatchEvent::Waiting(player);
        };

        let player = request.player();
        match request.poll() {
            RequestState::Pending => MatchEvent::Waiting(player),
            RequestState::Ready(color) => {
                self.pending = None;
                self.apply(player, color)
            }
            RequestState::Abandoned => {
                self.pending = None;
                warn!(%player, "Move provider gave up without a move");
                MatchEvent::Abandoned(player)
            }
        }
    }

    /// Play until the game is decided, blocking on every provider.
    ///
    /// Returns early with [`Outcome::InProgress`] if a provider abandons its
    /// request.
    pub fn run(&mut self) -> Outcome {
        loop {
            let outcome = self.outcome();
            if outcome.is_over() {
                return outcome;
            }

            let request = match self.pending.take() {
                Some(request) => request,
                None => {
                    self.request_move();
                    match self.pending.take() {
                        Some(request) => request,
                        None => return outcome,
                    }
                }
            };

            let player = request.player();
            match request.wait() {
                Some(color) => {
                    self.apply(player, color);
                }
                None => {
                    warn!(%player, "Move provider gave up without a move");
                    return self.outcome();
                }
            }
        }
    }

    /// Cancel the request in flight. Providers that honor cancellation stop
    /// promptly; a running search finishes and its answer is dropped.
    pub fn cancel(&mut self) {
        self.cancel.cancel();
        self.pending = None;
        self.cancel = CancelToken::new();
    }

    fn request_move(&mut self) -> Player {
        let player = self.board.turn();
        debug!(%player, source = self.source(player).name(), "Requesting move");
        self.pending = Some(MoveRequest::spawn(
            Arc::clone(&self.sources[player.index()]),
            &self.board,
            self.cancel.clone(),
        ));
        player
    }

    fn apply(&mut self, player: Player, color: Color) -> MatchEvent {
        match self.board.play(color) {
            Ok(()) => {
                self.history.push((player, color));
                info!(
                    %player,
                    color,
                    score1 = self.board.score(Player::One),
                    score2 = self.board.score(Player::Two),
                    "Move played"
                );
                let outcome = self.outcome();
                if outcome.is_over() {
                    info!(?outcome, moves = self.history.len(), "Match finished");
                }
                MatchEvent::Moved { player, color }
            }
            Err(err) => {
                warn!(%player, %err, "Rejected move");
                MatchEvent::Rejected { player, color }
            }
        }
    }
}

impl Drop for Match {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
