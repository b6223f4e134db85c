//! One asynchronous move request per turn

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use super::{CancelToken, MoveSource};
use crate::board::{Board, Color, Player};

/// Progress of a [`MoveRequest`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Pending,
    Ready(Color),
    /// The provider gave up (cancelled) or its thread died
    Abandoned,
}

/// A move being computed on a worker thread from a snapshot of the board.
///
/// The worker sends at most one answer.
pub struct MoveRequest {
    player: Player,
    receiver: Receiver<Option<Color>>,
    start_time: Instant,
}

impl MoveRequest {
    /// Start computing a move for the player to move on `board`.
    pub fn spawn(source: Arc<dyn MoveSource>, board: &Board, cancel: CancelToken) -> Self {
        let snapshot = board.clone();
        let player = snapshot.turn();
        let (tx, rx) = channel();

        thread::spawn(move || {
            let choice = source.get_move(&snapshot, &cancel);
            // The host may have moved on; nobody is listening then.
            let _ = tx.send(choice);
        });

        Self {
            player,
            receiver: rx,
            start_time: Instant::now(),
        }
    }

    /// Player the move is for
    pub fn player(&self) -> Player {
        self.player
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Check for an answer without blocking.
    pub fn poll(&self) -> RequestState {
        match self.receiver.try_recv() {
            Ok(Some(color)) => RequestState::Ready(color),
            Ok(None) | Err(TryRecvError::Disconnected) => RequestState::Abandoned,
            Err(TryRecvError::Empty) => RequestState::Pending,
        }
    }

    /// Block until the provider answers.
    pub fn wait(self) -> Option<Color> {
        self.receiver.recv().ok().flatten()
    }
}
