//! Human player fed by the color picker

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::debug;

use super::{CancelToken, MoveSource};
use crate::board::{Board, Color};

/// Marks an empty slot; palettes never reach 255 colors
const NO_CHOICE: u8 = u8::MAX;

const POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Waits for the UI to submit a color.
///
/// Clones share the same slot, so the UI keeps one handle and hands clones
/// to the match.
#[derive(Debug, Clone)]
pub struct HumanMoveSource {
    chosen: Arc<AtomicU8>,
}

impl Default for HumanMoveSource {
    fn default() -> Self {
        Self {
            chosen: Arc::new(AtomicU8::new(NO_CHOICE)),
        }
    }
}

impl HumanMoveSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a color. A later submission replaces an unconsumed one.
    pub fn submit(&self, color: Color) {
        self.chosen.store(color, Ordering::Release);
    }

    /// Drop any unconsumed submission.
    pub fn clear(&self) {
        self.chosen.store(NO_CHOICE, Ordering::Release);
    }
}

impl MoveSource for HumanMoveSource {
    fn get_move(&self, board: &Board, cancel: &CancelToken) -> Option<Color> {
        loop {
            if cancel.is_cancelled() {
                debug!("Human move request cancelled");
                return None;
            }

            let choice = self.chosen.swap(NO_CHOICE, Ordering::AcqRel);
            if choice != NO_CHOICE {
                if board.is_legal(choice) {
                    return Some(choice);
                }
                debug!(color = choice, "Discarding illegal color from picker");
            }

            thread::sleep(POLL_INTERVAL);
        }
    }

    fn name(&self) -> &str {
        "human"
    }
}
