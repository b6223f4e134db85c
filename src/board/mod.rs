//! Board representation for Filler

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

/// Palette size used when none is configured
pub const DEFAULT_NUM_COLORS: u8 = 6;

/// Index into the color palette
pub type Color = u8;

/// The two sides of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Moves first, starts in the top-right corner
    One,
    /// Moves second, starts in the bottom-left corner
    Two,
}

impl Player {
    /// Both players in turn order
    pub const BOTH: [Player; 2] = [Player::One, Player::Two];

    /// Get the other player
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Zero-based index, used for score and provider arrays
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "player 1"),
            Player::Two => write!(f, "player 2"),
        }
    }
}

/// Cell coordinate, `x` across and `y` down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    #[inline]
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Flat index into a grid of the given width
    #[inline]
    pub fn to_index(self, width: usize) -> usize {
        self.y * width + self.x
    }

    #[inline]
    pub fn from_index(idx: usize, width: usize) -> Self {
        Self {
            x: idx % width,
            y: idx / width,
        }
    }
}
