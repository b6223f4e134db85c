//! Board structure with territory scoring

use rand::Rng;

use super::{Color, Player, Pos};
use crate::error::{FillerError, Result};
use crate::rules::{flood_fill, outcome, Outcome};

/// Game board: a colored grid plus each player's captured-cell count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    num_colors: u8,
    /// Row-major colors, `width` cells per row
    cells: Vec<Color>,
    /// Captured cells per player after that player's latest move
    scores: [u32; 2],
    turn: Player,
}

impl Board {
    /// Create a board with a random grid drawn from the thread RNG.
    pub fn new(width: usize, height: usize, num_colors: u8) -> Result<Self> {
        Self::random(width, height, num_colors, &mut rand::rng())
    }

    /// Create a board with a random grid drawn from `rng`.
    pub fn random<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        num_colors: u8,
        rng: &mut R,
    ) -> Result<Self> {
        validate_shape(width, height, num_colors)?;
        let cells = (0..width * height)
            .map(|_| rng.random_range(0..num_colors))
            .collect();
        Self::from_cells(width, height, num_colors, cells)
    }

    /// Create a board from an explicit row-major grid.
    ///
    /// Both priming moves are played before returning, exactly as for a
    /// random board, so the scores already reflect each starting territory.
    pub fn from_cells(
        width: usize,
        height: usize,
        num_colors: u8,
        cells: Vec<Color>,
    ) -> Result<Self> {
        validate_shape(width, height, num_colors)?;
        if cells.len() != width * height {
            return Err(FillerError::GridSizeMismatch {
                expected: width * height,
                actual: cells.len(),
            });
        }
        if let Some(&color) = cells.iter().find(|&&c| c >= num_colors) {
            return Err(FillerError::ColorOutOfRange { color, num_colors });
        }

        let mut board = Self {
            width,
            height,
            num_colors,
            cells,
            scores: [0, 0],
            turn: Player::One,
        };

        // Priming: each player "plays" its own color, which settles the
        // initial territories even when both corners share a color.
        for _ in Player::BOTH {
            let own = board.color(board.turn);
            board.apply_move(own);
        }

        Ok(board)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn num_colors(&self) -> u8 {
        self.num_colors
    }

    #[inline]
    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    /// Player to move next
    #[inline]
    pub fn turn(&self) -> Player {
        self.turn
    }

    #[inline]
    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    #[inline]
    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }

    /// Row-major view of the grid
    #[inline]
    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    /// Get the color at a position
    #[inline]
    pub fn get(&self, pos: Pos) -> Color {
        debug_assert!(pos.x < self.width && pos.y < self.height);
        self.cells[pos.to_index(self.width)]
    }

    /// Fixed corner each player grows from
    #[inline]
    pub fn start_cell(&self, player: Player) -> Pos {
        match player {
            Player::One => Pos::new(self.width - 1, 0),
            Player::Two => Pos::new(0, self.height - 1),
        }
    }

    /// Current territory color of a player (the color of its start cell)
    #[inline]
    pub fn color(&self, player: Player) -> Color {
        self.get(self.start_cell(player))
    }

    /// A color is legal when it is in the palette and neither player holds it.
    #[inline]
    pub fn is_legal(&self, color: Color) -> bool {
        color < self.num_colors && color != self.color(Player::One) && color != self.color(Player::Two)
    }

    /// Colors neither player currently holds, in ascending order
    pub fn legal_moves(&self) -> Vec<Color> {
        (0..self.num_colors).filter(|&c| self.is_legal(c)).collect()
    }

    /// Game state derived from the current scores
    pub fn winner(&self) -> Outcome {
        outcome(self.scores, self.total_cells())
    }

    /// Play `color` for the player to move.
    ///
    /// The board is left untouched if the color is not legal.
    pub fn play(&mut self, color: Color) -> Result<()> {
        if !self.is_legal(color) {
            return Err(FillerError::InvalidMove { color });
        }
        self.apply_move(color);
        Ok(())
    }

    /// Play without legality checks. Used by priming and by search, which
    /// only ever feeds colors from `legal_moves`.
    pub(crate) fn apply_move(&mut self, color: Color) {
        debug_assert!(color < self.num_colors);
        let player = self.turn;
        let start = self.start_cell(player);
        self.scores[player.index()] =
            flood_fill(&mut self.cells, self.width, self.height, start, color);
        self.turn = player.opponent();
    }

    /// Overwrite a single cell. Scores are not recomputed.
    pub fn set_cell(&mut self, pos: Pos, color: Color) -> Result<()> {
        if pos.x >= self.width || pos.y >= self.height {
            return Err(FillerError::PositionOutOfRange {
                pos,
                width: self.width,
                height: self.height,
            });
        }
        if color >= self.num_colors {
            return Err(FillerError::ColorOutOfRange {
                color,
                num_colors: self.num_colors,
            });
        }
        self.cells[pos.to_index(self.width)] = color;
        Ok(())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.width) {
            for (i, color) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{color}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn validate_shape(width: usize, height: usize, num_colors: u8) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(FillerError::InvalidDimensions { width, height });
    }
    if num_colors <= 2 {
        return Err(FillerError::TooFewColors(num_colors));
    }
    Ok(())
}
