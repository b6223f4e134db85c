//! Command-line options and game configuration

use std::sync::Arc;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{Board, Player, DEFAULT_NUM_COLORS};
use crate::error::{FillerError, Result};
use crate::player::{HumanMoveSource, MoveProvider, MoveSource, PlayerKind};
use crate::search::DEFAULT_DEPTH;

/// Filler: claim more of the board than your opponent by flooding colors
#[derive(Debug, Parser)]
#[command(name = "filler", version, about)]
pub struct Cli {
    /// Board width in cells
    #[arg(long, default_value_t = 8)]
    pub width: usize,

    /// Board height in cells
    #[arg(long, default_value_t = 7)]
    pub height: usize,

    /// Number of colors in the palette (at least 3)
    #[arg(long, default_value_t = DEFAULT_NUM_COLORS)]
    pub colors: u8,

    /// Who plays first (top-right corner)
    #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
    pub player1: PlayerKind,

    /// Who plays second (bottom-left corner)
    #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
    pub player2: PlayerKind,

    /// Search depth in plies for search players
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    pub depth: u8,

    /// Seed for the initial grid
    #[arg(long)]
    pub seed: Option<u64>,

    /// Play in the terminal without a window (no human players)
    #[arg(long)]
    pub headless: bool,
}

impl Cli {
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            width: self.width,
            height: self.height,
            num_colors: self.colors,
            players: [self.player1, self.player2],
            depth: self.depth,
            seed: self.seed,
        }
    }
}

/// Everything needed to set up a match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub num_colors: u8,
    /// Provider kind per player, indexed by [`Player::index`]
    pub players: [PlayerKind; 2],
    pub depth: u8,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 8,
            height: 7,
            num_colors: DEFAULT_NUM_COLORS,
            players: [PlayerKind::Human; 2],
            depth: DEFAULT_DEPTH,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Reject shapes no board can be built from.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(FillerError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.num_colors <= 2 {
            return Err(FillerError::TooFewColors(self.num_colors));
        }
        Ok(())
    }

    /// Headless play cannot wait on a color picker.
    pub fn validate_headless(&self) -> Result<()> {
        self.validate()?;
        for player in Player::BOTH {
            if self.kind(player) == PlayerKind::Human {
                return Err(FillerError::HumanInHeadless(player));
            }
        }
        Ok(())
    }

    pub fn kind(&self, player: Player) -> PlayerKind {
        self.players[player.index()]
    }

    /// Fresh random board, reproducible when a seed is set
    pub fn new_board(&self) -> Result<Board> {
        match self.seed {
            Some(seed) => Board::random(
                self.width,
                self.height,
                self.num_colors,
                &mut StdRng::seed_from_u64(seed),
            ),
            None => Board::new(self.width, self.height, self.num_colors),
        }
    }

    /// One provider per player; human slots share `human`.
    pub fn providers(&self, human: &HumanMoveSource) -> [Arc<dyn MoveSource>; 2] {
        Player::BOTH.map(|player| {
            Arc::new(MoveProvider::from_kind(self.kind(player), self.depth, human))
                as Arc<dyn MoveSource>
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["filler"]);
        let config = cli.game_config();
        assert_eq!(config, GameConfig::default());
        assert!(!cli.headless);
    }

    #[test]
    fn test_cli_player_kinds() {
        let cli = Cli::parse_from([
            "filler",
            "--player1",
            "search",
            "--player2",
            "random",
            "--depth",
            "6",
            "--seed",
            "9",
            "--headless",
        ]);
        let config = cli.game_config();
        assert_eq!(config.players, [PlayerKind::Search, PlayerKind::Random]);
        assert_eq!(config.depth, 6);
        assert_eq!(config.seed, Some(9));
        assert!(cli.headless);
        assert!(config.validate_headless().is_ok());
    }

    #[test]
    fn test_validation_errors() {
        let config = GameConfig {
            width: 0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(FillerError::InvalidDimensions { width: 0, .. })
        ));

        let config = GameConfig {
            num_colors: 2,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(FillerError::TooFewColors(2)));

        let config = GameConfig {
            players: [PlayerKind::Random, PlayerKind::Human],
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate_headless(),
            Err(FillerError::HumanInHeadless(Player::Two))
        );
    }

    #[test]
    fn test_seeded_boards_repeat() {
        let config = GameConfig {
            seed: Some(12),
            ..GameConfig::default()
        };
        assert_eq!(config.new_board().unwrap(), config.new_board().unwrap());
    }

    #[test]
    fn test_providers_follow_kinds() {
        let config = GameConfig {
            players: [PlayerKind::Search, PlayerKind::Random],
            ..GameConfig::default()
        };
        let [one, two] = config.providers(&HumanMoveSource::new());
        assert_eq!(one.name(), "search");
        assert_eq!(two.name(), "random");
    }
}
