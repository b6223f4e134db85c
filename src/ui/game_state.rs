//! Game state management for the Filler GUI

use std::time::Duration;

use tracing::info;

use crate::config::GameConfig;
use crate::error::Result;
use crate::game::{Match, MatchEvent};
use crate::player::{HumanMoveSource, PlayerKind};
use crate::{Board, Color, Outcome, Player, Pos};

/// Main game state
pub struct GameState {
    pub config: GameConfig,
    game: Match,
    /// Shared with every human slot of the match
    human: HumanMoveSource,
    /// Cell highlighted for the board editor
    pub selected: Pos,
    pub last_move: Option<(Player, Color)>,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(config: GameConfig) -> Result<Self> {
        let human = HumanMoveSource::new();
        let game = Self::new_match(&config, &human)?;
        Ok(Self {
            config,
            game,
            human,
            selected: Pos::new(0, 0),
            last_move: None,
            message: None,
        })
    }

    fn new_match(config: &GameConfig, human: &HumanMoveSource) -> Result<Match> {
        let board = config.new_board()?;
        let [one, two] = config.providers(human);
        Ok(Match::new(board, one, two))
    }

    /// Start over on a fresh board with the same configuration
    pub fn reset(&mut self) {
        self.game.cancel();
        self.human.clear();
        match Self::new_match(&self.config, &self.human) {
            Ok(game) => {
                self.game = game;
                self.selected = Pos::new(0, 0);
                self.last_move = None;
                self.message = None;
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.game.outcome()
    }

    pub fn kind(&self, player: Player) -> PlayerKind {
        self.config.kind(player)
    }

    /// Human is expected to pick a color now
    pub fn is_human_turn(&self) -> bool {
        !self.outcome().is_over() && self.kind(self.board().turn()) == PlayerKind::Human
    }

    /// A non-human provider is working on a move
    pub fn is_ai_thinking(&self) -> bool {
        !self.is_human_turn() && self.game.pending().is_some()
    }

    pub fn thinking_elapsed(&self) -> Option<Duration> {
        self.game.pending().map(|request| request.elapsed())
    }

    /// Drive the match one step. Called once per frame.
    pub fn update(&mut self) {
        match self.game.poll() {
            MatchEvent::Moved { player, color } => {
                self.last_move = Some((player, color));
                self.message = None;
            }
            MatchEvent::Rejected { player, color } => {
                self.message = Some(format!("{player} picked unavailable color {color}"));
            }
            MatchEvent::Abandoned(player) => {
                self.message = Some(format!("{player} did not move"));
            }
            MatchEvent::Waiting(_) | MatchEvent::Finished(_) => {}
        }
    }

    /// Color picked in the UI
    pub fn choose_color(&mut self, color: Color) -> std::result::Result<(), String> {
        if self.outcome().is_over() {
            return Err("Game is over".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }
        if !self.board().is_legal(color) {
            return Err("That color is taken".to_string());
        }
        self.human.submit(color);
        Ok(())
    }

    /// Move the editor selection, wrapping around the edges
    pub fn move_selection(&mut self, dx: isize, dy: isize) {
        let (width, height) = (self.board().width() as isize, self.board().height() as isize);
        let x = (self.selected.x as isize + dx).rem_euclid(width);
        let y = (self.selected.y as isize + dy).rem_euclid(height);
        self.selected = Pos::new(x as usize, y as usize);
    }

    /// Paint the selected cell and step to the next one in reading order
    pub fn paint_selected(&mut self, color: Color) {
        let pos = self.selected;
        match self.game.board_mut().set_cell(pos, color) {
            Ok(()) => {
                info!(x = pos.x, y = pos.y, color, "Cell edited");
                let width = self.board().width();
                let dy = if pos.x + 1 >= width { 1 } else { 0 };
                self.move_selection(1, dy);
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }
}
