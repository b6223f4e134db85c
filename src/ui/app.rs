//! Main application for the Filler GUI

use std::time::Duration;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::{Outcome, Player};
use super::board_view::BoardView;
use super::color_picker;
use super::game_state::GameState;
use super::theme::*;

/// Keys that paint the selected cell, in palette order
const PAINT_KEYS: [egui::Key; 6] = [
    egui::Key::R,
    egui::Key::G,
    egui::Key::Y,
    egui::Key::B,
    egui::Key::P,
    egui::Key::L,
];

/// Poll interval for move providers while a game is running
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Main Filler application
pub struct FillerApp {
    state: GameState,
    board_view: BoardView,
}

impl FillerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, state: GameState) -> Self {
        Self {
            state,
            board_view: BoardView::default(),
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "{} vs {}",
                        self.state.kind(Player::One),
                        self.state.kind(Player::Two)
                    ));
                });
            });
        });
    }

    /// Render the side panel with scores and status
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("FILLER").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);

                for player in Player::BOTH {
                    self.render_player_card(ui, player);
                    ui.add_space(10.0);
                }

                if let Some((player, color)) = self.state.last_move {
                    ui.label(
                        RichText::new(format!("Last move: {player} took color {color}"))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.add_space(10.0);
                }

                if let Some(msg) = &self.state.message {
                    Self::render_message_card(ui, msg);
                    ui.add_space(10.0);
                }

                Self::render_help_card(ui);
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Turn indicator or final result
    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            match self.state.outcome() {
                Outcome::InProgress => {
                    let turn = self.state.board().turn();
                    ui.label(
                        RichText::new(format!("Waiting for {turn}..."))
                            .size(16.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    let (status, color) = if self.state.is_human_turn() {
                        ("Pick a color".to_string(), STATUS_READY)
                    } else if self.state.is_ai_thinking() {
                        let secs = self
                            .state
                            .thinking_elapsed()
                            .map_or(0.0, |elapsed| elapsed.as_secs_f32());
                        (format!("Thinking... {secs:.1}s"), STATUS_THINKING)
                    } else {
                        ("Thinking...".to_string(), STATUS_THINKING)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                }
                Outcome::Win(player) => {
                    ui.label(
                        RichText::new(format!("{player} wins!"))
                            .size(18.0)
                            .strong()
                            .color(WIN_HIGHLIGHT),
                    );
                }
                Outcome::Tie => {
                    ui.label(RichText::new("Tie").size(18.0).strong().color(WIN_HIGHLIGHT));
                }
            }
        });
    }

    /// Score row with the player's current territory color
    fn render_player_card(&self, ui: &mut egui::Ui, player: Player) {
        let board = self.state.board();
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::splat(28.0), egui::Sense::hover());
                ui.painter()
                    .rect_filled(rect, CornerRadius::same(4), palette_color(board.color(player)));
                ui.add_space(8.0);

                ui.vertical(|ui| {
                    let name = match player {
                        Player::One => "Player 1",
                        Player::Two => "Player 2",
                    };
                    ui.label(RichText::new(name).size(14.0).strong().color(TEXT_PRIMARY));
                    ui.label(
                        RichText::new(self.state.kind(player).to_string())
                            .size(10.0)
                            .color(TEXT_MUTED),
                    );
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(board.score(player).to_string())
                            .size(24.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                });
            });
        });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(WARNING_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_help_card(ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("KEYS").size(10.0).color(TEXT_MUTED));
            ui.add_space(4.0);
            for line in [
                "N  new game",
                "Arrows  move selection",
                "R G Y B P L  paint cell",
            ] {
                ui.label(RichText::new(line).size(11.0).color(TEXT_SECONDARY));
            }
        });
    }

    /// Render the color picker under the board
    fn render_picker(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("color_picker")
            .exact_height(72.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                let enabled = self.state.is_human_turn();
                if let Some(color) = color_picker::show(ui, self.state.board(), enabled) {
                    if let Err(msg) = self.state.choose_color(color) {
                        self.state.message = Some(msg);
                    }
                }
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            if let Some(pos) = self.board_view.show(ui, self.state.board(), self.state.selected) {
                self.state.selected = pos;
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, moves, paint) = ctx.input(|i| {
            let moves: Vec<(isize, isize)> = [
                (egui::Key::ArrowUp, (0, -1)),
                (egui::Key::ArrowDown, (0, 1)),
                (egui::Key::ArrowLeft, (-1, 0)),
                (egui::Key::ArrowRight, (1, 0)),
            ]
            .into_iter()
            .filter(|(key, _)| i.key_pressed(*key))
            .map(|(_, delta)| delta)
            .collect();
            let paint = PAINT_KEYS.iter().position(|key| i.key_pressed(*key));
            (i.key_pressed(egui::Key::N), moves, paint)
        });

        if new_game {
            self.state.reset();
            return;
        }
        for (dx, dy) in moves {
            self.state.move_selection(dx, dy);
        }
        if let Some(color) = paint {
            if color < self.state.board().num_colors() as usize {
                self.state.paint_selected(color as u8);
            }
        }
    }
}

impl eframe::App for FillerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.state.update();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_picker(ctx);
        self.render_board(ctx);

        // Keep polling providers while the game runs
        if !self.state.outcome().is_over() {
            ctx.request_repaint_after(FRAME_INTERVAL);
        }
    }
}
