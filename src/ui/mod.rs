//! GUI module for the Filler game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod color_picker;
mod game_state;
mod theme;

pub use app::FillerApp;
pub use game_state::GameState;
pub use theme::palette_color;
