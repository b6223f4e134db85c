//! Theme constants for the Filler GUI

use egui::Color32;

use crate::Color;

/// Palette for the first six colors
pub const PALETTE: [Color32; 6] = [
    Color32::from_rgb(228, 74, 90),   // Red
    Color32::from_rgb(172, 212, 100), // Green
    Color32::from_rgb(250, 226, 82),  // Yellow
    Color32::from_rgb(88, 166, 239),  // Blue
    Color32::from_rgb(102, 77, 157),  // Purple
    Color32::from_rgb(65, 65, 65),    // Charcoal
];

/// Screen color for a palette index. Colors past the fixed palette are
/// spread around the hue wheel.
pub fn palette_color(color: Color) -> Color32 {
    match PALETTE.get(color as usize) {
        Some(&c) => c,
        None => {
            let hue = (color as f32 * 0.618_034).fract();
            egui::ecolor::Hsva::new(hue, 0.55, 0.85, 1.0).into()
        }
    }
}

// Board
pub const BOARD_BG: Color32 = Color32::from_rgb(230, 230, 230);
pub const SELECTION: Color32 = Color32::from_rgb(0, 0, 0);
pub const START_MARKER: Color32 = Color32::from_rgb(250, 250, 252);

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_READY: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_THINKING: Color32 = Color32::from_rgb(255, 180, 50);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);
pub const WARNING_BG: Color32 = Color32::from_rgb(80, 60, 30);

// Sizes
pub const BOARD_MARGIN: f32 = 10.0;
pub const SELECTION_WIDTH: f32 = 4.0;
pub const START_MARKER_RADIUS: f32 = 4.0;
pub const SWATCH_GAP: f32 = 8.0;
