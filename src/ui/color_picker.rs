//! Color picker row for human moves

use egui::{CornerRadius, Rect, Sense, Vec2};

use crate::{Board, Color};

use super::theme::*;

/// Draw one swatch per palette color and return the clicked legal color.
///
/// Colors held by either player are drawn at half size and ignore clicks.
pub fn show(ui: &mut egui::Ui, board: &Board, enabled: bool) -> Option<Color> {
    let count = board.num_colors() as f32;
    let available = ui.available_size();
    let swatch = ((available.x - SWATCH_GAP * (count - 1.0)) / count)
        .min(available.y)
        .max(8.0);
    let row = Vec2::new(swatch * count + SWATCH_GAP * (count - 1.0), swatch);

    let (response, painter) = ui.allocate_painter(row, Sense::click());
    let mut clicked = None;

    for color in 0..board.num_colors() {
        let min = response.rect.min + Vec2::new(color as f32 * (swatch + SWATCH_GAP), 0.0);
        let rect = Rect::from_min_size(min, Vec2::splat(swatch));

        if board.is_legal(color) {
            painter.rect_filled(rect, CornerRadius::same(6), palette_color(color));
        } else {
            painter.rect_filled(
                rect.shrink(swatch / 4.0),
                CornerRadius::same(4),
                palette_color(color),
            );
        }

        let hit = response
            .interact_pointer_pos()
            .is_some_and(|p| rect.contains(p));
        if enabled && response.clicked() && hit && board.is_legal(color) {
            clicked = Some(color);
        }
    }

    clicked
}
