//! Board rendering for the Filler GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use crate::{Board, Player, Pos};

use super::theme::*;

/// Board view handles rendering and cell selection for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Grid drawing area
    grid_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 40.0,
            grid_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, selected: Pos) -> Option<Pos> {
        let available = ui.available_size();
        let (width, height) = (board.width() as f32, board.height() as f32);

        // Square cells, as large as the panel allows
        self.cell_size = ((available.x - 2.0 * BOARD_MARGIN) / width)
            .min((available.y - 2.0 * BOARD_MARGIN) / height)
            .max(4.0);
        let grid_size = Vec2::new(width * self.cell_size, height * self.cell_size);

        let (response, painter) =
            ui.allocate_painter(grid_size + Vec2::splat(2.0 * BOARD_MARGIN), Sense::click());
        self.grid_rect = Rect::from_min_size(response.rect.min + Vec2::splat(BOARD_MARGIN), grid_size);

        painter.rect_filled(response.rect, CornerRadius::same(4), BOARD_BG);
        self.draw_cells(&painter, board);
        self.draw_start_markers(&painter, board);
        self.draw_selection(&painter, selected);

        if response.clicked() {
            return response
                .interact_pointer_pos()
                .and_then(|p| self.screen_to_board(p, board));
        }
        None
    }

    fn draw_cells(&self, painter: &Painter, board: &Board) {
        for (idx, &color) in board.cells().iter().enumerate() {
            let pos = Pos::from_index(idx, board.width());
            painter.rect_filled(self.cell_rect(pos), CornerRadius::ZERO, palette_color(color));
        }
    }

    /// Small dot on each player's corner
    fn draw_start_markers(&self, painter: &Painter, board: &Board) {
        for player in Player::BOTH {
            let center = self.cell_rect(board.start_cell(player)).center();
            painter.circle_filled(center, START_MARKER_RADIUS, START_MARKER);
        }
    }

    fn draw_selection(&self, painter: &Painter, pos: Pos) {
        painter.rect_stroke(
            self.cell_rect(pos),
            CornerRadius::ZERO,
            Stroke::new(SELECTION_WIDTH, SELECTION),
            StrokeKind::Inside,
        );
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.grid_rect.min
            + Vec2::new(pos.x as f32 * self.cell_size, pos.y as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to a board cell
    pub fn screen_to_board(&self, screen_pos: Pos2, board: &Board) -> Option<Pos> {
        if !self.grid_rect.contains(screen_pos) {
            return None;
        }
        let relative = screen_pos - self.grid_rect.min;
        let x = (relative.x / self.cell_size).floor() as usize;
        let y = (relative.y / self.cell_size).floor() as usize;
        (x < board.width() && y < board.height()).then(|| Pos::new(x, y))
    }
}
