//! Board rendering for the Gomoku GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Mark, Pos};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Distance between neighbouring grid lines
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    /// Board side the geometry was computed for
    side: i32,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
            side: crate::BOARD_SIDE,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any.
    ///
    /// `turn` is the mark previewed under the pointer, `None` when clicks
    /// are not accepted.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        turn: Option<Mark>,
        last_move: Option<Pos>,
        winning_line: Option<[Pos; 5]>,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.side = board.side();
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / self.side as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_coordinates(&painter);

        for (pos, mark) in board.marks() {
            self.draw_mark(&painter, pos, mark, false);
        }

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        // Hover preview and click
        let turn = turn?;
        let pointer_pos = response.hover_pos()?;
        let board_pos = self.screen_to_board(pointer_pos)?;
        let is_valid = board.check_placement(board_pos.x, board_pos.y).is_ok();

        if is_valid {
            self.draw_mark(&painter, board_pos, turn, true);
        } else {
            let center = self.board_to_screen(board_pos);
            painter.circle_filled(center, self.cell_size * MARK_RADIUS_RATIO, hover_invalid());
        }

        (response.clicked() && is_valid).then_some(board_pos)
    }

    /// Draw `side + 1` lines on each axis
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let extent = self.side as f32 * self.cell_size;

        for i in 0..=self.side {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + extent);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + extent, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Grid coordinates along the top and left edges
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(10.0);

        for i in 0..=self.side {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let top = Pos2::new(self.board_rect.min.x + offset, self.board_rect.min.y + 12.0);
            painter.text(top, egui::Align2::CENTER_CENTER, i, font.clone(), COORD_LABEL);

            let left = Pos2::new(self.board_rect.min.x + 12.0, self.board_rect.min.y + offset);
            painter.text(left, egui::Align2::CENTER_CENTER, i, font.clone(), COORD_LABEL);
        }
    }

    /// Player 1 is a red circle, player 2 a blue cross
    fn draw_mark(&self, painter: &Painter, pos: Pos, mark: Mark, faded: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * MARK_RADIUS_RATIO;
        let base = match mark {
            Mark::Player1 => PLAYER1_MARK,
            Mark::Player2 => PLAYER2_MARK,
        };
        let color = if faded { preview(base) } else { base };
        let stroke = Stroke::new(MARK_STROKE_WIDTH, color);

        match mark {
            Mark::Player1 => {
                painter.circle_stroke(center, radius, stroke);
            }
            Mark::Player2 => {
                let d = radius * std::f32::consts::FRAC_1_SQRT_2;
                painter.line_segment([center + Vec2::new(-d, -d), center + Vec2::new(d, d)], stroke);
                painter.line_segment([center + Vec2::new(-d, d), center + Vec2::new(d, -d)], stroke);
            }
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 5]) {
        let stroke = Stroke::new(3.0, WIN_HIGHLIGHT);
        let start = self.board_to_screen(line[0]);
        let end = self.board_to_screen(line[4]);
        painter.line_segment([start, end], stroke);

        for pos in line {
            let center = self.board_to_screen(*pos);
            let radius = self.cell_size * MARK_RADIUS_RATIO + 3.0;
            painter.circle_stroke(center, radius, Stroke::new(1.5, Color32::from_rgb(30, 140, 60)));
        }
    }

    /// Snap a screen point to the nearest intersection
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = ((relative.x - BOARD_MARGIN) / self.cell_size).round() as i32;
        let y = ((relative.y - BOARD_MARGIN) / self.cell_size).round() as i32;

        Pos::is_valid(x, y, self.side).then(|| Pos::new(x, y))
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.x as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.y as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
