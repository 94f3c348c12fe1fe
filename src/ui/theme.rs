//! Theme constants for the Gomoku GUI

use egui::Color32;

// Board colors - plain paper grid
pub const BOARD_BG: Color32 = Color32::from_rgb(238, 232, 218);
pub const GRID_LINE: Color32 = Color32::from_rgb(90, 90, 95);
pub const COORD_LABEL: Color32 = Color32::from_rgb(120, 120, 125);

// Marks
pub const PLAYER1_MARK: Color32 = Color32::from_rgb(215, 45, 45); // red circle
pub const PLAYER2_MARK: Color32 = Color32::from_rgb(40, 90, 220); // blue cross

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(250, 190, 40);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 200, 80);

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 70)
}

/// Translucent version of a mark color for previews
pub fn preview(color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 90)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_READY: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_BUSY: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 30.0;
pub const MARK_RADIUS_RATIO: f32 = 0.36;
pub const MARK_STROKE_WIDTH: f32 = 2.5;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 3.0;
