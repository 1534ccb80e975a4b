//! Theme constants and colors for the chess UI.

use gpui::{Rgba, rgb};

use crate::domain::{PieceColor, Square};

// Layout constants
pub const BOARD_PADDING: f32 = 20.0;
pub const GLYPH_SCALE: f32 = 0.8; // glyph size relative to square
pub const MIN_SQUARE_SIZE: f32 = 30.0;
pub const DESTINATION_RING_SCALE: f32 = 0.3;

// Initial panel sizes
pub const INITIAL_LEFT_PANEL: f32 = 520.0;
pub const INITIAL_RIGHT_PANEL: f32 = 260.0;

// Board colors
pub const LIGHT_SQUARE: u32 = 0xF0D9B7;
pub const DARK_SQUARE: u32 = 0xB48767;
pub const LAST_MOVE: u32 = 0x2A4B82;
pub const SELECTED_SQUARE: u32 = 0x6088CC;
pub const CHECKED_KING: u32 = 0xC0392B;
pub const DESTINATION_MARK: u32 = 0x3C6E47;

// Piece colors
pub const WHITE_PIECE: u32 = 0xFAFAFA;
pub const BLACK_PIECE: u32 = 0x1A1A1A;

// Panel colors
pub const PANEL_BG: u32 = 0x2a2a2a;
pub const MOVE_LIST_BG: u32 = 0x1e1e1e;
pub const BORDER_COLOR: u32 = 0x4a4a4a;
pub const TEXT_PRIMARY: u32 = 0xffffff;
pub const TEXT_SECONDARY: u32 = 0x888888;
pub const TEXT_ALERT: u32 = 0xE57373;

/// Get the base color for a board square based on its position
pub fn square_color(square: Square) -> Rgba {
    if square.is_light() {
        rgb(LIGHT_SQUARE)
    } else {
        rgb(DARK_SQUARE)
    }
}

pub fn piece_color(color: PieceColor) -> Rgba {
    match color {
        PieceColor::White => rgb(WHITE_PIECE),
        PieceColor::Black => rgb(BLACK_PIECE),
    }
}
