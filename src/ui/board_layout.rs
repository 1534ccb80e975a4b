//! Board layout calculations - handles sizing and coordinate transformations.

use crate::domain::Square;
use crate::ui::theme::{BOARD_PADDING, GLYPH_SCALE, INITIAL_LEFT_PANEL, MIN_SQUARE_SIZE};
use gpui::{Pixels, Size, px};

/// Handles all layout calculations for the chess board
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    pub panel_size: Size<Pixels>,
}

impl BoardLayout {
    pub fn new(panel_size: Size<Pixels>) -> Self {
        Self { panel_size }
    }

    /// Calculate square size from measured panel dimensions
    pub fn square_size(&self) -> f32 {
        let panel_width: f32 = self.panel_size.width.into();
        let panel_height: f32 = self.panel_size.height.into();
        let available_width = panel_width - BOARD_PADDING * 2.0;
        let available_height = panel_height - BOARD_PADDING * 2.0;
        (available_width.min(available_height) / 8.0).max(MIN_SQUARE_SIZE)
    }

    /// Glyph font size based on square size
    pub fn glyph_size(&self) -> f32 {
        self.square_size() * GLYPH_SCALE
    }

    /// Convert position relative to board panel to a board square.
    ///
    /// Points in the padding or past the last square map to `None`, so
    /// off-board clicks never reach the game model.
    pub fn pos_to_square(&self, x: f32, y: f32) -> Option<Square> {
        let board_x = x - BOARD_PADDING;
        let board_y = y - BOARD_PADDING;

        if board_x < 0.0 || board_y < 0.0 {
            return None;
        }

        let square_size = self.square_size();
        let file = (board_x / square_size).floor() as i32;
        let rank = (board_y / square_size).floor() as i32;

        Square::new(file, rank).ok()
    }

    /// Get the total size of the board (8 squares)
    pub fn board_total_size(&self) -> f32 {
        self.square_size() * 8.0
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::new(Size {
            width: px(INITIAL_LEFT_PANEL),
            height: px(600.0),
        })
    }
}
