//! Square rendering component.

use crate::ui::components::render_piece;
use crate::ui::theme::{
    CHECKED_KING, DESTINATION_MARK, DESTINATION_RING_SCALE, LAST_MOVE, SELECTED_SQUARE,
    square_color,
};
use crate::ui::view_models::{DestinationMarker, SquareDisplay, SquareHighlight};
use gpui::{Rgba, div, prelude::*, px, rgb};

fn background(display: &SquareDisplay) -> Rgba {
    match display.highlight {
        SquareHighlight::LastMove => rgb(LAST_MOVE),
        SquareHighlight::Selected => rgb(SELECTED_SQUARE),
        SquareHighlight::CheckedKing => rgb(CHECKED_KING),
        SquareHighlight::None => square_color(display.square),
    }
}

/// Render a single board square with its piece and destination marker
pub fn render_square(display: SquareDisplay, square_size: f32, glyph_size: f32) -> impl IntoElement {
    let ring_size = square_size * DESTINATION_RING_SCALE;

    div()
        .flex_shrink_0() // never shrink - maintain aspect ratio
        .relative()
        .size(px(square_size))
        .bg(background(&display))
        .flex()
        .items_center()
        .justify_center()
        .when(display.marker == Some(DestinationMarker::Capture), |el| {
            el.border_4().border_color(rgb(DESTINATION_MARK))
        })
        .when_some(display.piece, |el, p| el.child(render_piece(p, glyph_size)))
        .when(display.marker == Some(DestinationMarker::Quiet), |el| {
            el.child(
                div()
                    .size(px(ring_size))
                    .rounded_full()
                    .border_2()
                    .border_color(rgb(DESTINATION_MARK)),
            )
        })
}
