//! Chess board view - the main board with click-to-select piece movement.

use gpui::{
    Context, Entity, MouseButton, MouseDownEvent, Pixels, Subscription, Window, canvas, div,
    prelude::*, px, rgb,
};
use gpui_component::resizable::{h_resizable, resizable_panel};
use tracing::info;

use crate::models::{ClickOutcome, GameModel};
use crate::ui::BoardLayout;
use crate::ui::components::render_square;
use crate::ui::display::{board_display, sound_cue};
use crate::ui::theme::{BOARD_PADDING, INITIAL_LEFT_PANEL, INITIAL_RIGHT_PANEL, PANEL_BG};
use crate::ui::views::render_status_panel;

/// The main chess board view that observes a GameModel
pub struct ChessBoardView {
    model: Entity<GameModel>,
    layout: Entity<BoardLayout>,
    _subscriptions: Vec<Subscription>,
}

impl ChessBoardView {
    pub fn new(model: Entity<GameModel>, cx: &mut Context<Self>) -> Self {
        let layout = cx.new(|_| BoardLayout::default());
        let _subscriptions = vec![
            cx.observe(&model, |_, _, cx| cx.notify()),
            cx.observe(&layout, |_, _, cx| cx.notify()),
        ];
        Self {
            model,
            layout,
            _subscriptions,
        }
    }
}

impl Render for ChessBoardView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let model_down = self.model.clone();
        let layout_down = self.layout.clone();
        let layout_measure = self.layout.clone();

        let layout = *self.layout.read(cx);
        let square_size = layout.square_size();
        let glyph_size = layout.glyph_size();
        let board_total_size = layout.board_total_size();

        let squares = board_display(self.model.read(cx));

        // Board element with fixed size - always maintains 1:1 aspect ratio
        let board = div()
            .flex_shrink_0()
            .flex()
            .flex_col()
            .w(px(board_total_size))
            .h(px(board_total_size))
            .overflow_hidden()
            .rounded_md()
            .children(squares.chunks(8).map(|rank| {
                div().flex().flex_shrink_0().children(
                    rank.iter()
                        .map(|display| render_square(*display, square_size, glyph_size)),
                )
            }));

        let board_panel_content = div()
            .id("board-panel")
            .relative()
            .size_full()
            .overflow_hidden()
            .bg(rgb(PANEL_BG))
            .p(px(BOARD_PADDING))
            .child(board)
            // Mouse down: one click event for the game model
            .on_mouse_down(
                MouseButton::Left,
                move |ev: &MouseDownEvent, _window, cx| {
                    let pos = ev.position;
                    let layout = *layout_down.read(cx);
                    let Some(square) = layout.pos_to_square(pos.x.into(), pos.y.into()) else {
                        return;
                    };
                    model_down.update(cx, |game, cx| {
                        if let Ok(ClickOutcome::Moved(_)) = game.click(square) {
                            if let Some(record) = game.history().last() {
                                info!(cue = sound_cue(record), "sound");
                            }
                        }
                        cx.notify();
                    });
                },
            );

        // Canvas to measure actual panel size
        let measure_canvas = canvas(
            move |bounds, _window, cx| {
                layout_measure.update(cx, |layout, cx| {
                    if layout.panel_size != bounds.size {
                        layout.panel_size = bounds.size;
                        cx.notify();
                    }
                });
            },
            |_, _, _, _| {},
        )
        .absolute()
        .top_0()
        .left_0()
        .size_full();

        // Wrap board panel content with measuring canvas
        let board_panel_with_measure = div()
            .relative()
            .size_full()
            .child(measure_canvas)
            .child(board_panel_content);

        let status_panel_content = render_status_panel(&self.model, cx);

        // Main resizable layout
        div().size_full().child(
            h_resizable("chess-layout")
                .child(
                    resizable_panel()
                        .size(px(INITIAL_LEFT_PANEL))
                        .size_range(px(320.)..px(1200.))
                        .child(board_panel_with_measure),
                )
                .child(
                    resizable_panel()
                        .size(px(INITIAL_RIGHT_PANEL))
                        .size_range(px(150.)..Pixels::MAX)
                        .child(status_panel_content),
                ),
        )
    }
}
