//! Status panel - side to move, check status and the move log.

use gpui::{App, Div, Entity, div, prelude::*, px, rgb};

use crate::models::GameModel;
use crate::ui::display::{move_log_display, status_line};
use crate::ui::theme::{
    BOARD_PADDING, BORDER_COLOR, MOVE_LIST_BG, PANEL_BG, TEXT_ALERT, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::ui::view_models::MoveLogRow;

/// Render the status panel for a given game model.
/// Returns a Div element that can be used as a child.
pub fn render_status_panel(model: &Entity<GameModel>, cx: &App) -> Div {
    let game = model.read(cx);
    let status = status_line(game);
    let in_check = game.in_check();
    let rows = move_log_display(game);

    let moves_content = if rows.is_empty() {
        div()
            .text_color(rgb(TEXT_SECONDARY))
            .text_sm()
            .child("No moves yet")
    } else {
        div()
            .flex()
            .flex_col()
            .gap_1()
            .children(rows.into_iter().map(render_move_row))
    };

    let panel = div()
        .flex_1()
        .flex()
        .flex_col()
        .bg(rgb(MOVE_LIST_BG))
        .border_1()
        .border_color(rgb(BORDER_COLOR))
        .rounded_md()
        .overflow_hidden()
        // Header (fixed)
        .child(
            div()
                .p_4()
                .pb_2()
                .text_sm()
                .text_color(if in_check {
                    rgb(TEXT_ALERT)
                } else {
                    rgb(TEXT_PRIMARY)
                })
                .border_b_1()
                .border_color(rgb(BORDER_COLOR))
                .child(status),
        )
        // Scrollable moves content
        .child(
            div()
                .id("move-log-scroll")
                .flex_1()
                .overflow_y_scroll()
                .p_4()
                .pt_2()
                .child(moves_content),
        );

    div()
        .size_full()
        .flex()
        .flex_col()
        .bg(rgb(PANEL_BG))
        .p(px(BOARD_PADDING))
        .child(panel)
}

fn render_move_row(row: MoveLogRow) -> impl IntoElement {
    div()
        .flex()
        .items_center()
        .gap_2()
        .py_1()
        .text_sm()
        .child(
            div()
                .text_color(rgb(TEXT_SECONDARY))
                .w(px(40.0))
                .child(format!("{}.", row.number)),
        )
        .child(
            div()
                .text_color(rgb(TEXT_PRIMARY))
                .flex_1()
                .child(row.white.unwrap_or_else(|| "...".to_string())),
        )
        .when_some(row.black, |el, black| {
            el.child(
                div()
                    .text_color(rgb(TEXT_PRIMARY))
                    .flex_1()
                    .child(black),
            )
        })
}
