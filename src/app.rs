//! Application setup and window creation.

use anyhow::Context as _;
use gpui::{App, Bounds, WindowBounds, WindowOptions, prelude::*, px, size};
use gpui_component::Root;
use tracing::info;

use crate::models::GameModel;
use crate::ui::views::ChessBoardView;

/// Initialize the chess application and open its window
pub fn run(cx: &mut App) -> anyhow::Result<()> {
    gpui_component::init(cx);

    // Create the game model
    let model = cx.new(|_| GameModel::new());

    let bounds = Bounds::centered(None, size(px(800.0), px(560.0)), cx);
    cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            ..Default::default()
        },
        |window, cx| {
            let view = cx.new(|cx| ChessBoardView::new(model, cx));
            cx.new(|cx| Root::new(view, window, cx))
        },
    )
    .context("failed to open the chess window")?;

    info!("new game, White to move");
    Ok(())
}
