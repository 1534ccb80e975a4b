use gpui::{App, Application};
use tracing::error;
use tracing_subscriber::EnvFilter;

mod app;
mod domain;
mod error;
mod models;
mod ui;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    Application::new().run(|cx: &mut App| {
        if let Err(err) = app::run(cx) {
            error!("{err:#}");
            cx.quit();
        }
    });
}
