use anyhow::{Context as _, Result};
use gpui::{App, AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};
use sketchboard::render::view::SketchboardView;
use sketchboard::settings::Settings;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Overrides the default settings location
const SETTINGS_ENV: &str = "SKETCHBOARD_SETTINGS";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sketchboard=info")),
        )
        .init();

    let settings = match std::env::var_os(SETTINGS_ENV).map(PathBuf::from) {
        Some(path) => Settings::load_from(&path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::load(),
    };
    tracing::info!(?settings, "Starting sketchboard");

    Application::new().run(move |cx: &mut App| {
        let bounds = Bounds::centered(None, size(px(1024.0), px(768.0)), cx);
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            ..Default::default()
        };

        let opened = cx.open_window(options, move |window, cx| {
            cx.new(|cx| SketchboardView::new(settings, window, cx))
        });
        if let Err(e) = opened {
            tracing::error!("Failed to open window: {}", e);
            cx.quit();
            return;
        }
        cx.activate(true);
    });

    Ok(())
}
