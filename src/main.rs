// src/main.rs
use std::env;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use cinescope::app::{shell::APP_TITLE, CineScopeApp};

// Phone-shaped window; the layout is a single card column.
const WINDOW_SIZE: [f32; 2] = [420.0, 820.0];
const MIN_WINDOW_SIZE: [f32; 2] = [320.0, 480.0];

/// `CINESCOPE_RENDERER=glow|wgpu`; anything else keeps eframe's GL backend.
fn pick_renderer() -> eframe::Renderer {
    renderer_from(env::var("CINESCOPE_RENDERER").ok().as_deref())
}

fn renderer_from(value: Option<&str>) -> eframe::Renderer {
    match value.map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("wgpu") => eframe::Renderer::Wgpu,
        None | Some("") => eframe::Renderer::Glow,
        Some(v) if v.eq_ignore_ascii_case("glow") => eframe::Renderer::Glow,
        Some(other) => {
            warn!("unknown CINESCOPE_RENDERER `{other}`; using glow");
            eframe::Renderer::Glow
        }
    }
}

fn main() -> eframe::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let renderer = pick_renderer();
    let options = eframe::NativeOptions {
        renderer,
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_app_id("cinescope")
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE),
        ..Default::default()
    };

    info!("starting {APP_TITLE} with {renderer:?} renderer");
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(CineScopeApp::new(cc)))),
    )
    .inspect_err(|e| error!("window failed to open: {e}"))
}
