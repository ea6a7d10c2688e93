// src/app/mod.rs — movie list screen: data, per-card state, poster pipeline

use std::sync::Arc;
use std::time::Duration;

use eframe::egui as eg;
use tracing::{debug, info, warn};

pub mod cache;
pub mod card;
pub mod data;
pub mod gfx;
pub mod list;
pub mod posters;
pub mod shell;
mod ui;

use crate::config::{load_config, AppConfig};
use data::Movie;
use list::{CardStates, RowHeights};
use posters::{HttpPosterSource, PosterLoader};

// ---- Tunables ----
const OVERSCAN_ROWS: usize = 2;
const ROW_HEIGHT_ESTIMATE: f32 = 300.0;
const POSTER_POLL_MS: u64 = 100;

pub struct CineScopeApp {
    movies: &'static [Movie],
    cards: CardStates,
    row_heights: RowHeights,
    posters: Option<PosterLoader>,
}

impl CineScopeApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let cfg = load_config();
        apply_style(&cc.egui_ctx, &cfg);
        Self::with_config(&cfg)
    }

    pub fn with_config(cfg: &AppConfig) -> Self {
        let movies = data::list_movies();
        info!("loaded {} movies", movies.len());

        let posters = if cfg.disable_posters {
            info!("poster loading disabled; cards show empty poster areas");
            None
        } else {
            match HttpPosterSource::new(cfg) {
                Ok(source) => Some(PosterLoader::spawn(Arc::new(source), cfg.poster_workers)),
                Err(e) => {
                    warn!("poster loader unavailable ({e}); continuing without posters");
                    None
                }
            }
        };

        Self {
            movies,
            cards: CardStates::default(),
            row_heights: RowHeights::new(ROW_HEIGHT_ESTIMATE),
            posters,
        }
    }

    pub fn movies(&self) -> &'static [Movie] {
        self.movies
    }

    pub fn cards(&self) -> &CardStates {
        &self.cards
    }

    pub(crate) fn toggle_card(&mut self, idx: usize) {
        let movies = self.movies;
        let Some(movie) = movies.get(idx) else {
            return;
        };
        let expanded = self.cards.toggle(&movie.id);
        debug!("card {} ({}) expanded={expanded}", movie.id, movie.title);
    }

    fn pump_posters(&mut self, ctx: &eg::Context) {
        let Some(loader) = self.posters.as_mut() else {
            return;
        };
        let drained = loader.poll();
        let uploaded = loader.upload_ready(ctx, posters::MAX_UPLOADS_PER_FRAME);
        if drained > 0 || uploaded > 0 {
            ctx.request_repaint();
        } else if loader.in_flight() > 0 {
            ctx.request_repaint_after(Duration::from_millis(POSTER_POLL_MS));
        }
    }
}

fn apply_style(ctx: &eg::Context, cfg: &AppConfig) {
    ctx.set_visuals(cfg.theme.visuals());
    let mut style = (*ctx.style()).clone();
    style.animation_time = cfg.animation_secs;
    ctx.set_style(style);
}

impl CineScopeApp {
    /// Header, nav strip and card list for one frame.
    pub(crate) fn ui_render_screen(&mut self, ctx: &eg::Context) {
        eg::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            self.ui_render_topbar(ui);
        });

        eg::TopBottomPanel::bottom("nav_bar")
            .exact_height(ui::NAV_BAR_HEIGHT)
            .show(ctx, |ui| {
                self.ui_render_navbar(ui);
            });

        eg::CentralPanel::default().show(ctx, |ui| {
            self.ui_render_list(ui);
        });
    }
}

// ========== App impl ==========
impl eframe::App for CineScopeApp {
    fn update(&mut self, ctx: &eg::Context, _frame: &mut eframe::Frame) {
        self.pump_posters(ctx);
        self.ui_render_screen(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_app() -> CineScopeApp {
        let cfg = AppConfig {
            disable_posters: true,
            ..AppConfig::default()
        };
        CineScopeApp::with_config(&cfg)
    }

    #[test]
    fn app_takes_the_provider_list() {
        let app = offline_app();
        assert!(std::ptr::eq(app.movies(), data::list_movies()));
        assert_eq!(app.cards().expanded_count(), 0);
        assert!(app.posters.is_none());
    }

    #[test]
    fn toggle_card_by_index() {
        let mut app = offline_app();
        app.toggle_card(1);
        assert!(app.cards().is_expanded(&app.movies()[1].id));
        assert!(!app.cards().is_expanded(&app.movies()[0].id));

        app.toggle_card(1);
        assert_eq!(app.cards().expanded_count(), 0);

        // out of range is ignored
        app.toggle_card(10_000);
        assert_eq!(app.cards().expanded_count(), 0);
    }

    /// Run `frames` headless frames on a phone-sized screen, advancing time so
    /// animations settle.
    fn run_frames(app: &mut CineScopeApp, ctx: &eg::Context, clock: &mut f64, frames: usize) {
        for _ in 0..frames {
            *clock += 0.1;
            let input = eg::RawInput {
                screen_rect: Some(eg::Rect::from_min_size(
                    eg::Pos2::ZERO,
                    eg::vec2(420.0, 600.0),
                )),
                time: Some(*clock),
                ..Default::default()
            };
            let _ = ctx.run(input, |ctx| app.ui_render_screen(ctx));
        }
    }

    #[test]
    fn list_measures_only_rows_near_viewport() {
        let mut app = offline_app();
        let ctx = eg::Context::default();
        let mut clock = 0.0;
        run_frames(&mut app, &ctx, &mut clock, 4);

        let movies = app.movies();
        let measured: Vec<_> = movies
            .iter()
            .map(|m| app.row_heights.is_measured(&m.id))
            .collect();
        assert!(measured[0] && measured[1]);
        assert!(!measured[movies.len() - 1], "last row should stay unpainted");
        assert!(measured.iter().filter(|m| **m).count() < movies.len());
    }

    #[test]
    fn expanding_a_card_grows_its_row_and_collapsing_restores_it() {
        let mut app = offline_app();
        let ctx = eg::Context::default();
        let mut clock = 0.0;
        run_frames(&mut app, &ctx, &mut clock, 4);

        let id = app.movies()[0].id.clone();
        let collapsed = app.row_heights.height_of(&id);
        let sibling = app.row_heights.height_of(&app.movies()[1].id);

        app.toggle_card(0);
        run_frames(&mut app, &ctx, &mut clock, 10);
        let expanded = app.row_heights.height_of(&id);
        assert!(expanded > collapsed + 20.0, "{expanded} vs {collapsed}");
        assert!((app.row_heights.height_of(&app.movies()[1].id) - sibling).abs() < 0.5);

        app.toggle_card(0);
        run_frames(&mut app, &ctx, &mut clock, 10);
        let back = app.row_heights.height_of(&id);
        assert!((back - collapsed).abs() < 1.0, "{back} vs {collapsed}");
    }
}
