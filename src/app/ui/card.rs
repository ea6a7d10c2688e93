// src/app/ui/card.rs
use eframe::egui::{self as eg, collapsing_header::CollapsingState};

use crate::app::card::{self, CardHeader, CardView};
use crate::app::data::Movie;

const CARD_PADDING: f32 = 16.0;
const POSTER_HEIGHT: f32 = 200.0;

impl crate::app::CineScopeApp {
    pub(crate) fn ui_render_card(&mut self, ui: &mut eg::Ui, idx: usize, view: &CardView<'_>) {
        let movies = self.movies;
        let Some(movie) = movies.get(idx) else {
            return;
        };

        if let (Some(loader), Some(reference)) = (self.posters.as_mut(), view.header.poster) {
            loader.request(reference);
        }

        let mut toggled = false;
        eg::Frame::none()
            .inner_margin(eg::Margin::same(CARD_PADDING))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                self.ui_paint_card_header(ui, &view.header, &mut toggled);
                paint_details(ui, movie, view.details.is_some());
            });

        if toggled {
            self.toggle_card(idx);
            ui.ctx().request_repaint();
        }
    }

    fn ui_paint_card_header(&self, ui: &mut eg::Ui, header: &CardHeader<'_>, toggled: &mut bool) {
        // Poster, cropped to fill the width
        let size = eg::vec2(ui.available_width(), POSTER_HEIGHT);
        let (rect, _resp) = ui.allocate_exact_size(size, eg::Sense::hover());
        let tex = header
            .poster
            .and_then(|r| self.posters.as_ref().and_then(|p| p.texture(r)));
        match tex {
            Some(tex) => {
                let uv = crate::app::gfx::crop_uv(tex.size_vec2(), rect.size());
                ui.painter().image(tex.id(), rect, uv, eg::Color32::WHITE);
            }
            None => {
                ui.painter()
                    .rect_filled(rect, eg::Rounding::same(8.0), eg::Color32::from_gray(40));
            }
        }

        // like heart, top-right, decorative
        ui.painter().text(
            rect.right_top() + eg::vec2(-8.0, 8.0),
            eg::Align2::RIGHT_TOP,
            header.like.glyph(),
            eg::FontId::proportional(22.0),
            eg::Color32::WHITE,
        );

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            // chevron claims the right edge first, the title gets what is left
            ui.with_layout(eg::Layout::right_to_left(eg::Align::Center), |ui| {
                let chevron = eg::Button::new(eg::RichText::new(header.chevron.glyph()).size(18.0))
                    .frame(false);
                if ui.add(chevron).on_hover_text("Expand").clicked() {
                    *toggled = true;
                }
                ui.with_layout(eg::Layout::left_to_right(eg::Align::Center), |ui| {
                    ui.add(
                        eg::Label::new(eg::RichText::new(header.title).size(18.0).strong())
                            .truncate(),
                    );
                });
            });
        });
    }
}

/// Details block with height + fade animation. Nothing is laid out once fully collapsed.
fn paint_details(ui: &mut eg::Ui, movie: &Movie, expanded: bool) {
    let id = eg::Id::new(("card_details", movie.id.as_str()));
    let mut state = CollapsingState::load_with_default_open(ui.ctx(), id, false);
    state.set_open(expanded);
    let openness = state.openness(ui.ctx());

    state.show_body_unindented(ui, |ui| {
        let color = ui.visuals().text_color().gamma_multiply(openness);
        ui.add_space(4.0);
        for line in card::details(movie).lines() {
            ui.add(eg::Label::new(eg::RichText::new(line).color(color)).wrap());
        }
    });
}
