// src/app/ui/navbar.rs
use eframe::egui as eg;
use egui_extras::{Size, StripBuilder};

use crate::app::shell::{self, NavTarget};

impl crate::app::CineScopeApp {
    /// Home / Watchlist strip. Buttons render and click, nothing navigates.
    pub(crate) fn ui_render_navbar(&self, ui: &mut eg::Ui) {
        StripBuilder::new(ui)
            .sizes(Size::remainder(), NavTarget::ALL.len())
            .horizontal(|mut strip| {
                for target in NavTarget::ALL {
                    strip.cell(|ui| {
                        ui.centered_and_justified(|ui| {
                            let button = eg::Button::new(eg::RichText::new(target.glyph()).size(22.0))
                                .frame(false);
                            if ui.add(button).on_hover_text(target.label()).clicked() {
                                shell::on_nav_pressed(target);
                            }
                        });
                    });
                }
            });
    }
}
