// src/app/ui/topbar.rs
use eframe::egui as eg;

use crate::app::shell::APP_TITLE;

impl crate::app::CineScopeApp {
    // ---------- TOP BAR ----------
    pub(crate) fn ui_render_topbar(&self, ui: &mut eg::Ui) {
        ui.add_space(6.0);
        ui.vertical_centered(|ui| {
            ui.heading(APP_TITLE);
        });
        ui.add_space(6.0);
    }
}
