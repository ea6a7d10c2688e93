// src/app/ui/list.rs
use eframe::egui as eg;

use crate::app::list::{offset_of, render_window, total_height, visible_window};

impl crate::app::CineScopeApp {
    /// Scrollable card column. Only rows near the viewport are laid out; the rest is
    /// reserved space sized from measured (or estimated) row heights.
    pub(crate) fn ui_render_list(&mut self, ui: &mut eg::Ui) {
        let movies = self.movies;

        eg::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show_viewport(ui, |ui, viewport| {
                let heights = self.row_heights.heights_for(movies);
                ui.set_min_height(total_height(&heights));

                let window = visible_window(
                    &heights,
                    viewport.min.y,
                    viewport.height(),
                    super::super::OVERSCAN_ROWS,
                );
                ui.add_space(offset_of(&heights, window.start));

                let mut moved = false;
                for (idx, view) in render_window(movies, &self.cards, window) {
                    let top = ui.cursor().top();
                    self.ui_render_card(ui, idx, &view);
                    let measured = ui.cursor().top() - top;
                    moved |= self.row_heights.record(&movies[idx].id, measured);
                }

                // offsets shifted under the viewport; lay out again with real heights
                if moved {
                    ui.ctx().request_repaint();
                }
            });
    }
}
