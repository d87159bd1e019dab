mod helpers;
pub mod layout;
pub mod views;

use crate::app::GuitarApp;
use crate::router::ViewSelector;
use eframe::{App, Frame};
use egui::Context;
use layout::bottom_panel;
use std::time::Duration;

impl App for GuitarApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Cambios de ruta hechos desde la barra de direcciones
        #[cfg(target_arch = "wasm32")]
        self.sync_location();

        let now = ctx.input(|i| i.time);
        self.tick(now);

        // PANEL INFERIOR: navegación y tema
        bottom_panel(self, ctx);

        // Dispatch por vista
        match self.view {
            ViewSelector::Welcome => views::welcome::ui_welcome(self, ctx, now),
            ViewSelector::Diagnostic => views::diagnostic::ui_diagnostic(self, ctx),
            ViewSelector::Levels => views::levels::ui_levels(self, ctx),
            ViewSelector::Practice => views::practice::ui_practice(self, ctx, now),
            ViewSelector::Technique => views::technique::ui_technique(self, ctx),
            ViewSelector::Repertoire => views::repertoire::ui_repertoire(self, ctx),
            ViewSelector::LevelDetail(n) => views::level_detail::ui_level_detail(self, ctx, n),
        }

        if self.needs_repaint() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
