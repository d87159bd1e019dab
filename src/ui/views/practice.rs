use crate::GuitarApp;
use crate::router::ViewSelector;
use crate::ui::layout::{centered_panel, top_panel};
use egui::{Button, Context, RichText};

pub fn ui_practice(app: &mut GuitarApp, ctx: &Context, now: f64) {
    top_panel(app, ctx, "Sesión de Práctica", Some(ViewSelector::Diagnostic));

    let timer = &mut app.practice;
    centered_panel(ctx, 280.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(timer.remaining_label(now)).size(64.0).monospace().strong());
            let title = match timer.current_segment() {
                Some(segment) => segment.title.clone(),
                None => "Práctica completada".to_string(),
            };
            ui.label(RichText::new(title).size(18.0).weak());
            ui.add_space(18.0);

            ui.horizontal(|ui| {
                ui.add_space(((ui.available_width() - 3.0 * 72.0 - 16.0) / 2.0).max(0.0));
                if ui.add_sized([72.0, 48.0], Button::new("⟲")).on_hover_text("Reiniciar").clicked() {
                    timer.reset();
                }
                let play = if timer.is_running() { "⏸" } else { "▶" };
                if ui
                    .add_enabled(!timer.is_finished(), Button::new(RichText::new(play).size(24.0)).min_size(egui::vec2(72.0, 48.0)))
                    .clicked()
                {
                    timer.toggle(now);
                }
                if ui
                    .add_enabled(!timer.is_finished(), Button::new("⏭").min_size(egui::vec2(72.0, 48.0)))
                    .on_hover_text("Siguiente")
                    .clicked()
                {
                    timer.skip(now);
                }
            });

            if let Some(next) = timer.next_label() {
                ui.add_space(18.0);
                ui.label(RichText::new(next).strong());
            }
        });
    });
}
