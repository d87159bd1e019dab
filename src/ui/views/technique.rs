use crate::GuitarApp;
use crate::router::ViewSelector;
use crate::ui::layout::{scroll_panel, top_panel};
use egui::{Context, RichText};

pub fn ui_technique(app: &mut GuitarApp, ctx: &Context) {
    top_panel(app, ctx, "Biblioteca de Técnica", Some(ViewSelector::Diagnostic));

    let techniques = &app.catalog.techniques;
    scroll_panel(ctx, 600.0, |ui| {
        let width = ui.available_width();
        for technique in techniques {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(width);
                ui.label(RichText::new(&technique.title).strong());
                ui.label(RichText::new(&technique.description).weak());
            });
            ui.add_space(6.0);
        }
    });
}
