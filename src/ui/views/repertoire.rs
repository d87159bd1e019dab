use crate::GuitarApp;
use crate::router::ViewSelector;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::{scroll_panel, top_panel};
use crate::view_models::repertoire_row_label;
use egui::{Context, RichText};

pub fn ui_repertoire(app: &mut GuitarApp, ctx: &Context) {
    top_panel(app, ctx, "Repertorio por Nivel", Some(ViewSelector::Diagnostic));

    let mut target: Option<i64> = None;
    let levels = &app.catalog.repertoire;
    scroll_panel(ctx, 600.0, |ui| {
        let width = ui.available_width();
        for level in levels {
            if big_list_button(ui, repertoire_row_label(level), width, 40.0, true) {
                target = Some(level.number);
            }
            ui.label(RichText::new(&level.description).weak());
            ui.add_space(8.0);
        }
    });

    if let Some(n) = target {
        app.ir_a(ViewSelector::LevelDetail(n));
    }
}
