use crate::GuitarApp;
use crate::router::ViewSelector;
use crate::ui::helpers::{objective_row, percent_bar};
use crate::ui::layout::{scroll_panel, top_panel};
use egui::{Button, Context, RichText};

pub fn ui_diagnostic(app: &mut GuitarApp, ctx: &Context) {
    top_panel(app, ctx, "Diagnóstico Adaptativo", Some(ViewSelector::Welcome));

    let diagnostic = app.catalog.diagnostic.clone();
    let mut continuar = false;
    scroll_panel(ctx, 600.0, |ui| {
        let width = ui.available_width();
        ui.label(RichText::new("Progreso del diagnóstico").strong());
        percent_bar(ui, diagnostic.progress_percent, width);

        ui.add_space(16.0);
        ui.heading("Objetivos del nivel");
        ui.add_space(6.0);
        for objective in &diagnostic.objectives {
            objective_row(ui, objective, width);
        }

        ui.add_space(12.0);
        continuar = ui
            .add_sized([width, 40.0], Button::new("Continuar con el diagnóstico"))
            .clicked();
    });

    if continuar {
        app.ir_a(ViewSelector::Welcome);
    }
}
