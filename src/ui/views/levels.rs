use crate::GuitarApp;
use crate::router::ViewSelector;
use crate::ui::helpers::{objective_row, percent_bar};
use crate::ui::layout::{scroll_panel, top_panel};
use egui::{Context, RichText};

pub fn ui_levels(app: &mut GuitarApp, ctx: &Context) {
    top_panel(app, ctx, "Niveles", Some(ViewSelector::Diagnostic));

    let level = &app.catalog.current_level;
    scroll_panel(ctx, 600.0, |ui| {
        let width = ui.available_width();
        ui.label(RichText::new("Nivel actual").weak());
        ui.heading(RichText::new(format!("Nivel {}: {}", level.number, level.title)).strong());
        percent_bar(ui, level.progress_percent, width);

        ui.add_space(16.0);
        ui.label(RichText::new("Objetivos del nivel").size(18.0).strong());
        ui.add_space(6.0);
        for objective in &level.objectives {
            objective_row(ui, objective, width);
        }

        ui.add_space(12.0);
        ui.label(RichText::new("Próxima lección").size(18.0).strong());
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(width);
            ui.label(RichText::new(&level.next_lesson.title).strong());
            ui.label(RichText::new(&level.next_lesson.description).weak());
        });

        ui.add_space(12.0);
        ui.label(RichText::new("Hitos alcanzados").size(18.0).strong());
        ui.columns(level.milestones.len().max(1), |cols| {
            for (col, milestone) in cols.iter_mut().zip(&level.milestones) {
                col.vertical_centered(|ui| {
                    ui.label(RichText::new(format!("{}/{}", milestone.done, milestone.total)).size(22.0).strong());
                    ui.label(RichText::new(&milestone.label).small().weak());
                });
            }
        });

        ui.add_space(12.0);
        ui.label(RichText::new("Todos los niveles").size(18.0).strong());
        for group in &level.groups {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&group.title).strong());
                ui.label(RichText::new(&group.subtitle).weak());
            });
        }
    });
}
