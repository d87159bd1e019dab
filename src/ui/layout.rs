use crate::app::GuitarApp;
use crate::router::ViewSelector;
use crate::view_models::{FOOTER_TABS, active_tab};
use egui::{Align, CentralPanel, Context, Frame, Layout, RichText, ScrollArea, Ui, Visuals};

/// Cabecera con título y, opcionalmente, botón de volver.
pub fn top_panel(app: &mut GuitarApp, ctx: &Context, title: &str, back: Option<ViewSelector>) {
    egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if let Some(target) = back {
                if ui.button("⬅").on_hover_text("Volver").clicked() {
                    app.ir_a(target);
                }
            }
            ui.heading(title);
        });
        ui.add_space(4.0);
    });
}

/// Pie con la navegación principal (oculta en la bienvenida) y los botones
/// de tema.
pub fn bottom_panel(app: &mut GuitarApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        if let Some(active) = active_tab(app.view) {
            ui.add_space(4.0);
            ui.columns(FOOTER_TABS.len(), |cols| {
                for (col, tab) in cols.iter_mut().zip(FOOTER_TABS.iter()) {
                    col.vertical_centered(|ui| {
                        let text = RichText::new(format!("{}\n{}", tab.icon, tab.label));
                        if ui.selectable_label(active == tab.target, text).clicked() {
                            app.ir_a(tab.target);
                        }
                    });
                }
            });
            ui.separator();
        }

        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button("🌙 Modo oscuro").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀Modo claro").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Panel con scroll para las vistas de contenido largo.
pub fn scroll_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                let w = ui.available_width().min(max_width);
                Frame::default()
                    .fill(ui.visuals().window_fill())
                    .inner_margin(egui::Margin::symmetric(16, 12))
                    .show(ui, |ui| {
                        ui.set_width(w);
                        ui.with_layout(Layout::top_down(Align::Min), inner);
                    });
            });
        });
    });
}
