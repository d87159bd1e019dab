use crate::GuitarApp;
use crate::model::Phase;
use crate::router::ViewSelector;
use crate::ui::helpers::option_button;
use crate::ui::layout::centered_panel;
use crate::view_models::{QuestionCard, ResultCard};
use egui::{Button, Color32, Context, RichText, Spinner};

/// Bienvenida y flujo completo del diagnóstico (carga, preguntas, resultado).
pub fn ui_welcome(app: &mut GuitarApp, ctx: &Context, now: f64) {
    match app.session.phase() {
        Phase::Idle => ui_intro(app, ctx),
        Phase::Loading => ui_loading(ctx),
        Phase::InProgress => ui_question(app, ctx, now),
        Phase::Finished => ui_result(app, ctx),
    }
}

fn ui_intro(app: &mut GuitarApp, ctx: &Context) {
    centered_panel(ctx, 260.0, 540.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Domina la Guitarra Clásica").size(28.0).strong());
            ui.add_space(12.0);
            ui.label(
                "Desbloquea tu potencial musical con nuestra ruta de aprendizaje adaptativo, \
                 diseñada para llevarte desde los fundamentos hasta la maestría.",
            );

            if let Some(error) = app.session.error_message() {
                ui.add_space(10.0);
                ui.label(RichText::new(error).color(Color32::RED));
            }

            ui.add_space(24.0);
            let btn_w = (ui.available_width() * 0.9).clamp(120.0, 400.0);
            if ui
                .add_sized([btn_w, 44.0], Button::new(RichText::new("Iniciar Diagnóstico Adaptativo").strong()))
                .clicked()
            {
                app.iniciar_diagnostico();
            }
        });
    });
}

fn ui_loading(ctx: &Context) {
    centered_panel(ctx, 120.0, 400.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.add(Spinner::new().size(48.0));
            ui.add_space(12.0);
            ui.label(RichText::new("Generando tu evaluación...").size(18.0));
        });
    });
}

fn ui_question(app: &mut GuitarApp, ctx: &Context, now: f64) {
    let Some(card) = QuestionCard::from_session(&app.session) else {
        return;
    };

    let mut chosen: Option<String> = None;
    centered_panel(ctx, 380.0, 600.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&card.heading).color(ui.visuals().hyperlink_color));
            ui.add_space(6.0);
            ui.heading(RichText::new(&card.prompt).strong());
        });
        ui.add_space(18.0);

        let width = ui.available_width();
        for option in &card.options {
            if option_button(ui, option, width) {
                chosen = Some(option.text.clone());
            }
            ui.add_space(6.0);
        }
    });

    if let Some(option) = chosen {
        app.responder(&option, now);
    }
}

fn ui_result(app: &mut GuitarApp, ctx: &Context) {
    let Some(result) = ResultCard::from_session(&app.session) else {
        return;
    };

    centered_panel(ctx, 360.0, 540.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("¡Evaluación Completada!").size(28.0).strong());
            ui.add_space(8.0);
            ui.label(RichText::new(&result.score_line).size(18.0));
            ui.label(RichText::new(format!("{}%", result.percentage)).weak());

            ui.add_space(16.0);
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("Tu Nivel Recomendado es:").color(ui.visuals().hyperlink_color));
                    ui.label(RichText::new(result.tier.label()).size(26.0).strong());
                    ui.add_space(4.0);
                    ui.label(result.tier.description());
                });
            });

            ui.add_space(20.0);
            let btn_w = (ui.available_width() * 0.9).clamp(120.0, 400.0);
            if ui.add_sized([btn_w, 40.0], Button::new("Ir a mi Panel de Inicio")).clicked() {
                app.ir_a(ViewSelector::Diagnostic);
            }
            ui.add_space(6.0);
            if ui.add_sized([btn_w, 40.0], Button::new("Hacer de Nuevo")).clicked() {
                app.hacer_de_nuevo();
            }
        });
    });
}
