// src/ui/helpers.rs
use crate::model::Objective;
use crate::view_models::{OptionButton, OptionStyle, objective_counter};
use egui::{Button, Color32, ProgressBar, RichText, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height))).clicked()
}

/// Botón de opción del diagnóstico, coloreado según la revelación.
pub fn option_button(ui: &mut Ui, option: &OptionButton, width: f32) -> bool {
    let (fill, prefix) = match option.style {
        OptionStyle::Neutral => (None, ""),
        OptionStyle::SelectedCorrect => (Some(Color32::DARK_GREEN), "✔ "),
        OptionStyle::SelectedWrong => (Some(Color32::DARK_RED), "✖ "),
        OptionStyle::RevealedCorrect => (Some(Color32::DARK_GREEN), ""),
    };

    let mut text = RichText::new(format!("{prefix}{}", option.text));
    if fill.is_some() {
        text = text.color(Color32::WHITE).strong();
    }
    let mut button = Button::new(text).min_size(Vec2::new(width, 40.0));
    if let Some(color) = fill {
        button = button.fill(color);
    }
    // Deshabilitado pero con su color: se pinta igual, sólo ignora clics
    let response = ui.add(button);
    option.enabled && response.clicked()
}

/// Fila de objetivo: título, contador y barra.
pub fn objective_row(ui: &mut Ui, objective: &Objective, width: f32) {
    ui.horizontal(|ui| {
        let mark = if objective.is_complete() { "✅" } else { "⬜" };
        ui.label(format!("{mark} {}", objective.title));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(objective_counter(objective)).weak());
        });
    });
    ui.add(ProgressBar::new(objective.fraction()).desired_width(width));
    ui.add_space(6.0);
}

pub fn percent_bar(ui: &mut Ui, percent: u32, width: f32) {
    let fraction = (percent.min(100) as f32) / 100.0;
    ui.add(
        ProgressBar::new(fraction)
            .desired_width(width)
            .text(format!("{percent}%")),
    );
}
