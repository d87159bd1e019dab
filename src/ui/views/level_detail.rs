use crate::GuitarApp;
use crate::router::ViewSelector;
use crate::ui::layout::{centered_panel, scroll_panel, top_panel};
use egui::{Context, RichText};

/// Partituras de un nivel, o "Próximamente" si aún no hay piezas.
pub fn ui_level_detail(app: &mut GuitarApp, ctx: &Context, level: i64) {
    let title = match app.catalog.repertoire_level(level) {
        Some(entry) => format!("Nivel {}: {}", entry.number, entry.title),
        None => format!("Nivel {level}"),
    };

    let Some(pieces) = app.catalog.pieces_for(level).map(|pieces| pieces.to_vec()) else {
        top_panel(app, ctx, &title, Some(ViewSelector::Repertoire));
        centered_panel(ctx, 120.0, 480.0, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new("Próximamente").strong());
                ui.add_space(6.0);
                ui.label(
                    RichText::new(format!("Estamos preparando las partituras para {title}. ¡Vuelve pronto!"))
                        .weak(),
                );
            });
        });
        return;
    };

    top_panel(app, ctx, &format!("Partituras: Nivel {level}"), Some(ViewSelector::Repertoire));
    let base = app.catalog.assets_base.clone();
    scroll_panel(ctx, 700.0, |ui| {
        for piece in &pieces {
            ui.heading(RichText::new(&piece.title).strong());
            ui.separator();
            ui.horizontal_wrapped(|ui| {
                for (page, url) in piece.page_urls(&base).into_iter().enumerate() {
                    ui.hyperlink_to(format!("Página {}", page + 1), url);
                }
            });
            ui.add_space(14.0);
        }
    });
}
