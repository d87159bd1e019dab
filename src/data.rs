// src/data.rs

use crate::model::{Catalog, Piece, RepertoireLevel};

/// Carga el catálogo de contenido desde el YAML embebido
pub fn read_catalog_embedded() -> Catalog {
    let file_content = include_str!("data/catalog.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear el catálogo YAML")
}

impl Catalog {
    /// Nivel de repertorio por número "humano" (1..=7).
    pub fn repertoire_level(&self, number: i64) -> Option<&RepertoireLevel> {
        self.repertoire.iter().find(|l| l.number == number)
    }

    /// Piezas de un nivel; `None` si el nivel no existe o aún no tiene
    /// partituras (se muestra "Próximamente").
    pub fn pieces_for(&self, number: i64) -> Option<&[Piece]> {
        self.repertoire_level(number)
            .map(|l| l.pieces.as_slice())
            .filter(|p| !p.is_empty())
    }
}

impl Piece {
    /// URLs de las páginas escaneadas: `<base>/<id>-<página>.png`, desde 1.
    pub fn page_urls(&self, assets_base: &str) -> Vec<String> {
        let base = assets_base.trim_end_matches('/');
        (1..=self.pages)
            .map(|page| format!("{base}/{}-{page}.png", self.id))
            .collect()
    }
}
