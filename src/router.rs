//! Resolución de rutas a partir del fragmento de la URL (`#...`).

use serde::{Deserialize, Serialize};

/// Vista que debe pintar el renderizador.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ViewSelector {
    #[default]
    Welcome,
    Diagnostic,
    Levels,
    Practice,
    Technique,
    Repertoire,
    LevelDetail(i64),
}

impl ViewSelector {
    /// Fragmento canónico (con `#`) que lleva a esta vista.
    pub fn fragment(&self) -> String {
        match self {
            ViewSelector::Welcome => "#".to_string(),
            ViewSelector::Diagnostic => "#diagnostico".to_string(),
            ViewSelector::Levels => "#niveles".to_string(),
            ViewSelector::Practice => "#practica".to_string(),
            ViewSelector::Technique => "#tecnica".to_string(),
            ViewSelector::Repertoire => REPERTOIRE_FRAGMENT.to_string(),
            ViewSelector::LevelDetail(n) => format!("#nivel-{n}"),
        }
    }
}

pub const REPERTOIRE_FRAGMENT: &str = "#partituras";

/// Resultado de resolver un fragmento: la vista y, si el fragmento es un
/// alias heredado, el fragmento por el que hay que reescribirlo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub view: ViewSelector,
    pub redirect: Option<&'static str>,
}

impl Resolution {
    fn view(view: ViewSelector) -> Self {
        Self { view, redirect: None }
    }
}

/// Función pura: el fragmento actual entra como parámetro, no se lee de
/// ningún estado global. Acepta el fragmento con o sin `#` inicial.
pub fn resolve(fragment: &str) -> Resolution {
    let route = fragment.strip_prefix('#').unwrap_or(fragment);

    if let Some(rest) = route.strip_prefix("nivel-") {
        return match parse_leading_int(rest) {
            Some(n) => Resolution::view(ViewSelector::LevelDetail(n)),
            None => Resolution::view(ViewSelector::Welcome),
        };
    }

    match route {
        "diagnostico" => Resolution::view(ViewSelector::Diagnostic),
        "niveles" => Resolution::view(ViewSelector::Levels),
        "practica" => Resolution::view(ViewSelector::Practice),
        "tecnica" => Resolution::view(ViewSelector::Technique),
        "partituras" => Resolution::view(ViewSelector::Repertoire),
        // Enlace antiguo
        "repertorio" => Resolution {
            view: ViewSelector::Repertoire,
            redirect: Some(REPERTOIRE_FRAGMENT),
        },
        _ => Resolution::view(ViewSelector::Welcome),
    }
}

/// Lee los dígitos decimales al principio de `s` e ignora el resto
/// (`"4-extra"` -> 4).
fn parse_leading_int(s: &str) -> Option<i64> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_unknown_fragments_go_to_welcome() {
        assert_eq!(resolve("").view, ViewSelector::Welcome);
        assert_eq!(resolve("#").view, ViewSelector::Welcome);
        assert_eq!(resolve("bogus").view, ViewSelector::Welcome);
        assert_eq!(resolve("#welcome").view, ViewSelector::Welcome);
        assert_eq!(resolve("bogus").redirect, None);
    }

    #[test]
    fn fixed_views() {
        assert_eq!(resolve("#diagnostico").view, ViewSelector::Diagnostic);
        assert_eq!(resolve("niveles").view, ViewSelector::Levels);
        assert_eq!(resolve("#practica").view, ViewSelector::Practice);
        assert_eq!(resolve("#tecnica").view, ViewSelector::Technique);
        assert_eq!(resolve("#partituras").view, ViewSelector::Repertoire);
    }

    #[test]
    fn level_detail_parses_number() {
        assert_eq!(resolve("nivel-4").view, ViewSelector::LevelDetail(4));
        assert_eq!(resolve("#nivel-12").view, ViewSelector::LevelDetail(12));
        // Sin validación de rango
        assert_eq!(resolve("#nivel-99").view, ViewSelector::LevelDetail(99));
        assert_eq!(resolve("#nivel-3abc").view, ViewSelector::LevelDetail(3));
    }

    #[test]
    fn unparseable_level_falls_back_to_welcome() {
        assert_eq!(resolve("#nivel-").view, ViewSelector::Welcome);
        assert_eq!(resolve("#nivel-x").view, ViewSelector::Welcome);
    }

    #[test]
    fn legacy_repertoire_alias_redirects() {
        let r = resolve("repertorio");
        assert_eq!(r.view, ViewSelector::Repertoire);
        assert_eq!(r.redirect, Some("#partituras"));
        assert_eq!(resolve(r.redirect.unwrap()).redirect, None);
    }

    #[test]
    fn fragment_round_trips_through_resolve() {
        for view in [
            ViewSelector::Welcome,
            ViewSelector::Diagnostic,
            ViewSelector::Levels,
            ViewSelector::Practice,
            ViewSelector::Technique,
            ViewSelector::Repertoire,
            ViewSelector::LevelDetail(5),
        ] {
            assert_eq!(resolve(&view.fragment()).view, view);
        }
    }
}
