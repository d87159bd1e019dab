use super::*;
use crate::router::resolve;

impl GuitarApp {
    /// Aplica un fragmento nuevo, venga de un enlace interno o de la barra
    /// de direcciones. Los alias antiguos se reescriben.
    pub fn navigate(&mut self, fragment: &str) {
        let resolution = resolve(fragment);
        let target = resolution.redirect.unwrap_or(fragment);
        if let Some(redirect) = resolution.redirect {
            log::info!("Enlace antiguo {fragment} -> {redirect}");
        }

        if resolution.view != self.view {
            log::debug!("Ruta {:?} -> {:?}", self.view, resolution.view);
            // La sesión vive en la vista de bienvenida: al salir se desmonta.
            if self.view == ViewSelector::Welcome {
                self.desmontar_diagnostico();
            }
            self.view = resolution.view;
        }

        self.route = target.trim_start_matches('#').to_string();

        #[cfg(target_arch = "wasm32")]
        write_location_hash(&self.route);
    }

    pub fn ir_a(&mut self, view: ViewSelector) {
        self.navigate(&view.fragment());
    }

    fn desmontar_diagnostico(&mut self) {
        self.pending_generation = None;
        self.session.restart();
    }

    /// Lee `location.hash` y navega si cambió desde fuera (atrás/adelante,
    /// enlace pegado...).
    #[cfg(target_arch = "wasm32")]
    pub fn sync_location(&mut self) {
        if let Some(hash) = read_location_hash() {
            if hash.trim_start_matches('#') != self.route {
                self.navigate(&hash);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn read_location_hash() -> Option<String> {
    web_sys::window()?.location().hash().ok()
}

#[cfg(target_arch = "wasm32")]
fn write_location_hash(route: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let current = location.hash().unwrap_or_default();
    if current.trim_start_matches('#') != route {
        if let Err(err) = location.set_hash(route) {
            log::warn!("No se pudo actualizar location.hash: {err:?}");
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::model::Phase;
    use crate::provider::{GenerationProvider, GenerationRequest};

    struct Unused;

    impl GenerationProvider for Unused {
        fn generate(&self, _request: &GenerationRequest) -> Result<String, QuizError> {
            Err(QuizError::Provider("sin red en tests".into()))
        }
    }

    fn app() -> GuitarApp {
        GuitarApp::with_provider(ProviderConfig::default(), Arc::new(Unused))
    }

    #[test]
    fn starts_on_welcome() {
        let app = app();
        assert_eq!(app.view, ViewSelector::Welcome);
        assert_eq!(app.route, "");
    }

    #[test]
    fn legacy_alias_is_rewritten() {
        let mut app = app();
        app.navigate("#repertorio");
        assert_eq!(app.view, ViewSelector::Repertoire);
        assert_eq!(app.route, "partituras");
    }

    #[test]
    fn level_links_and_fallback() {
        let mut app = app();
        app.navigate("#nivel-4");
        assert_eq!(app.view, ViewSelector::LevelDetail(4));
        assert_eq!(app.route, "nivel-4");
        app.navigate("#bogus");
        assert_eq!(app.view, ViewSelector::Welcome);
    }

    #[test]
    fn ir_a_uses_canonical_fragments() {
        let mut app = app();
        app.ir_a(ViewSelector::Practice);
        assert_eq!(app.route, "practica");
        app.ir_a(ViewSelector::Welcome);
        assert_eq!(app.route, "");
        assert_eq!(app.view, ViewSelector::Welcome);
    }

    #[test]
    fn leaving_welcome_resets_an_error() {
        let mut app = app();
        let ticket = app.session.start_quiz().unwrap();
        app.session
            .finish_loading(ticket, Err(QuizError::Provider("x".into())));
        assert!(app.session.error_message().is_some());
        app.ir_a(ViewSelector::Levels);
        assert_eq!(app.session.phase(), Phase::Idle);
        assert_eq!(app.session.error_message(), None);
    }
}
