use crate::config::ProviderConfig;
use crate::data::read_catalog_embedded;
use crate::error::QuizError;
use crate::model::{Catalog, QuizQuestion};
use crate::practice::PracticeTimer;
use crate::router::ViewSelector;
use crate::session::{GenerationTicket, QuizSession};
use std::sync::mpsc::Receiver;

#[cfg(not(target_arch = "wasm32"))]
use crate::provider::GenerationProvider;
#[cfg(not(target_arch = "wasm32"))]
use std::sync::Arc;

// Submódulos
pub mod actions;
pub mod navigation;

// Re-export de view models
pub use crate::view_models::{QuestionCard, ResultCard};

/// Petición de generación en vuelo: el resultado llega por el canal y se
/// recoge en el siguiente frame.
pub struct PendingGeneration {
    pub ticket: GenerationTicket,
    pub rx: Receiver<Result<Vec<QuizQuestion>, QuizError>>,
}

pub struct GuitarApp {
    pub catalog: Catalog,
    pub config: ProviderConfig,
    pub session: QuizSession,
    pub practice: PracticeTimer,
    /// Ruta actual sin `#` ("" = bienvenida).
    pub route: String,
    pub view: ViewSelector,
    pub(crate) pending_generation: Option<PendingGeneration>,
    #[cfg(not(target_arch = "wasm32"))]
    provider: Arc<dyn GenerationProvider>,
}

impl GuitarApp {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = ProviderConfig::from_env();
        if config.api_key.is_none() {
            log::warn!("GUITARRA_API_KEY no está definida; el diagnóstico no podrá generarse");
        }
        let provider = Arc::new(crate::provider::gemini::GeminiProvider::new(config.clone()));
        Self::with_provider(config, provider)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = ProviderConfig::from_env();
        if config.api_key.is_none() {
            log::warn!("No hay clave de API configurada; el diagnóstico no podrá generarse");
        }
        Self::from_parts(config)
    }

    /// Constructor sin contexto de egui, con el proveedor inyectado.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn with_provider(config: ProviderConfig, provider: Arc<dyn GenerationProvider>) -> Self {
        Self::from_parts(config, provider)
    }

    fn from_parts(
        config: ProviderConfig,
        #[cfg(not(target_arch = "wasm32"))] provider: Arc<dyn GenerationProvider>,
    ) -> Self {
        let catalog = read_catalog_embedded();
        let practice = PracticeTimer::new(catalog.practice_plan.clone());

        Self {
            session: QuizSession::new(config.reveal_delay),
            catalog,
            practice,
            config,
            route: String::new(),
            view: ViewSelector::Welcome,
            pending_generation: None,
            #[cfg(not(target_arch = "wasm32"))]
            provider,
        }
    }
}
