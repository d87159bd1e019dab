use super::*;
use crate::model::Phase;
use std::sync::mpsc::{self, TryRecvError};

impl GuitarApp {
    /// Botón "Iniciar Diagnóstico Adaptativo": arranca la sesión y lanza la
    /// única petición al proveedor. No hace nada si ya está cargando.
    pub fn iniciar_diagnostico(&mut self) {
        let Some(ticket) = self.session.start_quiz() else {
            return;
        };
        let (tx, rx) = mpsc::channel();
        self.pending_generation = Some(PendingGeneration { ticket, rx });

        #[cfg(not(target_arch = "wasm32"))]
        {
            let provider = Arc::clone(&self.provider);
            std::thread::spawn(move || {
                let result = crate::provider::fetch_quiz(provider.as_ref());
                // Si la vista ya no existe el receptor está cerrado; se ignora.
                let _ = tx.send(result);
            });
        }

        #[cfg(target_arch = "wasm32")]
        {
            use crate::provider::{GenerationRequest, gemini, parse_quiz_payload};

            let config = self.config.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let request = GenerationRequest::placement_quiz();
                let result = gemini::generate_content(&config, &request)
                    .await
                    .and_then(|text| parse_quiz_payload(&text));
                let _ = tx.send(result);
            });
        }
    }

    /// Recoge el resultado de la generación si ya llegó. Devuelve `true` si
    /// se aplicó a la sesión.
    pub fn poll_generation(&mut self) -> bool {
        let (ticket, received) = match &self.pending_generation {
            Some(pending) => (pending.ticket, pending.rx.try_recv()),
            None => return false,
        };

        let result = match received {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => Err(QuizError::Provider(
                "la tarea de generación terminó sin respuesta".into(),
            )),
        };
        self.pending_generation = None;
        self.session.finish_loading(ticket, result)
    }

    pub fn responder(&mut self, option: &str, now: f64) -> bool {
        self.session.submit_answer(option, now)
    }

    /// Botón "Hacer de Nuevo".
    pub fn hacer_de_nuevo(&mut self) {
        self.pending_generation = None;
        self.session.restart();
    }

    /// Trabajo por frame: resultados pendientes, avance diferido y
    /// temporizador de práctica.
    pub fn tick(&mut self, now: f64) {
        self.poll_generation();
        self.session.tick(now);
        self.practice.tick(now);
    }

    /// Hay algo que cambia solo con el tiempo y necesita repintar.
    pub fn needs_repaint(&self) -> bool {
        self.session.phase() == Phase::Loading
            || self.session.has_pending_advance()
            || self.practice.is_running()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::provider::{GenerationProvider, GenerationRequest};
    use crate::router::ViewSelector;
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    const QUIZ: &str = r#"{"quiz":[
        {"question":"¿Cuántas cuerdas tiene la guitarra clásica?","options":["4","6"],"answer":"6"},
        {"question":"¿Con qué mano se pulsa?","options":["Derecha","Izquierda"],"answer":"Derecha"}
    ]}"#;

    struct Canned(Result<String, QuizError>);

    impl GenerationProvider for Canned {
        fn generate(&self, _request: &GenerationRequest) -> Result<String, QuizError> {
            self.0.clone()
        }
    }

    /// Responde sólo cuando el test abre la compuerta.
    struct Gated {
        gate: Mutex<mpsc::Receiver<()>>,
    }

    impl GenerationProvider for Gated {
        fn generate(&self, _request: &GenerationRequest) -> Result<String, QuizError> {
            let gate = self.gate.lock().map_err(|_| QuizError::Provider("lock".into()))?;
            let _ = gate.recv();
            Ok(QUIZ.to_string())
        }
    }

    fn app_with(provider: impl GenerationProvider + 'static, delay: f64) -> GuitarApp {
        let config = ProviderConfig {
            reveal_delay: delay,
            ..ProviderConfig::default()
        };
        GuitarApp::with_provider(config, Arc::new(provider))
    }

    fn wait_for_result(app: &mut GuitarApp) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if app.poll_generation() {
                return true;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        false
    }

    #[test]
    fn full_flow_with_canned_provider() {
        let mut app = app_with(Canned(Ok(QUIZ.to_string())), 1.5);
        app.iniciar_diagnostico();
        assert_eq!(app.session.phase(), Phase::Loading);
        assert!(app.needs_repaint());
        assert!(wait_for_result(&mut app));
        assert_eq!(app.session.phase(), Phase::InProgress);
        assert_eq!(app.session.questions().len(), 2);

        assert!(app.responder("6", 0.0));
        assert!(!app.responder("4", 0.5));
        app.tick(1.6);
        assert_eq!(app.session.current_index(), 1);
        assert!(app.responder("Izquierda", 2.0));
        app.tick(3.5);
        assert_eq!(app.session.phase(), Phase::Finished);
        assert_eq!(app.session.score(), 1);
        assert!(!app.needs_repaint());

        let result = ResultCard::from_session(&app.session).unwrap();
        assert_eq!(result.tier.label(), "Principiante");

        app.hacer_de_nuevo();
        assert_eq!(app.session.phase(), Phase::Idle);
        assert!(app.session.questions().is_empty());
    }

    #[test]
    fn provider_error_shows_message() {
        let mut app = app_with(Canned(Err(QuizError::Provider("HTTP 500".into()))), 0.0);
        app.iniciar_diagnostico();
        assert!(wait_for_result(&mut app));
        assert_eq!(app.session.phase(), Phase::Idle);
        assert!(app.session.error_message().is_some());
        assert!(app.session.questions().is_empty());
    }

    #[test]
    fn malformed_payload_shows_message() {
        let mut app = app_with(Canned(Ok(r#"{"quiz": []}"#.to_string())), 0.0);
        app.iniciar_diagnostico();
        assert!(wait_for_result(&mut app));
        assert_eq!(app.session.phase(), Phase::Idle);
        assert!(app.session.error_message().is_some());
    }

    #[test]
    fn second_start_while_loading_is_ignored() {
        let (open, gate) = mpsc::channel();
        let mut app = app_with(Gated { gate: Mutex::new(gate) }, 0.0);
        app.iniciar_diagnostico();
        let first = app.session.attempt();
        app.iniciar_diagnostico();
        assert_eq!(app.session.attempt(), first);

        open.send(()).unwrap();
        assert!(wait_for_result(&mut app));
        assert_eq!(app.session.phase(), Phase::InProgress);
    }

    #[test]
    fn leaving_the_welcome_view_discards_in_flight_result() {
        let (open, gate) = mpsc::channel();
        let mut app = app_with(Gated { gate: Mutex::new(gate) }, 0.0);
        app.iniciar_diagnostico();
        app.navigate("#tecnica");
        assert_eq!(app.view, ViewSelector::Technique);
        assert_eq!(app.session.phase(), Phase::Idle);

        open.send(()).unwrap();
        std::thread::sleep(Duration::from_millis(50));
        assert!(!app.poll_generation());
        app.navigate("");
        assert_eq!(app.session.phase(), Phase::Idle);
        assert!(app.session.questions().is_empty());
    }
}
