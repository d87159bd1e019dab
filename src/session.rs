//! Controlador de una sesión de diagnóstico.
//!
//! No hace I/O: `start_quiz` devuelve un [`GenerationTicket`] y quien aloja
//! la sesión lanza la petición y entrega el resultado con
//! [`QuizSession::finish_loading`]. El tiempo también lo inyecta el
//! anfitrión (segundos en `f64`, como `egui::InputState::time`).

use crate::error::QuizError;
use crate::model::{Phase, QuizQuestion, Tier};

/// Retardo por defecto entre responder y pasar a la siguiente pregunta.
pub const DEFAULT_REVEAL_DELAY: f64 = 1.5;

/// Identifica la petición de generación emitida por un `start_quiz` concreto.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationTicket {
    attempt: u64,
}

impl GenerationTicket {
    pub fn attempt(&self) -> u64 {
        self.attempt
    }
}

/// Avance diferido tras revelar la respuesta.
#[derive(Clone, Copy, Debug, PartialEq)]
struct PendingAdvance {
    attempt: u64,
    due_at: f64,
}

#[derive(Debug)]
pub struct QuizSession {
    phase: Phase,
    questions: Vec<QuizQuestion>,
    current_index: usize,
    score: usize,
    selected_answer: Option<String>,
    last_answer_correct: Option<bool>,
    error_message: Option<String>,
    // Se incrementa en cada start/restart; invalida tickets y avances viejos.
    attempt: u64,
    pending_advance: Option<PendingAdvance>,
    reveal_delay: f64,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_DELAY)
    }
}

impl QuizSession {
    pub fn new(reveal_delay: f64) -> Self {
        Self {
            phase: Phase::Idle,
            questions: Vec::new(),
            current_index: 0,
            score: 0,
            selected_answer: None,
            last_answer_correct: None,
            error_message: None,
            attempt: 0,
            pending_advance: None,
            reveal_delay: reveal_delay.max(0.0),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.phase {
            Phase::InProgress => self.questions.get(self.current_index),
            _ => None,
        }
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    pub fn last_answer_correct(&self) -> Option<bool> {
        self.last_answer_correct
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    pub fn reveal_delay(&self) -> f64 {
        self.reveal_delay
    }

    pub fn has_pending_advance(&self) -> bool {
        self.pending_advance.is_some()
    }

    /// Pasa a `Loading` y devuelve el ticket de la única petición a emitir.
    /// `None` si la sesión no está en `Idle` (p. ej. ya cargando).
    pub fn start_quiz(&mut self) -> Option<GenerationTicket> {
        if self.phase != Phase::Idle {
            log::debug!("start_quiz ignorado en fase {:?}", self.phase);
            return None;
        }
        self.attempt += 1;
        self.phase = Phase::Loading;
        self.error_message = None;
        self.questions.clear();
        self.pending_advance = None;
        log::info!("Solicitando cuestionario (intento {})", self.attempt);
        Some(GenerationTicket { attempt: self.attempt })
    }

    /// Aplica el resultado de la petición. Devuelve `false` si el ticket ya
    /// no corresponde a esta sesión (reinicio o desmontaje entre medias).
    pub fn finish_loading(
        &mut self,
        ticket: GenerationTicket,
        result: Result<Vec<QuizQuestion>, QuizError>,
    ) -> bool {
        if ticket.attempt != self.attempt || self.phase != Phase::Loading {
            log::debug!(
                "Descartado resultado tardío del intento {} (actual {})",
                ticket.attempt,
                self.attempt
            );
            return false;
        }

        match result {
            Ok(questions) if !questions.is_empty() => {
                log::info!("Cuestionario recibido con {} preguntas", questions.len());
                self.questions = questions;
                self.phase = Phase::InProgress;
                self.current_index = 0;
                self.score = 0;
                self.selected_answer = None;
                self.last_answer_correct = None;
            }
            Ok(_) => self.fail(QuizError::MalformedResponse("el cuestionario está vacío".into())),
            Err(err) => self.fail(err),
        }
        true
    }

    fn fail(&mut self, err: QuizError) {
        log::error!("No se pudo generar el cuestionario: {err}");
        self.phase = Phase::Idle;
        self.questions.clear();
        self.current_index = 0;
        self.score = 0;
        self.selected_answer = None;
        self.last_answer_correct = None;
        self.error_message = Some(err.user_message().to_string());
    }

    /// Registra la respuesta a la pregunta actual y programa el avance.
    /// Devuelve `false` (sin efecto) si no se puede responder ahora.
    pub fn submit_answer(&mut self, option: &str, now: f64) -> bool {
        if self.phase != Phase::InProgress || self.selected_answer.is_some() {
            return false;
        }
        let Some(question) = self.questions.get(self.current_index) else {
            return false;
        };

        let correct = question.is_correct(option);
        if correct {
            self.score += 1;
        }
        self.selected_answer = Some(option.to_string());
        self.last_answer_correct = Some(correct);
        log::debug!(
            "Pregunta {} respondida ({})",
            self.current_index + 1,
            if correct { "correcta" } else { "incorrecta" }
        );

        if self.reveal_delay <= 0.0 {
            self.advance();
        } else {
            self.pending_advance = Some(PendingAdvance {
                attempt: self.attempt,
                due_at: now + self.reveal_delay,
            });
        }
        true
    }

    /// Dispara el avance programado si ya venció. Devuelve `true` si avanzó.
    pub fn tick(&mut self, now: f64) -> bool {
        match self.pending_advance {
            Some(pending) if pending.attempt != self.attempt => {
                self.pending_advance = None;
                false
            }
            Some(pending) if now >= pending.due_at => {
                self.pending_advance = None;
                self.advance();
                true
            }
            _ => false,
        }
    }

    fn advance(&mut self) {
        if self.phase != Phase::InProgress {
            return;
        }
        if self.current_index + 1 >= self.questions.len() {
            self.phase = Phase::Finished;
            if let Some(tier) = self.compute_tier() {
                log::info!(
                    "Diagnóstico terminado: {}/{} -> {}",
                    self.score,
                    self.questions.len(),
                    tier.as_str()
                );
            }
        } else {
            self.current_index += 1;
            self.selected_answer = None;
            self.last_answer_correct = None;
        }
    }

    /// Porcentaje de aciertos sobre el total de preguntas cargadas.
    pub fn percentage(&self) -> usize {
        Tier::percentage(self.score, self.questions.len())
    }

    /// Sólo tiene sentido en `Finished`.
    pub fn compute_tier(&self) -> Option<Tier> {
        match self.phase {
            Phase::Finished => Some(Tier::from_score(self.score, self.questions.len())),
            _ => None,
        }
    }

    /// Vuelve a `Idle` desde cualquier fase, invalidando la petición en vuelo
    /// y el avance programado.
    pub fn restart(&mut self) {
        self.attempt += 1;
        self.phase = Phase::Idle;
        self.questions.clear();
        self.current_index = 0;
        self.score = 0;
        self.selected_answer = None;
        self.last_answer_correct = None;
        self.error_message = None;
        self.pending_advance = None;
    }
}
