// src/view_models.rs

use crate::model::{Objective, RepertoireLevel, Tier};
use crate::router::ViewSelector;
use crate::session::QuizSession;

/// Cómo pintar cada opción mientras se revela la respuesta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionStyle {
    Neutral,
    SelectedCorrect,
    SelectedWrong,
    RevealedCorrect, // la correcta cuando el usuario eligió otra
}

#[derive(Clone, Debug)]
pub struct OptionButton {
    pub text: String,
    pub style: OptionStyle,
    pub enabled: bool,
}

#[derive(Clone, Debug)]
pub struct QuestionCard {
    pub heading: String, // "Pregunta 2 de 5"
    pub prompt: String,
    pub options: Vec<OptionButton>,
}

#[derive(Clone, Debug)]
pub struct ResultCard {
    pub tier: Tier,
    pub score_line: String,
    pub percentage: usize,
}

/// Entrada del pie de navegación.
#[derive(Clone, Copy, Debug)]
pub struct FooterTab {
    pub label: &'static str,
    pub icon: &'static str,
    pub target: ViewSelector,
}

pub const FOOTER_TABS: [FooterTab; 5] = [
    FooterTab { label: "Inicio", icon: "🏠", target: ViewSelector::Diagnostic },
    FooterTab { label: "Niveles", icon: "🎓", target: ViewSelector::Levels },
    FooterTab { label: "Práctica", icon: "⏱", target: ViewSelector::Practice },
    FooterTab { label: "Técnica", icon: "🔧", target: ViewSelector::Technique },
    FooterTab { label: "Repertorio", icon: "🎵", target: ViewSelector::Repertoire },
];

/// Pestaña resaltada para una vista; el detalle de nivel cuelga de Repertorio.
pub fn active_tab(view: ViewSelector) -> Option<ViewSelector> {
    match view {
        ViewSelector::Welcome => None,
        ViewSelector::LevelDetail(_) => Some(ViewSelector::Repertoire),
        other => Some(other),
    }
}

impl QuestionCard {
    pub fn from_session(session: &QuizSession) -> Option<Self> {
        let question = session.current_question()?;
        let selected = session.selected_answer();

        let options = question
            .options
            .iter()
            .map(|option| {
                let style = match selected {
                    None => OptionStyle::Neutral,
                    Some(sel) if sel == option.as_str() => {
                        if session.last_answer_correct() == Some(true) {
                            OptionStyle::SelectedCorrect
                        } else {
                            OptionStyle::SelectedWrong
                        }
                    }
                    Some(_) if question.is_correct(option) => OptionStyle::RevealedCorrect,
                    Some(_) => OptionStyle::Neutral,
                };
                OptionButton {
                    text: option.clone(),
                    style,
                    enabled: selected.is_none(),
                }
            })
            .collect();

        Some(Self {
            heading: format!(
                "Pregunta {} de {}",
                session.current_index() + 1,
                session.questions().len()
            ),
            prompt: question.prompt.clone(),
            options,
        })
    }
}

impl ResultCard {
    pub fn from_session(session: &QuizSession) -> Option<Self> {
        let tier = session.compute_tier()?;
        Some(Self {
            tier,
            score_line: format!(
                "Has acertado {} de {} preguntas.",
                session.score(),
                session.questions().len()
            ),
            percentage: session.percentage(),
        })
    }
}

/// "2/5 ritmos dominados" o "1/1" si el objetivo no tiene unidad.
pub fn objective_counter(objective: &Objective) -> String {
    match &objective.unit {
        Some(unit) => format!("{}/{} {}", objective.done, objective.total, unit),
        None => format!("{}/{}", objective.done, objective.total),
    }
}

pub fn repertoire_row_label(level: &RepertoireLevel) -> String {
    format!("Nivel {}: {}", level.number, level.title)
}
