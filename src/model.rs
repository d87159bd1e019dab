use serde::{Deserialize, Serialize};

/// Una pregunta del diagnóstico. `correct_answer` siempre es uno de `options`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub prompt: String,              // Pregunta
    pub options: Vec<String>,        // Opciones en el orden recibido
    pub correct_answer: String,      // Respuesta (coincidencia exacta)
}

impl QuizQuestion {
    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_answer == option
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    InProgress,
    Finished,
}

/// Nivel recomendado tras el diagnóstico.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Tier {
    Newcomer,
    Beginner,
    Intermediate,
}

impl Tier {
    /// `round(100 * score / total)`, redondeando medios hacia arriba.
    pub fn percentage(score: usize, total: usize) -> usize {
        if total == 0 {
            return 0;
        }
        (200 * score + total) / (2 * total)
    }

    pub fn from_score(score: usize, total: usize) -> Tier {
        let pct = Self::percentage(score, total);
        if pct >= 80 {
            Tier::Intermediate
        } else if pct >= 40 {
            Tier::Beginner
        } else {
            Tier::Newcomer
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Newcomer => "Newcomer",
            Tier::Beginner => "Beginner",
            Tier::Intermediate => "Intermediate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Newcomer => "Recién Llegado",
            Tier::Beginner => "Principiante",
            Tier::Intermediate => "Intermedio",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Tier::Intermediate => "¡Excelente trabajo! Tienes una base sólida. Estás listo para sumergirte en repertorio más desafiante.",
            Tier::Beginner => "¡Un gran comienzo! Conoces los conceptos básicos. Vamos a construir sobre esa base para afianzar tu técnica.",
            Tier::Newcomer => "¡Bienvenido al mundo de la guitarra clásica! Este es el lugar perfecto para comenzar tu viaje musical.",
        }
    }
}

// ---------- Catálogo de contenido estático ----------

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Objective {
    pub title: String,
    pub done: u32,
    pub total: u32,
    #[serde(default)]
    pub unit: Option<String>,
}

impl Objective {
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.done as f32 / self.total as f32
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.done >= self.total
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Diagnostic {
    pub progress_percent: u32,
    pub objectives: Vec<Objective>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Lesson {
    pub title: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Milestone {
    pub label: String,
    pub done: u32,
    pub total: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LevelGroup {
    pub title: String,
    pub subtitle: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CurrentLevel {
    pub number: u32,
    pub title: String,
    pub progress_percent: u32,
    pub objectives: Vec<Objective>,
    pub next_lesson: Lesson,
    pub milestones: Vec<Milestone>,
    pub groups: Vec<LevelGroup>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Technique {
    pub title: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Piece {
    pub id: String,
    pub title: String,
    pub pages: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RepertoireLevel {
    pub number: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub pieces: Vec<Piece>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PracticeSegment {
    pub title: String,
    pub minutes: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Catalog {
    pub assets_base: String,
    pub diagnostic: Diagnostic,
    pub current_level: CurrentLevel,
    pub techniques: Vec<Technique>,
    pub repertoire: Vec<RepertoireLevel>,
    pub practice_plan: Vec<PracticeSegment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_for_five_questions() {
        assert_eq!(Tier::from_score(5, 5), Tier::Intermediate);
        assert_eq!(Tier::from_score(4, 5), Tier::Intermediate);
        assert_eq!(Tier::from_score(3, 5), Tier::Beginner);
        assert_eq!(Tier::from_score(2, 5), Tier::Beginner);
        assert_eq!(Tier::from_score(1, 5), Tier::Newcomer);
        assert_eq!(Tier::from_score(0, 5), Tier::Newcomer);
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(Tier::percentage(4, 5), 80);
        assert_eq!(Tier::percentage(1, 3), 33);
        assert_eq!(Tier::percentage(2, 3), 67);
        assert_eq!(Tier::percentage(1, 8), 13); // 12.5 -> 13
        assert_eq!(Tier::percentage(0, 0), 0);
    }

    #[test]
    fn tier_depends_only_on_score_and_total() {
        for total in 1..=8 {
            for score in 0..=total {
                assert_eq!(Tier::from_score(score, total), Tier::from_score(score, total));
            }
        }
        // 3 de 8 = 37.5 -> 38 %
        assert_eq!(Tier::from_score(3, 8).as_str(), "Newcomer");
        assert_eq!(Tier::from_score(4, 8).label(), "Principiante");
    }

    #[test]
    fn objective_fraction_handles_empty_total() {
        let o = Objective { title: "x".into(), done: 2, total: 5, unit: None };
        assert!((o.fraction() - 0.4).abs() < f32::EPSILON);
        assert!(!o.is_complete());
        let empty = Objective { title: "y".into(), done: 0, total: 0, unit: None };
        assert_eq!(empty.fraction(), 0.0);
        assert!(!empty.is_complete());
    }
}
