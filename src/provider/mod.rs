pub mod gemini;

use crate::error::QuizError;
use crate::model::QuizQuestion;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Instrucción fija que se envía al proveedor.
pub const PLACEMENT_PROMPT: &str = "Eres un instructor experto de guitarra clásica. Crea un cuestionario de evaluación de 5 preguntas de opción múltiple para un nuevo estudiante. Las preguntas deben aumentar progresivamente en dificultad, comenzando desde conceptos muy básicos (por ejemplo, partes de la guitarra) hasta temas para principiantes un poco más avanzados (por ejemplo, notación musical básica, técnicas simples). La respuesta proporcionada debe ser una de las opciones.";

/// Petición de generación: instrucción + esquema de salida estructurada.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub response_schema: Value,
}

impl GenerationRequest {
    pub fn placement_quiz() -> Self {
        Self {
            prompt: PLACEMENT_PROMPT.to_string(),
            response_schema: quiz_schema(),
        }
    }
}

/// `{ quiz: [{ question, options[], answer }] }` en el dialecto de esquema
/// del proveedor.
pub fn quiz_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "quiz": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "question": { "type": "STRING" },
                        "options": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" }
                        },
                        "answer": { "type": "STRING" }
                    },
                    "required": ["question", "options", "answer"]
                }
            }
        },
        "required": ["quiz"]
    })
}

/// Proveedor de generación. Bloqueante: el anfitrión lo llama desde un hilo
/// aparte. En wasm se usa directamente [`gemini::generate_content`].
pub trait GenerationProvider: Send + Sync {
    /// Devuelve el texto JSON producido por el modelo.
    fn generate(&self, request: &GenerationRequest) -> Result<String, QuizError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct QuizPayload {
    quiz: Vec<RawQuestion>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawQuestion {
    question: String,
    options: Vec<String>,
    answer: String,
}

/// Valida el texto devuelto por el proveedor y lo convierte en preguntas.
///
/// Falla si no es JSON, si falta `quiz` o no es una lista, si la lista está
/// vacía, o si alguna pregunta no tiene opciones o su respuesta no está entre
/// ellas. La longitud no se fuerza a 5.
pub fn parse_quiz_payload(text: &str) -> Result<Vec<QuizQuestion>, QuizError> {
    let payload: QuizPayload = serde_json::from_str(text.trim())
        .map_err(|e| QuizError::MalformedResponse(format!("JSON inválido: {e}")))?;

    if payload.quiz.is_empty() {
        return Err(QuizError::MalformedResponse(
            "No se pudo generar un cuestionario válido.".into(),
        ));
    }

    payload
        .quiz
        .into_iter()
        .enumerate()
        .map(|(i, raw)| {
            if raw.options.is_empty() {
                return Err(QuizError::MalformedResponse(format!(
                    "la pregunta {} no tiene opciones",
                    i + 1
                )));
            }
            if !raw.options.contains(&raw.answer) {
                return Err(QuizError::MalformedResponse(format!(
                    "la respuesta de la pregunta {} no está entre las opciones",
                    i + 1
                )));
            }
            Ok(QuizQuestion {
                prompt: raw.question,
                options: raw.options,
                correct_answer: raw.answer,
            })
        })
        .collect()
}

/// Pide el cuestionario y lo valida antes de devolverlo.
pub fn fetch_quiz(provider: &dyn GenerationProvider) -> Result<Vec<QuizQuestion>, QuizError> {
    let request = GenerationRequest::placement_quiz();
    let text = provider.generate(&request)?;
    parse_quiz_payload(&text)
}
