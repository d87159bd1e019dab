use thiserror::Error;

/// Mensaje fijo que ve el usuario cuando no se pudo generar el cuestionario.
pub const QUIZ_UNAVAILABLE_MESSAGE: &str = "Lo siento, no pude crear un cuestionario en este momento. Por favor, inténtalo de nuevo más tarde.";

/// Fallos al pedir el cuestionario al proveedor de generación.
///
/// Ambas variantes se tratan igual de cara al usuario: la sesión vuelve a
/// `Idle` y se muestra [`QUIZ_UNAVAILABLE_MESSAGE`]. El texto de `Display`
/// sólo va a los logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("fallo de transporte con el proveedor: {0}")]
    Provider(String),
    #[error("respuesta del proveedor mal formada: {0}")]
    MalformedResponse(String),
}

impl QuizError {
    pub fn user_message(&self) -> &'static str {
        QUIZ_UNAVAILABLE_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_maps_to_the_same_user_message() {
        let transport = QuizError::Provider("timeout".into());
        let malformed = QuizError::MalformedResponse("quiz vacío".into());
        assert_eq!(transport.user_message(), malformed.user_message());
        assert!(transport.to_string().contains("timeout"));
    }
}
