#[cfg(not(target_arch = "wasm32"))]
use super::GenerationProvider;
use super::GenerationRequest;
use crate::config::ProviderConfig;
use crate::error::QuizError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

fn build_body(request: &GenerationRequest) -> GenerateContentRequest<'_> {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![TextPart { text: &request.prompt }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
            response_schema: &request.response_schema,
        },
    }
}

/// Extrae el texto del primer candidato (las partes van concatenadas).
fn extract_text(body: &str) -> Result<String, QuizError> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| QuizError::MalformedResponse(format!("respuesta del proveedor ilegible: {e}")))?;

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(QuizError::MalformedResponse(
            "el proveedor no devolvió texto".into(),
        ));
    }
    Ok(text)
}

fn http_error(status: u16, body: &str) -> QuizError {
    QuizError::Provider(format!(
        "el proveedor devolvió HTTP {}{}",
        status,
        if body.trim().is_empty() {
            String::new()
        } else {
            format!(". Body: {}", body.trim())
        }
    ))
}

fn require_key(config: &ProviderConfig) -> Result<&str, QuizError> {
    config
        .api_key
        .as_deref()
        .ok_or_else(|| QuizError::Provider("no hay clave de API configurada".into()))
}

/// Cliente nativo (bloqueante) de `generateContent`.
#[cfg(not(target_arch = "wasm32"))]
pub struct GeminiProvider {
    config: ProviderConfig,
    client: reqwest::blocking::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl GeminiProvider {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            config,
            client: reqwest::blocking::Client::new(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl GenerationProvider for GeminiProvider {
    fn generate(&self, request: &GenerationRequest) -> Result<String, QuizError> {
        let key = require_key(&self.config)?;
        let url = self.config.generate_url();
        log::debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", key)
            .json(&build_body(request))
            .send()
            .map_err(|e| QuizError::Provider(format!("error conectando con el proveedor: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| QuizError::Provider(format!("no se pudo leer la respuesta: {e}")))?;

        if !status.is_success() {
            return Err(http_error(status.as_u16(), &body));
        }
        extract_text(&body)
    }
}

/// Versión navegador con `fetch`.
#[cfg(target_arch = "wasm32")]
pub async fn generate_content(
    config: &ProviderConfig,
    request: &GenerationRequest,
) -> Result<String, QuizError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let key = require_key(config)?;
    let payload = serde_json::to_string(&build_body(request))
        .map_err(|e| QuizError::Provider(format!("no se pudo serializar la petición: {e}")))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&payload));

    let window =
        web_sys::window().ok_or_else(|| QuizError::Provider("no existe window en WASM".into()))?;

    let url = config.generate_url();
    let http_request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| QuizError::Provider(format!("no se pudo crear la petición fetch: {e:?}")))?;
    let headers = http_request.headers();
    headers
        .set("Content-Type", "application/json")
        .and_then(|_| headers.set("x-goog-api-key", key))
        .map_err(|e| QuizError::Provider(format!("no se pudieron asignar headers: {e:?}")))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&http_request))
        .await
        .map_err(|e| QuizError::Provider(format!("fetch falló: {e:?}")))?;
    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| QuizError::Provider("la respuesta fetch no es un Response".into()))?;

    let text_promise = response
        .text()
        .map_err(|e| QuizError::Provider(format!("no se pudo leer el body: {e:?}")))?;
    let body = JsFuture::from(text_promise)
        .await
        .ok()
        .and_then(|v| v.as_string())
        .ok_or_else(|| QuizError::Provider("response.text() no devolvió string".into()))?;

    if !response.ok() {
        return Err(http_error(response.status(), &body));
    }
    extract_text(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_uses_structured_output() {
        let request = GenerationRequest::placement_quiz();
        let body = serde_json::to_value(build_body(&request)).unwrap();
        assert_eq!(body["contents"][0]["parts"][0]["text"], request.prompt.as_str());
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"], request.response_schema);
    }

    #[test]
    fn extracts_candidate_text() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"{\"quiz\":"},{"text":"[]}"}]}}]}"#;
        assert_eq!(extract_text(body).unwrap(), r#"{"quiz":[]}"#);
    }

    #[test]
    fn missing_candidates_is_malformed() {
        assert!(matches!(extract_text("{}"), Err(QuizError::MalformedResponse(_))));
        assert!(matches!(
            extract_text(r#"{"candidates":[{"content":{"parts":[]}}]}"#),
            Err(QuizError::MalformedResponse(_))
        ));
        assert!(extract_text("<html>").is_err());
    }

    #[test]
    fn http_errors_are_provider_errors() {
        let err = http_error(503, " overloaded ");
        assert_eq!(
            err,
            QuizError::Provider("el proveedor devolvió HTTP 503. Body: overloaded".into())
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn missing_api_key_fails_without_network() {
        let provider = GeminiProvider::new(ProviderConfig::default());
        let result = provider.generate(&GenerationRequest::placement_quiz());
        assert!(matches!(result, Err(QuizError::Provider(_))));
    }
}
