use crate::session::DEFAULT_REVEAL_DELAY;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Configuración del proveedor de generación y de la sesión.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    /// Segundos entre responder y pasar de pregunta.
    pub reveal_delay: f64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            reveal_delay: DEFAULT_REVEAL_DELAY,
        }
    }
}

impl ProviderConfig {
    /// URL de `generateContent` para el modelo configurado.
    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim().trim_end_matches('/'),
            self.model.trim()
        )
    }

    /// Construye la configuración a partir de una función de búsqueda de
    /// claves (variables de entorno en nativo).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).and_then(|v| normalize(&v));
        let defaults = Self::default();

        let reveal_delay = get("GUITARRA_REVEAL_DELAY_MS")
            .and_then(|ms| ms.parse::<u64>().ok())
            .map(|ms| ms as f64 / 1000.0)
            .unwrap_or(defaults.reveal_delay);

        Self {
            endpoint: get("GUITARRA_ENDPOINT").unwrap_or(defaults.endpoint),
            model: get("GUITARRA_MODEL").unwrap_or(defaults.model),
            api_key: get("GUITARRA_API_KEY").or_else(|| get("API_KEY")),
            reveal_delay,
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// En el navegador: variable de compilación, query string, `<meta>` y
    /// `localStorage`, en ese orden.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            build_env(key)
                .or_else(|| web::from_querystring(key))
                .or_else(|| web::from_meta(key))
                .or_else(|| web::from_local_storage(key))
        })
    }
}

fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
fn build_env(key: &str) -> Option<String> {
    let value = match key {
        "GUITARRA_API_KEY" => option_env!("GUITARRA_API_KEY"),
        "GUITARRA_MODEL" => option_env!("GUITARRA_MODEL"),
        "GUITARRA_ENDPOINT" => option_env!("GUITARRA_ENDPOINT"),
        "GUITARRA_REVEAL_DELAY_MS" => option_env!("GUITARRA_REVEAL_DELAY_MS"),
        _ => None,
    };
    value.map(str::to_string)
}

#[cfg(target_arch = "wasm32")]
mod web {
    /// `GUITARRA_API_KEY` -> `api_key`
    fn short_name(key: &str) -> String {
        key.trim_start_matches("GUITARRA_").to_ascii_lowercase()
    }

    pub fn from_querystring(key: &str) -> Option<String> {
        let window = web_sys::window()?;
        let search = window.location().search().ok()?;
        let query = search.strip_prefix('?').unwrap_or(search.as_str());
        let wanted = short_name(key);

        for pair in query.split('&') {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            if k == wanted {
                let decoded = js_sys::decode_uri_component(v).ok()?;
                return decoded.as_string();
            }
        }
        None
    }

    pub fn from_meta(key: &str) -> Option<String> {
        let document = web_sys::window()?.document()?;
        let selector = format!("meta[name='guitarra-{}']", short_name(key).replace('_', "-"));
        let meta = document.query_selector(&selector).ok()??;
        meta.get_attribute("content")
    }

    pub fn from_local_storage(key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(&format!("guitarra_{}", short_name(key))).ok()?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = ProviderConfig::from_lookup(|_| None);
        assert_eq!(cfg, ProviderConfig::default());
        assert_eq!(cfg.reveal_delay, 1.5);
        assert_eq!(
            cfg.generate_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn reads_overrides_and_api_key_fallback() {
        let cfg = ProviderConfig::from_lookup(lookup_from(&[
            ("API_KEY", "clave-generica"),
            ("GUITARRA_MODEL", "  gemini-pro "),
            ("GUITARRA_ENDPOINT", "http://localhost:9000/v1/"),
            ("GUITARRA_REVEAL_DELAY_MS", "0"),
        ]));
        assert_eq!(cfg.api_key.as_deref(), Some("clave-generica"));
        assert_eq!(cfg.model, "gemini-pro");
        assert_eq!(cfg.reveal_delay, 0.0);
        assert_eq!(cfg.generate_url(), "http://localhost:9000/v1/models/gemini-pro:generateContent");
    }

    #[test]
    fn specific_key_wins_and_blank_values_are_ignored() {
        let cfg = ProviderConfig::from_lookup(lookup_from(&[
            ("API_KEY", "generica"),
            ("GUITARRA_API_KEY", "propia"),
            ("GUITARRA_MODEL", "   "),
            ("GUITARRA_REVEAL_DELAY_MS", "no-numero"),
        ]));
        assert_eq!(cfg.api_key.as_deref(), Some("propia"));
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert_eq!(cfg.reveal_delay, DEFAULT_REVEAL_DELAY);
    }
}
