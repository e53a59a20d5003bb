// src/config.rs

/// Endpoint por defecto: el json-server local de desarrollo.
pub const DEFAULT_QUESTIONS_URL: &str = "http://localhost:8000/questions";
pub const QUESTIONS_URL_VAR: &str = "QUIZ_QUESTIONS_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    /// URL http(s) o, en escritorio, ruta a un fichero JSON local.
    pub questions_url: String,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            questions_url: DEFAULT_QUESTIONS_URL.to_string(),
        }
    }
}

fn normalize_url(value: &str) -> Option<String> {
    Some(value.trim()).filter(|v| !v.is_empty()).map(str::to_owned)
}

impl QuizConfig {
    pub fn with_questions_url(url: impl Into<String>) -> Self {
        Self {
            questions_url: url.into(),
        }
    }

    /// Resuelve la configuración a partir de un valor opcional (variable de
    /// entorno o similar), cayendo al valor por defecto si está vacío.
    pub fn from_value(value: Option<&str>) -> Self {
        value
            .and_then(normalize_url)
            .map(Self::with_questions_url)
            .unwrap_or_default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        let value = std::env::var(QUESTIONS_URL_VAR).ok();
        Self::from_value(value.as_deref())
    }

    /// Primera fuente del navegador que tenga valor, en el orden de [`WebSource::ORDER`].
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        let url = option_env!("QUIZ_QUESTIONS_URL")
            .and_then(normalize_url)
            .or_else(|| WebSource::ORDER.iter().find_map(|source| source.lookup()));
        match url {
            Some(url) => Self::with_questions_url(url),
            None => Self::default(),
        }
    }

    pub fn is_remote(&self) -> bool {
        is_http_url(&self.questions_url)
    }
}

pub fn is_http_url(value: &str) -> bool {
    let lower = value.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Sitios de la página donde se puede fijar la URL de las preguntas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebSource {
    QueryParam(&'static str),
    MetaTag(&'static str),
    LocalStorage(&'static str),
}

impl WebSource {
    pub const ORDER: [WebSource; 3] = [
        WebSource::QueryParam("questions_url"),
        WebSource::MetaTag("quiz-questions-url"),
        WebSource::LocalStorage("quiz_questions_url"),
    ];

    #[cfg(target_arch = "wasm32")]
    fn lookup(self) -> Option<String> {
        let window = web_sys::window()?;
        let raw = match self {
            WebSource::QueryParam(key) => {
                let search = window.location().search().ok()?;
                let value = query_value(&search, key)?;
                js_sys::decode_uri_component(value).ok()?.as_string()?
            }
            WebSource::MetaTag(name) => window
                .document()?
                .query_selector(&format!("meta[name='{name}']"))
                .ok()??
                .get_attribute("content")?,
            WebSource::LocalStorage(key) => window.local_storage().ok()??.get_item(key).ok()??,
        };
        normalize_url(&raw)
    }
}

/// Valor sin decodificar de `key` en una query string (`?a=1&b=2`).
pub fn query_value<'a>(search: &'a str, key: &str) -> Option<&'a str> {
    search
        .trim_start_matches('?')
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}
