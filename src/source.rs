//! Origen de las preguntas.
//!
//! Cada petición se resuelve una sola vez en `Ok(preguntas)` o en un
//! [`SourceError`]; no hay reintentos. En escritorio se usa `reqwest` en un
//! hilo aparte y en wasm el `fetch` del navegador. El resultado llega por un
//! canal que la UI consulta en cada frame.

use crate::model::Question;
use serde::Deserialize;
use std::sync::mpsc::Receiver;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("invalid question data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("fetch failed: {0}")]
    Fetch(String),
}

pub type LoadResult = Result<Vec<Question>, SourceError>;

#[derive(Deserialize)]
#[serde(untagged)]
enum QuestionPayload {
    List(Vec<Question>),
    Wrapped { questions: Vec<Question> },
}

/// Acepta tanto `[...]` como `{ "questions": [...] }`.
pub fn parse_questions(body: &str) -> LoadResult {
    let payload: QuestionPayload = match serde_json::from_str(body) {
        Ok(payload) => payload,
        // El error de `untagged` no dice nada útil; se repite contra la lista
        Err(_) => QuestionPayload::List(serde_json::from_str(body)?),
    };
    let questions = match payload {
        QuestionPayload::List(questions) => questions,
        QuestionPayload::Wrapped { questions } => questions,
    };
    log::debug!("Parsed {} questions", questions.len());
    Ok(questions)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn fetch_questions(url: &str) -> LoadResult {
    use reqwest::header::{ACCEPT, USER_AGENT};

    if !crate::config::is_http_url(url) {
        return read_questions_file(url);
    }

    let http_error = |source: reqwest::Error| SourceError::Http {
        url: url.to_string(),
        source,
    };
    let client = reqwest::blocking::Client::new();
    let response = client
        .get(url)
        .header(USER_AGENT, concat!("timed-quiz/", env!("CARGO_PKG_VERSION")))
        .header(ACCEPT, "application/json")
        .send()
        .map_err(http_error)?;

    if !response.status().is_success() {
        return Err(SourceError::Status {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }

    let body = response.text().map_err(http_error)?;
    parse_questions(&body)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_questions_file(path: &str) -> LoadResult {
    let body = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_string(),
        source,
    })?;
    parse_questions(&body)
}

/// Lanza la petición en segundo plano y devuelve el canal del resultado.
#[cfg(not(target_arch = "wasm32"))]
pub fn request_questions(url: String) -> Receiver<LoadResult> {
    let (tx, rx) = std::sync::mpsc::channel::<LoadResult>();
    std::thread::spawn(move || {
        log::info!("Fetching questions from {url}");
        let _ = tx.send(fetch_questions(&url));
    });
    rx
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_questions(url: &str) -> LoadResult {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let window = web_sys::window().ok_or_else(|| SourceError::Fetch("no window".into()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|err| SourceError::Fetch(format!("could not build request: {err:?}")))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|err| SourceError::Fetch(format!("could not set headers: {err:?}")))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| SourceError::Fetch(format!("{err:?}")))?;
    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| SourceError::Fetch("fetch did not return a Response".into()))?;

    if !response.ok() {
        return Err(SourceError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let promise = response
        .text()
        .map_err(|err| SourceError::Fetch(format!("{err:?}")))?;
    let text = JsFuture::from(promise)
        .await
        .map_err(|err| SourceError::Fetch(format!("{err:?}")))?
        .as_string()
        .ok_or_else(|| SourceError::Fetch("response body is not text".into()))?;

    parse_questions(&text)
}

#[cfg(target_arch = "wasm32")]
pub fn request_questions(url: String) -> Receiver<LoadResult> {
    let (tx, rx) = std::sync::mpsc::channel::<LoadResult>();
    wasm_bindgen_futures::spawn_local(async move {
        log::info!("Fetching questions from {url}");
        let _ = tx.send(fetch_questions(&url).await);
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUESTIONS_JSON: &str = r#"[
        {"question":"Which is the most popular JavaScript framework?","options":["Angular","React","Svelte","Vue"],"correctOption":1,"points":10},
        {"text":"Which company invented React?","options":["Google","Apple","Netflix","Facebook"],"correctOption":3,"points":10}
    ]"#;

    #[test]
    fn parses_plain_array() {
        let questions = parse_questions(QUESTIONS_JSON).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].text, "Which company invented React?");
        assert_eq!(questions[1].correct_option, 3);
    }

    #[test]
    fn parses_wrapped_object() {
        let body = format!(r#"{{"questions":{QUESTIONS_JSON}}}"#);
        let questions = parse_questions(&body).unwrap();
        assert_eq!(questions.len(), 2);
    }

    #[test]
    fn bundled_sample_is_valid() {
        let questions = parse_questions(include_str!("../data/questions.json")).unwrap();
        assert_eq!(questions.len(), 5);
        assert!(questions.iter().all(|q| q.correct_option < q.options.len()));
        assert_eq!(questions.iter().map(|q| q.points).sum::<u32>(), 80);
    }

    #[test]
    fn rejects_malformed_data() {
        let err = parse_questions(r#"[{"text":"sin opciones"}]"#).unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)));
        assert!(parse_questions("not json").is_err());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn reads_local_file_and_reports_missing_ones() {
        let path = std::env::temp_dir().join(format!("timed_quiz_{}.json", std::process::id()));
        std::fs::write(&path, QUESTIONS_JSON).unwrap();
        let questions = fetch_questions(path.to_str().unwrap()).unwrap();
        assert_eq!(questions.len(), 2);
        std::fs::remove_file(&path).unwrap();

        let err = fetch_questions(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn request_questions_resolves_once() {
        let rx = request_questions("/definitely/not/here.json".to_string());
        let result = rx.recv().unwrap();
        assert!(result.is_err());
        assert!(rx.recv().is_err());
    }
}
