//! Response shapes returned by the note.com text note endpoints

use serde::Deserialize;
use serde_json::Value;

/// `{ "data": ... }` envelope used by every endpoint
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Newly created, still empty text note
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TextNote {
    /// Internal numeric id, used in API paths
    pub id: u64,
    /// Public key, used in shareable URLs
    pub key: String,
}

#[derive(Debug, Deserialize)]
pub struct PublishedNote {
    pub note_url: String,
}

/// What came back from a draft save
#[derive(Debug, Clone, PartialEq)]
pub enum DraftSaveResponse {
    /// JSON body carrying a usable `data.note_url`
    Url(String),
    /// JSON body without a usable URL
    NoUrl,
    /// Not JSON, or not parseable
    Unparseable,
}

impl DraftSaveResponse {
    /// Classify a draft-save body. Only `application/json` bodies are parsed.
    pub fn classify(content_type: Option<&str>, body: &str) -> Self {
        let is_json = content_type
            .map(|ct| ct.trim_start().starts_with("application/json"))
            .unwrap_or(false);
        if !is_json {
            return DraftSaveResponse::Unparseable;
        }

        let value: Value = match serde_json::from_str(body) {
            Ok(value) => value,
            Err(_) => return DraftSaveResponse::Unparseable,
        };

        match value
            .get("data")
            .and_then(|data| data.get("note_url"))
            .and_then(Value::as_str)
        {
            Some(url) if !url.is_empty() => DraftSaveResponse::Url(url.to_string()),
            _ => DraftSaveResponse::NoUrl,
        }
    }

    /// Locator to hand back, falling back to `fallback` unless a URL was returned
    pub fn into_url(self, fallback: impl FnOnce() -> String) -> String {
        match self {
            DraftSaveResponse::Url(url) => url,
            DraftSaveResponse::NoUrl | DraftSaveResponse::Unparseable => fallback(),
        }
    }
}
