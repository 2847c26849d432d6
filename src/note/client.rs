//! note.com private API client
//!
//! Covers the four calls the tools need: sign in, create a blank text note,
//! publish it, or save it as a draft. Nothing is retried.

use crate::auth::{Credentials, NoteSession, SESSION_COOKIE, XSRF_COOKIE};
use crate::config::NoteConfig;
use crate::error::AppError;
use crate::http::CookieClient;
use crate::note::payload::{CreateTextNote, DraftSavePayload, PublishPayload};
use crate::note::response::{DraftSaveResponse, Envelope, PublishedNote, TextNote};
use reqwest::header::CONTENT_TYPE;
use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::debug;

pub const SIGN_IN_PATH: &str = "/api/v1/sessions/sign_in";
pub const TEXT_NOTES_PATH: &str = "/api/v1/text_notes";
pub const DRAFT_SAVE_PATH: &str = "/api/v1/text_notes/draft_save";

/// note.com API client bound to one cookie jar
pub struct NoteClient {
    http: CookieClient,
    config: NoteConfig,
}

impl NoteClient {
    /// Create a client with a fresh, empty cookie jar
    pub fn new(config: &NoteConfig) -> Result<Self, AppError> {
        Ok(Self {
            http: CookieClient::new(config.timeout)?,
            config: config.clone(),
        })
    }

    /// Sign in and pick the session and XSRF cookies out of the jar
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<NoteSession, AppError> {
        let url = self.config.endpoint(SIGN_IN_PATH);
        debug!("Signing in to {}", url);

        let body = serde_json::json!({
            "login": credentials.email,
            "password": credentials.password(),
        });

        let response = self
            .http
            .client
            .post(url.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Sign-in request failed: {}", e)))?;
        ensure_success("Sign-in", response).await?;

        if self.http.cookie(&url, SESSION_COOKIE).is_none() {
            return Err(AppError::AuthenticationFailed(format!(
                "{} cookie not found after a successful sign-in",
                SESSION_COOKIE
            )));
        }
        let xsrf_token = self.http.cookie(&url, XSRF_COOKIE);
        if xsrf_token.is_none() {
            debug!("No {} cookie issued, continuing without it", XSRF_COOKIE);
        }

        Ok(NoteSession::new(xsrf_token))
    }

    /// Create an empty text note to write into
    pub async fn create_text_note(&self, session: &NoteSession) -> Result<TextNote, AppError> {
        let url = self.config.endpoint(TEXT_NOTES_PATH);
        debug!("Creating text note");

        let request = self.http.client.post(url).json(&CreateTextNote::blank());
        let response = session
            .authorize(request)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Note creation request failed: {}", e)))?;
        let response = ensure_success("Note creation", response).await?;

        let envelope: Envelope<TextNote> = parse_json("note creation", response).await?;
        debug!("Created text note id={} key={}", envelope.data.id, envelope.data.key);
        Ok(envelope.data)
    }

    /// Publish `note` with the given payload, returning its public URL
    pub async fn publish_text_note(
        &self,
        session: &NoteSession,
        note: &TextNote,
        payload: &PublishPayload,
    ) -> Result<String, AppError> {
        let url = self
            .config
            .endpoint(&format!("{}/{}", TEXT_NOTES_PATH, note.id));
        debug!("Publishing text note id={}", note.id);

        let request = self.http.client.put(url).json(payload);
        let response = session
            .authorize(request)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Publish request failed: {}", e)))?;
        let response = ensure_success("Publish", response).await?;

        let envelope: Envelope<PublishedNote> = parse_json("publish", response).await?;
        Ok(envelope.data.note_url)
    }

    /// Save `note` as a temporary (unpublished) draft
    pub async fn draft_save(
        &self,
        session: &NoteSession,
        note: &TextNote,
        payload: &DraftSavePayload,
    ) -> Result<DraftSaveResponse, AppError> {
        let url = self.config.endpoint(DRAFT_SAVE_PATH);
        debug!("Saving draft for text note id={}", note.id);

        let id = note.id.to_string();
        let request = self
            .http
            .client
            .post(url)
            .query(&[("id", id.as_str()), ("is_temp_saved", "true")])
            .json(payload);
        let response = session
            .authorize(request)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Draft save request failed: {}", e)))?;
        let response = ensure_success("Draft save", response).await?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                debug!("Could not read draft save body: {}", e);
                return Ok(DraftSaveResponse::Unparseable);
            }
        };

        Ok(DraftSaveResponse::classify(content_type.as_deref(), &body))
    }
}

/// Turn a non-2xx response into `AppError::HttpStatus`
async fn ensure_success(step: &'static str, response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(AppError::HttpStatus { step, status, body })
}

async fn parse_json<T: DeserializeOwned>(what: &str, response: Response) -> Result<T, AppError> {
    let text = response
        .text()
        .await
        .map_err(|e| AppError::Network(format!("Failed to read {} response: {}", what, e)))?;
    serde_json::from_str(&text)
        .map_err(|e| AppError::Parse(format!("Failed to parse {} response: {}", what, e)))
}
