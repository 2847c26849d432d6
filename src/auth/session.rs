//! Authenticated note.com sessions
//!
//! A session is scoped to the client (and cookie jar) that created it and is
//! dropped when the invocation ends. The session cookie itself stays in that
//! jar; only the anti-forgery token has to be echoed by hand.

use crate::auth::Credentials;
use crate::config::NoteConfig;
use crate::error::AppError;
use crate::note::NoteClient;
use reqwest::RequestBuilder;
use std::fmt;
use tracing::debug;

/// Session cookie set by a successful sign-in
pub const SESSION_COOKIE: &str = "_note_session_v5";

/// Cookie carrying the anti-forgery token
pub const XSRF_COOKIE: &str = "XSRF-TOKEN";

/// Header the anti-forgery token is echoed in
pub const XSRF_HEADER: &str = "X-XSRF-TOKEN";

/// Session established by `sign_in`
pub struct NoteSession {
    xsrf_token: Option<String>,
}

impl NoteSession {
    pub fn new(xsrf_token: Option<String>) -> Self {
        Self { xsrf_token }
    }

    pub fn xsrf_token(&self) -> Option<&str> {
        self.xsrf_token.as_deref()
    }

    /// Attach the anti-forgery header, when the server issued a token
    pub fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.xsrf_token {
            Some(token) => request.header(XSRF_HEADER, token),
            None => request,
        }
    }
}

impl fmt::Debug for NoteSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoteSession")
            .field("has_xsrf_token", &self.xsrf_token.is_some())
            .finish()
    }
}

/// Client paired with the session it signed in
pub struct AuthenticatedClient {
    pub client: NoteClient,
    pub session: NoteSession,
}

/// Signs in with per-invocation credentials
pub struct SessionManager {
    config: NoteConfig,
}

impl SessionManager {
    pub fn new(config: NoteConfig) -> Self {
        Self { config }
    }

    /// Build a fresh client and sign it in
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthenticatedClient, AppError> {
        let client = NoteClient::new(&self.config)?;
        let session = client.sign_in(credentials).await?;
        debug!(
            "Signed in to note.com (xsrf token: {})",
            session.xsrf_token().is_some()
        );
        Ok(AuthenticatedClient { client, session })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_debug_hides_token() {
        let session = NoteSession::new(Some("secret-token".to_string()));
        let debug = format!("{:?}", session);
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("has_xsrf_token: true"));
    }

    #[test]
    fn test_authorize_adds_header_only_with_token() {
        let client = reqwest::Client::new();

        let with_token = NoteSession::new(Some("tok".to_string()));
        let request = with_token
            .authorize(client.get("http://127.0.0.1/"))
            .build()
            .unwrap();
        assert_eq!(request.headers().get(XSRF_HEADER).unwrap(), "tok");

        let without_token = NoteSession::new(None);
        let request = without_token
            .authorize(client.get("http://127.0.0.1/"))
            .build()
            .unwrap();
        assert!(request.headers().get(XSRF_HEADER).is_none());
    }
}
