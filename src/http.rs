//! HTTP client utilities
//!
//! Every tool invocation builds its own client with its own cookie jar, so no
//! session state is shared between calls. Proxy env vars (HTTP_PROXY,
//! HTTPS_PROXY, NO_PROXY) are honored by reqwest's system proxy support.

use crate::error::AppError;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ORIGIN, REFERER};
use reqwest::redirect::Policy;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Browser user agent the note.com editor endpoints expect
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit(KHTML, like Gecko) Chrome/96.0.4664.110 Safari/537.36";

pub const EDITOR_ORIGIN: &str = "https://editor.note.com";
pub const EDITOR_REFERER: &str = "https://editor.note.com/";

/// Client plus the cookie jar it writes into
pub struct CookieClient {
    pub client: Client,
    jar: Arc<Jar>,
}

impl CookieClient {
    /// Build a client that presents itself as the note.com web editor.
    ///
    /// Redirects are not followed, so a 3xx surfaces as a failed step.
    pub fn new(timeout: Duration) -> Result<Self, AppError> {
        let jar = Arc::new(Jar::default());

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(ORIGIN, HeaderValue::from_static(EDITOR_ORIGIN));
        headers.insert(REFERER, HeaderValue::from_static(EDITOR_REFERER));

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(BROWSER_USER_AGENT)
            .default_headers(headers)
            .redirect(Policy::none())
            .cookie_provider(jar.clone())
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, jar })
    }

    /// Look up a cookie the jar would send to `url`
    pub fn cookie(&self, url: &Url, name: &str) -> Option<String> {
        let header = self.jar.cookies(url)?;
        let raw = header.to_str().ok()?;
        find_cookie(raw, name)
    }
}

/// Find `name` in a `Cookie` header value (`a=1; b=2`)
fn find_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}
