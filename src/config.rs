//! Runtime configuration
//!
//! Values come from command-line flags with environment fallbacks (see `cli`).

use std::net::SocketAddr;
use std::time::Duration;
use url::Url;

/// Default note.com API origin
pub const DEFAULT_API_BASE: &str = "https://note.com";

/// Public origin used when building locator URLs ourselves
pub const PUBLIC_BASE: &str = "https://note.com";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_MCP_PATH: &str = "/mcp";

/// Settings for talking to the note.com API
#[derive(Debug, Clone)]
pub struct NoteConfig {
    pub api_base: Url,
    pub timeout: Duration,
}

impl NoteConfig {
    pub fn new(api_base: Url, timeout: Duration) -> Self {
        Self { api_base, timeout }
    }

    /// Resolve an API path against the configured base
    pub fn endpoint(&self, path: &str) -> Url {
        let mut url = self.api_base.clone();
        let base_path = url.path().trim_end_matches('/').to_string();
        url.set_path(&format!("{}{}", base_path, path));
        url
    }
}

impl Default for NoteConfig {
    fn default() -> Self {
        Self {
            api_base: Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL"),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Settings for the MCP HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub path: String,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port).parse()?;
        Ok(addr)
    }

    /// Endpoint path, always with a leading slash
    pub fn normalized_path(&self) -> String {
        let trimmed = self.path.trim().trim_end_matches('/');
        if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{}", trimmed)
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            path: DEFAULT_MCP_PATH.to_string(),
        }
    }
}
