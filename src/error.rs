//! Error types and handling for the note.com MCP server

use reqwest::StatusCode;
use thiserror::Error;

/// Example connection URL shown when credentials are missing
pub const EXAMPLE_CONNECT_URL: &str =
    "https://note-com.fastmcp.app/mcp?email=foo@gmail.com&password=YOUR_PASSWORD";

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("{step} failed with status {status}: {body}")]
    HttpStatus {
        step: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Missing out-of-band parameter on the transport request
    pub fn missing_parameter(name: &str) -> Self {
        AppError::InvalidInput(format!(
            "Missing '{}' query parameter. {}",
            name, EXAMPLE_CONNECT_URL
        ))
    }

    /// Get the error code for MCP responses
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::AuthenticationFailed(_) => "authentication_failed",
            AppError::HttpStatus { .. } => "http_status",
            AppError::Network(_) => "network_error",
            AppError::Parse(_) => "parse_error",
            AppError::Internal(_) => "internal_error",
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Process exit code used in CLI mode
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::InvalidInput(_) => 1,
            AppError::HttpStatus { .. } | AppError::Network(_) => 2,
            AppError::AuthenticationFailed(_) => 3,
            AppError::Parse(_) => 4,
            AppError::Internal(_) => 5,
        }
    }
}
