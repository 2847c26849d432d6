//! MCP tools implementation

pub mod draft;
pub mod publish;


use crate::auth::{AuthenticatedClient, Credentials, SessionManager};
use crate::cli::ArticleArgs;
use crate::config::NoteConfig;
use crate::error::AppError;
use crate::mcp::{McpResponse, ToolResult};
use crate::note::TextNote;
use serde_json::Value;
use tracing::warn;

/// Sign in and create the blank note both tools write into.
///
/// Nothing is cleaned up if a later step fails; the empty note stays.
pub(crate) async fn start_note(
    credentials: &Credentials,
    config: &NoteConfig,
) -> Result<(AuthenticatedClient, TextNote), AppError> {
    let auth = SessionManager::new(config.clone()).login(credentials).await?;
    let note = auth.client.create_text_note(&auth.session).await?;
    Ok((auth, note))
}

fn parse_article_args(args: Value) -> Result<ArticleArgs, AppError> {
    serde_json::from_value(args)
        .map_err(|e| AppError::InvalidInput(format!("Invalid arguments: {}", e)))
}

/// Wrap a tool outcome in a JSON-RPC response; failures become `isError` results
fn into_response(
    id: Option<Value>,
    tool: &str,
    result: Result<ToolResult, AppError>,
) -> McpResponse {
    let tool_result = match result {
        Ok(tool_result) => tool_result,
        Err(e) => {
            warn!("{} failed ({}): {}", tool, e.error_code(), e);
            ToolResult::error(e.message())
        }
    };

    match serde_json::to_value(tool_result) {
        Ok(value) => McpResponse::success(id, value),
        Err(e) => McpResponse::error(
            id,
            crate::mcp::INTERNAL_ERROR,
            &format!("Failed to serialize tool result: {}", e),
        ),
    }
}
