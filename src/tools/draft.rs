//! Draft tool implementation
//!
//! Implements the `save_note_draft(title, body, hashtags)` MCP tool

use crate::auth::Credentials;
use crate::cli::ArticleArgs;
use crate::config::NoteConfig;
use crate::error::AppError;
use crate::mcp::{McpResponse, RequestContext, ToolResult};
use crate::note::payload::DraftSavePayload;
use crate::note::locator::draft_fallback_url;
use crate::note::DraftSaveResponse;
use serde_json::Value;
use tracing::{debug, info};

pub const TOOL_NAME: &str = "save_note_draft";

/// Handle save_note_draft tool call
pub async fn handle_draft(id: Option<Value>, args: Value, context: &RequestContext) -> McpResponse {
    let result = handle_draft_impl(args, context).await.map(ToolResult::text);
    super::into_response(id, TOOL_NAME, result)
}

async fn handle_draft_impl(args: Value, context: &RequestContext) -> Result<String, AppError> {
    let article = super::parse_article_args(args)?;
    let credentials = Credentials::from_query(&context.query)?;

    execute_draft(article, &credentials, &context.note).await
}

/// Execute draft save (shared implementation for MCP and CLI).
///
/// Hashtags are accepted but not sent; the draft endpoint ignores them.
pub async fn execute_draft(
    article: ArticleArgs,
    credentials: &Credentials,
    config: &NoteConfig,
) -> Result<String, AppError> {
    debug!("Draft request, title: '{}'", article.title);

    let (auth, note) = super::start_note(credentials, config).await?;

    let payload = DraftSavePayload::new(&article.title, &article.body);
    debug!("Draft visible length: {}", payload.body_length);

    let response = auth
        .client
        .draft_save(&auth.session, &note, &payload)
        .await?;

    match &response {
        DraftSaveResponse::Url(_) => {}
        DraftSaveResponse::NoUrl => debug!("Draft save returned no note_url, using fallback"),
        DraftSaveResponse::Unparseable => {
            debug!("Draft save response was not usable JSON, using fallback")
        }
    }

    let url = response.into_url(|| draft_fallback_url(&note.key));
    info!("Saved draft {} at {}", note.key, url);
    Ok(url)
}
