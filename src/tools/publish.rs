//! Publish tool implementation
//!
//! Implements the `post_note_article(title, body, hashtags)` MCP tool

use crate::auth::Credentials;
use crate::cli::ArticleArgs;
use crate::config::NoteConfig;
use crate::error::AppError;
use crate::mcp::{McpResponse, RequestContext, ToolResult};
use crate::note::payload::{PublishPayload, PUBLISH_TEMPLATE_VERSION};
use serde_json::Value;
use tracing::{debug, info};

pub const TOOL_NAME: &str = "post_note_article";

/// Handle post_note_article tool call
pub async fn handle_publish(
    id: Option<Value>,
    args: Value,
    context: &RequestContext,
) -> McpResponse {
    // The URL is deliberately not returned; callers get an empty result.
    let result = handle_publish_impl(args, context)
        .await
        .map(|()| ToolResult::empty());
    super::into_response(id, TOOL_NAME, result)
}

async fn handle_publish_impl(args: Value, context: &RequestContext) -> Result<(), AppError> {
    let article = super::parse_article_args(args)?;
    let credentials = Credentials::from_query(&context.query)?;

    execute_publish(article, &credentials, &context.note).await
}

/// Execute publish (shared implementation for MCP and CLI)
pub async fn execute_publish(
    article: ArticleArgs,
    credentials: &Credentials,
    config: &NoteConfig,
) -> Result<(), AppError> {
    debug!(
        "Publish request, title: '{}' (template {})",
        article.title, PUBLISH_TEMPLATE_VERSION
    );

    let (auth, note) = super::start_note(credentials, config).await?;

    let payload = PublishPayload::published(
        &article.title,
        &article.body,
        article.hashtags.unwrap_or_default(),
        &note.key,
    );
    let note_url = auth
        .client
        .publish_text_note(&auth.session, &note, &payload)
        .await?;

    info!("Published note {} at {}", note.key, note_url);
    Ok(())
}
