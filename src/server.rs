//! HTTP transport for the MCP endpoint
//!
//! One JSON-RPC message per POST. The query string of each POST is captured
//! into the `RequestContext` of that call only, so concurrent calls never see
//! each other's credentials. No MCP session id is issued.

use crate::config::{NoteConfig, ServerConfig};
use crate::mcp::{self, McpResponse, RequestContext};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info};

struct AppState {
    note: NoteConfig,
}

/// Build the router serving MCP at `path`
pub fn router(path: &str, note: NoteConfig) -> Router {
    let state = Arc::new(AppState { note });
    Router::new()
        .route(path, post(handle_post))
        .with_state(state)
}

/// Bind and serve until ctrl-c
pub async fn serve(config: ServerConfig, note: NoteConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let path = config.normalized_path();
    let app = router(&path, note);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("note.com MCP server listening on http://{}{}", addr, path);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}

async fn handle_post(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HashMap<String, String>>,
    body: String,
) -> Response {
    let request = match mcp::parse_request(&body) {
        Ok(request) => request,
        Err(e) => {
            error!("Failed to parse request: {}", e);
            let response =
                McpResponse::error(None, mcp::PARSE_ERROR, &format!("Invalid JSON: {}", e));
            return Json(response).into_response();
        }
    };

    if request.is_notification() {
        debug!("Notification: {}", request.method);
        return StatusCode::ACCEPTED.into_response();
    }

    debug!("Request: {}", request.method);
    let context = RequestContext::new(query, state.note.clone());
    let response = mcp::handle_request(request, &context).await;
    Json(response).into_response()
}
