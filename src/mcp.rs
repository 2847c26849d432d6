//! MCP (Model Context Protocol) handling module
//!
//! This module implements the JSON-RPC 2.0 messages for MCP communication.
//! The transport (HTTP) lives in `server`.

use crate::config::NoteConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, info};

pub const SERVER_NAME: &str = "note.com MCP";

pub const PROTOCOL_VERSION: &str = "2025-03-26";

pub const SERVER_INSTRUCTIONS: &str = "\
Model Context Protocol server for the note.com API.
Tools:
- post_note_article: publish a new article
- save_note_draft: save a new article as a draft

Connect to /mcp as a remote MCP server, passing your note.com login as the
`email` and `password` query parameters.";

// JSON-RPC error codes
pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
pub const INTERNAL_ERROR: i64 = -32603;

/// Per-request state handed to tool handlers.
///
/// Holds the query parameters of the transport request that carried the
/// tool call, plus the API settings the tools talk to.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub query: HashMap<String, String>,
    pub note: NoteConfig,
}

impl RequestContext {
    pub fn new(query: HashMap<String, String>, note: NoteConfig) -> Self {
        Self { query, note }
    }
}

/// MCP JSON-RPC 2.0 request structure
#[derive(Debug, Deserialize)]
pub struct McpRequest {
    pub jsonrpc: String,
    pub id: Option<Value>,
    pub method: String,
    pub params: Option<Value>,
}

impl McpRequest {
    /// Requests without an id are notifications and get no response
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// Initialize request parameters
#[derive(Debug, Deserialize)]
pub struct InitializeParams {
    #[serde(rename = "clientInfo")]
    pub client_info: Option<ClientInfo>,
    #[serde(rename = "protocolVersion")]
    pub protocol_version: Option<String>,
}

/// Client information
#[derive(Debug, Deserialize, Clone)]
pub struct ClientInfo {
    pub name: Option<String>,
    pub version: Option<String>,
}

/// MCP JSON-RPC 2.0 response structure
#[derive(Debug, Serialize)]
pub struct McpResponse {
    pub jsonrpc: String,
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
}

/// JSON-RPC error object
#[derive(Debug, Serialize)]
pub struct McpError {
    pub code: i64,
    pub message: String,
}

/// MCP Tool call arguments
#[derive(Debug, Deserialize)]
pub struct ToolCallArgs {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

/// MCP Content item
#[derive(Debug, Serialize)]
pub struct ContentItem {
    pub r#type: String,
    pub text: String,
}

/// MCP Tool result
#[derive(Debug, Serialize)]
pub struct ToolResult {
    pub content: Vec<ContentItem>,
    #[serde(rename = "isError", skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl McpResponse {
    /// Create a successful response
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response
    pub fn error(id: Option<Value>, code: i64, message: &str) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(McpError {
                code,
                message: message.to_string(),
            }),
        }
    }
}

impl ToolResult {
    /// Create a text result
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem::text(content)],
            is_error: false,
        }
    }

    /// Successful result with no content
    pub fn empty() -> Self {
        Self {
            content: Vec::new(),
            is_error: false,
        }
    }

    /// Tool failure reported back to the caller
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem::text(message)],
            is_error: true,
        }
    }
}

impl ContentItem {
    /// Helper to create plain text content
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            r#type: "text".to_string(),
            text: content.into(),
        }
    }
}

/// Parse MCP request from JSON string
pub fn parse_request(json: &str) -> Result<McpRequest, serde_json::Error> {
    serde_json::from_str(json)
}

/// Handle a single MCP request
pub async fn handle_request(request: McpRequest, context: &RequestContext) -> McpResponse {
    if request.jsonrpc != "2.0" {
        return McpResponse::error(
            request.id,
            INVALID_REQUEST,
            "Only JSON-RPC 2.0 is supported",
        );
    }

    match request.method.as_str() {
        "initialize" => handle_initialize(request),
        "ping" => McpResponse::success(request.id, serde_json::json!({})),
        "tools/list" => handle_tools_list(request),
        "tools/call" => handle_tool_call(request, context).await,
        _ => McpResponse::error(
            request.id,
            METHOD_NOT_FOUND,
            &format!("Method '{}' not found", request.method),
        ),
    }
}

/// Handle tools/call method
async fn handle_tool_call(request: McpRequest, context: &RequestContext) -> McpResponse {
    let args: ToolCallArgs = match serde_json::from_value(request.params.unwrap_or_default()) {
        Ok(args) => args,
        Err(e) => {
            return McpResponse::error(
                request.id,
                INVALID_PARAMS,
                &format!("Invalid parameters: {}", e),
            )
        }
    };

    debug!("Tool call: {}", args.name);

    match args.name.as_str() {
        crate::tools::publish::TOOL_NAME => {
            crate::tools::publish::handle_publish(request.id, args.arguments, context).await
        }
        crate::tools::draft::TOOL_NAME => {
            crate::tools::draft::handle_draft(request.id, args.arguments, context).await
        }
        _ => McpResponse::error(
            request.id,
            INVALID_PARAMS,
            &format!("Tool '{}' not found", args.name),
        ),
    }
}

/// Handle tools/list method
fn handle_tools_list(request: McpRequest) -> McpResponse {
    let tools = build_tools_array();

    McpResponse::success(request.id, serde_json::json!({ "tools": tools }))
}

/// Handle initialize method
fn handle_initialize(request: McpRequest) -> McpResponse {
    let mut protocol_version = PROTOCOL_VERSION.to_string();

    if let Some(params) = request.params {
        if let Ok(init_params) = serde_json::from_value::<InitializeParams>(params) {
            let client = init_params
                .client_info
                .and_then(|info| info.name.map(|name| (name, info.version)));
            match client {
                Some((name, version)) => info!(
                    "Client connected: {} {}",
                    name,
                    version.unwrap_or_default()
                ),
                None => info!("Client connected: Unknown Client"),
            }
            if let Some(requested) = init_params.protocol_version {
                protocol_version = requested;
            }
        }
    }

    let result = serde_json::json!({
        "protocolVersion": protocol_version,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION"),
        },
        "capabilities": {
            "tools": { "listChanged": false }
        },
        "instructions": SERVER_INSTRUCTIONS,
    });
    McpResponse::success(request.id, result)
}

/// Build the tools array returned from tools/list
pub fn build_tools_array() -> Value {
    use crate::cli::ArticleArgs;
    use schemars::schema_for;

    // Both tools take the same arguments
    let article_schema = schema_for!(ArticleArgs);

    serde_json::json!([
        {
            "name": crate::tools::publish::TOOL_NAME,
            "description": "Publish a new article on note.com. Arguments: title, body (HTML), \
                            hashtags (e.g. [\"#python\", \"#fastmcp\"]).",
            "inputSchema": article_schema,
            "annotations": { "readOnlyHint": true }
        },
        {
            "name": crate::tools::draft::TOOL_NAME,
            "description": "Save a new article on note.com as a draft and return its URL. \
                            Arguments: title, body (HTML), hashtags (currently unused).",
            "inputSchema": article_schema,
            "annotations": { "readOnlyHint": true }
        }
    ])
}
