//! CLI mode implementation
//!
//! Provides the command-line interface and the tool argument structs, which
//! double as MCP input schemas.

use crate::auth::Credentials;
use crate::config::{
    NoteConfig, ServerConfig, DEFAULT_API_BASE, DEFAULT_HOST, DEFAULT_MCP_PATH, DEFAULT_PORT,
    DEFAULT_TIMEOUT_SECS,
};
use clap::{Args, Parser, Subcommand};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// note.com MCP server and CLI
#[derive(Parser, Debug)]
#[command(name = "note-mcp")]
#[command(about = "Publish articles and save drafts on note.com", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub note: NoteArgs,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output (no short flag to avoid conflicts)
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Publish a new article
    Publish(ArticleCommand),
    /// Save a new article as a draft and print its URL
    Draft(ArticleCommand),
}

/// MCP listener settings
#[derive(Args, Debug, Clone)]
pub struct ServerArgs {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Path the MCP endpoint is served at
    #[arg(long, env = "MCP_PATH", default_value = DEFAULT_MCP_PATH)]
    pub path: String,
}

impl From<ServerArgs> for ServerConfig {
    fn from(args: ServerArgs) -> Self {
        ServerConfig {
            host: args.host,
            port: args.port,
            path: args.path,
        }
    }
}

/// note.com API settings
#[derive(Args, Debug, Clone)]
pub struct NoteArgs {
    /// Base URL of the note.com API
    #[arg(long, env = "NOTE_API_BASE", default_value = DEFAULT_API_BASE, global = true)]
    pub api_base: Url,

    /// Per-request timeout in seconds
    #[arg(long, env = "NOTE_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_secs: u64,
}

impl From<NoteArgs> for NoteConfig {
    fn from(args: NoteArgs) -> Self {
        NoteConfig::new(args.api_base, Duration::from_secs(args.timeout_secs))
    }
}

/// Arguments shared by the publish and draft tools
#[derive(Args, JsonSchema, Deserialize, Serialize, Clone, Debug)]
pub struct ArticleArgs {
    /// Article title
    #[arg(short = 't', long)]
    #[schemars(description = "Article title")]
    pub title: String,

    /// Article body (HTML)
    #[arg(short = 'b', long)]
    #[schemars(description = "Article body (HTML)")]
    pub body: String,

    /// Hashtags, e.g. "#python" (repeatable)
    #[arg(long = "hashtag")]
    #[schemars(description = "Hashtags, e.g. [\"#python\", \"#fastmcp\"]")]
    pub hashtags: Option<Vec<String>>,
}

/// Article arguments plus account credentials, for CLI use
#[derive(Args, Debug)]
pub struct ArticleCommand {
    #[command(flatten)]
    pub article: ArticleArgs,

    /// note.com login (email or note ID)
    #[arg(short = 'e', long, env = "NOTE_EMAIL")]
    pub email: String,

    /// note.com password
    #[arg(short = 'p', long, env = "NOTE_PASSWORD", hide_env_values = true)]
    pub password: String,
}

impl ArticleCommand {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.email, &self.password)
    }
}
