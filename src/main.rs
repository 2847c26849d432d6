//! note.com MCP Server & CLI (Rust)
//!
//! Dual-mode application:
//! - MCP Server Mode (default): Model Context Protocol server over HTTP
//! - CLI Mode: run a tool directly with `publish` or `draft`
//!
//! Implements two tools:
//! - `post_note_article(title, body, hashtags)` - Publish a new article
//! - `save_note_draft(title, body, hashtags)` - Save a new article as a draft

mod auth;
mod cli;
mod config;
mod error;
mod http;
mod mcp;
mod note;
mod server;
mod tools;

#[cfg(test)]
mod tests_mcp_tools;

use anyhow::Result;
use clap::Parser;
use cli::{ArticleCommand, Cli, Commands};
use config::{NoteConfig, ServerConfig};
use error::AppError;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to stderr to keep stdout clean for CLI output
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let note_config: NoteConfig = cli.note.into();

    match cli.command {
        None => run_mcp_mode(cli.server.into(), note_config).await,
        Some(command) => run_cli_mode(command, note_config).await,
    }
}

/// Run in MCP server mode
async fn run_mcp_mode(server: ServerConfig, note: NoteConfig) -> Result<()> {
    info!("Starting note.com MCP Server");
    server::serve(server, note).await
}

/// Run a single tool from the command line
async fn run_cli_mode(command: Commands, note: NoteConfig) -> Result<()> {
    let result = match command {
        Commands::Publish(args) => execute_publish_cli(args, &note).await,
        Commands::Draft(args) => execute_draft_cli(args, &note).await,
    };

    match result {
        Ok(Some(output)) => {
            println!("{}", output);
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

/// Publish prints nothing on success, matching the MCP tool
async fn execute_publish_cli(
    args: ArticleCommand,
    note: &NoteConfig,
) -> Result<Option<String>, AppError> {
    let credentials = args.credentials();
    tools::publish::execute_publish(args.article, &credentials, note).await?;
    Ok(None)
}

async fn execute_draft_cli(
    args: ArticleCommand,
    note: &NoteConfig,
) -> Result<Option<String>, AppError> {
    let credentials = args.credentials();
    let url = tools::draft::execute_draft(args.article, &credentials, note).await?;
    Ok(Some(url))
}
