//! Anteroom CLI - Workspace directory admission frontend.
//!
//! A thin frontend over the admission runtime: it loads the session
//! configuration, seeds the pending queue from `--include-directories`,
//! resolves the workspace trust verdict (from config or an interactive
//! prompt), runs the startup reconciliation, and then dispatches the
//! `directory` subcommands.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::path::PathBuf;
use std::sync::Arc;

use anteroom_admission::AdmissionError;
use anteroom_core::{MessageSink, UserMessage};
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod memory;
mod prompt;
mod session;
mod sink;

use commands::directory;
use config::SessionConfig;
use prompt::DialogTrustPrompt;
use session::Session;
use sink::TerminalSink;

/// Anteroom - Workspace admission runtime
#[derive(Parser)]
#[command(name = "anteroom")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the session configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directories to admit once the workspace trust verdict is known
    #[arg(long = "include-directories", value_delimiter = ',')]
    include_directories: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage workspace directories
    Directory {
        #[command(subcommand)]
        action: DirectoryAction,
    },
}

#[derive(Subcommand)]
enum DirectoryAction {
    /// Add directories to the workspace. Use comma to separate multiple paths
    Add {
        /// Comma-separated paths to add
        #[arg(required = true, num_args = 1..)]
        paths: Vec<String>,
    },
    /// Show all directories in the workspace
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let sink = Arc::new(TerminalSink);

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "session configuration unavailable");
            sink.emit(UserMessage::error(
                AdmissionError::ConfigurationUnavailable.to_string(),
            ));
            return Ok(());
        },
    };

    let mut session = Session::bootstrap(config, cli.include_directories, Arc::clone(&sink) as _)?;
    let dialog = DialogTrustPrompt;
    session.resolve_trust_and_reconcile(&dialog).await;

    match cli.command {
        Commands::Directory { action } => match action {
            DirectoryAction::Add { paths } => {
                directory::add(&session, &paths.join(" "), &dialog).await;
            },
            DirectoryAction::Show => directory::show(&session),
        },
    }

    Ok(())
}

/// Load the session configuration, or defaults when no file was given.
fn load_config(path: Option<&std::path::Path>) -> Result<SessionConfig, config::ConfigError> {
    match path {
        Some(path) => SessionConfig::load(path),
        None => Ok(SessionConfig::default()),
    }
}
