//! LuGPT CLI
//!
//! Main entry point for the lugpt command-line tool.
//! A conversational assistant over the hosted retrieval service.

mod commands;

use clap::{Parser, Subcommand};
use commands::{AskCommand, ChatCommand};
use lugpt_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;

/// LuGPT CLI - conversational answers with cited sources
#[derive(Parser, Debug)]
#[command(name = "lugpt")]
#[command(about = "Conversational answers with cited sources", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, env = "LUGPT_CONFIG")]
    config: Option<PathBuf>,

    /// Retrieval provider (http, mock)
    #[arg(short, long, global = true, env = "LUGPT_PROVIDER")]
    provider: Option<String>,

    /// Base URL of the retrieval service
    #[arg(short, long, global = true, env = "LUGPT_ENDPOINT")]
    endpoint: Option<String>,

    /// Vector store collection to search
    #[arg(long, global = true, env = "LUGPT_COLLECTION")]
    collection: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask a single question
    Ask(AskCommand),

    /// Interactive chat session with follow-up questions
    Chat(ChatCommand),
}

#[tokio::main]
async fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    // Load base configuration from file and environment
    let config = AppConfig::load()?;

    // Apply CLI overrides
    let config = config.with_overrides(
        cli.config,
        cli.provider,
        cli.endpoint,
        cli.collection,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("LuGPT CLI starting");
    tracing::debug!("Provider: {}", config.provider);
    tracing::debug!("Endpoint: {}", config.endpoint);
    tracing::debug!("Collection: {}", config.collection);

    config.validate()?;

    let command_name = match &cli.command {
        Commands::Ask(_) => "ask",
        Commands::Chat(_) => "chat",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    // Route to command handlers
    let result = match cli.command {
        Commands::Ask(cmd) => cmd.execute(&config).await,
        Commands::Chat(cmd) => cmd.execute(&config).await,
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
