//! Thapar chatbot cli definition and entrypoint.
mod chat;
pub mod ux;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use thapar_core::assistant::Assistant;
use thapar_core::config::get_config;
use thapar_core::get_completion_llm;
use tracing::info;

use crate::log::setup_logging;

/// Thapar University information chatbot.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Model to use, must be defined in the config.
    #[arg(short, long)]
    model: Option<String>,

    /// Generation profile to use, must be defined in the config.
    #[arg(short, long)]
    profile: Option<String>,

    /// Write debug logs to the data directory.
    #[arg(short, long)]
    verbose: bool,
}

/// Runs the main CLI application.
pub async fn run() -> Result<()> {
    // Values from .env never override the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if cli.verbose {
        setup_logging().context("Failed to set up logging")?;
    }

    let assistant = load_assistant(cli.config, cli.model.as_deref(), cli.profile.as_deref())?;
    info!(model = assistant.model_name(), profile = ?assistant.profile(), "Assistant ready");

    chat::execute(assistant).await
}

/// Builds the assistant from configuration. Fails before any terminal
/// interaction if the model credential is missing.
fn load_assistant(
    config_path: Option<PathBuf>,
    model: Option<&str>,
    profile: Option<&str>,
) -> Result<Assistant> {
    let config = get_config(config_path).context("Failed to load configuration")?;
    let model_config = config.chat_model(model)?;
    let profile = config.chat_profile(profile)?;
    let model = get_completion_llm(model_config)?;
    Ok(Assistant::new(model, profile).with_retries(config.chat.retries))
}
