// precis - summarize text from your terminal
//
// Paste or type text, press Ctrl+S, read the summary, copy it.
//
// Architecture:
// - Engine: pluggable summarization backends (Hugging Face API, local extractive)
// - Summarizer: the request lifecycle (input, pending, result slot, clipboard)
// - TUI (ratatui): composer, trigger and result panel over the summarizer
// - Headless: `precis summarize` runs the same lifecycle once and prints
// - Config: ~/.config/precis/config.toml layered under PRECIS_* env vars

mod cli;
mod clipboard;
mod config;
mod engine;
mod headless;
mod logging;
mod summarizer;
mod theme;
mod tui;
mod util;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use clipboard::SystemClipboard;
use config::Config;
use logging::{LogBuffer, LogTarget};
use std::sync::Arc;
use summarizer::Summarizer;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config management never starts an engine
    if let Some(Commands::Config {
        show,
        reset,
        edit,
        path,
    }) = cli.command
    {
        cli::handle_config(show, reset, edit, path);
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();
    let config = Config::from_env();

    // TUI mode captures logs into the panel buffer so they don't garble
    // the display; headless mode writes them to stderr
    let log_buffer = LogBuffer::new();
    let target = match cli.command {
        Some(Commands::Summarize { .. }) => LogTarget::Stderr,
        _ => LogTarget::Tui(log_buffer.clone()),
    };
    let _file_guard = logging::init(&config.logging, target)?;

    tracing::info!(
        version = config::VERSION,
        provider = config.engine.provider.as_str(),
        model = %config.engine.model,
        theme = %config.theme,
        "Starting precis"
    );
    if config.engine.provider == engine::ProviderType::HuggingFace && !config.engine.has_api_key()
    {
        tracing::warn!("No API key set (PRECIS_API_KEY or HF_TOKEN); summarization is disabled");
    }

    // One engine for the whole session
    let engine = engine::create_engine(&config.engine);
    tracing::debug!(
        engine = engine.name(),
        ready = engine.is_ready(),
        "Summarization engine created"
    );
    let summarizer = Summarizer::new(engine, Arc::new(SystemClipboard));

    match cli.command {
        Some(Commands::Summarize { file, copy }) => {
            if !headless::run(summarizer, file, copy).await? {
                std::process::exit(1);
            }
        }
        _ => {
            tui::run_tui(summarizer, log_buffer, &config).await?;
            tracing::info!("Shutting down");
        }
    }

    Ok(())
}
