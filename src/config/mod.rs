//! Configuration for precis
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/precis/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod engine;
mod observability;
mod serialization;
mod ui;


pub use engine::{EngineConfig, FileEngine};
pub use observability::{FileLogging, LogRotation, LoggingConfig};
pub use ui::{FileUi, UiConfig};

use crate::engine::ProviderType;

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Theme used when none is configured
pub const DEFAULT_THEME: &str = "default";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "default", "nord", "gruvbox", "light"
    pub theme: String,

    /// Summarization engine settings
    pub engine: EngineConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Terminal UI settings
    pub ui: UiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            engine: EngineConfig::default(),
            logging: LoggingConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,

    /// Optional [engine] section
    pub engine: Option<FileEngine>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,

    /// Optional [ui] section
    pub ui: Option<FileUi>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/precis/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("precis").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        // Config is optional, so a failed write is not worth reporting
        let _ = Self::write_default(&path);
    }

    /// Write the default template to `path`, replacing anything there
    pub fn write_default(path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, Self::default().to_toml())
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Read and parse the config file at `path`
    ///
    /// A missing file yields the empty file layer. A file that exists but
    /// cannot be read or parsed is an error.
    pub(crate) fn load_file_config(path: &Path) -> anyhow::Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e).with_context(|| format!("Cannot read {}", path.display())),
        }
    }

    /// Load configuration: file -> env vars -> defaults
    ///
    /// # Exits
    /// If the config file exists but cannot be read or parsed. A broken config
    /// should fail fast with a clear error, not silently fall back to defaults
    /// while the user debugs the wrong thing.
    pub fn from_env() -> Self {
        let file = match Self::config_path() {
            Some(path) => match Self::load_file_config(&path) {
                Ok(file) => file,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to load configuration file           ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {:#}\n", e);
                    eprintln!("  Tip: Check for:\n");
                    eprintln!("    - Missing quotes around string values");
                    eprintln!("    - Invalid boolean values (use true/false)");
                    eprintln!("    - Typos in section names\n");
                    eprintln!("  To reset, run `precis config --reset`.\n");
                    std::process::exit(1);
                }
            },
            None => FileConfig::default(),
        };

        Self::from_sources(file, |key| std::env::var(key).ok())
    }

    /// Merge a parsed file layer with environment lookups
    ///
    /// `env` returns the value of an environment variable, if set. Empty
    /// values count as unset.
    pub(crate) fn from_sources(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let env = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        // Theme: env > file > default
        let theme = env("PRECIS_THEME")
            .or(file.theme)
            .unwrap_or_else(|| DEFAULT_THEME.to_string());

        // API key: PRECIS_API_KEY > HF_TOKEN > file
        let api_key = env("PRECIS_API_KEY").or_else(|| env("HF_TOKEN"));
        let mut engine = EngineConfig::from_file(file.engine, api_key);

        if let Some(name) = env("PRECIS_PROVIDER") {
            match ProviderType::parse(&name) {
                Some(provider) => engine.provider = provider,
                None => eprintln!("Warning: ignoring unknown PRECIS_PROVIDER '{}'", name),
            }
        }
        if let Some(model) = env("PRECIS_MODEL") {
            engine.model = model;
        }
        if let Some(api_base) = env("PRECIS_API_BASE") {
            engine.api_base = Some(api_base);
        }

        let mut logging = LoggingConfig::from_file(file.logging);
        if let Some(level) = env("PRECIS_LOG_LEVEL") {
            logging.level = level;
        }

        let ui = UiConfig::from_file(file.ui);

        Self {
            theme,
            engine,
            logging,
            ui,
        }
    }
}
