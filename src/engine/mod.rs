//! Summarization engine abstraction
//!
//! The summarizer never knows which model produced a summary. It talks to a
//! `SummaryEngine` trait object that is built once at startup and shared.
//!
//! # Architecture
//!
//! ```text
//! SummaryEngine trait
//! ├── NoOpEngine        (provider = "none", every call fails)
//! ├── ExtractiveEngine  (local sentence scoring, no network, default)
//! └── HuggingFaceEngine (remote Inference API, bearer token)
//! ```
//!
//! Engines return the inference pipeline's native shape: a list of records,
//! each carrying a `summary_text`. Callers use the first record.

mod extractive;
mod remote;

pub use extractive::ExtractiveEngine;
pub use remote::{HuggingFaceEngine, DEFAULT_API_BASE, DEFAULT_MODEL};

use crate::config::EngineConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// One result record from a summarization pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub summary_text: String,
}

impl SummaryRecord {
    pub fn new(summary_text: impl Into<String>) -> Self {
        Self {
            summary_text: summary_text.into(),
        }
    }
}

/// Errors that can occur while producing a summary
///
/// Every variant is a "recognized" failure: it carries a message the user
/// gets to see in the result panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Provider is disabled or missing credentials
    NotConfigured,
    /// Input the engine cannot work with (e.g. no words at all)
    InvalidInput(String),
    /// Remote model is still loading (includes the server's estimate)
    ModelLoading { estimated_secs: Option<u64> },
    /// Rate limit exceeded
    RateLimited,
    /// Non-success response from a remote provider
    ApiError { status: u16, message: String },
    /// Transport failure (connect, timeout, TLS)
    NetworkError(String),
    /// Engine answered with zero records
    EmptyResponse,
    /// Anything else
    Internal(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConfigured => write!(f, "Summarization engine not configured"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::ModelLoading { estimated_secs } => match estimated_secs {
                Some(secs) => write!(f, "Model is loading, try again in ~{}s", secs),
                None => write!(f, "Model is loading, try again shortly"),
            },
            Self::RateLimited => write!(f, "Rate limited by the inference provider"),
            Self::ApiError { status, message } => write!(f, "API error ({}): {}", status, message),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::EmptyResponse => write!(f, "Engine returned no summary"),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}

/// Provider type for configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// Summarization disabled
    None,
    /// Local extractive summarizer
    #[default]
    Extractive,
    /// Hugging Face Inference API
    HuggingFace,
}

impl ProviderType {
    /// Parse a provider name from config or env (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" | "off" => Some(Self::None),
            "extractive" | "local" => Some(Self::Extractive),
            "huggingface" | "hf" | "remote" => Some(Self::HuggingFace),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Extractive => "extractive",
            Self::HuggingFace => "huggingface",
        }
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for summarization engines
///
/// Engines must be `Send + Sync`: the summarizer moves an `Arc` of the engine
/// into a spawned task for every request.
#[async_trait]
pub trait SummaryEngine: Send + Sync {
    /// Human-readable name for logging and the status bar
    fn name(&self) -> &'static str;

    /// Whether the engine can be expected to produce summaries
    fn is_ready(&self) -> bool;

    /// Summarize `text`, returning the pipeline's result records
    async fn summarize(&self, text: &str) -> Result<Vec<SummaryRecord>, EngineError>;
}

/// Engine used when summarization is disabled or misconfigured
#[derive(Debug, Default)]
pub struct NoOpEngine;

#[async_trait]
impl SummaryEngine for NoOpEngine {
    fn name(&self) -> &'static str {
        "none"
    }

    fn is_ready(&self) -> bool {
        false
    }

    async fn summarize(&self, _text: &str) -> Result<Vec<SummaryRecord>, EngineError> {
        Err(EngineError::NotConfigured)
    }
}

/// Create the engine described by `config`
///
/// Called once at startup; the returned `Arc` is shared by every request.
/// A remote engine that cannot be built degrades to `NoOpEngine`, so the
/// failure shows up in the result panel instead of aborting startup.
pub fn create_engine(config: &EngineConfig) -> Arc<dyn SummaryEngine> {
    match config.provider {
        ProviderType::None => Arc::new(NoOpEngine),
        ProviderType::Extractive => Arc::new(ExtractiveEngine::new(config.max_sentences)),
        ProviderType::HuggingFace => match HuggingFaceEngine::new(config) {
            Ok(engine) => Arc::new(engine),
            Err(e) => {
                tracing::error!("Failed to create Hugging Face engine: {}", e);
                Arc::new(NoOpEngine)
            }
        },
    }
}
