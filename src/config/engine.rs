//! Summarization engine configuration
//!
//! Which provider produces summaries and how to reach it. The API key is
//! normally supplied through the environment; the file value is a fallback.

use serde::Deserialize;

use crate::engine::ProviderType;

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Provider: "extractive" (default), "huggingface", "none"
    pub provider: ProviderType,
    /// Model id for remote providers (e.g., "facebook/bart-large-cnn")
    pub model: String,
    /// API base URL override for remote providers
    pub api_base: Option<String>,
    /// Bearer token for remote providers
    pub api_key: Option<String>,
    /// Request timeout for remote providers
    pub timeout_secs: u64,
    /// Minimum summary length in tokens (remote only)
    pub min_length: u32,
    /// Maximum summary length in tokens (remote only)
    pub max_length: u32,
    /// Sentences kept by the extractive engine
    pub max_sentences: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            provider: ProviderType::Extractive,
            model: crate::engine::DEFAULT_MODEL.to_string(),
            api_base: None,
            api_key: None,
            timeout_secs: 60,
            min_length: 30,
            max_length: 130,
            max_sentences: 3,
        }
    }
}

/// Engine settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileEngine {
    pub provider: Option<String>,
    pub model: Option<String>,
    pub api_base: Option<String>,
    /// API key from config file (env vars take precedence)
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
    pub max_sentences: Option<usize>,
}

impl EngineConfig {
    /// Create from file config with defaults
    /// Note: api_key should be resolved separately (env var takes precedence)
    pub fn from_file(file: Option<FileEngine>, api_key_override: Option<String>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let provider = match file.provider.as_deref() {
            None => defaults.provider,
            Some(name) => ProviderType::parse(name).unwrap_or_else(|| {
                eprintln!(
                    "Warning: unknown engine provider '{}', using '{}'",
                    name, defaults.provider
                );
                defaults.provider
            }),
        };

        let min_length = file.min_length.unwrap_or(defaults.min_length);
        // A max below min would be rejected by the API; keep the pair sane
        let max_length = file.max_length.unwrap_or(defaults.max_length).max(min_length);

        Self {
            provider,
            model: file.model.unwrap_or(defaults.model),
            api_base: file.api_base.or(defaults.api_base),
            api_key: api_key_override.or(file.api_key),
            timeout_secs: file.timeout_secs.unwrap_or(defaults.timeout_secs).max(1),
            min_length,
            max_length,
            max_sentences: file.max_sentences.unwrap_or(defaults.max_sentences).max(1),
        }
    }

    /// Whether a usable API key is present
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}
