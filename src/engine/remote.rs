// Hugging Face Inference API engine
//
// POST {api_base}/models/{model} with {"inputs": text, "parameters": {...}}
// and receives the pipeline output directly: [{"summary_text": "..."}].

use super::{EngineError, SummaryEngine, SummaryRecord};
use crate::config::EngineConfig;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Default endpoint for serverless inference
pub const DEFAULT_API_BASE: &str = "https://router.huggingface.co/hf-inference";

/// Distilled BART fine-tuned on CNN/DailyMail - the usual default
/// checkpoint for the "summarization" pipeline task
pub const DEFAULT_MODEL: &str = "sshleifer/distilbart-cnn-6-6";

/// Remote summarization engine backed by the Hugging Face Inference API
pub struct HuggingFaceEngine {
    client: reqwest::Client,
    url: String,
    api_key: String,
    min_length: u32,
    max_length: u32,
}

impl HuggingFaceEngine {
    /// Create a new engine from configuration
    ///
    /// # Errors
    /// `NotConfigured` if no API key is set, `NetworkError` if the HTTP
    /// client cannot be built.
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(EngineError::NotConfigured)?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                EngineError::NetworkError(format!("Failed to create HTTP client: {}", e))
            })?;

        let api_base = config.api_base.as_deref().unwrap_or(DEFAULT_API_BASE);
        let model = if config.model.is_empty() {
            DEFAULT_MODEL
        } else {
            config.model.as_str()
        };
        let url = format!("{}/models/{}", api_base.trim_end_matches('/'), model);

        tracing::info!(
            "Initialized Hugging Face engine: {} (timeout {}s)",
            url,
            config.timeout_secs
        );

        Ok(Self {
            client,
            url,
            api_key,
            min_length: config.min_length,
            max_length: config.max_length,
        })
    }

    fn build_request(&self, text: &str) -> reqwest::RequestBuilder {
        self.client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({
                "inputs": text,
                "parameters": {
                    "min_length": self.min_length,
                    "max_length": self.max_length,
                },
            }))
    }

    async fn parse_response(
        response: reqwest::Response,
    ) -> Result<Vec<SummaryRecord>, EngineError> {
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(classify_error(status.as_u16(), &body));
        }

        response
            .json::<Vec<SummaryRecord>>()
            .await
            .map_err(|e| EngineError::Internal(format!("Failed to parse response: {}", e)))
    }
}

/// Error body returned by the Inference API
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
    estimated_time: Option<f64>,
}

/// Map a non-success response onto an `EngineError`
fn classify_error(status: u16, body: &str) -> EngineError {
    let parsed: Option<ApiErrorBody> = serde_json::from_str(body).ok();

    match status {
        429 => EngineError::RateLimited,
        503 => EngineError::ModelLoading {
            estimated_secs: parsed
                .and_then(|b| b.estimated_time)
                .map(|t| t.ceil() as u64),
        },
        _ => EngineError::ApiError {
            status,
            message: parsed
                .map(|b| b.error)
                .unwrap_or_else(|| body.trim().to_string()),
        },
    }
}

#[async_trait]
impl SummaryEngine for HuggingFaceEngine {
    fn name(&self) -> &'static str {
        "huggingface"
    }

    fn is_ready(&self) -> bool {
        true
    }

    async fn summarize(&self, text: &str) -> Result<Vec<SummaryRecord>, EngineError> {
        let response = self.build_request(text).send().await.map_err(|e| {
            if e.is_timeout() {
                EngineError::NetworkError("Request timed out".to_string())
            } else {
                EngineError::NetworkError(format!("Request failed: {}", e))
            }
        })?;

        Self::parse_response(response).await
    }
}
