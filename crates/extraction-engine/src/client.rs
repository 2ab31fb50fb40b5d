//! The extraction-model boundary.
//!
//! [`ChatModel`] is the only seam with network I/O in the pipeline; tests
//! substitute it with canned responses.

use serde_json::{json, Value};

use crate::error::ExtractionError;

/// Sampling temperature, fixed at the minimum for deterministic extraction.
const TEMPERATURE: f64 = 0.0;

/// Output-length cap for one extraction response.
const MAX_TOKENS: u32 = 2000;

/// Chat-completion boundary: one blocking call, free text out.
pub trait ChatModel: Send + Sync {
    fn complete(&self, system: &str, user: &str) -> Result<String, ExtractionError>;
}

/// Azure OpenAI connection settings, scoped to one pipeline instance.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub endpoint: String,
    pub key: String,
    /// Deployment/model name, e.g. "gpt-4o".
    pub model: String,
    pub api_version: String,
}

impl OpenAiConfig {
    /// Load configuration from environment variables.
    ///
    /// Expected variables:
    /// - AZURE_OPENAI_ENDPOINT
    /// - AZURE_OPENAI_KEY
    /// - AZURE_OPENAI_MODEL (default: "gpt-4o")
    /// - AZURE_OPENAI_API_VERSION (default: "2024-02-01")
    pub fn from_env() -> Result<Self, ExtractionError> {
        let endpoint = std::env::var("AZURE_OPENAI_ENDPOINT")
            .map_err(|_| ExtractionError::MissingConfig("AZURE_OPENAI_ENDPOINT"))?;
        let key = std::env::var("AZURE_OPENAI_KEY")
            .map_err(|_| ExtractionError::MissingConfig("AZURE_OPENAI_KEY"))?;
        let model =
            std::env::var("AZURE_OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string());
        let api_version = std::env::var("AZURE_OPENAI_API_VERSION")
            .unwrap_or_else(|_| "2024-02-01".to_string());

        Ok(Self {
            endpoint,
            key,
            model,
            api_version,
        })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint.trim_end_matches('/'),
            self.model,
            self.api_version
        )
    }
}

/// Blocking Azure OpenAI chat-completions client.
///
/// One request per document, no retry, no streaming — a failure degrades to
/// "nothing extracted" upstream.
pub struct AzureOpenAiClient {
    config: OpenAiConfig,
    http: reqwest::blocking::Client,
}

impl AzureOpenAiClient {
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            config,
            http: reqwest::blocking::Client::new(),
        }
    }
}

impl ChatModel for AzureOpenAiClient {
    fn complete(&self, system: &str, user: &str) -> Result<String, ExtractionError> {
        let body = json!({
            "messages": [
                {"role": "system", "content": system},
                {"role": "user", "content": user},
            ],
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS,
        });

        let response: Value = self
            .http
            .post(self.config.completions_url())
            .header("api-key", &self.config.key)
            .json(&body)
            .send()?
            .error_for_status()?
            .json()?;

        response["choices"][0]["message"]["content"]
            .as_str()
            .map(|content| content.trim().to_string())
            .ok_or(ExtractionError::EmptyCompletion)
    }
}
