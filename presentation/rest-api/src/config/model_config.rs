use anyhow::Context;

use openai::client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Configuration for the hosted chat completions API.
///
/// Environment variables:
/// - GITHUB_TOKEN: API token (required)
/// - MODEL_BASE_URL: OpenAI-compatible base URL (default: GitHub Models inference)
/// - MODEL_NAME: model identifier (default: "openai/gpt-4o-mini")
pub struct ModelConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl ModelConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("GITHUB_TOKEN")
            .context("GITHUB_TOKEN environment variable must be set")?;
        let base_url =
            std::env::var("MODEL_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("MODEL_NAME").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self {
            api_key,
            base_url,
            model,
        })
    }
}
