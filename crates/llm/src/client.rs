use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use synopsis_common::{Result, SynopsisConfig, SynopsisError};
use tracing::{debug, info};

use crate::llm_trait::LlmClient;
use crate::types::{ChatRequest, ChatResponse};

/// OpenAI-compatible chat completions client
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    api_url: String,
    api_key: Option<String>,
    client: Client,
}

impl OpenAiClient {
    /// Create new client
    pub fn new(api_url: impl Into<String>, api_key: Option<String>, timeout: Duration) -> Result<Self> {
        let api_url = api_url.into();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SynopsisError::config(format!("Failed to create HTTP client: {}", e)))?;

        info!("Chat completions client initialized: {}", api_url);
        Ok(Self {
            api_url,
            api_key,
            client,
        })
    }

    /// Create client from application configuration
    pub fn from_config(config: &SynopsisConfig) -> Result<Self> {
        Self::new(&config.api_url, config.api_key.clone(), config.http_timeout)
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Single attempt, no retry
    async fn try_complete(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let mut builder = self.client.post(&self.api_url).json(request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| SynopsisError::network(format!("Failed to send request: {}", e)))?
            .error_for_status()
            .map_err(|e| SynopsisError::llm(format!("Chat completions API error: {}", e)))?;

        response
            .json::<ChatResponse>()
            .await
            .map_err(|e| SynopsisError::llm(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse> {
        debug!(
            "Sending chat request - Model: {}, Prompt length: {}",
            request.model,
            request.messages.iter().map(|m| m.content.len()).sum::<usize>()
        );

        let response = self.try_complete(&request).await?;

        debug!("Received chat response - Choices: {}", response.choices.len());
        Ok(response)
    }
}
