use chrono::{DateTime, Utc};
use std::sync::Arc;
use synopsis_common::{Result, SynopsisConfig};
use synopsis_llm::{LlmClient, OpenAiClient, Summarizer, SummarizerOptions};

/// Shared application state
pub struct AppState {
    /// Application configuration
    pub config: SynopsisConfig,

    /// Chunked summarization pipeline
    pub summarizer: Arc<Summarizer>,

    /// Server start time
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create new application state backed by the configured completions endpoint
    pub fn new(config: SynopsisConfig) -> Result<Self> {
        let client = OpenAiClient::from_config(&config)?;
        Ok(Self::with_client(config, Arc::new(client)))
    }

    /// Create application state around any client
    pub fn with_client(config: SynopsisConfig, client: Arc<dyn LlmClient>) -> Self {
        let summarizer = Summarizer::new(client, config.model.clone(), SummarizerOptions::from(&config));

        Self {
            config,
            summarizer: Arc::new(summarizer),
            started_at: Utc::now(),
        }
    }
}
