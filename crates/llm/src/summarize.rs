use std::sync::Arc;
use std::time::{Duration, Instant};
use synopsis_common::{Result, SynopsisConfig, SynopsisError};
use tracing::{debug, info};

use crate::chunking::{chunk_budget, split_text};
use crate::collect::collect;
use crate::dispatch::dispatch;
use crate::llm_trait::LlmClient;
use crate::synthesize::Synthesizer;
use crate::types::Synthesis;

/// Tuning knobs of the fan-out/fan-in pipeline
#[derive(Debug, Clone)]
pub struct SummarizerOptions {
    /// Maximum chunk length in chars, also the total summary budget
    pub token_size: usize,

    /// Floor for the per-chunk budget
    pub min_chunk_budget: usize,

    /// Shared deadline for all chunk summaries
    pub summary_timeout: Duration,
}

impl Default for SummarizerOptions {
    fn default() -> Self {
        Self::from(&SynopsisConfig::default())
    }
}

impl From<&SynopsisConfig> for SummarizerOptions {
    fn from(config: &SynopsisConfig) -> Self {
        Self {
            token_size: config.token_size,
            min_chunk_budget: config.min_chunk_budget,
            summary_timeout: config.summary_timeout,
        }
    }
}

/// Everything one summarization run produced
#[derive(Debug, Clone)]
pub struct Digest {
    pub chunk_count: usize,
    pub chunk_budget: usize,
    pub joined_summary: String,
    pub synthesis: Synthesis,
}

/// Summarizer for long text: chunk, summarize concurrently, then synthesize
pub struct Summarizer {
    client: Arc<dyn LlmClient>,
    model: String,
    options: SummarizerOptions,
    synthesizer: Synthesizer,
}

impl Summarizer {
    /// Create new summarizer
    pub fn new(client: Arc<dyn LlmClient>, model: impl Into<String>, options: SummarizerOptions) -> Self {
        let model = model.into();
        Self {
            synthesizer: Synthesizer::new(Arc::clone(&client), model.clone()),
            client,
            model,
            options,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn options(&self) -> &SummarizerOptions {
        &self.options
    }

    /// Summarize a prompt into a title and description
    ///
    /// Fails only when the prompt is empty after normalization.
    pub async fn summarize(&self, prompt: &str) -> Result<Digest> {
        let text = normalize_prompt(prompt)?;
        let started = Instant::now();

        let chunks = split_text(&text, self.options.token_size)?;
        let chunk_count = chunks.len();
        let budget = chunk_budget(self.options.token_size, chunk_count, self.options.min_chunk_budget);
        info!(
            "Starting summarization - Length: {} chars, Token size: {}, Chunks: {}, Budget: {}",
            text.chars().count(),
            self.options.token_size,
            chunk_count,
            budget
        );

        let pending = dispatch(Arc::clone(&self.client), &self.model, chunks, budget);
        let joined_summary = collect(pending, self.options.summary_timeout).await;
        debug!("Joined summary - Length: {} chars", joined_summary.len());

        let synthesis = self.synthesizer.synthesize(&joined_summary).await;

        info!(
            "Summarization finished in {:?} - Extracted: {}",
            started.elapsed(),
            synthesis.is_extracted()
        );

        Ok(Digest {
            chunk_count,
            chunk_budget: budget,
            joined_summary,
            synthesis,
        })
    }
}

/// Strip quote characters and reject prompts left empty
pub fn normalize_prompt(prompt: &str) -> Result<String> {
    let text = prompt.replace('"', "");
    if text.is_empty() {
        return Err(SynopsisError::invalid_input("prompt is empty"));
    }
    Ok(text)
}
