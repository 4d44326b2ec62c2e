use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::llm_trait::{generate, LlmClient};
use crate::prompts::synthesis_prompt;
use crate::types::{Synthesis, SynthesisResult};

/// Derives a title and description from the joined chunk summaries
pub struct Synthesizer {
    client: Arc<dyn LlmClient>,
    model: String,
}

impl Synthesizer {
    pub fn new(client: Arc<dyn LlmClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// One call to the service; never fails
    pub async fn synthesize(&self, joined_summary: &str) -> Synthesis {
        let prompt = synthesis_prompt(joined_summary);

        match generate(self.client.as_ref(), &self.model, prompt).await {
            Ok(Some(reply)) => parse_synthesis(&reply),
            Ok(None) => {
                warn!("Synthesis got no usable response");
                Synthesis::NotFound
            }
            Err(e) => {
                warn!("Synthesis request failed: {}", e);
                Synthesis::NotFound
            }
        }
    }
}

/// Remove markdown code fences and surrounding whitespace
pub fn strip_code_fences(reply: &str) -> String {
    reply.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parse a reply into a title/description, `ParseError` on malformed JSON or unknown keys
pub fn parse_synthesis(reply: &str) -> Synthesis {
    let body = strip_code_fences(reply);
    match serde_json::from_str::<SynthesisResult>(&body) {
        Ok(result) => {
            debug!("Synthesis parsed - Title: {}", result.title);
            Synthesis::Extracted(result)
        }
        Err(e) => {
            error!("Error parsing synthesis JSON: {}", e);
            Synthesis::ParseError
        }
    }
}
