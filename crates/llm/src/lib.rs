//! Synopsis LLM integration
//!
//! Chat completions client and the chunked fan-out/fan-in summarizer

mod chunking;
mod client;
mod collect;
mod dispatch;
mod llm_trait;
mod prompts;
mod summarize;
mod synthesize;
mod types;

#[cfg(test)]
mod testing;

pub use chunking::{chunk_budget, chunk_count, split_text, Chunk};
pub use client::OpenAiClient;
pub use collect::{collect, collect_partials, join_partials, PartialResult};
pub use dispatch::{dispatch, PendingSummaries};
pub use llm_trait::{generate, LlmClient};
pub use prompts::{chunk_prompt, synthesis_prompt, MAX_DESCRIPTION_LENGTH};
pub use summarize::{normalize_prompt, Digest, Summarizer, SummarizerOptions};
pub use synthesize::{parse_synthesis, strip_code_fences, Synthesizer};
pub use types::{ChatChoice, ChatMessage, ChatRequest, ChatResponse, Synthesis, SynthesisResult};
