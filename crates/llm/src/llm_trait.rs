use crate::types::{ChatRequest, ChatResponse};
use async_trait::async_trait;
use synopsis_common::Result;

/// Remote text-generation service
///
/// Implementations are shared across concurrently running chunk tasks.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Run one chat completion
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse>;
}

/// Send a single-prompt request and return the first choice's text
///
/// `Ok(None)` means the service answered without a usable choice.
pub async fn generate(client: &dyn LlmClient, model: &str, prompt: String) -> Result<Option<String>> {
    let response = client.complete(ChatRequest::new(model, prompt)).await?;
    Ok(response.first_content().map(str::to_string))
}
