use std::sync::Arc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::chunking::Chunk;
use crate::llm_trait::{generate, LlmClient};
use crate::prompts::chunk_prompt;

/// In-flight chunk summaries of a single request
///
/// Each task yields `(chunk index, summary)`, the summary being empty when the
/// call failed or was cancelled. Dropping this value aborts whatever is still running.
pub struct PendingSummaries {
    pub(crate) tasks: JoinSet<(usize, String)>,
    pub(crate) cancel: CancellationToken,
    pub(crate) total: usize,
}

impl PendingSummaries {
    /// Number of dispatched chunks
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Token shared by every task of this batch
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }
}

/// Spawn one summarization task per chunk, in index order
///
/// Returns without waiting. Must be called from within a tokio runtime.
pub fn dispatch(
    client: Arc<dyn LlmClient>,
    model: &str,
    chunks: Vec<Chunk>,
    budget: usize,
) -> PendingSummaries {
    let cancel = CancellationToken::new();
    let mut tasks = JoinSet::new();
    let total = chunks.len();

    for chunk in chunks {
        let client = Arc::clone(&client);
        let model = model.to_string();
        let token = cancel.clone();

        tasks.spawn(async move {
            let index = chunk.index;
            let prompt = chunk_prompt(&chunk.text, budget);

            let outcome = tokio::select! {
                _ = token.cancelled() => {
                    debug!("Chunk {} cancelled", index);
                    return (index, String::new());
                }
                outcome = generate(client.as_ref(), &model, prompt) => outcome,
            };

            let summary = match outcome {
                Ok(Some(summary)) => summary,
                Ok(None) => {
                    warn!("Chunk {} got no usable response", index);
                    String::new()
                }
                Err(e) => {
                    warn!("Chunk {} summarization failed: {}", index, e);
                    String::new()
                }
            };

            debug!("Chunk {} summarized - Length: {}", index, summary.len());
            (index, summary)
        });
    }

    debug!("Dispatched {} chunk tasks - Budget: {} chars each", total, budget);

    PendingSummaries {
        tasks,
        cancel,
        total,
    }
}
