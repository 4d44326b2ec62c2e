//! Scripted [`LlmClient`] for unit tests

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use synopsis_common::{Result, SynopsisError};

use crate::llm_trait::LlmClient;
use crate::types::{ChatRequest, ChatResponse};

/// What the scripted service does for a matching prompt
#[derive(Debug, Clone)]
pub enum Reply {
    /// Answer with text after a delay
    Text(String, Duration),
    /// Answer without any choices
    Empty,
    /// Transport-style failure
    Fail,
    /// Never answer
    Hang,
    /// Panic inside the call
    Panic,
}

impl Reply {
    pub fn text(text: &str) -> Self {
        Self::Text(text.to_string(), Duration::ZERO)
    }

    pub fn delayed(text: &str, delay: Duration) -> Self {
        Self::Text(text.to_string(), delay)
    }
}

/// Counts calls whose future was dropped before it finished
struct AbandonGuard {
    counter: Arc<AtomicUsize>,
    armed: bool,
}

impl Drop for AbandonGuard {
    fn drop(&mut self) {
        if self.armed {
            self.counter.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Replies with the first rule whose marker occurs in the prompt
///
/// Prompts matching no rule are echoed back as "ok".
#[derive(Default)]
pub struct ScriptedClient {
    rules: Vec<(String, Reply)>,
    prompts: Mutex<Vec<String>>,
    abandoned: Arc<AtomicUsize>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, marker: &str, reply: Reply) -> Self {
        self.rules.push((marker.to_string(), reply));
        self
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Calls dropped mid-flight, i.e. actually cancelled
    pub fn abandoned(&self) -> usize {
        self.abandoned.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmClient for ScriptedClient {
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse> {
        let prompt = request
            .messages
            .first()
            .map(|m| m.content.clone())
            .unwrap_or_default();
        self.prompts.lock().unwrap().push(prompt.clone());

        let reply = self
            .rules
            .iter()
            .find(|(marker, _)| prompt.contains(marker.as_str()))
            .map(|(_, reply)| reply.clone())
            .unwrap_or_else(|| Reply::text("ok"));

        let mut guard = AbandonGuard {
            counter: Arc::clone(&self.abandoned),
            armed: true,
        };

        let result = match reply {
            Reply::Text(text, delay) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                Ok(ChatResponse::from_content(text))
            }
            Reply::Empty => Ok(ChatResponse::default()),
            Reply::Fail => Err(SynopsisError::network("connection reset by peer")),
            Reply::Hang => std::future::pending().await,
            Reply::Panic => panic!("scripted panic"),
        };

        guard.armed = false;
        result
    }
}
