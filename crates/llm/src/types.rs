use serde::{Deserialize, Serialize};

/// Chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Author role ("user", "assistant", "system")
    pub role: String,

    /// Message text
    #[serde(default)]
    pub content: String,
}

impl ChatMessage {
    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Chat completions request
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model name (e.g., "gpt-4o-mini")
    pub model: String,

    /// Conversation, a single user message for every call we make
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    /// Single-prompt request
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage::user(prompt)],
        }
    }
}

/// One completion candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub index: u32,

    pub message: ChatMessage,
}

/// Chat completions response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Completion candidates; missing or null is treated as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub choices: Vec<ChatChoice>,
}

impl ChatResponse {
    /// Response carrying a single assistant message
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            choices: vec![ChatChoice {
                index: 0,
                message: ChatMessage::assistant(content),
            }],
        }
    }

    /// Content of the first choice, `None` when there is no usable response
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .filter(|content| !content.trim().is_empty())
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Title and description derived from the joined chunk summaries
///
/// Absent or null fields read as empty; unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynthesisResult {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

impl SynthesisResult {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Outcome of the synthesis step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Synthesis {
    /// The service replied with a parseable title/description
    Extracted(SynthesisResult),

    /// The service failed or gave no usable response
    NotFound,

    /// The service replied, but the reply could not be parsed
    ParseError,
}

impl Synthesis {
    /// Title/description pair, with sentinel values for the failure cases
    pub fn into_result(self) -> SynthesisResult {
        match self {
            Self::Extracted(result) => result,
            Self::NotFound => SynthesisResult::new("Title Not Found", "Desc Not Found"),
            Self::ParseError => SynthesisResult::new("Error", "Failed to parse response"),
        }
    }

    pub fn is_extracted(&self) -> bool {
        matches!(self, Self::Extracted(_))
    }
}
