use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body returned for a missing or empty prompt
pub const INVALID_INPUT: &str = "INVALID INPUT";

/// Summarization request
#[derive(Debug, Default, Deserialize)]
pub struct ChatBody {
    /// Text to summarize
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    pub started_at: DateTime<Utc>,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
