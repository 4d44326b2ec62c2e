use crate::error::SynopsisError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default OpenAI-compatible chat completions endpoint
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Synopsis application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynopsisConfig {
    /// Chat completions endpoint URL
    pub api_url: String,

    /// Bearer token for the completions endpoint
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Model identifier sent with every request
    pub model: String,

    /// Maximum characters per chunk, also the total summary budget
    pub token_size: usize,

    /// Lower bound for the per-chunk summary budget
    pub min_chunk_budget: usize,

    /// Shared deadline for collecting all chunk summaries
    pub summary_timeout: Duration,

    /// Whole-request timeout of the HTTP client
    pub http_timeout: Duration,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for SynopsisConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            token_size: 4000,
            min_chunk_budget: 50,
            summary_timeout: Duration::from_millis(7000),
            http_timeout: Duration::from_secs(300),
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
        }
    }
}

impl SynopsisConfig {
    /// Load configuration from environment variables and .env file
    ///
    /// Touches no directories; file logging creates `log_dir` on setup.
    pub fn from_env() -> Result<Self, SynopsisError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        Ok(Self::from_lookup(|key| std::env::var(key).ok()))
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// Missing or unparsable values fall back to [`SynopsisConfig::default`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let parsed = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u64>().ok());

        Self {
            api_url: lookup("OPENAI_API_URL").unwrap_or(defaults.api_url),
            api_key: lookup("OPENAI_API_KEY").filter(|k| !k.trim().is_empty()),
            model: lookup("OPENAI_MODEL").unwrap_or(defaults.model),
            token_size: parsed("OPENAI_TOKEN_SIZE")
                .map(|v| v as usize)
                .unwrap_or(defaults.token_size),
            min_chunk_budget: parsed("MIN_CHUNK_BUDGET")
                .map(|v| v as usize)
                .unwrap_or(defaults.min_chunk_budget),
            summary_timeout: parsed("SUMMARY_TIMEOUT_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.summary_timeout),
            http_timeout: parsed("HTTP_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.http_timeout),
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: lookup("SERVER_PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.server_port),
            log_dir: lookup("LOG_DIR").map(PathBuf::from).unwrap_or(defaults.log_dir),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    /// Ensure required directories exist, create if not
    pub fn ensure_directories(&self) -> Result<(), SynopsisError> {
        if !self.log_dir.exists() {
            std::fs::create_dir_all(&self.log_dir).map_err(|e| {
                SynopsisError::config(format!(
                    "Failed to create directory {}: {}",
                    self.log_dir.display(),
                    e
                ))
            })?;
        }

        Ok(())
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), SynopsisError> {
        if self.model.trim().is_empty() {
            return Err(SynopsisError::config("Model name cannot be empty"));
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(SynopsisError::config(
                "API URL must start with http:// or https://",
            ));
        }

        if self.token_size == 0 {
            return Err(SynopsisError::config("Token size must be greater than 0"));
        }

        if self.min_chunk_budget == 0 {
            return Err(SynopsisError::config(
                "Minimum chunk budget must be greater than 0",
            ));
        }

        if self.summary_timeout.is_zero() {
            return Err(SynopsisError::config("Summary timeout cannot be 0"));
        }

        if self.server_port == 0 {
            return Err(SynopsisError::config("Server port cannot be 0"));
        }

        Ok(())
    }
}
