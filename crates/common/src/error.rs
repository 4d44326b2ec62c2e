/// Synopsis error types
#[derive(Debug, thiserror::Error)]
pub enum SynopsisError {
    /// LLM related error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network/HTTP error
    #[error("Network error: {0}")]
    Network(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SynopsisError {
    /// Create LLM error
    pub fn llm<S: Into<String>>(msg: S) -> Self {
        Self::Llm(msg.into())
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Self::Network(msg.into())
    }

    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// True for errors caused by the caller's input
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

// HTTP response conversion
impl SynopsisError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            Self::Config(_) => 500,
            Self::Llm(_) => 500,
            Self::Network(_) => 503,
            Self::Io(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(SynopsisError::invalid_input("empty").status_code(), 400);
        assert_eq!(SynopsisError::network("refused").status_code(), 503);
        assert_eq!(SynopsisError::llm("bad status").status_code(), 500);
    }

    #[test]
    fn test_io_errors_convert() {
        let err: SynopsisError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, SynopsisError::Io(_)));
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_display() {
        let err = SynopsisError::invalid_input("prompt is empty");
        assert_eq!(err.to_string(), "Invalid input: prompt is empty");
        assert!(err.is_invalid_input());
        assert!(!SynopsisError::config("x").is_invalid_input());
    }
}
