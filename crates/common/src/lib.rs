pub mod config;
pub mod error;
pub mod logger;

// Re-export commonly used types
pub use config::SynopsisConfig;
pub use error::SynopsisError;
pub type Result<T> = std::result::Result<T, SynopsisError>;
