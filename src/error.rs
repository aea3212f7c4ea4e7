use thiserror::Error;

/// Unified error type for verman operations
#[derive(Error, Debug)]
pub enum VermanError {
    #[error("Malformed version string: '{0}' - expected X.Y.Z")]
    MalformedVersion(String),

    #[error("Invalid increment request: {0}")]
    InvalidIncrementRequest(String),

    #[error("Persistence failed: {0}")]
    Persistence(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results in verman
pub type Result<T> = std::result::Result<T, VermanError>;

impl VermanError {
    /// Create a malformed-version error naming the offending raw string
    pub fn malformed_version(raw: impl Into<String>) -> Self {
        VermanError::MalformedVersion(raw.into())
    }

    /// Create an invalid-increment-request error with context
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        VermanError::InvalidIncrementRequest(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VermanError::Config(msg.into())
    }
}
