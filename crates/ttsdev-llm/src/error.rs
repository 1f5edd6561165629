use thiserror::Error;

/// LLM-related errors
#[derive(Error, Debug)]
pub enum LLMError {
    /// Missing or rejected credentials
    #[error("Auth error: {0}")]
    AuthError(String),

    /// Request rejected before dispatch
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The vendor's API returned a failure
    #[error("{provider} API error: {message}")]
    Provider { provider: String, message: String },

    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(String),

    /// Response body did not have the expected shape
    #[error("Response format error: {0}")]
    ResponseFormat(String),
}

/// Result type for LLM operations
pub type LLMResult<T> = Result<T, LLMError>;
