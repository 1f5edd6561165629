use thiserror::Error;

/// TTS-related errors
#[derive(Error, Debug)]
pub enum TTSError {
    /// Input rejected before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    /// Text exceeds the provider's per-request limit
    #[error("Text too long: {len} characters (limit {max})")]
    TextTooLong { len: usize, max: usize },

    /// No API key configured for the provider
    #[error("Missing API key for {0}")]
    MissingCredential(&'static str),

    /// The vendor's API returned a failure
    #[error("{provider} API error: {message}")]
    Provider {
        provider: &'static str,
        message: String,
    },

    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(String),

    /// Request timeout
    #[error("Request timeout")]
    Timeout,

    /// Audio payload could not be validated or measured
    #[error("Audio error: {0}")]
    Audio(String),

    /// The provider has no voice-cloning endpoint
    #[error("Voice cloning not supported by {0}")]
    CloningNotSupported(&'static str),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for TTS operations
pub type TTSResult<T> = Result<T, TTSError>;

impl TTSError {
    /// Map a reqwest transport error, keeping timeout and connect
    /// failures distinguishable for the caller.
    #[cfg(any(feature = "openai", feature = "elevenlabs", feature = "lmnt"))]
    pub(crate) fn from_reqwest(provider: &'static str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TTSError::Timeout
        } else if err.is_connect() {
            TTSError::Http(format!("cannot connect to {provider}: {err}"))
        } else {
            TTSError::Http(err.to_string())
        }
    }
}
