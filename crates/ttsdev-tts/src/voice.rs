use crate::error::TTSResult;
use crate::types::{CloneRequest, Voice};
use async_trait::async_trait;

/// Trait for TTS voice catalog and cloning capabilities
#[async_trait]
pub trait TTSVoiceProvider: Send + Sync {
    /// Fetch the provider's current voice catalog (required)
    ///
    /// Returns built-in and custom voices. The catalog is fetched fresh
    /// on every call; nothing is cached locally.
    async fn list_voices(&self) -> TTSResult<Vec<Voice>>;

    /// Create a persistent custom voice from uploaded samples (required)
    ///
    /// # Arguments
    /// * `request` - Desired name, sample file paths, optional description
    ///
    /// # Returns
    /// The created voice. Providers may index new voices asynchronously,
    /// so an immediately following `list_voices` call is not guaranteed
    /// to include it yet.
    ///
    /// Providers without a cloning endpoint return
    /// [`TTSError::CloningNotSupported`](crate::error::TTSError::CloningNotSupported).
    async fn clone_voice(&self, request: CloneRequest) -> TTSResult<Voice>;

    /// Whether the provider exposes a cloning endpoint (default: true)
    fn supports_cloning(&self) -> bool {
        true
    }
}
