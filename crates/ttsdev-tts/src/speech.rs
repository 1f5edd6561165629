use crate::audio::AudioBuffer;
use crate::error::TTSResult;
use crate::types::SpeechRequest;
use async_trait::async_trait;

/// Trait for TTS speech generation capabilities
#[async_trait]
pub trait TTSSpeechProvider: Send + Sync {
    /// Synthesize speech for a single voice (required)
    ///
    /// # Arguments
    /// * `request` - Text and the target voice identifier
    ///
    /// # Returns
    /// A playable MP3 audio buffer. One outbound network call; any API
    /// failure propagates unretried.
    async fn synthesize(&self, request: SpeechRequest) -> TTSResult<AudioBuffer>;

    /// Maximum text length the provider accepts per request, in
    /// characters, if it enforces one (default: no limit)
    fn max_text_length(&self) -> Option<usize> {
        None
    }
}
