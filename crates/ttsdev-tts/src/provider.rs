use crate::speech::TTSSpeechProvider;
use crate::voice::TTSVoiceProvider;
use async_trait::async_trait;

/// Marker trait for TTS providers
///
/// Combines speech generation and voice management into one provider
/// interface. Backends implement this marker alongside the capability
/// traits.
#[async_trait]
pub trait TTSProvider: TTSSpeechProvider + TTSVoiceProvider + Send + Sync {
    /// Get the provider name
    fn provider_name(&self) -> &str;

    /// Check if the provider is configured and ready
    async fn is_ready(&self) -> bool {
        true
    }
}
