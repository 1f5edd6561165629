// Re-export for convenience
pub use async_trait::async_trait;
pub use ttsdev_llm::{self as llm, error as llm_error};
pub use ttsdev_tts::{self as tts, error as tts_error};
pub mod prelude;

#[cfg(all(feature = "openai", feature = "elevenlabs", feature = "lmnt"))]
pub mod session;

#[inline]
/// Initialize logging using env_logger if the "logging" feature is enabled.
/// This is a no-op if the feature is not enabled.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::try_init();
    }
}
