//! ttsdev prelude: common traits and types for quick start.

// TTS abstractions
pub use crate::tts::builder::TTSBuilder;
pub use crate::tts::{
    AudioBuffer, CloneRequest, SpeechRequest, TTSProvider, TTSSpeechProvider, TTSVoiceProvider,
    Voice, synthesize_many, synthesize_many_settled,
};

// Errors
pub use crate::tts::error::{TTSError, TTSResult};

// LLM abstractions
pub use crate::llm::builder::LLMBuilder;
pub use crate::llm::{ChatMessage, ChatProvider};

// Session orchestration
#[cfg(all(feature = "openai", feature = "elevenlabs", feature = "lmnt"))]
pub use crate::session::{Credentials, ProviderKind, RunPlan, Session, VoiceSelection};

// Utils
pub use crate::init_logging;
