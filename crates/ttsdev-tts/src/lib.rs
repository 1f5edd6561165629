//! # ttsdev TTS
//!
//! TTS provider clients and fan-out synthesis for the ttsdev comparison
//! tool.
//!
//! This crate provides a trait-based abstraction over text-to-speech
//! vendors, so the comparison flow can treat OpenAI, ElevenLabs and LMNT
//! interchangeably.
//!
//! ## Features
//!
//! - **Speech Generation**: one synthesis call per voice, normalized to
//!   playable MP3 buffers
//! - **Fan-out**: synthesize one text across many voices concurrently,
//!   results in voice order
//! - **Voice Management**: per-provider catalogs and voice cloning from
//!   uploaded samples
//!
//! ## Architecture
//!
//! - `TTSProvider`: marker trait combining all capabilities
//! - `TTSSpeechProvider`: speech generation
//! - `TTSVoiceProvider`: voice catalog and cloning
//! - `synthesis`: the fan-out orchestrator over any speech provider
//! - `audio`: container adapter normalizing vendor responses
//!
//! Backends live in `backends` and are feature-gated (`openai`,
//! `elevenlabs`, `lmnt`; `full` enables all three).
//!
//! ## Example
//!
//! ```rust,ignore
//! use ttsdev_tts::{TTSBuilder, backends::openai::OpenAITts, synthesis};
//!
//! async fn compare(text: &str) {
//!     let provider = TTSBuilder::<OpenAITts>::new()
//!         .api_key(std::env::var("OPENAI_API_KEY").unwrap())
//!         .build()
//!         .unwrap();
//!     let voices = vec!["alloy".to_string(), "echo".to_string()];
//!     let buffers = synthesis::synthesize_many(provider.as_ref(), text, &voices)
//!         .await
//!         .unwrap();
//!     assert_eq!(buffers.len(), voices.len());
//! }
//! ```

pub mod audio;
pub mod backends;
pub mod builder;
pub mod error;
pub mod provider;
pub mod speech;
pub mod synthesis;
pub mod types;
pub mod voice;

// Re-export main types
pub use audio::{AudioBuffer, Mp3Info, mp3_info, spool_stream};
pub use builder::TTSBuilder;
pub use error::{TTSError, TTSResult};
pub use provider::TTSProvider;
pub use speech::TTSSpeechProvider;
pub use synthesis::{synthesize_many, synthesize_many_settled};
pub use types::{AudioFormat, CloneRequest, SpeechRequest, Voice};
pub use voice::TTSVoiceProvider;
