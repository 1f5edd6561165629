//! # ttsdev LLM
//!
//! Minimal LLM text-generation client for the ttsdev comparison tool.
//!
//! The comparison form can pre-fill its input with a short generated
//! sample instead of hand-typed text; this crate provides that one
//! synchronous chat exchange behind a `ChatProvider` trait. Backends
//! live in `backends` and are feature-gated (`openai`).

pub mod backends;
pub mod builder;
pub mod chat;
pub mod error;

// Re-export main types
pub use builder::LLMBuilder;
pub use chat::{ChatMessage, ChatProvider, ChatRole};
pub use error::{LLMError, LLMResult};
