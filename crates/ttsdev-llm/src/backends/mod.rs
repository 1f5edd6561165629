//! LLM backend implementations

#[cfg(feature = "openai")]
pub mod openai;
