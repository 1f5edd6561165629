//! Fan-out synthesis across the voices of a single provider.
//!
//! One text, N voices: every request is launched before any is awaited,
//! and results come back in the input voice order regardless of which
//! call finishes first. The caller zips results against its voice list
//! by position, so length and order are the contract here.

use crate::audio::AudioBuffer;
use crate::error::{TTSError, TTSResult};
use crate::speech::TTSSpeechProvider;
use crate::types::SpeechRequest;
use futures::future::{join_all, try_join_all};
use log::debug;

/// Pre-dispatch validation shared by both batch variants. Rejections
/// happen before any network call is issued.
fn validate_batch<P>(provider: &P, text: &str) -> TTSResult<()>
where
    P: TTSSpeechProvider + ?Sized,
{
    if text.trim().is_empty() {
        return Err(TTSError::Validation(
            "text must not be empty".to_string(),
        ));
    }
    if let Some(max) = provider.max_text_length() {
        let len = text.chars().count();
        if len > max {
            return Err(TTSError::TextTooLong { len, max });
        }
    }
    Ok(())
}

/// Synthesize `text` once per voice, concurrently, failing fast.
///
/// Returns exactly `voices.len()` buffers in the input order. If any
/// single call fails the whole batch fails with that error and the
/// partial results are dropped; use [`synthesize_many_settled`] when
/// per-voice isolation is wanted.
pub async fn synthesize_many<P>(
    provider: &P,
    text: &str,
    voices: &[String],
) -> TTSResult<Vec<AudioBuffer>>
where
    P: TTSSpeechProvider + ?Sized,
{
    validate_batch(provider, text)?;
    debug!(
        "fanning out {} synthesis request(s), text length {}",
        voices.len(),
        text.len()
    );
    let requests = voices
        .iter()
        .map(|voice| provider.synthesize(SpeechRequest::new(text, voice)));
    try_join_all(requests).await
}

/// Synthesize `text` once per voice, concurrently, with per-voice
/// results.
///
/// Same fan-out as [`synthesize_many`], but each slot carries its own
/// success or failure, so one bad voice does not abort the rest of the
/// batch. The outer error covers pre-dispatch validation only. Slot `i`
/// always corresponds to `voices[i]`.
pub async fn synthesize_many_settled<P>(
    provider: &P,
    text: &str,
    voices: &[String],
) -> TTSResult<Vec<TTSResult<AudioBuffer>>>
where
    P: TTSSpeechProvider + ?Sized,
{
    validate_batch(provider, text)?;
    debug!(
        "fanning out {} synthesis request(s) (settled), text length {}",
        voices.len(),
        text.len()
    );
    let requests = voices
        .iter()
        .map(|voice| provider.synthesize(SpeechRequest::new(text, voice)));
    Ok(join_all(requests).await)
}
