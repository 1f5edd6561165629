//! OpenAI speech API client.
//!
//! Wraps the `/audio/speech` endpoint. The endpoint streams its MP3 body,
//! so responses go through the audio adapter's spool path. OpenAI has no
//! voice catalog endpoint — the set of voices is fixed by the vendor —
//! and no cloning endpoint.

use crate::audio::{self, AudioBuffer};
use crate::builder::TTSBuilder;
use crate::error::{TTSError, TTSResult};
use crate::provider::TTSProvider;
use crate::speech::TTSSpeechProvider;
use crate::types::{CloneRequest, SpeechRequest, Voice};
use crate::voice::TTSVoiceProvider;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

const PROVIDER_NAME: &str = "OpenAI";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "tts-1";

/// Per-request character limit enforced before dispatch.
const MAX_TEXT_LENGTH: usize = 4000;

/// The six voices built into the speech endpoint.
const BUILTIN_VOICES: [&str; 6] = ["alloy", "echo", "fable", "onyx", "nova", "shimmer"];

#[derive(Debug, Serialize)]
struct SpeechBody<'a> {
    model: &'a str,
    voice: &'a str,
    input: &'a str,
    response_format: &'a str,
}

/// Client for the OpenAI speech API
#[derive(Debug)]
pub struct OpenAITts {
    api_key: String,
    base_url: String,
    model: String,
    client: Client,
}

impl OpenAITts {
    pub fn new(
        api_key: impl Into<String>,
        base_url: Option<String>,
        model: Option<String>,
        timeout_seconds: Option<u64>,
    ) -> TTSResult<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(TTSError::MissingCredential(PROVIDER_NAME));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(
                timeout_seconds.unwrap_or(super::DEFAULT_TIMEOUT_SECS),
            ))
            .build()
            .map_err(|e| TTSError::Http(e.to_string()))?;
        Ok(Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            client,
        })
    }

    /// Returns the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn speech_url(&self) -> String {
        format!("{}/audio/speech", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl TTSSpeechProvider for OpenAITts {
    async fn synthesize(&self, request: SpeechRequest) -> TTSResult<AudioBuffer> {
        let body = SpeechBody {
            model: &self.model,
            voice: &request.voice,
            input: &request.text,
            response_format: "mp3",
        };
        debug!(
            "OpenAI speech request: voice={}, text length {}",
            request.voice,
            request.text.len()
        );

        let response = self
            .client
            .post(self.speech_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| TTSError::from_reqwest(PROVIDER_NAME, e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TTSError::Provider {
                provider: PROVIDER_NAME,
                message: format!("HTTP {status}: {message}"),
            });
        }

        // Streamed body: spool before validation, since the frame scan
        // needs the complete payload.
        let audio = audio::spool_stream(response.bytes_stream()).await?;
        info!(
            "OpenAI synthesis for voice {} returned {} bytes",
            request.voice,
            audio.len()
        );
        Ok(audio)
    }

    fn max_text_length(&self) -> Option<usize> {
        Some(MAX_TEXT_LENGTH)
    }
}

#[async_trait]
impl TTSVoiceProvider for OpenAITts {
    async fn list_voices(&self) -> TTSResult<Vec<Voice>> {
        Ok(BUILTIN_VOICES.iter().map(|name| Voice::named(*name)).collect())
    }

    async fn clone_voice(&self, _request: CloneRequest) -> TTSResult<Voice> {
        Err(TTSError::CloningNotSupported(PROVIDER_NAME))
    }

    fn supports_cloning(&self) -> bool {
        false
    }
}

impl TTSProvider for OpenAITts {
    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }
}

impl TTSBuilder<OpenAITts> {
    pub fn build(self) -> TTSResult<Arc<OpenAITts>> {
        let api_key = self
            .api_key
            .ok_or(TTSError::MissingCredential(PROVIDER_NAME))?;
        Ok(Arc::new(OpenAITts::new(
            api_key,
            self.base_url,
            self.model,
            self.timeout_seconds,
        )?))
    }
}
