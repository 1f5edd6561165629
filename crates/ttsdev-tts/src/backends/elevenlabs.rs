//! ElevenLabs API client.
//!
//! Covers the three endpoints the comparison flow needs: synthesis
//! (`/text-to-speech/{voice_id}`), the voice catalog (`/voices`) and
//! instant voice cloning (`/voices/add`, multipart upload). ElevenLabs
//! voices carry a distinct id next to their display name; both are kept
//! on the [`Voice`] value.

use crate::audio::AudioBuffer;
use crate::builder::TTSBuilder;
use crate::error::{TTSError, TTSResult};
use crate::provider::TTSProvider;
use crate::speech::TTSSpeechProvider;
use crate::types::{CloneRequest, SpeechRequest, Voice};
use crate::voice::TTSVoiceProvider;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

const PROVIDER_NAME: &str = "ElevenLabs";
const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io/v1";
const DEFAULT_MODEL: &str = "eleven_multilingual_v2";
const API_KEY_HEADER: &str = "xi-api-key";

#[derive(Debug, Serialize)]
struct SynthesisBody<'a> {
    text: &'a str,
    model_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct VoicesResponse {
    voices: Vec<VoiceEntry>,
}

#[derive(Debug, Deserialize)]
struct VoiceEntry {
    voice_id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct AddVoiceResponse {
    voice_id: String,
}

/// Client for the ElevenLabs API
#[derive(Debug)]
pub struct ElevenLabs {
    api_key: String,
    base_url: String,
    model: String,
    client: Client,
}

impl ElevenLabs {
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

    /// Returns the model id sent with synthesis requests
    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn check_status(response: reqwest::Response) -> TTSResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(TTSError::Provider {
            provider: PROVIDER_NAME,
            message: format!("HTTP {status}: {message}"),
        })
    }
}

#[async_trait]
impl TTSSpeechProvider for ElevenLabs {
    async fn synthesize(&self, request: SpeechRequest) -> TTSResult<AudioBuffer> {
        let body = SynthesisBody {
            text: &request.text,
            model_id: &self.model,
        };
        debug!(
            "ElevenLabs synthesis request: voice={}, text length {}",
            request.voice,
            request.text.len()
        );

        let response = self
            .client
            .post(self.url(&format!("text-to-speech/{}", request.voice)))
            .header(API_KEY_HEADER, &self.api_key)
            .header(reqwest::header::ACCEPT, "audio/mpeg")
            .json(&body)
            .send()
            .await
            .map_err(|e| TTSError::from_reqwest(PROVIDER_NAME, e))?;
        let response = Self::check_status(response).await?;

        let data = response
            .bytes()
            .await
            .map_err(|e| TTSError::Http(format!("failed to read audio body: {e}")))?;
        let audio = AudioBuffer::from_mp3_bytes(data.to_vec())?;
        info!(
            "ElevenLabs synthesis for voice {} returned {} bytes",
            request.voice,
            audio.len()
        );
        Ok(audio)
    }
}

#[async_trait]
impl TTSVoiceProvider for ElevenLabs {
    async fn list_voices(&self) -> TTSResult<Vec<Voice>> {
        let response = self
            .client
            .get(self.url("voices"))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| TTSError::from_reqwest(PROVIDER_NAME, e))?;
        let response = Self::check_status(response).await?;

        let catalog: VoicesResponse = response.json().await.map_err(|e| TTSError::Provider {
            provider: PROVIDER_NAME,
            message: format!("malformed voice catalog: {e}"),
        })?;
        Ok(catalog
            .voices
            .into_iter()
            .map(|entry| Voice::new(entry.voice_id, entry.name))
            .collect())
    }

    async fn clone_voice(&self, request: CloneRequest) -> TTSResult<Voice> {
        request.validate()?;

        let mut form = Form::new().text("name", request.name.clone());
        if let Some(description) = &request.description {
            form = form.text("description", description.clone());
        }
        for path in &request.sample_paths {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "sample.wav".to_string());
            let data = tokio::fs::read(path).await?;
            form = form.part("files", Part::bytes(data).file_name(file_name));
        }

        debug!(
            "ElevenLabs clone request: name={}, {} sample(s)",
            request.name,
            request.sample_paths.len()
        );
        let response = self
            .client
            .post(self.url("voices/add"))
            .header(API_KEY_HEADER, &self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TTSError::from_reqwest(PROVIDER_NAME, e))?;
        let response = Self::check_status(response).await?;

        let created: AddVoiceResponse = response.json().await.map_err(|e| TTSError::Provider {
            provider: PROVIDER_NAME,
            message: format!("malformed clone response: {e}"),
        })?;
        info!("ElevenLabs created voice {}", created.voice_id);
        Ok(Voice::new(created.voice_id, request.name))
    }
}

impl TTSProvider for ElevenLabs {
    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }
}

impl TTSBuilder<ElevenLabs> {
    pub fn build(self) -> TTSResult<Arc<ElevenLabs>> {
        let api_key = self
            .api_key
            .ok_or(TTSError::MissingCredential(PROVIDER_NAME))?;
        Ok(Arc::new(ElevenLabs::new(
            api_key,
            self.base_url,
            self.model,
            self.timeout_seconds,
        )?))
    }
}
