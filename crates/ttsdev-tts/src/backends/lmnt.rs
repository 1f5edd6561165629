//! LMNT API client.
//!
//! LMNT access is operation-scoped: each call opens a connection, runs
//! exactly one API operation against it and releases it on every exit
//! path, errors included. [`LmntConnection`] owns the HTTP client for
//! its operation, so the release is its drop — there is no persistent
//! client on the provider value.

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
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

const PROVIDER_NAME: &str = "LMNT";
const DEFAULT_BASE_URL: &str = "https://api.lmnt.com/v1";
const API_KEY_HEADER: &str = "X-API-Key";

#[derive(Debug, Serialize)]
struct SynthesisBody<'a> {
    voice: &'a str,
    text: &'a str,
    format: &'a str,
}

#[derive(Debug, Deserialize)]
struct VoiceEntry {
    id: String,
    name: String,
}

/// Client for the LMNT API
#[derive(Debug)]
pub struct Lmnt {
    api_key: String,
    base_url: String,
    timeout_seconds: u64,
}

impl Lmnt {
    pub fn new(
        api_key: impl Into<String>,
        base_url: Option<String>,
        timeout_seconds: Option<u64>,
    ) -> TTSResult<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(TTSError::MissingCredential(PROVIDER_NAME));
        }
        Ok(Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout_seconds: timeout_seconds.unwrap_or(super::DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Returns the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Open a connection scoped to one operation.
    fn connect(&self) -> TTSResult<LmntConnection<'_>> {
        LmntConnection::open(self)
    }
}

/// One operation's connection to the LMNT API.
struct LmntConnection<'a> {
    client: Client,
    provider: &'a Lmnt,
}

impl<'a> LmntConnection<'a> {
    fn open(provider: &'a Lmnt) -> TTSResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(provider.timeout_seconds))
            .build()
            .map_err(|e| TTSError::Http(e.to_string()))?;
        Ok(Self { client, provider })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.provider.base_url.trim_end_matches('/'), path)
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

    async fn synthesize(&self, request: &SpeechRequest) -> TTSResult<AudioBuffer> {
        let body = SynthesisBody {
            voice: &request.voice,
            text: &request.text,
            format: "mp3",
        };
        let response = self
            .client
            .post(self.url("ai/speech/bytes"))
            .header(API_KEY_HEADER, &self.provider.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| TTSError::from_reqwest(PROVIDER_NAME, e))?;
        let response = Self::check_status(response).await?;

        let data = response
            .bytes()
            .await
            .map_err(|e| TTSError::Http(format!("failed to read audio body: {e}")))?;
        AudioBuffer::from_mp3_bytes(data.to_vec())
    }

    async fn list_voices(&self) -> TTSResult<Vec<Voice>> {
        let response = self
            .client
            .get(self.url("ai/voice/list"))
            .header(API_KEY_HEADER, &self.provider.api_key)
            .send()
            .await
            .map_err(|e| TTSError::from_reqwest(PROVIDER_NAME, e))?;
        let response = Self::check_status(response).await?;

        let entries: Vec<VoiceEntry> = response.json().await.map_err(|e| TTSError::Provider {
            provider: PROVIDER_NAME,
            message: format!("malformed voice catalog: {e}"),
        })?;
        Ok(entries
            .into_iter()
            .map(|entry| Voice::new(entry.id, entry.name))
            .collect())
    }

    async fn create_voice(&self, request: &CloneRequest) -> TTSResult<Voice> {
        let metadata = json!({
            "name": request.name,
            "type": "instant",
            "enhance": false,
            "description": request.description,
        });
        let mut form = Form::new().text("metadata", metadata.to_string());
        for path in &request.sample_paths {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "sample.wav".to_string());
            let data = tokio::fs::read(path).await?;
            form = form.part("files", Part::bytes(data).file_name(file_name));
        }

        let response = self
            .client
            .post(self.url("ai/voice"))
            .header(API_KEY_HEADER, &self.provider.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TTSError::from_reqwest(PROVIDER_NAME, e))?;
        let response = Self::check_status(response).await?;

        let created: VoiceEntry = response.json().await.map_err(|e| TTSError::Provider {
            provider: PROVIDER_NAME,
            message: format!("malformed clone response: {e}"),
        })?;
        Ok(Voice::new(created.id, created.name))
    }
}

#[async_trait]
impl TTSSpeechProvider for Lmnt {
    async fn synthesize(&self, request: SpeechRequest) -> TTSResult<AudioBuffer> {
        debug!(
            "LMNT synthesis request: voice={}, text length {}",
            request.voice,
            request.text.len()
        );
        let connection = self.connect()?;
        let audio = connection.synthesize(&request).await?;
        info!(
            "LMNT synthesis for voice {} returned {} bytes",
            request.voice,
            audio.len()
        );
        Ok(audio)
    }
}

#[async_trait]
impl TTSVoiceProvider for Lmnt {
    async fn list_voices(&self) -> TTSResult<Vec<Voice>> {
        let connection = self.connect()?;
        connection.list_voices().await
    }

    async fn clone_voice(&self, request: CloneRequest) -> TTSResult<Voice> {
        request.validate()?;
        debug!(
            "LMNT clone request: name={}, {} sample(s)",
            request.name,
            request.sample_paths.len()
        );
        let connection = self.connect()?;
        let voice = connection.create_voice(&request).await?;
        info!("LMNT created voice {}", voice.id);
        Ok(voice)
    }
}

impl TTSProvider for Lmnt {
    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }
}

impl TTSBuilder<Lmnt> {
    pub fn build(self) -> TTSResult<Arc<Lmnt>> {
        let api_key = self
            .api_key
            .ok_or(TTSError::MissingCredential(PROVIDER_NAME))?;
        Ok(Arc::new(Lmnt::new(
            api_key,
            self.base_url,
            self.timeout_seconds,
        )?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let client = Lmnt::new("key", None, None).unwrap();
        assert_eq!(client.api_key(), "key");
        assert_eq!(client.base_url(), "https://api.lmnt.com/v1");
    }

    #[test]
    fn test_new_rejects_empty_key() {
        let err = Lmnt::new("", None, None).unwrap_err();
        assert!(matches!(err, TTSError::MissingCredential("LMNT")));
    }

    #[test]
    fn test_connection_url_building() {
        let client = Lmnt::new("key", Some("http://localhost:9000/v1/".to_string()), None).unwrap();
        let connection = client.connect().unwrap();
        assert_eq!(
            connection.url("ai/speech/bytes"),
            "http://localhost:9000/v1/ai/speech/bytes"
        );
    }

    #[test]
    fn test_builder_requires_api_key() {
        let result = TTSBuilder::<Lmnt>::new().build();
        assert!(matches!(result, Err(TTSError::MissingCredential(_))));
    }

    #[tokio::test]
    async fn test_clone_rejects_empty_request() {
        let client = Lmnt::new("key", None, None).unwrap();
        let err = client
            .clone_voice(CloneRequest::new("", vec!["sample.wav".into()]))
            .await
            .unwrap_err();
        assert!(matches!(err, TTSError::Validation(_)));
    }
}
