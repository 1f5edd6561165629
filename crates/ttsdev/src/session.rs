//! Session orchestration for one comparison run.
//!
//! The UI shell owns its widgets; everything it needs from the backend
//! goes through [`Session`], an explicit context object carrying the
//! per-session credentials. A provider whose credential is absent is
//! simply not offered — that is a precondition, not a runtime failure.
//!
//! A run takes one text and a per-provider voice selection, fans out
//! each provider's batch over its selected voices, and executes the
//! provider batches concurrently with each other (they share no state).
//! Results come back per provider as ordered (voice, result) clips for
//! playback.

use crate::llm::backends::openai::OpenAIChat;
use crate::llm::builder::LLMBuilder;
use crate::llm::{ChatMessage, ChatProvider, LLMError, LLMResult};
use crate::tts::backends::elevenlabs::ElevenLabs;
use crate::tts::backends::lmnt::Lmnt;
use crate::tts::backends::openai::OpenAITts;
use crate::tts::builder::TTSBuilder;
use crate::tts::{
    AudioBuffer, CloneRequest, TTSError, TTSProvider, TTSResult, Voice, synthesize_many_settled,
};
use futures::future::join_all;
use log::{debug, info};
use std::path::PathBuf;
use std::sync::Arc;

/// Prompt pair for the sample-text assist.
const SAMPLE_SYSTEM_PROMPT: &str = "You are a helpful assistant.";
const SAMPLE_USER_PROMPT: &str = "Write a short haiku";

/// The TTS vendors a session can talk to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    OpenAI,
    ElevenLabs,
    Lmnt,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 3] = [
        ProviderKind::OpenAI,
        ProviderKind::ElevenLabs,
        ProviderKind::Lmnt,
    ];
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::OpenAI => write!(f, "OpenAI"),
            ProviderKind::ElevenLabs => write!(f, "ElevenLabs"),
            ProviderKind::Lmnt => write!(f, "LMNT"),
        }
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = TTSError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAI),
            "elevenlabs" => Ok(ProviderKind::ElevenLabs),
            "lmnt" => Ok(ProviderKind::Lmnt),
            _ => Err(TTSError::Validation(format!("Unknown TTS provider: {s}"))),
        }
    }
}

/// Per-session API keys, held in memory only.
#[derive(Clone, Debug, Default)]
pub struct Credentials {
    pub openai: Option<String>,
    pub elevenlabs: Option<String>,
    pub lmnt: Option<String>,
}

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_openai(mut self, key: impl Into<String>) -> Self {
        self.openai = Some(key.into());
        self
    }

    pub fn with_elevenlabs(mut self, key: impl Into<String>) -> Self {
        self.elevenlabs = Some(key.into());
        self
    }

    pub fn with_lmnt(mut self, key: impl Into<String>) -> Self {
        self.lmnt = Some(key.into());
        self
    }

    fn key_for(&self, kind: ProviderKind) -> Option<&str> {
        match kind {
            ProviderKind::OpenAI => self.openai.as_deref(),
            ProviderKind::ElevenLabs => self.elevenlabs.as_deref(),
            ProviderKind::Lmnt => self.lmnt.as_deref(),
        }
    }
}

/// Base-URL overrides, for self-hosted gateways and tests.
#[derive(Clone, Debug, Default)]
pub struct Endpoints {
    pub openai: Option<String>,
    pub elevenlabs: Option<String>,
    pub lmnt: Option<String>,
}

impl Endpoints {
    fn url_for(&self, kind: ProviderKind) -> Option<String> {
        match kind {
            ProviderKind::OpenAI => self.openai.clone(),
            ProviderKind::ElevenLabs => self.elevenlabs.clone(),
            ProviderKind::Lmnt => self.lmnt.clone(),
        }
    }
}

/// One voice's include-in-this-run flag.
///
/// Selections are rebuilt by the UI shell on every interaction cycle and
/// only ever read here.
#[derive(Clone, Debug)]
pub struct VoiceSelection {
    pub voice: Voice,
    pub include: bool,
}

impl VoiceSelection {
    pub fn new(voice: Voice, include: bool) -> Self {
        Self { voice, include }
    }
}

/// The voice selections for one run, per provider.
#[derive(Clone, Debug, Default)]
pub struct RunPlan {
    pub openai: Vec<VoiceSelection>,
    pub elevenlabs: Vec<VoiceSelection>,
    pub lmnt: Vec<VoiceSelection>,
}

impl RunPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, kind: ProviderKind, voice: Voice, include: bool) {
        let selections = match kind {
            ProviderKind::OpenAI => &mut self.openai,
            ProviderKind::ElevenLabs => &mut self.elevenlabs,
            ProviderKind::Lmnt => &mut self.lmnt,
        };
        selections.push(VoiceSelection::new(voice, include));
    }

    pub fn selection_for(&self, kind: ProviderKind) -> &[VoiceSelection] {
        match kind {
            ProviderKind::OpenAI => &self.openai,
            ProviderKind::ElevenLabs => &self.elevenlabs,
            ProviderKind::Lmnt => &self.lmnt,
        }
    }

    /// Voices flagged for inclusion, in selection order.
    fn chosen(&self, kind: ProviderKind) -> Vec<Voice> {
        self.selection_for(kind)
            .iter()
            .filter(|s| s.include)
            .map(|s| s.voice.clone())
            .collect()
    }
}

/// One voice's playback entry: the voice label and its synthesis result.
#[derive(Debug)]
pub struct VoiceClip {
    pub voice: Voice,
    pub audio: TTSResult<AudioBuffer>,
}

/// One provider's portion of a run, clips in voice-selection order.
#[derive(Debug)]
pub struct ProviderRun {
    pub provider: ProviderKind,
    pub clips: Vec<VoiceClip>,
}

/// Explicit session context: credentials in, playback-ready audio out.
pub struct Session {
    credentials: Credentials,
    endpoints: Endpoints,
}

impl Session {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoints: Endpoints::default(),
        }
    }

    /// Override provider base URLs (tests, self-hosted gateways).
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Providers whose credentials are present, in display order.
    pub fn available_providers(&self) -> Vec<ProviderKind> {
        ProviderKind::ALL
            .into_iter()
            .filter(|kind| self.credentials.key_for(*kind).is_some())
            .collect()
    }

    /// Construct the client for one provider.
    ///
    /// Fails with `MissingCredential` when the session has no key for it.
    pub fn provider(&self, kind: ProviderKind) -> TTSResult<Arc<dyn TTSProvider>> {
        let key = self.credentials.key_for(kind).ok_or(match kind {
            ProviderKind::OpenAI => TTSError::MissingCredential("OpenAI"),
            ProviderKind::ElevenLabs => TTSError::MissingCredential("ElevenLabs"),
            ProviderKind::Lmnt => TTSError::MissingCredential("LMNT"),
        })?;
        let base_url = self.endpoints.url_for(kind);

        match kind {
            ProviderKind::OpenAI => {
                let mut builder = TTSBuilder::<OpenAITts>::new().api_key(key);
                if let Some(url) = base_url {
                    builder = builder.base_url(url);
                }
                Ok(builder.build()? as Arc<dyn TTSProvider>)
            }
            ProviderKind::ElevenLabs => {
                let mut builder = TTSBuilder::<ElevenLabs>::new().api_key(key);
                if let Some(url) = base_url {
                    builder = builder.base_url(url);
                }
                Ok(builder.build()? as Arc<dyn TTSProvider>)
            }
            ProviderKind::Lmnt => {
                let mut builder = TTSBuilder::<Lmnt>::new().api_key(key);
                if let Some(url) = base_url {
                    builder = builder.base_url(url);
                }
                Ok(builder.build()? as Arc<dyn TTSProvider>)
            }
        }
    }

    /// Fetch one provider's current voice catalog.
    pub async fn list_voices(&self, kind: ProviderKind) -> TTSResult<Vec<Voice>> {
        self.provider(kind)?.list_voices().await
    }

    /// Submit a voice-cloning request.
    ///
    /// The desired name gets a timestamp suffix so repeated attempts
    /// don't collide on the provider side. The provider may index the
    /// new voice asynchronously; re-fetch the catalog to see it.
    pub async fn clone_voice(
        &self,
        kind: ProviderKind,
        name: &str,
        sample_paths: Vec<PathBuf>,
        description: Option<&str>,
    ) -> TTSResult<Voice> {
        let mut request = CloneRequest::new(name, sample_paths).with_unique_name();
        if let Some(description) = description {
            request = request.with_description(description);
        }
        let voice = self.provider(kind)?.clone_voice(request).await?;
        info!("{kind} created cloned voice {}", voice.id);
        Ok(voice)
    }

    /// Generate a short sample text to pre-fill the input form.
    pub async fn generate_sample_text(&self) -> LLMResult<String> {
        let key = self
            .credentials
            .openai
            .as_deref()
            .ok_or_else(|| LLMError::AuthError("Missing OpenAI API key".to_string()))?;
        let mut builder = LLMBuilder::<OpenAIChat>::new().api_key(key);
        if let Some(url) = &self.endpoints.openai {
            builder = builder.base_url(url.clone());
        }
        let client = builder.build()?;
        client
            .chat(&[
                ChatMessage::system(SAMPLE_SYSTEM_PROMPT),
                ChatMessage::user(SAMPLE_USER_PROMPT),
            ])
            .await
    }

    /// Run one comparison: synthesize `text` with every selected voice
    /// of every configured provider.
    ///
    /// Empty text is rejected here, before any provider is touched.
    /// Provider batches run concurrently with each other; within a
    /// batch, each voice carries its own result, so one failing voice
    /// does not drop the rest of the provider's clips. Per-provider
    /// pre-dispatch validation (text length) still fails the whole run.
    pub async fn run(&self, text: &str, plan: &RunPlan) -> TTSResult<Vec<ProviderRun>> {
        if text.trim().is_empty() {
            return Err(TTSError::Validation(
                "enter some text to generate speech from".to_string(),
            ));
        }

        let mut jobs = Vec::new();
        for kind in self.available_providers() {
            let voices = plan.chosen(kind);
            if voices.is_empty() {
                continue;
            }
            let provider = self.provider(kind)?;
            debug!("{kind}: synthesizing {} voice(s)", voices.len());
            jobs.push(async move {
                let ids: Vec<String> = voices.iter().map(|v| v.id.clone()).collect();
                let results = synthesize_many_settled(provider.as_ref(), text, &ids).await?;
                let clips = voices
                    .into_iter()
                    .zip(results)
                    .map(|(voice, audio)| VoiceClip { voice, audio })
                    .collect();
                Ok::<_, TTSError>(ProviderRun {
                    provider: kind,
                    clips,
                })
            });
        }

        join_all(jobs).await.into_iter().collect()
    }
}
