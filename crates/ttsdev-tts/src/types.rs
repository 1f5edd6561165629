use crate::error::{TTSError, TTSResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A provider-defined synthetic speaker identity.
///
/// Some vendors expose only a name; for those, `id` and `name` carry the
/// same value. The catalog is fetched fresh on every request and never
/// cached locally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    /// Provider-scoped identifier used as the synthesis parameter
    pub id: String,
    /// Human-readable label shown next to playback
    pub name: String,
}

impl Voice {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Voice known only by name; the name doubles as the identifier.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
        }
    }
}

impl std::fmt::Display for Voice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// One synthesis request against a single provider voice.
#[derive(Clone, Debug)]
pub struct SpeechRequest {
    /// Text to synthesize
    pub text: String,
    /// Voice identifier valid for the target provider
    pub voice: String,
}

impl SpeechRequest {
    pub fn new(text: impl Into<String>, voice: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice: voice.into(),
        }
    }
}

/// A voice-cloning request: a desired name plus one or more audio samples.
///
/// Consumed once; on success the provider owns a new persistent voice,
/// which shows up in the catalog on a later fetch.
#[derive(Clone, Debug)]
pub struct CloneRequest {
    /// Desired voice name
    pub name: String,
    /// Paths to sample audio files to upload
    pub sample_paths: Vec<PathBuf>,
    /// Optional description stored with the voice
    pub description: Option<String>,
}

impl CloneRequest {
    pub fn new(name: impl Into<String>, sample_paths: Vec<PathBuf>) -> Self {
        Self {
            name: name.into(),
            sample_paths,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a UTC timestamp to the name so repeated cloning attempts
    /// don't collide on the provider side.
    pub fn with_unique_name(mut self) -> Self {
        let stamp = chrono::Utc::now().format("%Y%m%d%H%M%S");
        self.name = format!("{}_{}", self.name, stamp);
        self
    }

    /// Check the request preconditions: a non-empty name and at least
    /// one sample file.
    pub fn validate(&self) -> TTSResult<()> {
        if self.name.trim().is_empty() {
            return Err(TTSError::Validation(
                "clone request needs a non-empty voice name".to_string(),
            ));
        }
        if self.sample_paths.is_empty() {
            return Err(TTSError::Validation(
                "clone request needs at least one audio sample".to_string(),
            ));
        }
        Ok(())
    }
}

/// Audio container format for synthesized output
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    Mp3,
    Wav,
}

impl Default for AudioFormat {
    fn default() -> Self {
        Self::Mp3
    }
}

impl AudioFormat {
    /// MIME type a playback widget expects for this container
    pub fn mime_type(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "audio/mpeg",
            AudioFormat::Wav => "audio/wav",
        }
    }
}

impl std::fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AudioFormat::Mp3 => write!(f, "mp3"),
            AudioFormat::Wav => write!(f, "wav"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_voice_uses_name_as_id() {
        let voice = Voice::named("alloy");
        assert_eq!(voice.id, "alloy");
        assert_eq!(voice.name, "alloy");
    }

    #[test]
    fn test_clone_request_validation() {
        let ok = CloneRequest::new("narrator", vec![PathBuf::from("sample.wav")]);
        assert!(ok.validate().is_ok());

        let no_samples = CloneRequest::new("narrator", vec![]);
        assert!(matches!(
            no_samples.validate(),
            Err(TTSError::Validation(_))
        ));

        let no_name = CloneRequest::new("  ", vec![PathBuf::from("sample.wav")]);
        assert!(matches!(no_name.validate(), Err(TTSError::Validation(_))));
    }

    #[test]
    fn test_unique_name_appends_timestamp() {
        let request =
            CloneRequest::new("narrator", vec![PathBuf::from("sample.wav")]).with_unique_name();
        assert!(request.name.starts_with("narrator_"));
        assert!(request.name.len() > "narrator_".len());
    }

    #[test]
    fn test_audio_format_mime() {
        assert_eq!(AudioFormat::Mp3.mime_type(), "audio/mpeg");
        assert_eq!(AudioFormat::default(), AudioFormat::Mp3);
    }
}
