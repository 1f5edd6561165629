#![allow(unused_imports)]
mod common;

#[cfg(feature = "openai")]
mod openai_test_cases {
    use super::common::mp3_fixture;
    use httpmock::prelude::*;
    use ttsdev_tts::backends::openai::OpenAITts;
    use ttsdev_tts::{SpeechRequest, TTSError, TTSSpeechProvider, synthesis};

    fn client_for(server: &MockServer) -> OpenAITts {
        OpenAITts::new("test-key", Some(server.base_url()), None, Some(5)).unwrap()
    }

    #[tokio::test]
    async fn test_synthesize_streams_mp3() {
        let server = MockServer::start();
        let fixture = mp3_fixture(10);
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/audio/speech")
                .header("authorization", "Bearer test-key")
                .json_body(serde_json::json!({
                    "model": "tts-1",
                    "voice": "alloy",
                    "input": "Hello world",
                    "response_format": "mp3",
                }));
            then.status(200)
                .header("content-type", "audio/mpeg")
                .body(fixture.clone());
        });

        let client = client_for(&server);
        let audio = client
            .synthesize(SpeechRequest::new("Hello world", "alloy"))
            .await
            .unwrap();

        mock.assert();
        assert_eq!(audio.data(), fixture.as_slice());
        assert_eq!(audio.duration_ms().unwrap(), 261);
    }

    #[tokio::test]
    async fn test_api_error_propagates() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/audio/speech");
            then.status(401).body(r#"{"error": "invalid api key"}"#);
        });

        let client = client_for(&server);
        let err = client
            .synthesize(SpeechRequest::new("Hello", "alloy"))
            .await
            .unwrap_err();
        match err {
            TTSError::Provider { provider, message } => {
                assert_eq!(provider, "OpenAI");
                assert!(message.contains("401"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_non_audio_body_rejected() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/audio/speech");
            then.status(200).body("<html>gateway error</html>");
        });

        let client = client_for(&server);
        let err = client
            .synthesize(SpeechRequest::new("Hello", "alloy"))
            .await
            .unwrap_err();
        assert!(matches!(err, TTSError::Audio(_)));
    }

    #[tokio::test]
    async fn test_fan_out_hits_endpoint_once_per_voice() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/audio/speech");
            then.status(200).body(mp3_fixture(3));
        });

        let client = client_for(&server);
        let voices: Vec<String> = ["alloy", "echo", "fable"]
            .iter()
            .map(|v| v.to_string())
            .collect();
        let buffers = synthesis::synthesize_many(&client, "Hello world", &voices)
            .await
            .unwrap();

        assert_eq!(buffers.len(), 3);
        mock.assert_hits(3);
    }

    #[tokio::test]
    async fn test_long_text_never_reaches_the_wire() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/audio/speech");
            then.status(200).body(mp3_fixture(1));
        });

        let client = client_for(&server);
        let text = "a".repeat(4001);
        let err = synthesis::synthesize_many(&client, &text, &["alloy".to_string()])
            .await
            .unwrap_err();

        assert!(matches!(err, TTSError::TextTooLong { .. }));
        mock.assert_hits(0);
    }
}
