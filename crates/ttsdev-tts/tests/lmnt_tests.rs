#![allow(unused_imports)]
mod common;

#[cfg(feature = "lmnt")]
mod lmnt_test_cases {
    use super::common::mp3_fixture;
    use httpmock::prelude::*;
    use std::io::Write;
    use ttsdev_tts::backends::lmnt::Lmnt;
    use ttsdev_tts::{
        CloneRequest, SpeechRequest, TTSError, TTSSpeechProvider, TTSVoiceProvider, Voice,
    };

    fn client_for(server: &MockServer) -> Lmnt {
        Lmnt::new("lmnt-test", Some(server.base_url()), Some(5)).unwrap()
    }

    #[tokio::test]
    async fn test_synthesize_requests_mp3_bytes() {
        let server = MockServer::start();
        let fixture = mp3_fixture(4);
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/ai/speech/bytes")
                .header("x-api-key", "lmnt-test")
                .json_body(serde_json::json!({
                    "voice": "lily",
                    "text": "Hello world",
                    "format": "mp3",
                }));
            then.status(200)
                .header("content-type", "audio/mpeg")
                .body(fixture.clone());
        });

        let client = client_for(&server);
        let audio = client
            .synthesize(SpeechRequest::new("Hello world", "lily"))
            .await
            .unwrap();

        mock.assert();
        assert_eq!(audio.data(), fixture.as_slice());
    }

    #[tokio::test]
    async fn test_list_voices_parses_array() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/ai/voice/list")
                .header("x-api-key", "lmnt-test");
            then.status(200).json_body(serde_json::json!([
                {"id": "lily", "name": "Lily", "state": "ready"},
                {"id": "daniel", "name": "Daniel", "state": "ready"},
            ]));
        });

        let client = client_for(&server);
        let voices = client.list_voices().await.unwrap();

        mock.assert();
        assert_eq!(
            voices,
            vec![Voice::new("lily", "Lily"), Voice::new("daniel", "Daniel")]
        );
    }

    #[tokio::test]
    async fn test_clone_voice_uploads_metadata_and_samples() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/ai/voice")
                .header("x-api-key", "lmnt-test")
                .body_contains(r#""name":"narrator_copy""#)
                .body_contains("fake wav sample data");
            then.status(200)
                .json_body(serde_json::json!({"id": "v-123", "name": "narrator_copy"}));
        });

        let mut sample = tempfile::NamedTempFile::new().unwrap();
        sample.write_all(b"fake wav sample data").unwrap();

        let client = client_for(&server);
        let voice = client
            .clone_voice(
                CloneRequest::new("narrator_copy", vec![sample.path().to_path_buf()])
                    .with_description("Custom voice"),
            )
            .await
            .unwrap();

        mock.assert();
        assert_eq!(voice, Voice::new("v-123", "narrator_copy"));
    }

    #[tokio::test]
    async fn test_auth_error_propagates() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/ai/speech/bytes");
            then.status(403).body("invalid api key");
        });

        let client = client_for(&server);
        let err = client
            .synthesize(SpeechRequest::new("Hello", "lily"))
            .await
            .unwrap_err();
        assert!(matches!(err, TTSError::Provider { provider: "LMNT", .. }));
    }
}
