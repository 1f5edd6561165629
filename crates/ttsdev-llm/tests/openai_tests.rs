#![allow(unused_imports)]
use ttsdev_llm::{ChatMessage, ChatProvider, LLMError, builder::LLMBuilder};

#[cfg(feature = "openai")]
mod openai_test_cases {
    use super::*;
    use httpmock::prelude::*;
    use ttsdev_llm::backends::openai::OpenAIChat;

    #[tokio::test]
    async fn test_chat_returns_assistant_text() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/chat/completions")
                .header("authorization", "Bearer test-key")
                .json_body(serde_json::json!({
                    "model": "gpt-3.5-turbo",
                    "messages": [
                        {"role": "system", "content": "You are a helpful assistant."},
                        {"role": "user", "content": "Write a short haiku"},
                    ],
                }));
            then.status(200).json_body(serde_json::json!({
                "choices": [
                    {"message": {"role": "assistant", "content": "Autumn moonlight—\na worm digs silently\ninto the chestnut."}}
                ]
            }));
        });

        let client = LLMBuilder::<OpenAIChat>::new()
            .api_key("test-key")
            .base_url(server.base_url())
            .build()
            .unwrap();
        let text = client
            .chat(&[
                ChatMessage::system("You are a helpful assistant."),
                ChatMessage::user("Write a short haiku"),
            ])
            .await
            .unwrap();

        mock.assert();
        assert!(text.starts_with("Autumn moonlight"));
    }

    #[tokio::test]
    async fn test_api_error_propagates() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(429).body("rate limit exceeded");
        });

        let client = LLMBuilder::<OpenAIChat>::new()
            .api_key("test-key")
            .base_url(server.base_url())
            .build()
            .unwrap();
        let err = client
            .chat(&[ChatMessage::user("hi")])
            .await
            .unwrap_err();
        match err {
            LLMError::Provider { message, .. } => assert!(message.contains("429")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_empty_choices_is_format_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200).json_body(serde_json::json!({"choices": []}));
        });

        let client = LLMBuilder::<OpenAIChat>::new()
            .api_key("test-key")
            .base_url(server.base_url())
            .build()
            .unwrap();
        let err = client
            .chat(&[ChatMessage::user("hi")])
            .await
            .unwrap_err();
        assert!(matches!(err, LLMError::ResponseFormat(_)));
    }
}
