//! OpenAI chat-completions client.
//!
//! One endpoint, one use: a single chat exchange that produces the
//! sample text pre-filled into the comparison form.

use crate::builder::LLMBuilder;
use crate::chat::{ChatMessage, ChatProvider};
use crate::error::{LLMError, LLMResult};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

const PROVIDER_NAME: &str = "OpenAI";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Serialize)]
struct ChatBody<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

/// Client for the OpenAI chat API
#[derive(Debug)]
pub struct OpenAIChat {
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
    client: Client,
}

impl OpenAIChat {
    pub fn new(
        api_key: impl Into<String>,
        base_url: Option<String>,
        model: Option<String>,
        max_tokens: Option<u32>,
        temperature: Option<f32>,
        timeout_seconds: Option<u64>,
    ) -> LLMResult<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(LLMError::AuthError("Missing OpenAI API key".to_string()));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(
                timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS),
            ))
            .build()
            .map_err(|e| LLMError::Http(e.to_string()))?;
        Ok(Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_tokens,
            temperature,
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

    fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ChatProvider for OpenAIChat {
    async fn chat(&self, messages: &[ChatMessage]) -> LLMResult<String> {
        if messages.is_empty() {
            return Err(LLMError::InvalidRequest(
                "chat requires at least one message".to_string(),
            ));
        }
        let body = ChatBody {
            model: &self.model,
            messages,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };
        debug!("OpenAI chat request: {} message(s)", messages.len());

        let response = self
            .client
            .post(self.chat_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LLMError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LLMError::Provider {
                provider: PROVIDER_NAME.to_string(),
                message: format!("HTTP {status}: {message}"),
            });
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|e| LLMError::ResponseFormat(e.to_string()))?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LLMError::ResponseFormat("completion had no content".to_string()))
    }
}

impl LLMBuilder<OpenAIChat> {
    pub fn build(self) -> LLMResult<Arc<OpenAIChat>> {
        let api_key = self.api_key.ok_or_else(|| {
            LLMError::InvalidRequest("No API key provided for OpenAI".to_string())
        })?;
        Ok(Arc::new(OpenAIChat::new(
            api_key,
            self.base_url,
            self.model,
            self.max_tokens,
            self.temperature,
            self.timeout_seconds,
        )?))
    }
}
