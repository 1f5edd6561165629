use crate::error::LLMResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Role of a chat message author
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// One message in a chat exchange
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Trait for chat-completion capabilities
///
/// One synchronous request/response exchange; no streaming, no retry.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send the messages and return the assistant's text.
    async fn chat(&self, messages: &[ChatMessage]) -> LLMResult<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization() {
        assert_eq!(
            serde_json::to_string(&ChatRole::System).unwrap(),
            r#""system""#
        );
        assert_eq!(serde_json::to_string(&ChatRole::User).unwrap(), r#""user""#);
    }

    #[test]
    fn test_message_constructors() {
        let message = ChatMessage::system("You are a helpful assistant.");
        assert_eq!(message.role, ChatRole::System);
        assert_eq!(message.content, "You are a helpful assistant.");
    }
}
