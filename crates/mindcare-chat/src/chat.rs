//! Bedrock conversation relay.
//!
//! The Converse API takes the full message history on every call, so the
//! relay is stateless: the client sends the history it wants considered.

use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, Message, SystemContentBlock,
};
use serde::{Deserialize, Serialize};

use crate::error::ChatError;

/// Inference profile invoked when `MINDCARE_MODEL_ID` is unset. The Converse
/// API requires an inference profile ID — bare foundation model IDs fail
/// with "on-demand throughput isn't supported".
pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-3-5-haiku-20241022-v1:0";

/// A single message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Role of a chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

/// Check the shape of a conversation before relaying it.
///
/// Converse rejects histories that open with the assistant, and crisis
/// screening needs the latest user message — both are caller mistakes, so
/// they are caught here as invalid input rather than surfacing later as an
/// invocation failure. Returns the content of the final user message.
pub fn validate_conversation(messages: &[ChatMessage]) -> Result<&str, ChatError> {
    match messages.first() {
        Some(ChatMessage {
            role: ChatRole::User,
            ..
        }) => {}
        _ => {
            return Err(ChatError::InvalidConversation(
                "conversation must open with a user message".to_string(),
            ));
        }
    }

    match messages.last() {
        Some(ChatMessage {
            role: ChatRole::User,
            content,
        }) => Ok(content),
        _ => Err(ChatError::InvalidConversation(
            "conversation must end with a user message".to_string(),
        )),
    }
}

/// Send a multi-turn conversation to Bedrock and return the assistant's reply.
///
/// The caller provides the full message history and a system prompt; nothing
/// is retried or transformed. Callers run [`validate_conversation`] first —
/// this function assumes a well-shaped history.
pub async fn chat_converse(
    config: &aws_config::SdkConfig,
    model_id: &str,
    system_prompt: &str,
    messages: &[ChatMessage],
) -> Result<String, ChatError> {
    let client = aws_sdk_bedrockruntime::Client::new(config);

    let mut converse_messages: Vec<Message> = Vec::new();

    for msg in messages {
        let role = match msg.role {
            ChatRole::User => ConversationRole::User,
            ChatRole::Assistant => ConversationRole::Assistant,
        };
        let message = Message::builder()
            .role(role)
            .content(ContentBlock::Text(msg.content.clone()))
            .build()
            .map_err(|e| ChatError::Invocation(e.to_string()))?;
        converse_messages.push(message);
    }

    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(system_prompt.to_string()))
        .set_messages(Some(converse_messages))
        .send()
        .await
        .map_err(|e| ChatError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| ChatError::ResponseParse("no message in response".to_string()))?;

    let response_text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    Ok(response_text)
}
