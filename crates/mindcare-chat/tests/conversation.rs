use mindcare_chat::chat::{ChatMessage, ChatRole, validate_conversation};
use mindcare_chat::error::ChatError;

fn user(content: &str) -> ChatMessage {
    ChatMessage {
        role: ChatRole::User,
        content: content.to_string(),
    }
}

fn assistant(content: &str) -> ChatMessage {
    ChatMessage {
        role: ChatRole::Assistant,
        content: content.to_string(),
    }
}

#[test]
fn valid_history_returns_last_user_message() {
    let messages = vec![user("hi"), assistant("hello!"), user("I can't sleep")];
    assert_eq!(validate_conversation(&messages).unwrap(), "I can't sleep");
}

#[test]
fn single_user_message_is_valid() {
    let messages = vec![user("hi")];
    assert_eq!(validate_conversation(&messages).unwrap(), "hi");
}

#[test]
fn empty_history_is_invalid() {
    assert!(matches!(
        validate_conversation(&[]),
        Err(ChatError::InvalidConversation(_))
    ));
}

#[test]
fn history_opening_with_assistant_is_invalid() {
    // Must be rejected up front, not passed through to fail at invocation.
    let messages = vec![assistant("hello!"), user("hi")];
    assert!(matches!(
        validate_conversation(&messages),
        Err(ChatError::InvalidConversation(_))
    ));
}

#[test]
fn history_ending_with_assistant_is_invalid() {
    let messages = vec![user("hi"), assistant("hello!")];
    assert!(matches!(
        validate_conversation(&messages),
        Err(ChatError::InvalidConversation(_))
    ));
}
