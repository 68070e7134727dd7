use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("invalid conversation: {0}")]
    InvalidConversation(String),

    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("AWS config error: {0}")]
    Config(String),
}
