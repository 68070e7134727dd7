//! mindcare-chat
//!
//! The chatbot relay: forwards a conversation to AWS Bedrock (Converse API)
//! and returns the assistant's reply. The relay itself carries no dialogue
//! logic — the one piece of local behavior is crisis-language screening so
//! the frontend can route to the crisis screen.

pub mod chat;
pub mod crisis;
pub mod error;
pub mod prompt;
