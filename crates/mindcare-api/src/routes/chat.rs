use axum::Json;
use axum::extract::{Extension, State};
use serde::{Deserialize, Serialize};

use mindcare_chat::chat::{ChatMessage, chat_converse, validate_conversation};
use mindcare_chat::crisis::contains_crisis_language;
use mindcare_chat::prompt::build_system_prompt;
use mindcare_core::keys;
use mindcare_core::models::profile::UserProfile;
use mindcare_storage::error::StorageError;
use mindcare_storage::records;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    /// Full conversation so far, oldest first, ending with the user's
    /// latest message. The client owns the history — nothing is stored
    /// server-side.
    pub messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
    /// True when the latest user message or the reply contains crisis
    /// language — the frontend routes to the crisis screen.
    pub crisis_detected: bool,
}

/// Relay a conversation to the model. Stateless: message content is never
/// persisted or logged.
pub async fn send_message(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let last_user_message = validate_conversation(&req.messages)?.to_string();

    // The student's name personalizes the prompt; a missing profile is not
    // an error here.
    let name = match records::load_record::<UserProfile>(
        &state.s3,
        &state.bucket,
        &keys::profile(auth.id),
    )
    .await
    {
        Ok(profile) => Some(profile.full_name),
        Err(StorageError::NotFound { .. }) => None,
        Err(e) => return Err(e.into()),
    };

    let system_prompt = build_system_prompt(name.as_deref());

    let reply = chat_converse(
        &state.aws_config,
        &state.model_id,
        &system_prompt,
        &req.messages,
    )
    .await?;

    let crisis_detected =
        contains_crisis_language(&last_user_message) || contains_crisis_language(&reply);

    Ok(Json(ChatResponse {
        reply,
        crisis_detected,
    }))
}
