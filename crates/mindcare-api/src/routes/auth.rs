use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mindcare_audit::events::AuditEvent;
use mindcare_core::keys;
use mindcare_core::models::profile::UserProfile;
use mindcare_core::models::user::{EmailIndex, StoredUser, User};
use mindcare_storage::error::StorageError;
use mindcare_storage::records;

use crate::error::ApiError;
use crate::state::AppState;

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let name = req.name.trim();
    let email = req.email.trim().to_lowercase();

    if name.is_empty() {
        return Err(ApiError::BadRequest("name is required".to_string()));
    }
    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::BadRequest("a valid email is required".to_string()));
    }
    if req.password.len() < MIN_PASSWORD_LEN {
        return Err(ApiError::BadRequest(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }

    let id = Uuid::new_v4();
    let now = jiff::Timestamp::now();

    // The email index is written first, conditionally: if two registrations
    // race on the same address, only one claims the key.
    let index = EmailIndex { user_id: id };
    match records::save_record_if_absent(&state.s3, &state.bucket, &keys::email_index(&email), &index)
        .await
    {
        Ok(()) => {}
        Err(StorageError::AlreadyExists { .. }) => {
            return Err(ApiError::Conflict("email already registered".to_string()));
        }
        Err(e) => return Err(e.into()),
    }

    let password_hash = mindcare_auth::password::hash_password(&req.password)?;
    let user = StoredUser {
        id,
        name: name.to_string(),
        email: email.clone(),
        password_hash,
        created_at: now,
    };
    records::save_record(&state.s3, &state.bucket, &keys::user(id), &user).await?;

    let profile = UserProfile::new(id, name.to_string(), email.clone(), now);
    records::save_record(&state.s3, &state.bucket, &keys::profile(id), &profile).await?;

    AuditEvent::new("register", "user", id.to_string(), id.to_string()).emit();

    let token = mindcare_auth::jwt::issue_token(
        &state.jwt_secret,
        id,
        &email,
        state.token_ttl_seconds,
    )?;

    Ok(Json(AuthResponse {
        token,
        user: user.to_public(),
    }))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let email = req.email.trim().to_lowercase();

    // A missing email and a bad password produce the same response, so the
    // endpoint cannot be used to probe which addresses are registered.
    let invalid = || ApiError::Unauthorized("invalid email or password".to_string());

    let index: EmailIndex =
        match records::load_record(&state.s3, &state.bucket, &keys::email_index(&email)).await {
            Ok(index) => index,
            Err(StorageError::NotFound { .. }) => return Err(invalid()),
            Err(e) => return Err(e.into()),
        };

    let user: StoredUser =
        match records::load_record(&state.s3, &state.bucket, &keys::user(index.user_id)).await {
            Ok(user) => user,
            Err(StorageError::NotFound { key }) => {
                // Index points at a user record that no longer exists.
                return Err(ApiError::Internal(format!(
                    "email index references missing record: {key}"
                )));
            }
            Err(e) => return Err(e.into()),
        };

    match mindcare_auth::password::verify_password(&req.password, &user.password_hash) {
        Ok(()) => {}
        Err(mindcare_auth::error::AuthError::AuthFailed) => return Err(invalid()),
        Err(e) => return Err(e.into()),
    }

    AuditEvent::new("login", "user", user.id.to_string(), user.id.to_string()).emit();

    let token = mindcare_auth::jwt::issue_token(
        &state.jwt_secret,
        user.id,
        &user.email,
        state.token_ttl_seconds,
    )?;

    Ok(Json(AuthResponse {
        token,
        user: user.to_public(),
    }))
}
