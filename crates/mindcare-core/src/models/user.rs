use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Public user identity, safe to send to the frontend.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// The full user record as persisted in S3. Carries the argon2 password
/// hash and is never serialized to the frontend — handlers convert to
/// [`User`] before responding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: jiff::Timestamp,
}

impl StoredUser {
    pub fn to_public(&self) -> User {
        User {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Maps a lowercased email to the owning user id. Stored at
/// `keys::email_index` so registration can detect duplicates and login can
/// resolve an email without listing every user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailIndex {
    pub user_id: Uuid,
}
