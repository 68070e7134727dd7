//! S3 key/path conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of records in the MindCare S3 bucket.

use uuid::Uuid;

pub fn user(id: Uuid) -> String {
    format!("users/{id}.json")
}

pub const USERS_PREFIX: &str = "users/";

/// Email-to-user-id index object. Emails are lowercased and trimmed before
/// becoming part of a key so lookups are case-insensitive.
pub fn email_index(email: &str) -> String {
    format!("emails/{}.json", email.trim().to_lowercase())
}

pub fn profile(user_id: Uuid) -> String {
    format!("profiles/{user_id}.json")
}

pub fn photo(user_id: Uuid, filename: &str) -> String {
    format!("photos/{user_id}/{filename}")
}

pub fn photos_prefix(user_id: Uuid) -> String {
    format!("photos/{user_id}/")
}
