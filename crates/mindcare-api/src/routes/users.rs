use std::time::Duration;

use axum::extract::{Extension, Multipart, Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mindcare_audit::events::AuditEvent;
use mindcare_core::keys;
use mindcare_core::models::profile::{Gender, UserProfile, YearOfStudy};
use mindcare_storage::{objects, records};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// How long presigned photo URLs stay valid.
const PHOTO_URL_TTL: Duration = Duration::from_secs(15 * 60);

/// Upload cap for profile photos, enforced before anything touches S3.
pub const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

const ALLOWED_PHOTO_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];

#[derive(Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub profile: UserProfile,
    /// Presigned, time-limited URL for the profile photo.
    pub profile_photo_url: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub gender: Option<Gender>,
    pub institution: Option<String>,
    pub year_of_study: Option<YearOfStudy>,
}

#[derive(Serialize)]
pub struct PhotoResponse {
    pub photo_url: String,
}

fn authorize(auth: &AuthUser, id: Uuid) -> Result<(), ApiError> {
    if auth.id != id {
        return Err(ApiError::Forbidden(
            "cannot access another user's profile".to_string(),
        ));
    }
    Ok(())
}

async fn presign_photo(
    state: &AppState,
    profile: &UserProfile,
) -> Result<Option<String>, ApiError> {
    match &profile.profile_photo_key {
        Some(key) => {
            let url =
                objects::presign_get(&state.s3, &state.bucket, key, PHOTO_URL_TTL).await?;
            Ok(Some(url))
        }
        None => Ok(None),
    }
}

pub async fn get_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProfileResponse>, ApiError> {
    authorize(&auth, id)?;

    let profile: UserProfile =
        records::load_record(&state.s3, &state.bucket, &keys::profile(id)).await?;
    let profile_photo_url = presign_photo(&state, &profile).await?;

    Ok(Json(ProfileResponse {
        profile,
        profile_photo_url,
    }))
}

pub async fn update_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    authorize(&auth, id)?;

    let mut profile: UserProfile =
        records::load_record(&state.s3, &state.bucket, &keys::profile(id)).await?;

    // Persist what was given; absent fields keep their stored value.
    // Email is identity, not profile data — it is never updatable here.
    if let Some(full_name) = req.full_name {
        profile.full_name = full_name;
    }
    if let Some(phone_number) = req.phone_number {
        profile.phone_number = Some(phone_number);
    }
    if let Some(gender) = req.gender {
        profile.gender = Some(gender);
    }
    if let Some(institution) = req.institution {
        profile.institution = Some(institution);
    }
    if let Some(year_of_study) = req.year_of_study {
        profile.year_of_study = Some(year_of_study);
    }
    profile.updated_at = jiff::Timestamp::now();

    records::save_record(&state.s3, &state.bucket, &keys::profile(id), &profile).await?;

    AuditEvent::new("update_profile", "profile", id.to_string(), auth.id.to_string()).emit();

    let profile_photo_url = presign_photo(&state, &profile).await?;

    Ok(Json(ProfileResponse {
        profile,
        profile_photo_url,
    }))
}

pub async fn upload_photo(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<PhotoResponse>, ApiError> {
    authorize(&auth, id)?;

    let field = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
        .ok_or_else(|| ApiError::BadRequest("no file in upload".to_string()))?;

    let content_type = field
        .content_type()
        .map(|ct| ct.to_string())
        .ok_or_else(|| ApiError::BadRequest("upload is missing a content type".to_string()))?;
    if !ALLOWED_PHOTO_TYPES.contains(&content_type.as_str()) {
        return Err(ApiError::BadRequest(format!(
            "unsupported photo type: {content_type}"
        )));
    }

    let filename = field
        .file_name()
        .map(sanitize_filename)
        .unwrap_or_else(|| "photo".to_string());

    let bytes = field
        .bytes()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    if bytes.len() > MAX_PHOTO_BYTES {
        return Err(ApiError::BadRequest(format!(
            "photo exceeds the {MAX_PHOTO_BYTES} byte limit"
        )));
    }

    // A fresh UUID prefix per upload keeps old presigned URLs from pointing
    // at a silently replaced image.
    let key = keys::photo(id, &format!("{}-{filename}", Uuid::new_v4()));
    objects::put_object(
        &state.s3,
        &state.bucket,
        &key,
        bytes.to_vec(),
        Some(&content_type),
    )
    .await?;

    let mut profile: UserProfile =
        records::load_record(&state.s3, &state.bucket, &keys::profile(id)).await?;
    let previous = profile.profile_photo_key.replace(key.clone());
    profile.updated_at = jiff::Timestamp::now();
    records::save_record(&state.s3, &state.bucket, &keys::profile(id), &profile).await?;

    if let Some(old_key) = previous {
        objects::delete_object(&state.s3, &state.bucket, &old_key).await?;
    }

    AuditEvent::new("upload_photo", "profile", id.to_string(), auth.id.to_string()).emit();

    let photo_url = objects::presign_get(&state.s3, &state.bucket, &key, PHOTO_URL_TTL).await?;
    Ok(Json(PhotoResponse { photo_url }))
}

/// Keep only the final path component and drop characters that would break
/// out of the key layout.
fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let cleaned: String = base
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();
    if cleaned.is_empty() {
        "photo".to_string()
    } else {
        cleaned
    }
}
