use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserProfile {
    pub user_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    /// S3 key of the uploaded photo (`photos/{user_id}/...`). The API layer
    /// presigns this into a URL — the raw key never reaches the frontend.
    pub profile_photo_key: Option<String>,
    pub gender: Option<Gender>,
    pub institution: Option<String>,
    pub year_of_study: Option<YearOfStudy>,
    pub updated_at: jiff::Timestamp,
}

impl UserProfile {
    /// A fresh, mostly-empty profile created alongside a new user record.
    pub fn new(user_id: Uuid, full_name: String, email: String, now: jiff::Timestamp) -> Self {
        Self {
            user_id,
            full_name,
            email,
            phone_number: None,
            profile_photo_key: None,
            gender: None,
            institution: None,
            year_of_study: None,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum YearOfStudy {
    FirstYear,
    SecondYear,
    ThirdYear,
    FourthYear,
    Graduate,
    PostGraduate,
}
