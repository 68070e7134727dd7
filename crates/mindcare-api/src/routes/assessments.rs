use axum::Json;
use axum::extract::Extension;
use serde::{Deserialize, Serialize};

use mindcare_audit::events::AuditEvent;
use mindcare_core::models::risk::RiskLevel;
use mindcare_core::models::screen::Screen;
use mindcare_triage::scoring::{AssessmentAnswers, classify};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

#[derive(Deserialize)]
pub struct ClassifyRequest {
    pub phq9: Vec<u8>,
    pub gad7: Vec<u8>,
}

#[derive(Serialize)]
pub struct ClassifyResponse {
    pub risk_level: RiskLevel,
    pub phq9_score: u32,
    pub gad7_score: u32,
    /// Where the frontend should navigate next.
    pub next_screen: Screen,
}

/// Run the triage decision over a completed assessment.
///
/// The result is returned and discarded — answers and scores are never
/// persisted. Partial submissions are rejected by the triage validation.
pub async fn classify_assessment(
    Extension(auth): Extension<AuthUser>,
    Json(req): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let answers = AssessmentAnswers {
        phq9: req.phq9,
        gad7: req.gad7,
    };

    let risk_level = classify(&answers)?;

    // Scores are derived server-side; the audit record carries the outcome
    // only, never the answers.
    AuditEvent::new(
        "assessment_classified",
        "assessment",
        auth.id.to_string(),
        auth.id.to_string(),
    )
    .with_details(serde_json::json!({ "risk_level": risk_level }))
    .emit();

    Ok(Json(ClassifyResponse {
        risk_level,
        phq9_score: answers.phq9_score(),
        gad7_score: answers.gad7_score(),
        next_screen: Screen::for_risk(risk_level),
    }))
}
