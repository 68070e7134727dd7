//! The risk triage decision.
//!
//! Maps a completed PHQ-9 + GAD-7 assessment to exactly one
//! [`RiskLevel`], prioritizing safety signals over aggregate scores.
//! Pure and synchronous by design: the decision must be unit-testable
//! without network, storage, or UI dependencies.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use mindcare_core::models::risk::RiskLevel;

use crate::Instrument;
use crate::error::TriageError;
use crate::instruments::{gad7::Gad7, phq9::Phq9};

/// 0-indexed position of the PHQ-9 self-harm/suicidal-ideation item.
pub const SELF_HARM_ITEM: usize = 8;

/// PHQ-9 total above which the aggregate score alone forces `Crisis`.
pub const PHQ9_CRISIS_THRESHOLD: u32 = 19;
/// GAD-7 total above which the aggregate score alone forces `Crisis`.
pub const GAD7_CRISIS_THRESHOLD: u32 = 14;
/// Total above which either instrument signals `Elevated`.
pub const ELEVATED_THRESHOLD: u32 = 9;

/// A single questionnaire item, rendered verbatim by the frontend.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub id: String,
    pub text: String,
}

/// Ordered answer severities for one completed assessment session.
///
/// Created once per session, consumed exactly once by [`classify`], and
/// discarded — assessment results are never persisted. Scores are derived
/// here by summing the answers; a client-supplied total is never trusted,
/// since the scores gate a safety-critical branch.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentAnswers {
    pub phq9: Vec<u8>,
    pub gad7: Vec<u8>,
}

impl AssessmentAnswers {
    /// Sum of the PHQ-9 item severities, in [0, 27] once validated.
    pub fn phq9_score(&self) -> u32 {
        self.phq9.iter().map(|&v| v as u32).sum()
    }

    /// Sum of the GAD-7 item severities, in [0, 21] once validated.
    pub fn gad7_score(&self) -> u32 {
        self.gad7.iter().map(|&v| v as u32).sum()
    }
}

/// Map a completed assessment to exactly one [`RiskLevel`].
///
/// The rule is ordered and the first matching condition wins — the ordering
/// is load-bearing and must be preserved:
///
/// 1. PHQ-9 score > 19, or GAD-7 score > 14, or any non-zero answer on the
///    PHQ-9 self-harm item → [`RiskLevel::Crisis`].
/// 2. Either score > 9 → [`RiskLevel::Elevated`].
/// 3. Otherwise → [`RiskLevel::Low`].
///
/// The self-harm item is checked independent of aggregate score: a low total
/// can mask an acute, isolated safety signal, so a single elevated self-harm
/// answer forces `Crisis` no matter how low every other answer is.
///
/// All thresholds are strict greater-than. Over validated input the function
/// is total and deterministic; the only failure mode is [`TriageError`] on
/// malformed answers.
pub fn classify(answers: &AssessmentAnswers) -> Result<RiskLevel, TriageError> {
    Phq9.validate_answers(&answers.phq9)?;
    Gad7.validate_answers(&answers.gad7)?;

    let phq9_score = answers.phq9_score();
    let gad7_score = answers.gad7_score();

    if phq9_score > PHQ9_CRISIS_THRESHOLD
        || gad7_score > GAD7_CRISIS_THRESHOLD
        || answers.phq9[SELF_HARM_ITEM] > 0
    {
        return Ok(RiskLevel::Crisis);
    }

    if phq9_score > ELEVATED_THRESHOLD || gad7_score > ELEVATED_THRESHOLD {
        return Ok(RiskLevel::Elevated);
    }

    Ok(RiskLevel::Low)
}
