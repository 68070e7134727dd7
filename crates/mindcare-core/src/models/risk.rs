use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Triage outcome for a completed assessment. A closed enumeration so the
/// decision is exhaustively testable — never a free-form string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    /// Acute safety signal or severe symptom load. Route to crisis resources
    /// immediately.
    Crisis,
    /// Moderate symptom load. Route to results and recommendations.
    Elevated,
    /// Minimal symptom load. Route to self-help resources.
    Low,
}
