//! Crisis-language screening for chat messages.
//!
//! A conservative keyword scan over the user's message. This is a routing
//! aid for the frontend (show the crisis screen alongside the reply), not a
//! clinical judgment — the authoritative safety check is the PHQ-9 triage
//! rule.

const CRISIS_PHRASES: &[&str] = &[
    "kill myself",
    "end my life",
    "end it all",
    "suicide",
    "suicidal",
    "self harm",
    "self-harm",
    "hurt myself",
    "hurting myself",
    "better off dead",
    "want to die",
    "no reason to live",
];

/// Return true if the message contains crisis language.
///
/// Matching is case-insensitive and substring-based; false positives are
/// acceptable, missed signals are not.
pub fn contains_crisis_language(message: &str) -> bool {
    let lowered = message.to_lowercase();
    CRISIS_PHRASES.iter().any(|phrase| lowered.contains(phrase))
}
