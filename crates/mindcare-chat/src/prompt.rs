//! System prompt builder for the wellness chatbot.
//!
//! Appends a per-user context block to the base coaching prompt so the
//! model can address the student by name.

const BASE_PROMPT: &str = "You are a supportive mental-wellness companion for \
university students. Listen without judgment, suggest evidence-based coping \
strategies, and encourage professional help where appropriate. You are not a \
therapist and must never present yourself as one. If the student expresses \
thoughts of self-harm or suicide, respond with care and direct them to the \
crisis helpline 1800-599-0019 immediately.";

/// Build the system prompt for a chat session.
///
/// Without a student name the base prompt is returned unchanged.
pub fn build_system_prompt(student_name: Option<&str>) -> String {
    match student_name {
        Some(name) => {
            format!("{BASE_PROMPT}\n\n<student_context>\nname: {name}\n</student_context>")
        }
        None => BASE_PROMPT.to_string(),
    }
}
