use mindcare_chat::prompt::build_system_prompt;

#[test]
fn anonymous_session_gets_base_prompt_only() {
    let prompt = build_system_prompt(None);
    assert!(!prompt.contains("<student_context>"));
    assert!(prompt.contains("1800-599-0019"));
}

#[test]
fn named_session_gets_a_context_block() {
    let prompt = build_system_prompt(Some("Asha"));
    assert!(prompt.contains("<student_context>"));
    assert!(prompt.contains("name: Asha"));
    assert!(prompt.ends_with("</student_context>"));
}

#[test]
fn context_block_never_replaces_the_base_prompt() {
    let prompt = build_system_prompt(Some("Asha"));
    assert!(prompt.starts_with(&build_system_prompt(None)));
}
