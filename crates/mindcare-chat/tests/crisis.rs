use mindcare_chat::crisis::contains_crisis_language;

#[test]
fn neutral_messages_pass() {
    assert!(!contains_crisis_language("I'm stressed about my exams"));
    assert!(!contains_crisis_language("can't sleep lately"));
}

#[test]
fn explicit_crisis_language_is_flagged() {
    assert!(contains_crisis_language("sometimes I want to die"));
    assert!(contains_crisis_language("I've been thinking about suicide"));
}

#[test]
fn matching_is_case_insensitive() {
    assert!(contains_crisis_language("I want to KILL MYSELF"));
    assert!(contains_crisis_language("Self-Harm has crossed my mind"));
}

#[test]
fn phrase_embedded_in_sentence_is_flagged() {
    assert!(contains_crisis_language(
        "honestly my family would be better off dead without me around"
    ));
}
