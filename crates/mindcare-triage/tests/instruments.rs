use mindcare_triage::error::TriageError;
use mindcare_triage::scoring::SELF_HARM_ITEM;
use mindcare_triage::{all_instruments, get_instrument};

#[test]
fn both_instruments_are_registered() {
    let ids: Vec<String> = all_instruments()
        .iter()
        .map(|i| i.id().to_string())
        .collect();
    assert_eq!(ids, vec!["phq9", "gad7"]);
}

#[test]
fn phq9_has_nine_items_and_self_harm_last() {
    let phq9 = get_instrument("phq9").unwrap();
    assert_eq!(phq9.items().len(), 9);
    assert_eq!(phq9.max_score(), 27);
    assert_eq!(phq9.items()[SELF_HARM_ITEM].id, "self_harm");
}

#[test]
fn gad7_has_seven_items() {
    let gad7 = get_instrument("gad7").unwrap();
    assert_eq!(gad7.items().len(), 7);
    assert_eq!(gad7.max_score(), 21);
}

#[test]
fn unknown_instrument_is_none() {
    assert!(get_instrument("basc3").is_none());
}

#[test]
fn validate_accepts_full_severity_range() {
    let gad7 = get_instrument("gad7").unwrap();
    assert!(gad7.validate_answers(&[0, 1, 2, 3, 3, 2, 1]).is_ok());
}

#[test]
fn validate_rejects_severity_above_three() {
    let gad7 = get_instrument("gad7").unwrap();
    let err = gad7.validate_answers(&[0, 1, 2, 3, 3, 2, 9]).unwrap_err();
    assert!(matches!(
        err,
        TriageError::ItemOutOfRange { item_index: 6, value: 9, .. }
    ));
}
