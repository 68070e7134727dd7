use mindcare_core::models::risk::RiskLevel;
use mindcare_triage::error::TriageError;
use mindcare_triage::scoring::{AssessmentAnswers, classify};

fn answers(phq9: &[u8], gad7: &[u8]) -> AssessmentAnswers {
    AssessmentAnswers {
        phq9: phq9.to_vec(),
        gad7: gad7.to_vec(),
    }
}

/// Spread a total across the first eight PHQ-9 items, keeping the self-harm
/// item at zero so aggregate-score branches can be tested in isolation.
fn phq9_with_score(total: u32) -> Vec<u8> {
    assert!(total <= 24, "only 8 items available without the self-harm item");
    let mut items = vec![0u8; 9];
    let mut remaining = total;
    for item in items.iter_mut().take(8) {
        let v = remaining.min(3);
        *item = v as u8;
        remaining -= v;
    }
    items
}

fn gad7_with_score(total: u32) -> Vec<u8> {
    assert!(total <= 21);
    let mut items = vec![0u8; 7];
    let mut remaining = total;
    for item in items.iter_mut() {
        let v = remaining.min(3);
        *item = v as u8;
        remaining -= v;
    }
    items
}

#[test]
fn all_zero_answers_are_low() {
    let a = answers(&[0; 9], &[0; 7]);
    assert_eq!(classify(&a).unwrap(), RiskLevel::Low);
}

#[test]
fn max_answers_are_crisis_via_aggregate_scores() {
    let a = answers(&[3; 9], &[3; 7]);
    assert_eq!(a.phq9_score(), 27);
    assert_eq!(a.gad7_score(), 21);
    assert_eq!(classify(&a).unwrap(), RiskLevel::Crisis);
}

#[test]
fn any_self_harm_signal_forces_crisis_regardless_of_scores() {
    // Aggregate scores could not be lower, yet the isolated safety signal
    // must still win.
    let a = answers(&[0, 0, 0, 0, 0, 0, 0, 0, 1], &[0; 7]);
    assert_eq!(a.phq9_score(), 1);
    assert_eq!(classify(&a).unwrap(), RiskLevel::Crisis);
}

#[test]
fn self_harm_signal_not_masked_by_elevated_scores() {
    let mut phq9 = phq9_with_score(12);
    phq9[8] = 2;
    let a = answers(&phq9, &gad7_with_score(10));
    assert_eq!(classify(&a).unwrap(), RiskLevel::Crisis);
}

#[test]
fn phq9_score_twenty_is_crisis() {
    // Boundary: strictly above 19.
    let phq9 = phq9_with_score(20);
    let a = answers(&phq9, &[0; 7]);
    assert_eq!(a.phq9_score(), 20);
    assert_eq!(classify(&a).unwrap(), RiskLevel::Crisis);
}

#[test]
fn phq9_score_nineteen_falls_through_to_elevated() {
    // 19 does not cross the crisis threshold but does cross the >9 rung.
    let phq9 = phq9_with_score(19);
    let a = answers(&phq9, &[0; 7]);
    assert_eq!(a.phq9_score(), 19);
    assert_eq!(classify(&a).unwrap(), RiskLevel::Elevated);
}

#[test]
fn gad7_score_fifteen_is_crisis() {
    let a = answers(&[0; 9], &gad7_with_score(15));
    assert_eq!(classify(&a).unwrap(), RiskLevel::Crisis);
}

#[test]
fn gad7_score_fourteen_is_elevated() {
    let a = answers(&[0; 9], &gad7_with_score(14));
    assert_eq!(classify(&a).unwrap(), RiskLevel::Elevated);
}

#[test]
fn phq9_score_ten_is_elevated() {
    let a = answers(&phq9_with_score(10), &[0; 7]);
    assert_eq!(classify(&a).unwrap(), RiskLevel::Elevated);
}

#[test]
fn both_scores_at_nine_are_low() {
    // Neither threshold is crossed: strictly greater-than, not >=.
    let a = answers(&phq9_with_score(9), &gad7_with_score(9));
    assert_eq!(classify(&a).unwrap(), RiskLevel::Low);
}

#[test]
fn short_phq9_sequence_is_invalid_input() {
    let a = answers(&[0; 8], &[0; 7]);
    match classify(&a) {
        Err(TriageError::WrongItemCount {
            instrument_id,
            expected,
            actual,
        }) => {
            assert_eq!(instrument_id, "phq9");
            assert_eq!(expected, 9);
            assert_eq!(actual, 8);
        }
        other => panic!("expected WrongItemCount, got {other:?}"),
    }
}

#[test]
fn short_gad7_sequence_is_invalid_input() {
    let a = answers(&[0; 9], &[0; 6]);
    assert!(matches!(
        classify(&a),
        Err(TriageError::WrongItemCount { expected: 7, actual: 6, .. })
    ));
}

#[test]
fn overlong_sequence_is_invalid_input() {
    let a = answers(&[0; 10], &[0; 7]);
    assert!(matches!(
        classify(&a),
        Err(TriageError::WrongItemCount { expected: 9, actual: 10, .. })
    ));
}

#[test]
fn out_of_range_item_is_invalid_input() {
    let a = answers(&[0, 0, 0, 4, 0, 0, 0, 0, 0], &[0; 7]);
    match classify(&a) {
        Err(TriageError::ItemOutOfRange {
            instrument_id,
            item_index,
            value,
        }) => {
            assert_eq!(instrument_id, "phq9");
            assert_eq!(item_index, 3);
            assert_eq!(value, 4);
        }
        other => panic!("expected ItemOutOfRange, got {other:?}"),
    }
}

#[test]
fn classification_is_deterministic_and_total_over_valid_input() {
    // Walk a coarse grid of valid inputs: every outcome is one of the three
    // levels and repeated calls agree.
    for phq9_fill in 0..=3u8 {
        for gad7_fill in 0..=3u8 {
            for self_harm in 0..=3u8 {
                let mut phq9 = vec![phq9_fill; 9];
                phq9[8] = self_harm;
                let a = answers(&phq9, &vec![gad7_fill; 7]);
                let first = classify(&a).unwrap();
                let second = classify(&a).unwrap();
                assert_eq!(first, second);
                assert!(matches!(
                    first,
                    RiskLevel::Crisis | RiskLevel::Elevated | RiskLevel::Low
                ));
            }
        }
    }
}
