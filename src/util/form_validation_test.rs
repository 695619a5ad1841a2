use super::*;

#[test]
fn invalid_form_is_cancelled_and_marked() {
    let decision = submit_decision(false);
    assert!(decision.cancel);
    assert!(decision.mark_validated);
}

#[test]
fn valid_form_submits_and_is_still_marked() {
    let decision = submit_decision(true);
    assert!(!decision.cancel);
    assert!(decision.mark_validated);
}

#[test]
fn was_validated_class_matches_css_framework() {
    assert_eq!(WAS_VALIDATED_CLASS, "was-validated");
}
