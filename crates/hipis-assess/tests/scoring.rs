use hipis_assess::scoring::score;
use hipis_assess::{all_questionnaires, find_questionnaire, get_questionnaire};
use hipis_core::models::assessment::QuestionnaireKind;

#[test]
fn score_is_the_literal_sum_of_answers() {
    for kind in [
        QuestionnaireKind::Phq9,
        QuestionnaireKind::Gad7,
        QuestionnaireKind::Ghq12,
    ] {
        assert_eq!(score(kind, &[]).score, 0);
        assert_eq!(score(kind, &[3]).score, 3);
        assert_eq!(score(kind, &[1, 2, 3]).score, 6);
        // Shorter than the question count still sums what was provided.
        assert_eq!(score(kind, &[0, 0, 2]).score, 2);
        // Longer than the question count is not truncated either.
        assert_eq!(score(kind, &[1; 20]).score, 20);
    }
}

#[test]
fn phq9_boundaries_fall_in_the_upper_band() {
    let cases = [
        (0, "Minimal"),
        (4, "Minimal"),
        (5, "Mild"),
        (9, "Mild"),
        (10, "Moderate"),
        (14, "Moderate"),
        (15, "Moderately Severe"),
        (19, "Moderately Severe"),
        (20, "Severe"),
        (27, "Severe"),
    ];
    let phq9 = get_questionnaire(QuestionnaireKind::Phq9);
    for (total, expected) in cases {
        assert_eq!(phq9.classify(total).severity, expected, "total {total}");
    }
}

#[test]
fn gad7_boundaries_fall_in_the_upper_band() {
    let cases = [
        (0, "Minimal"),
        (4, "Minimal"),
        (5, "Mild"),
        (9, "Mild"),
        (10, "Moderate"),
        (14, "Moderate"),
        (15, "Severe"),
        (21, "Severe"),
    ];
    let gad7 = get_questionnaire(QuestionnaireKind::Gad7);
    for (total, expected) in cases {
        assert_eq!(gad7.classify(total).severity, expected, "total {total}");
    }
}

#[test]
fn ghq12_boundaries_fall_in_the_upper_band() {
    let cases = [
        (0, "Good"),
        (11, "Good"),
        (12, "Fair"),
        (23, "Fair"),
        (24, "Poor"),
        (36, "Poor"),
    ];
    let ghq12 = get_questionnaire(QuestionnaireKind::Ghq12);
    for (total, expected) in cases {
        assert_eq!(ghq12.classify(total).severity, expected, "total {total}");
    }
}

#[test]
fn gad7_severe_scenario() {
    let result = score(QuestionnaireKind::Gad7, &[3, 3, 3, 2, 3, 2, 2]);
    assert_eq!(result.score, 18);
    assert_eq!(result.severity, "Severe");
}

#[test]
fn phq9_all_zero_scenario() {
    let result = score(QuestionnaireKind::Phq9, &[0, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(result.score, 0);
    assert_eq!(result.severity, "Minimal");
    assert_eq!(
        result.interpretation,
        "You have minimal depressive symptoms. Continue maintaining good mental health habits."
    );
}

#[test]
fn every_result_carries_four_recommendations() {
    for kind in [
        QuestionnaireKind::Phq9,
        QuestionnaireKind::Gad7,
        QuestionnaireKind::Ghq12,
    ] {
        assert_eq!(score(kind, &[1, 1]).recommendations.len(), 4);
    }
}

#[test]
fn question_counts_and_max_scores() {
    let phq9 = get_questionnaire(QuestionnaireKind::Phq9);
    assert_eq!(phq9.questions().len(), 9);
    assert_eq!(phq9.max_score(), 27);

    let gad7 = get_questionnaire(QuestionnaireKind::Gad7);
    assert_eq!(gad7.questions().len(), 7);
    assert_eq!(gad7.max_score(), 21);

    let ghq12 = get_questionnaire(QuestionnaireKind::Ghq12);
    assert_eq!(ghq12.questions().len(), 12);
    assert_eq!(ghq12.max_score(), 36);
}

#[test]
fn registry_round_trips_by_id() {
    for questionnaire in all_questionnaires() {
        let found = find_questionnaire(questionnaire.id()).unwrap();
        assert_eq!(found.kind(), questionnaire.kind());
    }
    assert!(find_questionnaire("mmpi").is_none());
}
