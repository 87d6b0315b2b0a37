use bemestar_core::models::dass21::{Dass21Classification, Dass21Scores};
use bemestar_core::models::response::Dass21Response;
use bemestar_core::models::severity::Severity;
use bemestar_instruments::error::InstrumentError;
use bemestar_instruments::instruments::dass21::{
    self, ANXIETY_ITEMS, DEPRESSION_ITEMS, STRESS_ITEMS,
};
use bemestar_instruments::scoring::{QuestionCategory, ValidationKind};

/// Spread `raw_sum` over the seven items of a category, 0–3 each.
fn category_responses(items: std::ops::RangeInclusive<u32>, mut raw_sum: u32) -> Vec<Dass21Response> {
    items
        .map(|id| {
            let value = raw_sum.min(3);
            raw_sum -= value;
            Dass21Response::new(id, value)
        })
        .collect()
}

fn submission(stress: u32, anxiety: u32, depression: u32) -> Vec<Dass21Response> {
    let mut responses = category_responses(STRESS_ITEMS, stress);
    responses.extend(category_responses(ANXIETY_ITEMS, anxiety));
    responses.extend(category_responses(DEPRESSION_ITEMS, depression));
    responses
}

#[test]
fn mixed_submission_scores_and_classifies() {
    let responses = submission(10, 3, 2);
    let scores = dass21::calculate_scores(&responses);
    assert_eq!(
        scores,
        Dass21Scores {
            stress: 20,
            anxiety: 6,
            depression: 4,
        }
    );

    let classification = dass21::classify_scores(&scores);
    assert_eq!(
        classification,
        Dass21Classification {
            stress: Severity::Moderate,
            anxiety: Severity::Normal,
            depression: Severity::Normal,
        }
    );
    assert_eq!(dass21::highest_severity(&classification), Severity::Moderate);
}

#[test]
fn scores_are_even_and_bounded() {
    for raw in 0..=21 {
        let scores = dass21::calculate_scores(&submission(raw, raw, raw));
        for score in [scores.stress, scores.anxiety, scores.depression] {
            assert_eq!(score % 2, 0);
            assert!(score <= 42);
        }
    }
    let max = dass21::calculate_scores(&submission(21, 21, 21));
    assert_eq!(max.total(), 126);
}

#[test]
fn missing_responses_contribute_zero() {
    let scores = dass21::calculate_scores(&[Dass21Response::new(3, 2)]);
    assert_eq!(scores.stress, 4);
    assert_eq!(scores.anxiety, 0);
    assert_eq!(scores.depression, 0);
    assert_eq!(dass21::calculate_scores(&[]), Dass21Scores::default());
}

#[test]
fn duplicate_question_ids_are_summed() {
    let responses = vec![Dass21Response::new(15, 3), Dass21Response::new(15, 3)];
    assert_eq!(dass21::calculate_scores(&responses).depression, 12);
}

#[test]
fn question_ids_map_to_categories() {
    assert_eq!(dass21::category_of(1), Some(QuestionCategory::Stress));
    assert_eq!(dass21::category_of(14), Some(QuestionCategory::Anxiety));
    assert_eq!(dass21::category_of(15), Some(QuestionCategory::Depression));
    assert_eq!(dass21::category_of(22), None);
}

#[test]
fn out_of_range_question_ids_are_ignored() {
    let responses = vec![Dass21Response::new(0, 3), Dass21Response::new(22, 3)];
    assert_eq!(dass21::calculate_scores(&responses), Dass21Scores::default());
}

#[test]
fn depression_cutoffs_are_inclusive() {
    let cases = [
        (9, Severity::Normal),
        (10, Severity::Mild),
        (13, Severity::Mild),
        (14, Severity::Moderate),
        (20, Severity::Moderate),
        (21, Severity::Severe),
        (27, Severity::Severe),
        (28, Severity::ExtremelySevere),
    ];
    for (score, expected) in cases {
        assert_eq!(dass21::classify_depression(score), expected, "depression {score}");
    }
}

#[test]
fn anxiety_cutoffs_are_inclusive() {
    let cases = [
        (7, Severity::Normal),
        (8, Severity::Mild),
        (9, Severity::Mild),
        (10, Severity::Moderate),
        (14, Severity::Moderate),
        (15, Severity::Severe),
        (19, Severity::Severe),
        (20, Severity::ExtremelySevere),
    ];
    for (score, expected) in cases {
        assert_eq!(dass21::classify_anxiety(score), expected, "anxiety {score}");
    }
}

#[test]
fn stress_cutoffs_are_inclusive() {
    let cases = [
        (14, Severity::Normal),
        (15, Severity::Mild),
        (18, Severity::Mild),
        (19, Severity::Moderate),
        (25, Severity::Moderate),
        (26, Severity::Severe),
        (33, Severity::Severe),
        (34, Severity::ExtremelySevere),
    ];
    for (score, expected) in cases {
        assert_eq!(dass21::classify_stress(score), expected, "stress {score}");
    }
}

#[test]
fn classification_is_monotonic() {
    let classifiers: [fn(u32) -> Severity; 3] = [
        dass21::classify_stress,
        dass21::classify_anxiety,
        dass21::classify_depression,
    ];
    for classify in classifiers {
        let mut previous = Severity::Normal;
        for score in 0..=42 {
            let current = classify(score);
            assert!(current >= previous, "score {score} dropped from {previous:?}");
            previous = current;
        }
    }
}

#[test]
fn highest_severity_is_one_of_the_inputs() {
    for stress in Severity::ALL {
        for anxiety in Severity::ALL {
            for depression in Severity::ALL {
                let classification = Dass21Classification {
                    stress,
                    anxiety,
                    depression,
                };
                let highest = dass21::highest_severity(&classification);
                assert!([stress, anxiety, depression].contains(&highest));
                assert!(highest >= stress && highest >= anxiety && highest >= depression);
            }
        }
    }
}

#[test]
fn scoring_is_deterministic() {
    let responses = submission(12, 9, 17);
    assert_eq!(
        dass21::calculate_scores(&responses),
        dass21::calculate_scores(&responses)
    );
}

#[test]
fn checked_scoring_accepts_complete_submission() {
    let (scores, classification) = dass21::score_checked(&submission(10, 3, 2)).unwrap();
    assert_eq!(scores.stress, 20);
    assert_eq!(classification.highest(), Severity::Moderate);
}

#[test]
fn checked_scoring_rejects_bad_values_and_gaps() {
    let mut responses = submission(10, 3, 2);
    responses.retain(|r| r.question_id != 21);
    responses[0].value = 4;

    let errors = match dass21::score_checked(&responses) {
        Err(InstrumentError::InvalidResponses { errors, .. }) => errors,
        other => panic!("expected InvalidResponses, got {other:?}"),
    };
    assert!(errors.iter().any(|e| e.kind == ValidationKind::ValueOutOfRange && e.question_id == 1));
    assert!(errors.iter().any(|e| e.kind == ValidationKind::MissingQuestion && e.question_id == 21));
}
