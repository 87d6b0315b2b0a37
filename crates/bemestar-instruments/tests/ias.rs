use bemestar_core::models::response::IasResponse;
use bemestar_core::models::severity::IasClassification;
use bemestar_instruments::instruments::ias::{self, Ias, CLOSING_RECOMMENDATIONS, MAX_SCORE};
use bemestar_instruments::scoring::ValidationKind;
use bemestar_instruments::Questionnaire;

fn answer_all(pick: impl Fn(&[u32]) -> u32) -> Vec<IasResponse> {
    Ias.questions()
        .iter()
        .map(|q| {
            let weights: Vec<u32> = q.options.iter().map(|o| o.value).collect();
            IasResponse::new(q.id, pick(&weights))
        })
        .collect()
}

#[test]
fn maximum_answers_score_one_hundred() {
    let responses = answer_all(|w| *w.iter().max().unwrap());
    let result = ias::calculate_score(&responses);
    assert_eq!(result.total_score, MAX_SCORE);
    assert_eq!(result.classification, IasClassification::Healthy);
}

#[test]
fn minimum_answers_score_zero() {
    let responses = answer_all(|w| *w.iter().min().unwrap());
    let result = ias::calculate_score(&responses);
    assert_eq!(result.total_score, 0);
    assert_eq!(result.classification, IasClassification::HighRisk);
}

#[test]
fn bank_weights_span_zero_to_one_hundred() {
    let questions = Ias.questions();
    assert_eq!(questions.len(), 10);
    let min: u32 = questions.iter().map(|q| q.min_value()).sum();
    let max: u32 = questions.iter().map(|q| q.max_value()).sum();
    assert_eq!((min, max), (0, 100));
}

#[test]
fn classification_boundaries() {
    let cases = [
        (0, IasClassification::HighRisk),
        (30, IasClassification::HighRisk),
        (31, IasClassification::Unbalanced),
        (50, IasClassification::Unbalanced),
        (51, IasClassification::Fair),
        (70, IasClassification::Fair),
        (71, IasClassification::Healthy),
        (100, IasClassification::Healthy),
    ];
    for (score, expected) in cases {
        assert_eq!(ias::classify(score), expected, "score {score}");
    }
}

#[test]
fn recommendations_end_with_closing_advice() {
    for classification in [
        IasClassification::HighRisk,
        IasClassification::Unbalanced,
        IasClassification::Fair,
        IasClassification::Healthy,
    ] {
        let recommendations = ias::recommendations(classification);
        assert!((7..=8).contains(&recommendations.len()));
        let tail = &recommendations[recommendations.len() - 3..];
        assert_eq!(tail, CLOSING_RECOMMENDATIONS.map(String::from).as_slice());
    }
}

#[test]
fn specific_recommendations_differ_by_classification() {
    let high_risk = ias::recommendations(IasClassification::HighRisk);
    let healthy = ias::recommendations(IasClassification::Healthy);
    assert_ne!(high_risk[0], healthy[0]);
}

#[test]
fn percentage_matches_score() {
    assert_eq!(ias::percentage(0), 0);
    assert_eq!(ias::percentage(45), 45);
    assert_eq!(ias::percentage(100), 100);
}

#[test]
fn checked_scoring_rejects_value_outside_option_table() {
    let mut responses = answer_all(|w| w[1]);
    responses[2].value = 1;
    let err = ias::score_checked(&responses).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("IAS"), "{message}");
    assert!(Ias
        .validate_responses(&responses)
        .iter()
        .any(|e| e.kind == ValidationKind::ValueOutOfRange && e.question_id == 3));
}

#[test]
fn checked_scoring_accepts_bank_answers() {
    let result = ias::score_checked(&answer_all(|w| w[1])).unwrap();
    assert_eq!(result.classification, ias::classify(result.total_score));
}
