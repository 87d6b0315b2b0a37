use std::ops::RangeInclusive;

use bemestar_core::models::dass21::{Dass21Classification, Dass21Scores};
use bemestar_core::models::response::Dass21Response;
use bemestar_core::models::severity::Severity;

use crate::error::InstrumentError;
use crate::scoring::{AnswerOption, Question, QuestionCategory};
use crate::Questionnaire;

pub const STRESS_ITEMS: RangeInclusive<u32> = 1..=7;
pub const ANXIETY_ITEMS: RangeInclusive<u32> = 8..=14;
pub const DEPRESSION_ITEMS: RangeInclusive<u32> = 15..=21;

/// Short-form sums are doubled to match the 42-item scale.
const SHORT_FORM_MULTIPLIER: u32 = 2;

/// Inclusive upper bounds for normal, mild, moderate and severe.
/// Anything above the last cutoff is extremely severe.
const DEPRESSION_CUTOFFS: [u32; 4] = [9, 13, 20, 27];
const ANXIETY_CUTOFFS: [u32; 4] = [7, 9, 14, 19];
const STRESS_CUTOFFS: [u32; 4] = [14, 18, 25, 33];

/// DASS-21: Depression, Anxiety and Stress Scales, 21-item short form.
/// Items 1–7 stress, 8–14 anxiety, 15–21 depression, each rated 0–3.
pub struct Dass21;

impl Questionnaire for Dass21 {
    fn id(&self) -> &str {
        "dass21"
    }

    fn name(&self) -> &str {
        "DASS-21"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            let stress = [
                "Achei difícil me acalmar",
                "Tive a tendência de reagir de forma exagerada às situações",
                "Senti que estava sempre nervoso(a)",
                "Senti-me agitado(a)",
                "Achei difícil relaxar",
                "Fui intolerante com as coisas que me impediam de continuar o que eu estava fazendo",
                "Senti que estava um pouco emotivo(a) ou sensível demais",
            ];
            let anxiety = [
                "Senti minha boca seca",
                "Tive dificuldade em respirar em alguns momentos",
                "Senti tremores (por exemplo, nas mãos)",
                "Preocupei-me com situações em que eu pudesse entrar em pânico e parecesse ridículo(a)",
                "Senti que ia entrar em pânico",
                "Sabia que meu coração estava alterado mesmo sem ter feito esforço físico",
                "Senti medo sem motivo",
            ];
            let depression = [
                "Não consegui vivenciar nenhum sentimento positivo",
                "Achei difícil ter iniciativa para fazer as coisas",
                "Senti que não tinha nada a desejar",
                "Senti-me depressivo(a) e sem ânimo",
                "Não consegui me entusiasmar com nada",
                "Senti que não tinha valor como pessoa",
                "Senti que a vida não tinha sentido",
            ];

            [
                (QuestionCategory::Stress, stress),
                (QuestionCategory::Anxiety, anxiety),
                (QuestionCategory::Depression, depression),
            ]
            .into_iter()
            .flat_map(|(category, texts)| texts.into_iter().map(move |text| (category, text)))
            .zip(1u32..)
            .map(|((category, text), id)| Question {
                id,
                text: text.to_string(),
                category,
                options: frequency_options(),
            })
            .collect()
        });
        &QUESTIONS
    }
}

fn frequency_options() -> Vec<AnswerOption> {
    [
        "Não se aplicou de maneira alguma",
        "Aplicou-se em algum grau, ou por pouco tempo",
        "Aplicou-se em um grau considerável, ou por uma boa parte do tempo",
        "Aplicou-se muito, ou na maioria do tempo",
    ]
    .iter()
    .zip(0u32..)
    .map(|(label, value)| AnswerOption {
        label: (*label).to_string(),
        value,
    })
    .collect()
}

/// Category a DASS-21 question id belongs to, if any.
pub fn category_of(question_id: u32) -> Option<QuestionCategory> {
    if STRESS_ITEMS.contains(&question_id) {
        Some(QuestionCategory::Stress)
    } else if ANXIETY_ITEMS.contains(&question_id) {
        Some(QuestionCategory::Anxiety)
    } else if DEPRESSION_ITEMS.contains(&question_id) {
        Some(QuestionCategory::Depression)
    } else {
        None
    }
}

/// Sum each category's responses and apply the short-form multiplier.
///
/// Every response inside a category's id range is added, so a question
/// answered twice counts twice. Missing questions contribute nothing and
/// ids outside 1–21 are ignored.
pub fn calculate_scores(responses: &[Dass21Response]) -> Dass21Scores {
    let category_score = |items: RangeInclusive<u32>| {
        responses
            .iter()
            .filter(|r| items.contains(&r.question_id))
            .fold(0u32, |sum, r| sum.saturating_add(r.value))
            .saturating_mul(SHORT_FORM_MULTIPLIER)
    };

    let scores = Dass21Scores {
        stress: category_score(STRESS_ITEMS),
        anxiety: category_score(ANXIETY_ITEMS),
        depression: category_score(DEPRESSION_ITEMS),
    };
    tracing::debug!(
        stress = scores.stress,
        anxiety = scores.anxiety,
        depression = scores.depression,
        "DASS-21 scores calculated"
    );
    scores
}

fn band(score: u32, cutoffs: &[u32; 4]) -> Severity {
    Severity::ALL
        .iter()
        .zip(cutoffs)
        .find(|(_, cutoff)| score <= **cutoff)
        .map(|(severity, _)| *severity)
        .unwrap_or(Severity::ExtremelySevere)
}

pub fn classify_depression(score: u32) -> Severity {
    band(score, &DEPRESSION_CUTOFFS)
}

pub fn classify_anxiety(score: u32) -> Severity {
    band(score, &ANXIETY_CUTOFFS)
}

pub fn classify_stress(score: u32) -> Severity {
    band(score, &STRESS_CUTOFFS)
}

pub fn classify_scores(scores: &Dass21Scores) -> Dass21Classification {
    Dass21Classification {
        stress: classify_stress(scores.stress),
        anxiety: classify_anxiety(scores.anxiety),
        depression: classify_depression(scores.depression),
    }
}

pub fn highest_severity(classification: &Dass21Classification) -> Severity {
    classification.highest()
}

/// Validate a full submission, then score and classify it.
pub fn score_checked(
    responses: &[Dass21Response],
) -> Result<(Dass21Scores, Dass21Classification), InstrumentError> {
    let errors = Dass21.validate_responses(responses);
    if !errors.is_empty() {
        return Err(InstrumentError::InvalidResponses {
            questionnaire: Dass21.name().to_string(),
            errors,
        });
    }
    let scores = calculate_scores(responses);
    Ok((scores, classify_scores(&scores)))
}
