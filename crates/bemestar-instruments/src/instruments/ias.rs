use bemestar_core::models::ias::IasResult;
use bemestar_core::models::response::IasResponse;
use bemestar_core::models::severity::IasClassification;

use crate::error::InstrumentError;
use crate::scoring::{AnswerOption, Question, QuestionCategory};
use crate::Questionnaire;

pub const MAX_SCORE: u32 = 100;

/// Inclusive upper bounds for high risk, unbalanced and fair.
const HIGH_RISK_MAX: u32 = 30;
const UNBALANCED_MAX: u32 = 50;
const FAIR_MAX: u32 = 70;

/// Appended to every IAS result regardless of classification.
pub const CLOSING_RECOMMENDATIONS: [&str; 3] = [
    "Pratique atividade física regularmente, pelo menos 150 minutos por semana.",
    "Durma de 7 a 9 horas por noite para apoiar o metabolismo e a saciedade.",
    "Gerencie o estresse, pois ele influencia diretamente suas escolhas alimentares.",
];

/// IAS: Índice de Alimentação Saudável.
/// Ten dietary-habit questions whose option weights add up to 0–100.
pub struct Ias;

impl Questionnaire for Ias {
    fn id(&self) -> &str {
        "ias"
    }

    fn name(&self) -> &str {
        "IAS"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            // Frequency of unhealthy items: rarer is better.
            let inverted_frequency = [
                ("Todos os dias", 0),
                ("3 a 5 vezes por semana", 3),
                ("1 a 2 vezes por semana", 7),
                ("Raramente ou nunca", 10),
            ];
            let weekly_frequency = [
                ("Raramente ou nunca", 0),
                ("1 a 2 dias por semana", 3),
                ("3 a 5 dias por semana", 7),
                ("Todos os dias", 10),
            ];

            vec![
                question(
                    1,
                    "Quantas porções de frutas você consome por dia?",
                    &[
                        ("Nenhuma", 0),
                        ("1 porção", 3),
                        ("2 porções", 7),
                        ("3 porções ou mais", 10),
                    ],
                ),
                question(
                    2,
                    "Com que frequência você come verduras e legumes?",
                    &weekly_frequency,
                ),
                question(
                    3,
                    "Quantos copos de água você bebe por dia?",
                    &[
                        ("Menos de 2 copos", 0),
                        ("2 a 3 copos", 2),
                        ("4 a 5 copos", 5),
                        ("6 a 7 copos", 8),
                        ("8 copos ou mais", 10),
                    ],
                ),
                question(
                    4,
                    "Com que frequência você come frituras?",
                    &inverted_frequency,
                ),
                question(
                    5,
                    "Com que frequência você come doces, bolos ou biscoitos recheados?",
                    &inverted_frequency,
                ),
                question(
                    6,
                    "Com que frequência você toma refrigerantes ou sucos industrializados?",
                    &inverted_frequency,
                ),
                question(
                    7,
                    "Com que frequência você consome alimentos ultraprocessados ou embutidos?",
                    &inverted_frequency,
                ),
                question(
                    8,
                    "Com que frequência você consome feijão, grãos integrais ou leguminosas?",
                    &weekly_frequency,
                ),
                question(
                    9,
                    "Você toma café da manhã?",
                    &[
                        ("Nunca", 0),
                        ("Às vezes", 5),
                        ("Quase sempre", 8),
                        ("Sempre", 10),
                    ],
                ),
                question(
                    10,
                    "Você adiciona sal à comida já pronta?",
                    &[
                        ("Sempre", 0),
                        ("Às vezes", 4),
                        ("Raramente", 7),
                        ("Nunca", 10),
                    ],
                ),
            ]
        });
        &QUESTIONS
    }
}

fn question(id: u32, text: &str, options: &[(&str, u32)]) -> Question {
    Question {
        id,
        text: text.to_string(),
        category: QuestionCategory::Diet,
        options: options
            .iter()
            .map(|(label, value)| AnswerOption {
                label: (*label).to_string(),
                value: *value,
            })
            .collect(),
    }
}

pub fn classify(total_score: u32) -> IasClassification {
    if total_score <= HIGH_RISK_MAX {
        IasClassification::HighRisk
    } else if total_score <= UNBALANCED_MAX {
        IasClassification::Unbalanced
    } else if total_score <= FAIR_MAX {
        IasClassification::Fair
    } else {
        IasClassification::Healthy
    }
}

/// Classification-specific advice followed by the closing advice every
/// employee receives.
pub fn recommendations(classification: IasClassification) -> Vec<String> {
    let specific: &[&str] = match classification {
        IasClassification::HighRisk => &[
            "Procure um(a) nutricionista para montar um plano alimentar individualizado.",
            "Reduza drasticamente frituras, doces e alimentos ultraprocessados.",
            "Substitua refrigerantes e sucos industrializados por água.",
            "Inclua pelo menos uma fruta e uma porção de verduras em todas as refeições principais.",
            "Evite pular refeições, principalmente o café da manhã.",
        ],
        IasClassification::Unbalanced => &[
            "Aumente o consumo diário de frutas, verduras e legumes.",
            "Limite frituras e doces a no máximo uma vez por semana.",
            "Prefira alimentos in natura ou minimamente processados.",
            "Beba ao menos 8 copos de água por dia.",
        ],
        IasClassification::Fair => &[
            "Mantenha o consumo de frutas e verduras e busque variar as cores no prato.",
            "Troque grãos refinados por versões integrais sempre que possível.",
            "Reduza o sal adicionado e prefira temperos naturais.",
            "Planeje as refeições da semana para evitar escolhas por conveniência.",
        ],
        IasClassification::Healthy => &[
            "Parabéns! Continue mantendo seus hábitos alimentares saudáveis.",
            "Continue variando frutas, verduras e fontes de proteína ao longo da semana.",
            "Mantenha a hidratação adequada ao longo do dia.",
            "Compartilhe seus hábitos saudáveis com colegas e familiares.",
        ],
    };

    specific
        .iter()
        .chain(CLOSING_RECOMMENDATIONS.iter())
        .map(|s| s.to_string())
        .collect()
}

/// Sum the option weights of every response and classify the total.
///
/// No cap is applied: a total above [`MAX_SCORE`] can only come from
/// values outside the option tables.
pub fn calculate_score(responses: &[IasResponse]) -> IasResult {
    let total_score = responses
        .iter()
        .fold(0u32, |sum, r| sum.saturating_add(r.value));
    let classification = classify(total_score);
    tracing::debug!(
        total_score,
        classification = classification.code(),
        "IAS score calculated"
    );

    IasResult {
        total_score,
        classification,
        recommendations: recommendations(classification),
    }
}

/// The score expressed as a percentage of [`MAX_SCORE`], for display.
pub fn percentage(score: u32) -> u32 {
    (f64::from(score) / f64::from(MAX_SCORE) * 100.0).round() as u32
}

/// Validate a full submission, then score it.
pub fn score_checked(responses: &[IasResponse]) -> Result<IasResult, InstrumentError> {
    let errors = Ias.validate_responses(responses);
    if !errors.is_empty() {
        return Err(InstrumentError::InvalidResponses {
            questionnaire: Ias.name().to_string(),
            errors,
        });
    }
    Ok(calculate_score(responses))
}
