//! bemestar-instruments
//!
//! Questionnaire definitions and scoring engines. Pure data and pure
//! functions: defines the question banks, option weights, and the
//! threshold tables that turn responses into scores and classifications.

pub mod error;
pub mod instruments;
pub mod scoring;

use std::collections::HashSet;

use bemestar_core::models::response::QuestionResponse;
use error::InstrumentError;
use scoring::{Question, ValidationError, ValidationKind};

/// Trait implemented by each supported questionnaire.
pub trait Questionnaire: Send + Sync {
    /// Unique identifier (e.g., "dass21", "ias").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "DASS-21").
    fn name(&self) -> &str;

    /// The question bank, ordered by question id.
    fn questions(&self) -> &[Question];

    /// Check a submission against this questionnaire's bank.
    ///
    /// Scoring never calls this; it is offered to callers that want to
    /// reject incomplete or malformed submissions before scoring them.
    fn validate_responses(&self, responses: &[QuestionResponse]) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for response in responses {
            let Some(question) = self.questions().iter().find(|q| q.id == response.question_id)
            else {
                errors.push(ValidationError {
                    question_id: response.question_id,
                    value: Some(response.value),
                    kind: ValidationKind::UnknownQuestion,
                    message: format!(
                        "{}: question {} does not exist",
                        self.name(),
                        response.question_id
                    ),
                });
                continue;
            };

            if !seen.insert(response.question_id) {
                errors.push(ValidationError {
                    question_id: response.question_id,
                    value: Some(response.value),
                    kind: ValidationKind::DuplicateQuestion,
                    message: format!(
                        "{}: question {} answered more than once",
                        self.name(),
                        response.question_id
                    ),
                });
            }

            if !question.accepts(response.value) {
                errors.push(ValidationError {
                    question_id: response.question_id,
                    value: Some(response.value),
                    kind: ValidationKind::ValueOutOfRange,
                    message: format!(
                        "{}: value {} is not an option of question {} (range [{}, {}])",
                        self.name(),
                        response.value,
                        question.id,
                        question.min_value(),
                        question.max_value(),
                    ),
                });
            }
        }

        for question in self.questions() {
            if !seen.contains(&question.id) {
                errors.push(ValidationError {
                    question_id: question.id,
                    value: None,
                    kind: ValidationKind::MissingQuestion,
                    message: format!("{}: question {} is unanswered", self.name(), question.id),
                });
            }
        }
        errors
    }

    /// Format answered questions as Markdown, for reports and audit trails.
    fn to_structured_input(&self, responses: &[QuestionResponse]) -> String {
        let mut output = format!("## {}\n\n", self.name());
        for question in self.questions() {
            if let Some(response) = responses.iter().find(|r| r.question_id == question.id) {
                let answer = question
                    .options
                    .iter()
                    .find(|o| o.value == response.value)
                    .map(|o| o.label.as_str())
                    .unwrap_or("?");
                output.push_str(&format!(
                    "- {}. {}: {} ({})\n",
                    question.id, question.text, answer, response.value
                ));
            }
        }
        output
    }
}

/// Return all registered questionnaires.
pub fn all_questionnaires() -> Vec<Box<dyn Questionnaire>> {
    vec![
        Box::new(instruments::dass21::Dass21),
        Box::new(instruments::ias::Ias),
    ]
}

/// Look up a questionnaire by ID.
pub fn get_questionnaire(id: &str) -> Option<Box<dyn Questionnaire>> {
    all_questionnaires().into_iter().find(|q| q.id() == id)
}

/// Like [`get_questionnaire`], but an unknown ID is an error.
pub fn require_questionnaire(id: &str) -> Result<Box<dyn Questionnaire>, InstrumentError> {
    get_questionnaire(id).ok_or_else(|| InstrumentError::UnknownQuestionnaire(id.to_string()))
}
