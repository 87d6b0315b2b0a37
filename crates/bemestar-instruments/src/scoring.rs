use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// The dimension a question contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionCategory {
    Stress,
    Anxiety,
    Depression,
    /// IAS questions all feed the single dietary score.
    Diet,
}

/// A selectable answer and the points it is worth.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub label: String,
    pub value: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub category: QuestionCategory,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn accepts(&self, value: u32) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    pub fn min_value(&self) -> u32 {
        self.options.iter().map(|o| o.value).min().unwrap_or(0)
    }

    pub fn max_value(&self) -> u32 {
        self.options.iter().map(|o| o.value).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ValidationKind {
    UnknownQuestion,
    ValueOutOfRange,
    DuplicateQuestion,
    MissingQuestion,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub question_id: u32,
    pub value: Option<u32>,
    pub kind: ValidationKind,
    pub message: String,
}
