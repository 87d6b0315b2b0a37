use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One answered question of a questionnaire submission.
///
/// For DASS-21 `value` is the 0–3 frequency rating; for IAS it is the
/// point weight of the chosen option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionResponse {
    pub question_id: u32,
    pub value: u32,
}

impl QuestionResponse {
    pub fn new(question_id: u32, value: u32) -> Self {
        Self { question_id, value }
    }
}

pub type Dass21Response = QuestionResponse;

pub type IasResponse = QuestionResponse;
