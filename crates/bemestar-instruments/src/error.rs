use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown questionnaire: {0}")]
    UnknownQuestionnaire(String),

    #[error("{questionnaire}: {} invalid response(s)", .errors.len())]
    InvalidResponses {
        questionnaire: String,
        errors: Vec<ValidationError>,
    },
}
