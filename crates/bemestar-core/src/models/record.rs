use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::result::CombinedAssessmentResult;

/// A combined assessment as handed to the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub employee_id: String,
    pub company_id: String,
    pub submitted_at: jiff::Timestamp,
    pub next_checkup: jiff::civil::DateTime,
    pub result: CombinedAssessmentResult,
}

impl AssessmentRecord {
    pub fn new(
        employee_id: impl Into<String>,
        company_id: impl Into<String>,
        submitted_at: jiff::Timestamp,
        next_checkup: jiff::civil::DateTime,
        result: CombinedAssessmentResult,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            employee_id: employee_id.into(),
            company_id: company_id.into(),
            submitted_at,
            next_checkup,
            result,
        }
    }
}
