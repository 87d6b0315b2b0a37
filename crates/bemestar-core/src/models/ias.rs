use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::severity::IasClassification;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IasResult {
    pub total_score: u32,
    pub classification: IasClassification,
    pub recommendations: Vec<String>,
}
