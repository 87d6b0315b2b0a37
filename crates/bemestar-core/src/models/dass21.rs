use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::severity::Severity;

/// Category scores after the ×2 short-form adjustment. Each lies in 0..=42.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Dass21Scores {
    pub stress: u32,
    pub anxiety: u32,
    pub depression: u32,
}

impl Dass21Scores {
    /// Sum of the three category scores, widened so saturated categories
    /// cannot overflow.
    pub fn total(&self) -> u64 {
        u64::from(self.stress) + u64::from(self.anxiety) + u64::from(self.depression)
    }

    /// Mean of the three category scores.
    pub fn average(&self) -> f64 {
        self.total() as f64 / 3.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Dass21Classification {
    pub stress: Severity,
    pub anxiety: Severity,
    pub depression: Severity,
}

impl Dass21Classification {
    /// The most severe of the three bands.
    pub fn highest(&self) -> Severity {
        self.stress.max(self.anxiety).max(self.depression)
    }
}

/// DASS-21 outcome as embedded in a combined assessment.
///
/// `overall_score` is the category average rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Dass21Snapshot {
    pub scores: Dass21Scores,
    pub classifications: Dass21Classification,
    pub overall_score: f64,
    pub severity: Severity,
}

impl Dass21Snapshot {
    pub fn new(scores: Dass21Scores, classifications: Dass21Classification) -> Self {
        Self {
            scores,
            classifications,
            overall_score: (scores.average() * 100.0).round() / 100.0,
            severity: classifications.highest(),
        }
    }
}
