use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::dass21::Dass21Snapshot;
use super::ias::IasResult;
use super::severity::Criticality;

/// Insertion-ordered collection of distinct strings.
///
/// Used for recommended paths and recommendations: inserting an entry that
/// is already present keeps the first occurrence and its position.
pub type RecommendationSet = IndexSet<String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MentalHealthClassificationResult {
    pub recommended_paths: RecommendationSet,
    pub psychologist_referral_needed: bool,
    pub justification: String,
    pub critical_level: Criticality,
    pub recommendations: RecommendationSet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CombinedAssessmentResult {
    pub dass21: Dass21Snapshot,
    pub ias: IasResult,
    pub recommended_paths: RecommendationSet,
    pub psychologist_referral_needed: bool,
    pub justification: String,
    pub critical_level: Criticality,
    pub recommendations: RecommendationSet,
}
