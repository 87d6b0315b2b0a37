use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// DASS-21 clinical severity band, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Severity {
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "leve")]
    Mild,
    #[serde(rename = "moderado")]
    Moderate,
    #[serde(rename = "severo")]
    Severe,
    #[serde(rename = "extremamente_severo")]
    ExtremelySevere,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Normal,
        Severity::Mild,
        Severity::Moderate,
        Severity::Severe,
        Severity::ExtremelySevere,
    ];

    /// Stable machine label, identical to the serialized form.
    pub fn code(self) -> &'static str {
        match self {
            Severity::Normal => "normal",
            Severity::Mild => "leve",
            Severity::Moderate => "moderado",
            Severity::Severe => "severo",
            Severity::ExtremelySevere => "extremamente_severo",
        }
    }

    /// Human-readable label shown to employees.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Normal => "Normal",
            Severity::Mild => "Leve",
            Severity::Moderate => "Moderado",
            Severity::Severe => "Severo",
            Severity::ExtremelySevere => "Extremamente severo",
        }
    }

    /// Severe and extremely severe bands shorten the checkup interval.
    pub fn is_severe(self) -> bool {
        self >= Severity::Severe
    }
}

/// Overall risk level used to merge DASS-21 and IAS outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Criticality {
    #[serde(rename = "baixo")]
    Low,
    #[serde(rename = "moderado")]
    Moderate,
    #[serde(rename = "alto")]
    High,
    #[serde(rename = "crítico")]
    Critical,
}

impl Criticality {
    pub fn code(self) -> &'static str {
        match self {
            Criticality::Low => "baixo",
            Criticality::Moderate => "moderado",
            Criticality::High => "alto",
            Criticality::Critical => "crítico",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Criticality::Low => "Baixo",
            Criticality::Moderate => "Moderado",
            Criticality::High => "Alto",
            Criticality::Critical => "Crítico",
        }
    }
}

/// IAS dietary classification, declared worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum IasClassification {
    #[serde(rename = "alto_risco")]
    HighRisk,
    #[serde(rename = "desbalanceada")]
    Unbalanced,
    #[serde(rename = "razoavel")]
    Fair,
    #[serde(rename = "saudavel")]
    Healthy,
}

impl IasClassification {
    pub fn code(self) -> &'static str {
        match self {
            IasClassification::HighRisk => "alto_risco",
            IasClassification::Unbalanced => "desbalanceada",
            IasClassification::Fair => "razoavel",
            IasClassification::Healthy => "saudavel",
        }
    }

    /// Completes the sentence "indica alimentação ...".
    pub fn label(self) -> &'static str {
        match self {
            IasClassification::HighRisk => "de alto risco",
            IasClassification::Unbalanced => "desbalanceada",
            IasClassification::Fair => "razoável",
            IasClassification::Healthy => "saudável",
        }
    }

    /// High-risk and unbalanced diets take part in cross-domain rules.
    pub fn is_poor(self) -> bool {
        matches!(self, IasClassification::HighRisk | IasClassification::Unbalanced)
    }
}

impl From<IasClassification> for Criticality {
    fn from(classification: IasClassification) -> Self {
        match classification {
            IasClassification::HighRisk => Criticality::Critical,
            IasClassification::Unbalanced => Criticality::High,
            IasClassification::Fair => Criticality::Moderate,
            IasClassification::Healthy => Criticality::Low,
        }
    }
}

/// Treatment-track tier assigned to one DASS-21 dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PathTier {
    Maintenance,
    Moderate,
    Alert,
}

impl From<PathTier> for Criticality {
    /// A classifier built on path tiers never yields [`Criticality::High`].
    fn from(tier: PathTier) -> Self {
        match tier {
            PathTier::Maintenance => Criticality::Low,
            PathTier::Moderate => Criticality::Moderate,
            PathTier::Alert => Criticality::Critical,
        }
    }
}
