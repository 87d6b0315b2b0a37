use bemestar_core::models::result::{MentalHealthClassificationResult, RecommendationSet};
use bemestar_core::models::severity::{Criticality, PathTier};

/// Baseline track shared by all three dimensions.
pub const MAINTENANCE_PATH: &str = "Trilha Manutenção da SM";

/// A DASS-21 dimension as seen by the treatment-track rules.
///
/// Track thresholds are business rules, distinct from the clinical
/// severity cutoffs used by the DASS-21 classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Depression,
    Anxiety,
    Stress,
}

impl Dimension {
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Depression => "Depressão",
            Dimension::Anxiety => "Ansiedade",
            Dimension::Stress => "Estresse",
        }
    }

    /// Minimum scores for the moderate and alert tiers.
    fn thresholds(self) -> (u32, u32) {
        match self {
            Dimension::Depression => (14, 21),
            Dimension::Anxiety => (10, 15),
            Dimension::Stress => (19, 26),
        }
    }

    pub fn tier(self, score: u32) -> PathTier {
        let (moderate_at, alert_at) = self.thresholds();
        if score >= alert_at {
            PathTier::Alert
        } else if score >= moderate_at {
            PathTier::Moderate
        } else {
            PathTier::Maintenance
        }
    }

    pub fn path(self, tier: PathTier) -> &'static str {
        match (self, tier) {
            (_, PathTier::Maintenance) => MAINTENANCE_PATH,
            (Dimension::Depression, PathTier::Moderate) => "Trilha Depressão Moderado",
            (Dimension::Depression, PathTier::Alert) => "Trilha Depressão Alerta",
            (Dimension::Anxiety, PathTier::Moderate) => "Trilha Ansiedade Moderado",
            (Dimension::Anxiety, PathTier::Alert) => "Trilha Ansiedade Alerta",
            (Dimension::Stress, PathTier::Moderate) => "Trilha Estresse Moderado",
            (Dimension::Stress, PathTier::Alert) => "Trilha Estresse Alerta",
        }
    }

    fn recommendation(self, tier: PathTier) -> Option<&'static str> {
        let text = match (self, tier) {
            (_, PathTier::Maintenance) => return None,
            (Dimension::Depression, PathTier::Moderate) => {
                "Inclua atividades prazerosas na rotina e observe seu humor nas próximas semanas."
            }
            (Dimension::Depression, PathTier::Alert) => {
                "Procure acompanhamento psicológico para os sintomas depressivos o quanto antes."
            }
            (Dimension::Anxiety, PathTier::Moderate) => {
                "Reserve momentos diários para exercícios de respiração e relaxamento."
            }
            (Dimension::Anxiety, PathTier::Alert) => {
                "Busque avaliação profissional para o manejo da ansiedade e pratique técnicas de respiração diariamente."
            }
            (Dimension::Stress, PathTier::Moderate) => {
                "Faça pausas regulares durante o expediente e estabeleça limites entre trabalho e descanso."
            }
            (Dimension::Stress, PathTier::Alert) => {
                "Reavalie com apoio profissional as fontes de estresse e a sua carga de trabalho."
            }
        };
        Some(text)
    }
}

/// Closing advice selected by the worst tier across dimensions.
fn general_recommendations(worst: PathTier) -> [&'static str; 3] {
    match worst {
        PathTier::Alert => [
            "Agende uma consulta com um(a) psicólogo(a) nos próximos dias.",
            "Converse com o RH sobre os recursos de apoio oferecidos pela empresa.",
            "Em situação de crise, ligue para o CVV (188) ou procure um serviço de emergência.",
        ],
        PathTier::Moderate => [
            "Acompanhe seu bem-estar emocional refazendo a avaliação periodicamente.",
            "Pratique atividades de autocuidado e mindfulness com regularidade.",
            "Considere conversar com um(a) profissional se os sintomas persistirem.",
        ],
        PathTier::Maintenance => [
            "Continue cultivando seus hábitos de autocuidado.",
            "Mantenha uma rotina equilibrada entre trabalho, lazer e descanso.",
            "Participe das ações de bem-estar promovidas pela empresa.",
        ],
    }
}

/// Assign each DASS-21 dimension a treatment track and aggregate them.
///
/// Only the tracks of the worst tier reached are recommended: one alert
/// dimension hides every moderate and maintenance track. The overall
/// criticality is derived from that tier, so this classifier yields
/// [`Criticality::Low`], [`Criticality::Moderate`] or
/// [`Criticality::Critical`] and never [`Criticality::High`].
pub fn classify(
    depression_score: u32,
    anxiety_score: u32,
    stress_score: u32,
) -> MentalHealthClassificationResult {
    let assessed = [
        (Dimension::Depression, depression_score),
        (Dimension::Anxiety, anxiety_score),
        (Dimension::Stress, stress_score),
    ]
    .map(|(dimension, score)| (dimension, score, dimension.tier(score)));

    let worst = assessed
        .iter()
        .map(|(_, _, tier)| *tier)
        .max()
        .unwrap_or(PathTier::Maintenance);

    let mut justification = Vec::with_capacity(assessed.len());
    let mut recommendations = RecommendationSet::new();
    for (dimension, score, tier) in assessed {
        justification.push(format!(
            "{} (score {score}): {}.",
            dimension.label(),
            dimension.path(tier)
        ));
        if let Some(text) = dimension.recommendation(tier) {
            recommendations.insert(text.to_string());
        }
    }

    let recommended_paths: RecommendationSet = match worst {
        PathTier::Maintenance => [MAINTENANCE_PATH.to_string()].into_iter().collect(),
        _ => assessed
            .iter()
            .filter(|(_, _, tier)| *tier == worst)
            .map(|(dimension, _, tier)| dimension.path(*tier).to_string())
            .collect(),
    };

    recommendations.extend(general_recommendations(worst).map(String::from));

    let critical_level = Criticality::from(worst);
    let psychologist_referral_needed = worst == PathTier::Alert;
    tracing::debug!(
        depression_score,
        anxiety_score,
        stress_score,
        critical_level = critical_level.code(),
        psychologist_referral_needed,
        "mental health paths classified"
    );

    MentalHealthClassificationResult {
        recommended_paths,
        psychologist_referral_needed,
        justification: justification.join(" "),
        critical_level,
        recommendations,
    }
}
