use bemestar_core::models::dass21::{Dass21Classification, Dass21Scores, Dass21Snapshot};
use bemestar_core::models::ias::IasResult;
use bemestar_core::models::result::{CombinedAssessmentResult, RecommendationSet};
use bemestar_core::models::severity::{Criticality, IasClassification};

use crate::classify;

pub const MENTAL_HEALTH_HEADER: &str = "SAÚDE MENTAL";
pub const NUTRITION_HEADER: &str = "ALIMENTAÇÃO SAUDÁVEL";
pub const INTEGRATED_HEADER: &str = "RECOMENDAÇÕES INTEGRADAS";
pub const UNIVERSAL_HEADER: &str = "PRÁTICAS UNIVERSAIS";

/// Section headers in the order they appear in combined recommendations.
pub const SECTION_HEADERS: [&str; 4] = [
    MENTAL_HEALTH_HEADER,
    NUTRITION_HEADER,
    INTEGRATED_HEADER,
    UNIVERSAL_HEADER,
];

/// Added when an alert track coincides with a poor diet.
pub const INTEGRATED_WELLBEING_PATH: &str = "Trilha Bem-estar Integrado";

pub const UNIVERSAL_PRACTICES: [&str; 5] = [
    "Mantenha uma rotina regular de sono, com horários fixos para dormir e acordar.",
    "Movimente-se ao longo do dia e faça pausas ativas durante o trabalho.",
    "Beba água com frequência e mantenha-se hidratado(a).",
    "Cultive relações sociais e reserve tempo para atividades de lazer.",
    "Reserve alguns minutos do dia para respiração consciente ou meditação.",
];

const CORRELATION_NOTE: &str = "CORRELAÇÃO: O estado emocional atual pode estar influenciando os \
hábitos alimentares, e a alimentação inadequada tende a agravar os sintomas emocionais.";

/// Track offered for each IAS classification.
pub fn nutrition_path(classification: IasClassification) -> &'static str {
    match classification {
        IasClassification::HighRisk => "Trilha Alimentação Crítica",
        IasClassification::Unbalanced => "Trilha Alimentação Moderada",
        IasClassification::Fair => "Trilha Alimentação Preventiva",
        IasClassification::Healthy => "Trilha Manutenção Alimentar",
    }
}

fn integrated_recommendations(level: Criticality) -> [&'static str; 3] {
    match level {
        Criticality::Critical => [
            "Priorize o acompanhamento profissional integrado entre psicologia e nutrição.",
            "Comece por pequenas mudanças alimentares que também ajudem a regular o humor e a energia.",
            "Informe o RH caso precise de ajustes temporários na rotina de trabalho.",
        ],
        Criticality::High => [
            "Busque orientação nutricional e observe como a alimentação afeta seu humor.",
            "Estabeleça horários regulares para as refeições, mesmo em dias de muito trabalho.",
            "Refaça as avaliações em breve para acompanhar a evolução dos resultados.",
        ],
        Criticality::Moderate => [
            "Combine práticas de autocuidado emocional com ajustes graduais na alimentação.",
            "Planeje refeições e pausas na agenda como compromissos fixos.",
            "Acompanhe seus resultados nas próximas avaliações periódicas.",
        ],
        Criticality::Low => [
            "Continue conciliando bons hábitos alimentares e cuidado emocional.",
            "Compartilhe práticas saudáveis com sua equipe.",
            "Mantenha a participação nas avaliações periódicas de bem-estar.",
        ],
    }
}

/// Merge the DASS-21 and IAS outcomes into one assessment.
///
/// The overall criticality is the worse of the mental-health level and
/// the level implied by the IAS classification. Paths and
/// recommendations are ordered and free of duplicates.
pub fn compose(
    scores: &Dass21Scores,
    classifications: &Dass21Classification,
    ias: &IasResult,
) -> CombinedAssessmentResult {
    let mental = classify::classify(scores.depression, scores.anxiety, scores.stress);
    let nutrition_level = Criticality::from(ias.classification);
    let critical_level = mental.critical_level.max(nutrition_level);
    let poor_diet = ias.classification.is_poor();

    let mut recommended_paths = mental.recommended_paths.clone();
    recommended_paths.insert(nutrition_path(ias.classification).to_string());
    // Critical mental health always comes from at least one alert track.
    if mental.critical_level == Criticality::Critical && poor_diet {
        recommended_paths.insert(INTEGRATED_WELLBEING_PATH.to_string());
    }

    let psychologist_referral_needed = mental.psychologist_referral_needed
        || ias.classification == IasClassification::HighRisk;

    let mut justification = vec![
        format!("{MENTAL_HEALTH_HEADER}: {}", mental.justification),
        format!(
            "ALIMENTAÇÃO: Score IAS {}/100 indica alimentação {}.",
            ias.total_score,
            ias.classification.label()
        ),
    ];
    if mental.critical_level != Criticality::Low && poor_diet {
        justification.push(CORRELATION_NOTE.to_string());
    }

    let mut recommendations = RecommendationSet::new();
    recommendations.insert(MENTAL_HEALTH_HEADER.to_string());
    recommendations.extend(mental.recommendations.iter().cloned());
    recommendations.insert(NUTRITION_HEADER.to_string());
    recommendations.extend(ias.recommendations.iter().cloned());
    recommendations.insert(INTEGRATED_HEADER.to_string());
    recommendations.extend(integrated_recommendations(critical_level).map(String::from));
    recommendations.insert(UNIVERSAL_HEADER.to_string());
    recommendations.extend(UNIVERSAL_PRACTICES.map(String::from));

    tracing::debug!(
        mental_level = mental.critical_level.code(),
        nutrition_level = nutrition_level.code(),
        critical_level = critical_level.code(),
        psychologist_referral_needed,
        paths = recommended_paths.len(),
        "combined assessment composed"
    );

    CombinedAssessmentResult {
        dass21: Dass21Snapshot::new(*scores, *classifications),
        ias: ias.clone(),
        recommended_paths,
        psychologist_referral_needed,
        justification: justification.join(" "),
        critical_level,
        recommendations,
    }
}
