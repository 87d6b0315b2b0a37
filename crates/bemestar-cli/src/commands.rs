use std::path::{Path, PathBuf};

use bemestar_core::models::record::AssessmentRecord;
use bemestar_core::models::response::QuestionResponse;
use bemestar_core::models::result::CombinedAssessmentResult;
use bemestar_core::models::settings::CompanyCheckupSettings;
use bemestar_export::report::render_report;
use bemestar_instruments::require_questionnaire;
use bemestar_instruments::instruments::{dass21, ias};
use bemestar_pathways::compose::compose;
use bemestar_pathways::schedule::{is_checkup_due, next_checkup_date};
use bemestar_storage::results::{LocalResultStore, ResultRepository};
use bemestar_storage::settings::SettingsStore;
use eyre::{Result, WrapErr};
use jiff::civil::DateTime;
use jiff::Zoned;
use serde::Serialize;

use crate::cli::{HistoryArgs, OutputFormat, ScoreArgs};

/// Outcome of scoring one pair of submissions.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreOutcome {
    pub result: CombinedAssessmentResult,
    pub next_checkup: DateTime,
    pub settings: CompanyCheckupSettings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<AssessmentRecord>,
}

pub fn data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(dir) => Ok(dir),
        None => Ok(bemestar_storage::default_data_dir()?),
    }
}

pub fn load_responses(path: &Path) -> Result<Vec<QuestionResponse>> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read submission at {}", path.display()))?;
    serde_json::from_str(&contents)
        .wrap_err_with(|| format!("{} is not a JSON array of responses", path.display()))
}

pub fn score(args: &ScoreArgs, data_dir: &Path, now: &Zoned) -> Result<ScoreOutcome> {
    let dass_responses = load_responses(&args.dass21)?;
    let ias_responses = load_responses(&args.ias)?;

    let (scores, classifications, ias_result) = if args.strict {
        let (scores, classifications) = dass21::score_checked(&dass_responses)?;
        (scores, classifications, ias::score_checked(&ias_responses)?)
    } else {
        let scores = dass21::calculate_scores(&dass_responses);
        (
            scores,
            dass21::classify_scores(&scores),
            ias::calculate_score(&ias_responses),
        )
    };

    let settings = SettingsStore::new(data_dir).load_or_default()?;
    let result = compose(&scores, &classifications, &ias_result);
    let next_checkup = next_checkup_date(
        dass21::highest_severity(&classifications),
        &settings,
        now.datetime(),
    )?;

    let record = match (&args.employee, &args.company) {
        (Some(employee), Some(company)) => {
            let record = AssessmentRecord::new(
                employee.as_str(),
                company.as_str(),
                now.timestamp(),
                next_checkup,
                result.clone(),
            );
            LocalResultStore::new(data_dir).save(&record)?;
            Some(record)
        }
        _ => None,
    };

    tracing::info!(
        critical_level = result.critical_level.code(),
        referral = result.psychologist_referral_needed,
        next_checkup = %next_checkup,
        saved = record.is_some(),
        "assessment scored"
    );

    Ok(ScoreOutcome {
        result,
        next_checkup,
        settings,
        record,
    })
}

pub fn render_score(outcome: &ScoreOutcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(outcome)?),
        OutputFormat::Report => Ok(render_report(&outcome.result, Some(outcome.next_checkup))?),
        OutputFormat::Text => {
            let result = &outcome.result;
            let scores = &result.dass21.scores;
            let classes = &result.dass21.classifications;
            let mut out = String::new();
            out.push_str(&format!(
                "DASS-21  estresse {} ({}), ansiedade {} ({}), depressão {} ({})\n",
                scores.stress,
                classes.stress.label(),
                scores.anxiety,
                classes.anxiety.label(),
                scores.depression,
                classes.depression.label(),
            ));
            out.push_str(&format!(
                "IAS      {}/100 ({})\n",
                result.ias.total_score,
                result.ias.classification.label()
            ));
            out.push_str(&format!("Nível    {}\n", result.critical_level.label()));
            out.push_str(&format!(
                "Psicólogo {}\n",
                if result.psychologist_referral_needed {
                    "recomendado"
                } else {
                    "não necessário"
                }
            ));
            out.push_str("Trilhas\n");
            for path in &result.recommended_paths {
                out.push_str(&format!("  - {path}\n"));
            }
            out.push_str(&format!(
                "Próxima avaliação {}\n",
                outcome.next_checkup.strftime("%d/%m/%Y")
            ));
            if let Some(record) = &outcome.record {
                out.push_str(&format!("Salvo como {}\n", record.id));
            }
            Ok(out)
        }
    }
}

pub fn history(args: &HistoryArgs, data_dir: &Path, now: &Zoned) -> Result<String> {
    let records = LocalResultStore::new(data_dir).list_for_employee(&args.employee)?;
    if args.format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(&records)?);
    }
    if records.is_empty() {
        return Ok(format!("Nenhuma avaliação salva para {}\n", args.employee));
    }

    let mut out = String::new();
    for record in &records {
        out.push_str(&format!(
            "{}  {}  nível {}  próxima {}{}\n",
            record.id,
            record.submitted_at.strftime("%d/%m/%Y"),
            record.result.critical_level.label(),
            record.next_checkup.strftime("%d/%m/%Y"),
            if is_checkup_due(record.next_checkup, now.datetime()) {
                " (vencida)"
            } else {
                ""
            }
        ));
    }
    Ok(out)
}

pub fn show_settings(data_dir: &Path) -> Result<String> {
    let store = SettingsStore::new(data_dir);
    let settings = store.load_or_default()?;
    let source = if store.exists() { "salvas" } else { "padrão" };
    Ok(format!(
        "Intervalo normal: {} dias\nIntervalo severo: {} dias\n({source})\n",
        settings.normal_interval_days, settings.severe_interval_days
    ))
}

pub fn set_settings(data_dir: &Path, normal: u32, severe: u32) -> Result<CompanyCheckupSettings> {
    let settings = CompanyCheckupSettings::new(normal, severe)?;
    SettingsStore::new(data_dir).save(&settings)?;
    Ok(settings)
}

pub fn questions(id: &str) -> Result<String> {
    let questionnaire = require_questionnaire(id)?;
    let mut out = format!("{}\n", questionnaire.name());
    for question in questionnaire.questions() {
        out.push_str(&format!("{:>2}. {}\n", question.id, question.text));
        for option in &question.options {
            out.push_str(&format!("      [{}] {}\n", option.value, option.label));
        }
    }
    Ok(out)
}
