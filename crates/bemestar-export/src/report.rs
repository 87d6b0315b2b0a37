use bemestar_core::models::result::CombinedAssessmentResult;
use bemestar_pathways::compose::SECTION_HEADERS;
use jiff::civil::DateTime;
use serde::Serialize;

use crate::error::ExportError;
use crate::render::render_template;

pub const REPORT_TEMPLATE_NAME: &str = "report.md";

/// Built-in Markdown layout for employee-facing reports.
pub const REPORT_TEMPLATE: &str = include_str!("../templates/report.md.tera");

#[derive(Debug, Clone, Serialize)]
pub struct SeverityLabels {
    pub stress: &'static str,
    pub anxiety: &'static str,
    pub depression: &'static str,
    pub overall: &'static str,
}

/// A titled group of recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSection {
    pub title: String,
    pub items: Vec<String>,
}

/// Everything a report template can reference.
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext<'a> {
    pub result: &'a CombinedAssessmentResult,
    pub critical_label: &'static str,
    pub ias_label: &'static str,
    pub severity_labels: SeverityLabels,
    pub sections: Vec<ReportSection>,
    pub next_checkup: Option<String>,
}

impl<'a> ReportContext<'a> {
    pub fn new(result: &'a CombinedAssessmentResult, next_checkup: Option<DateTime>) -> Self {
        let classifications = &result.dass21.classifications;
        Self {
            result,
            critical_label: result.critical_level.label(),
            ias_label: result.ias.classification.label(),
            severity_labels: SeverityLabels {
                stress: classifications.stress.label(),
                anxiety: classifications.anxiety.label(),
                depression: classifications.depression.label(),
                overall: result.dass21.severity.label(),
            },
            sections: sections(result),
            next_checkup: next_checkup.map(|d| d.strftime("%d/%m/%Y").to_string()),
        }
    }
}

/// Split the flat recommendation list back into its headed sections.
///
/// Items that precede the first header are dropped; combined results
/// always start with one.
pub fn sections(result: &CombinedAssessmentResult) -> Vec<ReportSection> {
    let mut sections: Vec<ReportSection> = Vec::new();
    for entry in &result.recommendations {
        if SECTION_HEADERS.contains(&entry.as_str()) {
            sections.push(ReportSection {
                title: entry.clone(),
                items: Vec::new(),
            });
        } else if let Some(current) = sections.last_mut() {
            current.items.push(entry.clone());
        }
    }
    sections
}

/// Render the built-in report for a combined assessment.
pub fn render_report(
    result: &CombinedAssessmentResult,
    next_checkup: Option<DateTime>,
) -> Result<String, ExportError> {
    let context = ReportContext::new(result, next_checkup);
    let rendered = render_template(REPORT_TEMPLATE_NAME, REPORT_TEMPLATE, &context)?;
    tracing::debug!(
        critical_level = result.critical_level.code(),
        bytes = rendered.len(),
        "report rendered"
    );
    Ok(rendered)
}
