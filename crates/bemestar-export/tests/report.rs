use bemestar_core::models::dass21::Dass21Scores;
use bemestar_core::models::ias::IasResult;
use bemestar_core::models::result::CombinedAssessmentResult;
use bemestar_export::error::ExportError;
use bemestar_export::render::render_template;
use bemestar_export::report::{render_report, sections, ReportContext};
use bemestar_instruments::instruments::{dass21, ias};
use bemestar_pathways::compose::{compose, SECTION_HEADERS};
use jiff::civil::date;

fn combined(stress: u32, anxiety: u32, depression: u32, ias_score: u32) -> CombinedAssessmentResult {
    let scores = Dass21Scores {
        stress,
        anxiety,
        depression,
    };
    let classification = ias::classify(ias_score);
    let ias = IasResult {
        total_score: ias_score,
        classification,
        recommendations: ias::recommendations(classification),
    };
    compose(&scores, &dass21::classify_scores(&scores), &ias)
}

#[test]
fn sections_follow_headers() {
    let result = combined(30, 4, 4, 40);
    let sections = sections(&result);
    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, SECTION_HEADERS.to_vec());
    assert!(sections.iter().all(|s| !s.items.is_empty()));
    assert_eq!(sections[3].items.len(), 5);
}

#[test]
fn report_contains_scores_paths_and_sections() {
    let result = combined(30, 4, 4, 40);
    let report = render_report(&result, Some(date(2026, 11, 15).at(9, 0, 0, 0))).unwrap();

    assert!(report.starts_with("# Relatório de Bem-estar"));
    assert!(report.contains("**Nível de criticidade:** Crítico"));
    assert!(report.contains("**Encaminhamento psicológico:** recomendado"));
    assert!(report.contains("| Estresse | 30 | Severo |"));
    assert!(report.contains("Score: 40/100, alimentação desbalanceada"));
    assert!(report.contains("- Trilha Estresse Alerta"));
    assert!(report.contains("- Trilha Bem-estar Integrado"));
    for header in SECTION_HEADERS {
        assert!(report.contains(&format!("### {header}")), "missing {header}");
    }
    assert!(report.contains("Próxima avaliação: 15/11/2026"));
}

#[test]
fn report_without_checkup_omits_date_line() {
    let result = combined(0, 0, 0, 80);
    let report = render_report(&result, None).unwrap();
    assert!(report.contains("**Encaminhamento psicológico:** não necessário"));
    assert!(!report.contains("Próxima avaliação"));
}

#[test]
fn custom_template_sees_same_context() {
    let result = combined(0, 0, 25, 90);
    let context = ReportContext::new(&result, None);
    let rendered = render_template(
        "summary.txt",
        "{{ critical_label }} / {{ severity_labels.depression }} / {{ result.ias.total_score }}",
        &context,
    )
    .unwrap();
    assert_eq!(rendered, "Crítico / Severo / 90");
}

#[test]
fn broken_template_is_a_parse_error() {
    let result = combined(0, 0, 0, 80);
    let err = render_template("bad.txt", "{% for %}", &ReportContext::new(&result, None)).unwrap_err();
    assert!(matches!(err, ExportError::TemplateParse(_)));
}
