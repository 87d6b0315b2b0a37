use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ExportError;

/// Render a report template with `data` as its context.
///
/// Top-level fields of `data` (for assessment reports, a `ReportContext`)
/// are the variables the template sees. Syntax errors in the template
/// surface as [`ExportError::TemplateParse`].
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    data: &T,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    // Tera only accepts a JSON object as context.
    let value = serde_json::to_value(data)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}
