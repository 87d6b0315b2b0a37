use bemestar_core::models::dass21::Dass21Classification;
use bemestar_core::models::settings::CompanyCheckupSettings;
use bemestar_core::models::severity::Severity;
use jiff::civil::DateTime;
use jiff::Span;

use crate::error::PathwayError;

/// Days until the next checkup: the severe interval for severe and
/// extremely severe results, the normal interval otherwise.
pub fn interval_days(worst_severity: Severity, settings: &CompanyCheckupSettings) -> u32 {
    if worst_severity.is_severe() {
        settings.severe_interval_days
    } else {
        settings.normal_interval_days
    }
}

/// Add the applicable interval, in calendar days, to `now`.
pub fn next_checkup_date(
    worst_severity: Severity,
    settings: &CompanyCheckupSettings,
    now: DateTime,
) -> Result<DateTime, PathwayError> {
    let days = interval_days(worst_severity, settings);
    let next = Span::new()
        .try_days(i64::from(days))
        .and_then(|span| now.checked_add(span))
        .map_err(|source| PathwayError::DateOutOfRange {
            days,
            from: now,
            source,
        })?;

    tracing::debug!(
        severity = worst_severity.code(),
        days,
        next = %next,
        "next checkup scheduled"
    );
    Ok(next)
}

/// Convenience for callers holding a full DASS-21 classification.
pub fn next_checkup_for(
    classification: &Dass21Classification,
    settings: &CompanyCheckupSettings,
    now: DateTime,
) -> Result<DateTime, PathwayError> {
    next_checkup_date(classification.highest(), settings, now)
}

pub fn is_checkup_due(next_checkup: DateTime, now: DateTime) -> bool {
    now >= next_checkup
}
