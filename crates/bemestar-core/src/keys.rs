//! Storage key/path conventions.
//!
//! Pure string functions. These define the canonical layout of assessment
//! results and company settings in whatever store backs the application.

use uuid::Uuid;

pub const RESULTS_PREFIX: &str = "results/";

pub const SETTINGS: &str = "settings.json";

pub fn employee_results_prefix(employee_id: &str) -> String {
    format!("results/{employee_id}/")
}

pub fn assessment_record(employee_id: &str, id: Uuid) -> String {
    format!("results/{employee_id}/{id}.json")
}
