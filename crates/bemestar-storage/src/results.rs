use std::path::PathBuf;

use bemestar_core::keys;
use bemestar_core::models::record::AssessmentRecord;
use uuid::Uuid;

use crate::error::StorageError;

/// Where finished assessments are kept.
pub trait ResultRepository {
    fn save(&self, record: &AssessmentRecord) -> Result<(), StorageError>;

    fn load(&self, employee_id: &str, id: Uuid) -> Result<AssessmentRecord, StorageError>;

    /// All records of one employee, oldest first.
    fn list_for_employee(&self, employee_id: &str) -> Result<Vec<AssessmentRecord>, StorageError>;

    fn latest_for_employee(
        &self,
        employee_id: &str,
    ) -> Result<Option<AssessmentRecord>, StorageError> {
        Ok(self.list_for_employee(employee_id)?.pop())
    }
}

/// One JSON file per record under `<root>/results/<employee_id>/`.
#[derive(Debug, Clone)]
pub struct LocalResultStore {
    root: PathBuf,
}

impl LocalResultStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

/// Employee ids become path components, so only a safe alphabet is allowed.
fn check_identifier(id: &str) -> Result<(), StorageError> {
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidIdentifier(id.to_string()))
    }
}

impl ResultRepository for LocalResultStore {
    fn save(&self, record: &AssessmentRecord) -> Result<(), StorageError> {
        check_identifier(&record.employee_id)?;
        let key = keys::assessment_record(&record.employee_id, record.id);
        let path = self.root.join(&key);
        let json = serde_json::to_vec_pretty(record)?;
        crate::write_atomic(&path, &json)?;

        tracing::info!(
            key = %key,
            company_id = %record.company_id,
            critical_level = record.result.critical_level.code(),
            "assessment saved"
        );
        Ok(())
    }

    fn load(&self, employee_id: &str, id: Uuid) -> Result<AssessmentRecord, StorageError> {
        check_identifier(employee_id)?;
        let key = keys::assessment_record(employee_id, id);
        let path = self.root.join(&key);
        if !path.exists() {
            return Err(StorageError::NotFound { key });
        }
        let json = std::fs::read(&path)?;
        Ok(serde_json::from_slice(&json)?)
    }

    fn list_for_employee(&self, employee_id: &str) -> Result<Vec<AssessmentRecord>, StorageError> {
        check_identifier(employee_id)?;
        let dir = self.root.join(keys::employee_results_prefix(employee_id));
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            let parsed = std::fs::read(&path)
                .map_err(StorageError::from)
                .and_then(|bytes| Ok(serde_json::from_slice::<AssessmentRecord>(&bytes)?));
            match parsed {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable record");
                }
            }
        }

        records.sort_by_key(|r| r.submitted_at);
        tracing::debug!(employee_id, count = records.len(), "assessments listed");
        Ok(records)
    }
}
