use std::path::PathBuf;

use bemestar_core::keys;
use bemestar_core::models::settings::CompanyCheckupSettings;
use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Current settings file version. Bump this when adding fields or changing
/// shape. Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

pub const DEFAULT_NORMAL_INTERVAL_DAYS: u32 = 90;
pub const DEFAULT_SEVERE_INTERVAL_DAYS: u32 = 30;

/// Cadence used by companies that never saved their own settings.
pub fn default_settings() -> CompanyCheckupSettings {
    CompanyCheckupSettings {
        normal_interval_days: DEFAULT_NORMAL_INTERVAL_DAYS,
        severe_interval_days: DEFAULT_SEVERE_INTERVAL_DAYS,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SettingsFile {
    /// Schema version. Missing or 0 = pre-versioned file.
    #[serde(default)]
    config_version: u32,
    #[serde(flatten)]
    checkup: CompanyCheckupSettings,
}

/// Company checkup settings stored as `settings.json` in a data directory.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    dir: PathBuf,
}

impl SettingsStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(keys::SETTINGS)
    }

    pub fn exists(&self) -> bool {
        self.path().exists()
    }

    pub fn load(&self) -> Result<CompanyCheckupSettings, StorageError> {
        let path = self.path();
        if !path.exists() {
            return Err(StorageError::NotFound {
                key: keys::SETTINGS.to_string(),
            });
        }
        let contents = std::fs::read_to_string(&path)?;

        // Parse as raw JSON so we can run migrations before deserializing.
        let json: serde_json::Value = serde_json::from_str(&contents)?;
        let on_disk_version = json
            .get("config_version")
            .and_then(|v| v.as_u64())
            .unwrap_or(0);

        let migrated = migrate(json, on_disk_version)?;
        let file: SettingsFile = serde_json::from_value(migrated)?;
        file.checkup.validate()?;
        Ok(file.checkup)
    }

    /// Stored settings, or the defaults when none were saved yet.
    pub fn load_or_default(&self) -> Result<CompanyCheckupSettings, StorageError> {
        match self.load() {
            Ok(settings) => Ok(settings),
            Err(StorageError::NotFound { .. }) => {
                tracing::debug!(path = %self.path().display(), "no settings file, using defaults");
                Ok(default_settings())
            }
            Err(e) => Err(e),
        }
    }

    pub fn save(&self, settings: &CompanyCheckupSettings) -> Result<(), StorageError> {
        settings.validate()?;

        // Always write the current version, regardless of what was loaded.
        let file = SettingsFile {
            config_version: CURRENT_VERSION,
            checkup: *settings,
        };
        let path = self.path();
        let json = serde_json::to_string_pretty(&file)?;
        crate::write_atomic(&path, json.as_bytes())?;

        tracing::info!(
            path = %path.display(),
            normal_interval_days = settings.normal_interval_days,
            severe_interval_days = settings.severe_interval_days,
            "settings saved"
        );
        Ok(())
    }

    pub fn delete(&self) -> Result<(), StorageError> {
        let path = self.path();
        if path.exists() {
            std::fs::remove_file(&path)?;
            tracing::info!(path = %path.display(), "settings deleted");
        }
        Ok(())
    }
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u64) -> Result<serde_json::Value, StorageError> {
    if from_version > u64::from(CURRENT_VERSION) {
        return Err(StorageError::UnsupportedVersion {
            found: from_version,
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: `normal_interval` / `severe_interval` gained a `_days` suffix.
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| StorageError::Malformed("settings is not a JSON object".to_string()))?;
        for (old, new) in [
            ("normal_interval", "normal_interval_days"),
            ("severe_interval", "severe_interval_days"),
        ] {
            if let Some(value) = obj.remove(old) {
                obj.entry(new).or_insert(value);
            }
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::warn!("migrated settings v0 → v1 (renamed interval fields)");
    }

    Ok(json)
}
