use bemestar_core::models::settings::CompanyCheckupSettings;
use bemestar_storage::error::StorageError;
use bemestar_storage::settings::{default_settings, SettingsStore};

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::new(dir.path());
    assert!(!store.exists());
    assert!(matches!(store.load(), Err(StorageError::NotFound { .. })));

    let settings = store.load_or_default().unwrap();
    assert_eq!(settings.normal_interval_days, 90);
    assert_eq!(settings.severe_interval_days, 30);
    assert_eq!(settings, default_settings());
}

#[test]
fn save_then_load_returns_same_settings() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::new(dir.path());
    let settings = CompanyCheckupSettings::new(60, 15).unwrap();

    store.save(&settings).unwrap();
    assert_eq!(store.load().unwrap(), settings);

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(raw["config_version"], 1);
    assert!(!dir.path().join("settings.json.tmp").exists());
}

#[test]
fn pre_versioned_file_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::new(dir.path());
    std::fs::write(
        store.path(),
        r#"{ "normal_interval": 120, "severe_interval": 45 }"#,
    )
    .unwrap();

    let settings = store.load().unwrap();
    assert_eq!(settings.normal_interval_days, 120);
    assert_eq!(settings.severe_interval_days, 45);
}

#[test]
fn newer_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::new(dir.path());
    std::fs::write(
        store.path(),
        r#"{ "config_version": 7, "normal_interval_days": 90, "severe_interval_days": 30 }"#,
    )
    .unwrap();

    assert!(matches!(
        store.load(),
        Err(StorageError::UnsupportedVersion { found: 7, supported: 1 })
    ));
}

#[test]
fn zero_interval_is_rejected_on_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::new(dir.path());
    let invalid = CompanyCheckupSettings {
        normal_interval_days: 90,
        severe_interval_days: 0,
    };
    assert!(matches!(store.save(&invalid), Err(StorageError::InvalidSettings(_))));

    std::fs::write(
        store.path(),
        r#"{ "config_version": 1, "normal_interval_days": 0, "severe_interval_days": 30 }"#,
    )
    .unwrap();
    assert!(matches!(store.load(), Err(StorageError::InvalidSettings(_))));
}

#[test]
fn delete_removes_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::new(dir.path());
    store.save(&default_settings()).unwrap();
    assert!(store.exists());
    store.delete().unwrap();
    assert!(!store.exists());
    store.delete().unwrap();
}

#[test]
fn oversized_version_is_rejected_not_truncated() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::new(dir.path());
    std::fs::write(
        store.path(),
        r#"{ "config_version": 4294967297, "normal_interval_days": 90, "severe_interval_days": 30 }"#,
    )
    .unwrap();

    assert!(matches!(
        store.load(),
        Err(StorageError::UnsupportedVersion { found: 4294967297, supported: 1 })
    ));
}
