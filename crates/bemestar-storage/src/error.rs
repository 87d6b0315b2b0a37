use bemestar_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object not found: {key}")]
    NotFound { key: String },

    #[error("invalid identifier '{0}': use letters, digits, '-' or '_'")]
    InvalidIdentifier(String),

    #[error(
        "settings config_version {found} is newer than this build supports ({supported})"
    )]
    UnsupportedVersion { found: u64, supported: u32 },

    #[error("malformed settings file: {0}")]
    Malformed(String),

    #[error("invalid settings: {0}")]
    InvalidSettings(#[from] CoreError),

    #[error("no data directory found")]
    NoDataDir,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
