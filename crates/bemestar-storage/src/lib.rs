//! bemestar-storage
//!
//! Local-disk persistence for assessment results and company checkup
//! settings. The engine crates never call into this crate; callers load
//! settings here and hand finished results back for saving.

pub mod error;
pub mod results;
pub mod settings;

use std::path::{Path, PathBuf};

use error::StorageError;

/// Platform data directory used when no explicit location is given.
pub fn default_data_dir() -> Result<PathBuf, StorageError> {
    let base = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
    Ok(base.join("bemestar"))
}

/// Write `bytes` to a sibling tmp file, then rename it over `path`.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, bytes)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;
    Ok(())
}
