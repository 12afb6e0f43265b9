//! Output file lifecycle: scoped directory creation and atomic writes.
//!
//! The encoded image goes to a `.part` temp file next to the final path and
//! is renamed over it, so a crash mid-write never leaves a torn JPEG at the
//! destination and re-runs overwrite cleanly.

use crate::retry::AcquireError;
use std::fs;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path.
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Writes `data` to `final_path` atomically, creating parent directories as
/// needed (idempotent if they already exist).
pub fn write_atomic(final_path: &Path, data: &[u8]) -> Result<(), AcquireError> {
    if let Some(parent) = final_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = temp_path(final_path);
    fs::write(&tmp, data)?;
    fs::rename(&tmp, final_path)?;
    Ok(())
}
