//! Getting encoded bytes onto disk.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::image_pipeline::common::error::{Result, TransformError};

fn write_error(path: &Path, e: impl std::fmt::Display) -> TransformError {
    TransformError::OutputWriteError(format!("{}: {}", path.display(), e))
}

/// Writes already-encoded `bytes` to `path`.
///
/// With `atomic` set the bytes go to a temporary file in the same directory,
/// which is synced and renamed over `path`. A failure leaves any existing file
/// at `path` untouched and the temporary is removed on drop. Without `atomic`,
/// `path` is truncated and written in place.
pub fn write_to_path(path: &Path, atomic: bool, bytes: &[u8]) -> Result<()> {
    if !atomic {
        return fs::write(path, bytes).map_err(|e| write_error(path, e));
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| write_error(dir, e))?;
    debug!("Staging {} bytes in {}", bytes.len(), temp.path().display());

    temp.write_all(bytes).map_err(|e| write_error(temp.path(), e))?;
    temp.as_file().sync_all()?;

    // Keep the permissions of a file we are replacing.
    if let Ok(existing) = fs::metadata(path) {
        temp.as_file().set_permissions(existing.permissions())?;
    }

    temp.persist(path).map_err(|e| write_error(path, e.error))?;
    Ok(())
}
