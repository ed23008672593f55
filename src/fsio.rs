//! Filesystem helpers with path-context errors and atomic writes.
//!
//! A failed render must never leave a partially-written file under the
//! target name: content goes to a temporary file in the target directory
//! first and is renamed over the final name only on success.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{FsmError, Result};

/// Read a file to a string, naming the path on failure.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| FsmError::io_with_path(e, path))
}

/// Create a directory (and parents), naming the path on failure.
pub fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| FsmError::io_with_path(e, path))
}

/// Write `contents` to `path` atomically.
///
/// The temp file lives in the target's own directory so the final rename
/// never crosses a filesystem boundary.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| FsmError::io_with_path(e, dir))?;
    tmp.write_all(contents)
        .map_err(|e| FsmError::io_with_path(e, path))?;
    tmp.persist(path)
        .map_err(|e| FsmError::io_with_path(e.error, path))?;
    Ok(())
}
