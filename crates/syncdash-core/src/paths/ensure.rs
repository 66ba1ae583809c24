//! Log directory creation.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use super::error::PathError;

const WRITE_PROBE: &str = ".syncdash_write_test";

/// Create the directory that will hold the log file `file` and check that
/// new files can be written there.
///
/// A relative file name with no directory component resolves to the working
/// directory, which is left as it is.
pub fn ensure_parent_dir(file: &Path) -> Result<(), PathError> {
    let dir = match file.parent() {
        Some(parent) if parent.as_os_str().is_empty() => return Ok(()),
        Some(parent) => parent,
        None => return Err(PathError::NoParent(file.to_path_buf())),
    };

    if dir.exists() && !dir.is_dir() {
        return Err(PathError::NotADirectory(dir.to_path_buf()));
    }
    fs::create_dir_all(dir).map_err(|e| PathError::CreateFailed {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })?;

    // Creating the directory succeeds on read-only mounts that already hold
    // it, so probe with a real file.
    let probe = dir.join(WRITE_PROBE);
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&probe)
        .and_then(|mut f| f.write_all(b"ok"))
        .map_err(|e| PathError::NotWritable {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        })?;
    let _ = fs::remove_file(&probe);

    Ok(())
}
