// SPDX-License-Identifier: MPL-2.0
//! Report file output.

use std::fs;
use std::io;
use std::path::Path;

/// Writes `content` to `path` through a temporary sibling and a rename, so a
/// reader never sees a half-written report.
///
/// # Errors
///
/// Returns the underlying I/O error when writing or renaming fails.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}
