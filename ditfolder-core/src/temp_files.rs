//! Atomic file writes.
//!
//! Reports are written to a temporary file in the destination directory and
//! then renamed over the destination, so a reader never sees a half-written
//! file. The tempfile crate removes the temporary file if anything fails
//! before the rename.

use std::io::Write;
use std::path::Path;

use tempfile::Builder as TempFileBuilder;

use crate::error::{CoreError, CoreResult};

/// Writes `contents` to `dest` atomically.
pub fn write_atomic(dest: &Path, contents: &[u8]) -> CoreResult<()> {
    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file = TempFileBuilder::new()
        .prefix(".ditfolder_")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| CoreError::filesystem(dir, e))?;

    temp_file
        .write_all(contents)
        .and_then(|()| temp_file.flush())
        .map_err(|e| CoreError::filesystem(dest, e))?;

    temp_file
        .persist(dest)
        .map_err(|e| CoreError::filesystem(dest, e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_atomic_replaces_contents() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("report.csv");

        write_atomic(&dest, b"first").unwrap();
        write_atomic(&dest, b"second").unwrap();

        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "second");
        // No temp files left behind
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_atomic_missing_directory_names_path() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("missing").join("report.csv");

        match write_atomic(&dest, b"data") {
            Err(CoreError::Filesystem { path, .. }) => assert_eq!(path, dir.path().join("missing")),
            other => panic!("Unexpected result: {:?}", other),
        }
    }
}
