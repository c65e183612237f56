use crate::error::{Result, WorksumError};
use std::ffi::OsString;
use std::path::Path;
use walkdir::WalkDir;

/// Names of the immediate entries of `dir`, in the order the OS yields them.
///
/// Files, directories and symlinks are all listed; subdirectories are never
/// descended into and symlinks are not followed. `.` and `..` are not entries.
pub fn list_entries<P: AsRef<Path>>(dir: P) -> Result<Vec<OsString>> {
    let dir = dir.as_ref();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false);

    let mut entries = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| WorksumError::ListDirectory {
            path: dir.display().to_string(),
            source,
        })?;
        entries.push(entry.file_name().to_os_string());
    }

    log::debug!("Listed {} entries in {}", entries.len(), dir.display());
    Ok(entries)
}
