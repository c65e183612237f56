use crate::error::{Result, WorksumError};
use std::ffi::{OsStr, OsString};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const RESULT_FILE: &str = "result.txt";
pub const LIST_FILE: &str = "list.txt";

/// Body of `result.txt`.
pub fn render_result(csv_lines: u64, json_bytes: u64) -> String {
    format!("CSV lines: {}\nJSON bytes: {}\ndone\n", csv_lines, json_bytes)
}

/// Creates (or truncates) `result.txt` in `dir` and writes the two counters.
pub fn write_result_file(dir: &Path, csv_lines: u64, json_bytes: u64) -> Result<PathBuf> {
    let path = dir.join(RESULT_FILE);
    let body = render_result(csv_lines, json_bytes);

    write_with(&path, |writer| writer.write_all(body.as_bytes()))?;

    log::info!("Wrote {}", path.display());
    Ok(path)
}

/// Creates (or truncates) `list.txt` in `dir`, one entry name per line.
///
/// `entries` must be collected before calling this so the listing does not
/// contain the file being written.
pub fn write_listing(dir: &Path, entries: &[OsString]) -> Result<PathBuf> {
    let path = dir.join(LIST_FILE);

    write_with(&path, |writer| {
        for entry in entries {
            writer.write_all(&name_bytes(entry))?;
            writer.write_all(b"\n")?;
        }
        Ok(())
    })?;

    log::info!("Wrote {} ({} entries)", path.display(), entries.len());
    Ok(path)
}

fn write_with<F>(path: &Path, body: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let write_error = |source| WorksumError::WriteOutput {
        path: path.display().to_string(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    body(&mut writer).map_err(write_error)?;
    writer.flush().map_err(write_error)?;
    Ok(())
}

#[cfg(unix)]
fn name_bytes(name: &OsStr) -> std::borrow::Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    std::borrow::Cow::Borrowed(name.as_bytes())
}

#[cfg(not(unix))]
fn name_bytes(name: &OsStr) -> std::borrow::Cow<'_, [u8]> {
    match name.to_string_lossy() {
        std::borrow::Cow::Borrowed(s) => std::borrow::Cow::Borrowed(s.as_bytes()),
        std::borrow::Cow::Owned(s) => std::borrow::Cow::Owned(s.into_bytes()),
    }
}
