pub mod byte_counter;
pub mod line_counter;

pub use byte_counter::measure_bytes;
pub use line_counter::count_lines;

use crate::error::{Result, WorksumError};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Runs `measure` over the file at `path`, or returns 0 when the file is absent.
///
/// Absence is the only non-error outcome: a path that exists but cannot be
/// opened or read is reported as [`WorksumError::ReadInput`].
pub fn measure_optional<F>(path: &Path, measure: F) -> Result<u64>
where
    F: FnOnce(&mut dyn Read) -> io::Result<u64>,
{
    if !path.exists() {
        log::debug!("{} not present, measuring as 0", path.display());
        return Ok(0);
    }

    let read_error = |source| WorksumError::ReadInput {
        path: path.display().to_string(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let mut reader = BufReader::new(file);
    measure(&mut reader).map_err(read_error)
}
