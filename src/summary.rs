use serde::{Serialize, Serializer};
use std::ffi::OsString;
use std::path::PathBuf;

/// Everything one run measured in the working directory.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WorkspaceSummary {
    pub workdir: PathBuf,
    pub csv_line_count: u64,
    pub json_byte_length: u64,
    #[serde(serialize_with = "serialize_entries")]
    pub directory_entries: Vec<OsString>,
}

impl WorkspaceSummary {
    pub fn new(workdir: PathBuf) -> Self {
        Self {
            workdir,
            ..Self::default()
        }
    }

    pub fn entry_count(&self) -> usize {
        self.directory_entries.len()
    }

    pub fn display_summary(&self) -> String {
        format!(
            "{}: {} CSV lines, {} JSON bytes, {} entries",
            self.workdir.display(),
            self.csv_line_count,
            self.json_byte_length,
            self.entry_count()
        )
    }
}

fn serialize_entries<S: Serializer>(entries: &[OsString], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(entries.iter().map(|e| e.to_string_lossy()))
}
