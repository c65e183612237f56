use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorksumError {
    #[error("Failed to read input {path}: {source}")]
    ReadInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output {path}: {source}")]
    WriteOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list directory {path}: {source}")]
    ListDirectory {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    #[error("Working directory is not usable: {path}")]
    InvalidWorkdir { path: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for WorksumError {
    fn user_message(&self) -> String {
        match self {
            WorksumError::ReadInput { path, source } => {
                format!("Could not read {}: {}", path, source)
            }
            WorksumError::WriteOutput { path, source } => {
                format!("Could not write {}: {}", path, source)
            }
            WorksumError::ListDirectory { path, source } => {
                format!("Could not list {}: {}", path, source)
            }
            WorksumError::InvalidWorkdir { path } => {
                format!("Working directory does not exist or is not a directory: {}", path)
            }
            WorksumError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            WorksumError::ReadInput { .. } => Some(
                "Check that the input file is a regular file readable by the current user.".to_string()
            ),
            WorksumError::WriteOutput { .. } => Some(
                "Ensure the working directory is writable and the disk is not full.".to_string()
            ),
            WorksumError::ListDirectory { .. } => Some(
                "Ensure you have read permission on the working directory.".to_string()
            ),
            WorksumError::InvalidWorkdir { .. } => Some(
                "Pass an existing directory with --workdir or set WORKSUM_WORKDIR.".to_string()
            ),
            WorksumError::Config { .. } => Some(
                "Check your configuration file syntax, or regenerate one with --generate-config.".to_string()
            ),
            _ => None,
        }
    }
}

impl WorksumError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            WorksumError::Config { .. } => 2,
            WorksumError::InvalidWorkdir { .. } => 3,
            WorksumError::ReadInput { .. } => 4,
            WorksumError::WriteOutput { .. } => 5,
            WorksumError::ListDirectory { .. } => 6,
            WorksumError::Io(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, WorksumError>;
