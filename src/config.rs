use crate::error::{Result, WorksumError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory the job runner mounts the uploaded files into.
pub const DEFAULT_WORKDIR: &str = "/workspace";

const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub workspace: WorkspaceConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    pub directory: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_WORKDIR),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(WorksumError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| WorksumError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| WorksumError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["worksum.toml", ".worksum.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        log::debug!("Using configuration file {}", default_path);
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref workdir) = cli_args.workdir {
            self.workspace.directory = workdir.clone();
        }

        if let Some(ref level) = cli_args.log_level {
            self.logging.level = level.clone();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.workspace.directory.as_os_str().is_empty() {
            return Err(WorksumError::Config {
                message: "Workspace directory must not be empty".to_string(),
            });
        }

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(WorksumError::Config {
                message: format!(
                    "Unknown log level '{}' (expected one of: {})",
                    self.logging.level,
                    LOG_LEVELS.join(", ")
                ),
            });
        }

        Ok(())
    }

    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.logging
            .level
            .parse()
            .unwrap_or(log::LevelFilter::Warn)
    }

    pub fn create_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config).unwrap_or_else(|_| String::new())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub workdir: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_workdir(mut self, workdir: Option<PathBuf>) -> Self {
        self.workdir = workdir;
        self
    }

    pub fn with_log_level(mut self, level: Option<String>) -> Self {
        self.log_level = level;
        self
    }
}
