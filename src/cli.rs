use crate::config::{CliOverrides, Config};
use crate::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "worksum")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Summarize a job workspace directory")]
#[command(
    long_about = "Worksum counts the lines of a.csv and the bytes of b.json in a workspace \
                  directory, writes them to result.txt, lists the directory into list.txt \
                  and prints a completion message."
)]
#[command(after_help = "EXAMPLES:\n  \
    worksum\n  \
    worksum --workdir ./job-output -v\n  \
    worksum --workdir /srv/jobs/u123 --output-format json\n  \
    worksum --config worksum.toml --dry-run")]
pub struct Cli {
    /// Working directory to summarize (defaults to /workspace)
    #[arg(short, long, env = "WORKSUM_WORKDIR")]
    pub workdir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for the completion message and errors
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose logging on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Measure and list without writing result.txt or list.txt
    #[arg(long, help = "Show what would be written without writing it")]
    pub dry_run: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output, coloured errors
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new()
            .with_workdir(self.workdir.clone())
            .with_log_level(self.log_level_override().map(str::to_string))
    }

    /// Log level implied by `-q`/`-v`, or `None` to defer to the config file.
    pub fn log_level_override(&self) -> Option<&'static str> {
        if self.quiet {
            return Some("error");
        }

        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }
}
