pub mod cli;
pub mod config;
pub mod error;
pub mod listing;
pub mod measure;
pub mod report;
pub mod summary;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{CliOverrides, Config, LoggingConfig, WorkspaceConfig, DEFAULT_WORKDIR};
pub use error::{Result, UserFriendlyError, WorksumError};
pub use summary::WorkspaceSummary;
pub use ui::{OutputFormatter, OutputMode, COMPLETION_MESSAGE};

use std::path::Path;

pub const CSV_INPUT: &str = "a.csv";
pub const JSON_INPUT: &str = "b.json";

/// Main library interface: one summarizing run against a working directory.
pub struct Summarizer {
    config: Config,
    output_formatter: OutputFormatter,
}

impl Summarizer {
    pub fn new(config: Config, output_mode: OutputMode, quiet: bool) -> Self {
        Self {
            config,
            output_formatter: OutputFormatter::new(output_mode, quiet),
        }
    }

    /// Create a Summarizer from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Json => OutputMode::Json,
            OutputFormat::Plain => OutputMode::Plain,
        };

        Ok(Self::new(config, output_mode, cli_args.quiet))
    }

    /// Summarize the configured working directory and print the completion line.
    pub fn run(&self) -> Result<WorkspaceSummary> {
        let summary = summarize(&self.config.workspace.directory)?;
        self.output_formatter.print_completion(&summary);
        Ok(summary)
    }

    /// Measure and list without writing anything.
    pub fn dry_run(&self) -> Result<WorkspaceSummary> {
        let summary = inspect(&self.config.workspace.directory)?;
        self.output_formatter.print_dry_run(&summary);
        Ok(summary)
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config)?;
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &WorksumError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Runs the whole pipeline against `workdir`.
///
/// Order matters and is observable: `result.txt` is written before the
/// directory is listed, and the listing is taken before `list.txt` is
/// created. On a fresh directory `list.txt` therefore names `result.txt` but
/// not itself.
pub fn summarize<P: AsRef<Path>>(workdir: P) -> Result<WorkspaceSummary> {
    let workdir = workdir.as_ref();
    ensure_workdir(workdir)?;
    log::info!("Summarizing {}", workdir.display());

    let mut summary = WorkspaceSummary::new(workdir.to_path_buf());
    (summary.csv_line_count, summary.json_byte_length) = measure_inputs(workdir)?;
    log::debug!(
        "{}: {} lines, {}: {} bytes",
        CSV_INPUT,
        summary.csv_line_count,
        JSON_INPUT,
        summary.json_byte_length
    );

    report::write_result_file(workdir, summary.csv_line_count, summary.json_byte_length)?;

    summary.directory_entries = listing::list_entries(workdir)?;
    report::write_listing(workdir, &summary.directory_entries)?;

    log::info!("{}", summary.display_summary());
    Ok(summary)
}

/// Same measurements as [`summarize`], with no files written.
///
/// The listing is adjusted to what `list.txt` would contain after a real run:
/// `result.txt` is added when it does not exist yet.
pub fn inspect<P: AsRef<Path>>(workdir: P) -> Result<WorkspaceSummary> {
    let workdir = workdir.as_ref();
    ensure_workdir(workdir)?;

    let mut summary = WorkspaceSummary::new(workdir.to_path_buf());
    (summary.csv_line_count, summary.json_byte_length) = measure_inputs(workdir)?;

    summary.directory_entries = listing::list_entries(workdir)?;
    if !summary
        .directory_entries
        .iter()
        .any(|e| e.as_os_str() == report::RESULT_FILE)
    {
        summary
            .directory_entries
            .push(std::ffi::OsString::from(report::RESULT_FILE));
    }

    Ok(summary)
}

/// Line count of `a.csv` and byte length of `b.json`, 0 for either when absent.
fn measure_inputs(workdir: &Path) -> Result<(u64, u64)> {
    let csv_lines = measure::measure_optional(&workdir.join(CSV_INPUT), |r| {
        measure::count_lines(r)
    })?;
    let json_bytes = measure::measure_optional(&workdir.join(JSON_INPUT), |r| {
        measure::measure_bytes(r)
    })?;
    Ok((csv_lines, json_bytes))
}

fn ensure_workdir(workdir: &Path) -> Result<()> {
    if !workdir.is_dir() {
        return Err(WorksumError::InvalidWorkdir {
            path: workdir.display().to_string(),
        });
    }
    Ok(())
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
