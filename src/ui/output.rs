use crate::error::{UserFriendlyError, WorksumError};
use crate::summary::WorkspaceSummary;
use console::{style, Emoji, Term};

/// The single stdout line of a successful run.
pub const COMPLETION_MESSAGE: &str = "Workspace summary completed";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

static CROSS: Emoji = Emoji("❌ ", "✗ ");
static INFO: Emoji = Emoji("ℹ️  ", "i ");

pub struct OutputFormatter {
    mode: OutputMode,
    use_colors: bool,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(mode: OutputMode, quiet: bool) -> Self {
        let use_colors = match mode {
            OutputMode::Human => Term::stderr().features().colors_supported() && !quiet,
            _ => false,
        };

        Self {
            mode,
            use_colors,
            quiet,
        }
    }

    /// Prints the completion line. Always exactly one line on stdout, even in
    /// quiet mode.
    pub fn print_completion(&self, summary: &WorkspaceSummary) {
        match self.mode {
            OutputMode::Human | OutputMode::Plain => println!("{}", COMPLETION_MESSAGE),
            OutputMode::Json => println!("{}", self.completion_json(summary)),
        }
    }

    fn completion_json(&self, summary: &WorkspaceSummary) -> String {
        let value = serde_json::json!({
            "type": "completed",
            "message": COMPLETION_MESSAGE,
            "workdir": summary.workdir.display().to_string(),
            "csv_lines": summary.csv_line_count,
            "json_bytes": summary.json_byte_length,
            "entries": summary.entry_count(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        });
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Describes what a real run would write, without touching the directory.
    pub fn print_dry_run(&self, summary: &WorkspaceSummary) {
        match self.mode {
            OutputMode::Json => {
                let value = serde_json::json!({
                    "type": "dry_run",
                    "summary": summary,
                });
                println!(
                    "{}",
                    serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
                );
            }
            OutputMode::Human | OutputMode::Plain => {
                if self.quiet {
                    return;
                }
                let header = format!("DRY RUN - nothing written in {}", summary.workdir.display());
                if self.use_colors {
                    println!("{}", style(header).bold());
                } else {
                    println!("{}", header);
                }
                println!("  CSV lines:  {}", summary.csv_line_count);
                println!("  JSON bytes: {}", summary.json_byte_length);
                println!("  Entries that list.txt would contain:");
                for entry in &summary.directory_entries {
                    println!("    {}", entry.to_string_lossy());
                }
            }
        }
    }

    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Human => {
                if self.use_colors {
                    eprintln!("{}{}", CROSS, style(message).red().bold());
                } else {
                    eprintln!("✗ {}", message);
                }
            }
            OutputMode::Json => self.print_json_error("error", message),
            OutputMode::Plain => eprintln!("ERROR: {}", message),
        }
    }

    pub fn print_user_friendly_error(&self, error: &WorksumError) {
        self.error(&error.user_message());

        if let Some(suggestion) = error.suggestion() {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        eprintln!("{}{}", INFO, style(format!("Suggestion: {}", suggestion)).cyan());
                    } else {
                        eprintln!("Suggestion: {}", suggestion);
                    }
                }
                OutputMode::Json => self.print_json_error("suggestion", &suggestion),
                OutputMode::Plain => eprintln!("SUGGESTION: {}", suggestion),
            }
        }
    }

    fn print_json_error(&self, kind: &str, message: &str) {
        let value = serde_json::json!({
            "type": kind,
            "message": message,
            "timestamp": chrono::Utc::now().to_rfc3339()
        });
        eprintln!(
            "{}",
            serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
        );
    }
}
