use clap::Parser;
use std::process;
use worksum::{Cli, OutputFormatter, OutputMode, Summarizer, WorksumError};

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    let cli = Cli::parse();

    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    let summarizer = match Summarizer::from_cli(&cli) {
        Ok(summarizer) => summarizer,
        Err(e) => {
            let level = cli
                .log_level_override()
                .and_then(|l| l.parse().ok())
                .unwrap_or(log::LevelFilter::Warn);
            setup_logging(level);
            print_startup_error(&e);
            return e.exit_code();
        }
    };

    setup_logging(summarizer.config().log_level_filter());
    log::debug!("worksum {}", worksum::version_info());

    let result = if cli.dry_run {
        summarizer.dry_run()
    } else {
        summarizer.run()
    };

    match result {
        Ok(_) => 0,
        Err(e) => {
            log::debug!("run failed: {:?}", e);
            summarizer.handle_error(&e);
            e.exit_code()
        }
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "worksum.toml".to_string());

    match Summarizer::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  worksum --config {}", config_path);
            0
        }
        Err(e) => {
            print_startup_error(&e);
            e.exit_code()
        }
    }
}

fn print_startup_error(error: &WorksumError) {
    let formatter = OutputFormatter::new(OutputMode::Human, false);
    formatter.print_user_friendly_error(error);
}

/// Logs go to stderr; stdout is reserved for the completion line.
/// RUST_LOG, when set, replaces the configured level entirely.
fn setup_logging(level: log::LevelFilter) {
    let default_filter = format!("worksum={}", level.to_string().to_lowercase());
    let env = env_logger::Env::default().default_filter_or(default_filter);

    let _ = env_logger::Builder::from_env(env)
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .try_init();
}
