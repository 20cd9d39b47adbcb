use anyhow::{Context, Result};
use clap::{Arg, Command};
use code_to_text::{
    convert_directory, AppConfig, ConsoleObserver, ConversionObserver, ConversionReport,
    ConverterConfig, FailurePolicy, SilentObserver, SOURCE_DIR_ENV,
};
use std::env;
use std::path::PathBuf;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Parse command line arguments
    let matches = Command::new("code-to-text")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Copies .cpp and .h files into a Text folder as plain .txt files")
        .arg(
            Arg::new("directory")
                .value_name("DIRECTORY")
                .help("Directory to convert (defaults to $CODE_TO_TEXT_DIR, then the current directory)"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Set the log level (trace, debug, info, warn, error)")
                .default_value("info"),
        )
        .arg(
            Arg::new("keep-going")
                .long("keep-going")
                .help("Continue with the remaining files when one cannot be converted")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Do not print a line per converted file")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the conversion report as JSON when done")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let log_level = matches
        .get_one::<String>("log-level")
        .cloned()
        .unwrap_or_else(|| "info".to_string());

    // Initialize logging
    initialize_logging(&log_level)?;

    // Load environment variables
    load_environment_variables();

    let config = create_app_config(&matches, log_level);

    run_application(config)
}

/// Build the application configuration from CLI arguments and the environment
fn create_app_config(matches: &clap::ArgMatches, log_level: String) -> AppConfig {
    let source_dir = matches
        .get_one::<String>("directory")
        .map(PathBuf::from)
        .or_else(|| env::var_os(SOURCE_DIR_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));

    let failure_policy = if matches.get_flag("keep-going") {
        FailurePolicy::KeepGoing
    } else {
        FailurePolicy::Abort
    };

    AppConfig {
        converter: ConverterConfig::new(source_dir).with_failure_policy(failure_policy),
        log_level,
        quiet: matches.get_flag("quiet"),
        json_report: matches.get_flag("json"),
    }
}

/// Initialize structured logging with tracing, on stderr
fn initialize_logging(log_level: &str) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load a .env file when one exists
fn load_environment_variables() {
    if dotenvy::dotenv().is_err() {
        info!("No .env file found, using system environment variables");
    }
}

fn run_application(config: AppConfig) -> Result<()> {
    info!("Configuration: {:?}", config);

    let mut observer: Box<dyn ConversionObserver> = if config.quiet {
        Box::new(SilentObserver)
    } else {
        Box::new(ConsoleObserver)
    };

    let report = convert_directory(&config.converter, observer.as_mut()).with_context(|| {
        format!(
            "Conversion of {} failed",
            config.converter.source_dir.display()
        )
    })?;

    print_conversion_report(&report);

    if config.json_report {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    }

    if !report.is_success() {
        anyhow::bail!(
            "{} of {} files could not be converted",
            report.failures.len(),
            report.total_processed()
        );
    }

    Ok(())
}

fn print_conversion_report(report: &ConversionReport) {
    info!("=== CONVERSION REPORT ===");
    info!("Output directory: {}", report.output_dir.display());
    info!("Files converted: {}", report.converted.len());
    info!("Entries ignored: {}", report.skipped_entries);
    info!("Success rate: {:.2}%", report.success_rate() * 100.0);

    if !report.failures.is_empty() {
        error!("Conversion errors encountered:");
        for failure in &report.failures {
            error!("  {}: {}", failure.source.display(), failure.error);
        }
    }
}
