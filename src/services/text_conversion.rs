use crate::errors::{ConvertError, Result};
use crate::models::CandidateFile;
use crate::utils::{
    ensure_output_directory, ensure_source_directory, list_candidate_files, read_text_file,
    write_text_file, OutputDirectoryState,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::error::Error as _;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// What to do when a single file cannot be read or written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Stop the run at the first failing file
    #[default]
    Abort,
    /// Record the failure and move on to the next file
    KeepGoing,
}

/// Configuration for a conversion pass
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    pub source_dir: PathBuf,
    pub failure_policy: FailurePolicy,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            failure_policy: FailurePolicy::Abort,
        }
    }
}

impl ConverterConfig {
    pub fn new<P: Into<PathBuf>>(source_dir: P) -> Self {
        Self {
            source_dir: source_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }
}

/// Receives a notice for every file converted
pub trait ConversionObserver {
    fn on_converted(&mut self, file: &ConvertedFile);
}

impl<F> ConversionObserver for F
where
    F: FnMut(&ConvertedFile),
{
    fn on_converted(&mut self, file: &ConvertedFile) {
        self(file)
    }
}

/// Prints `Converted: {source} -> {output}` to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleObserver;

impl ConversionObserver for ConsoleObserver {
    fn on_converted(&mut self, file: &ConvertedFile) {
        println!("{}", file.notice());
    }
}

/// Discards notices
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl ConversionObserver for SilentObserver {
    fn on_converted(&mut self, _file: &ConvertedFile) {}
}

/// Convert `directory` with the default policy, printing a notice per file
pub fn convert<P: AsRef<Path>>(directory: P) -> Result<ConversionReport> {
    let config = ConverterConfig::new(directory.as_ref());
    convert_directory(&config, &mut ConsoleObserver)
}

/// Copy every recognized source file into `<source_dir>/Text` as `.txt`
pub fn convert_directory<O: ConversionObserver + ?Sized>(
    config: &ConverterConfig,
    observer: &mut O,
) -> Result<ConversionReport> {
    let source_dir = config.source_dir.as_path();
    let started_at = Utc::now();

    info!("Converting source files in {}", source_dir.display());

    ensure_source_directory(source_dir)?;

    let (output_dir, state) = ensure_output_directory(source_dir)?;
    match state {
        OutputDirectoryState::Created => debug!("Created output directory {}", output_dir.display()),
        OutputDirectoryState::Reused => debug!("Reusing output directory {}", output_dir.display()),
    }

    let (candidates, skipped_entries) = list_candidate_files(source_dir)?;
    info!(
        "Found {} candidate files ({} other entries ignored)",
        candidates.len(),
        skipped_entries
    );

    let mut report = ConversionReport::new(output_dir.clone(), started_at);
    report.skipped_entries = skipped_entries;

    for candidate in candidates {
        match convert_file(&candidate, &output_dir) {
            Ok(converted) => {
                observer.on_converted(&converted);
                report.converted.push(converted);
            }
            Err(e) if e.is_per_file() && config.failure_policy == FailurePolicy::KeepGoing => {
                error!("Failed to convert {}: {}", candidate.path.display(), error_chain(&e));
                report.failures.push(ConversionFailure {
                    source: candidate.path,
                    path: e.path().clone(),
                    error: error_chain(&e),
                });
            }
            Err(e) => return Err(e),
        }
    }

    report.finished_at = Utc::now();

    info!(
        "Conversion completed. Converted: {}, Failed: {}, Ignored: {}",
        report.converted.len(),
        report.failures.len(),
        report.skipped_entries
    );

    Ok(report)
}

/// Read one candidate and write it under `output_dir`
fn convert_file(candidate: &CandidateFile, output_dir: &Path) -> Result<ConvertedFile> {
    let content = read_text_file(&candidate.path)?;

    let output_name = candidate.output_file_name();
    let destination = output_dir.join(&output_name);
    let bytes = write_text_file(&destination, &content)?;

    Ok(ConvertedFile {
        source_name: candidate.display_name().into_owned(),
        output_name: output_name.to_string_lossy().into_owned(),
        kind: candidate.rule.label,
        source: candidate.path.clone(),
        destination,
        bytes,
    })
}

/// Render an error with its causes, e.g. `failed to read "a.cpp": permission denied`
fn error_chain(error: &ConvertError) -> String {
    let mut message = error.to_string();
    let mut cause = error.source();
    while let Some(inner) = cause {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        cause = inner.source();
    }
    message
}

/// A file successfully copied into the output directory.
/// Names are lossy for display; `source` and `destination` are exact.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertedFile {
    pub source_name: String,
    pub output_name: String,
    pub kind: &'static str,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub bytes: u64,
}

impl ConvertedFile {
    pub fn notice(&self) -> String {
        format!("Converted: {} -> {}", self.source_name, self.output_name)
    }
}

/// A file that could not be converted under [`FailurePolicy::KeepGoing`]
#[derive(Debug, Clone, Serialize)]
pub struct ConversionFailure {
    pub source: PathBuf,
    /// Path the failing operation touched (source on read, destination on write)
    pub path: PathBuf,
    pub error: String,
}

/// Report structure for a conversion pass
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub output_dir: PathBuf,
    pub converted: Vec<ConvertedFile>,
    pub failures: Vec<ConversionFailure>,
    pub skipped_entries: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl ConversionReport {
    fn new(output_dir: PathBuf, started_at: DateTime<Utc>) -> Self {
        Self {
            output_dir,
            converted: Vec::new(),
            failures: Vec::new(),
            skipped_entries: 0,
            started_at,
            finished_at: started_at,
        }
    }

    pub fn total_processed(&self) -> usize {
        self.converted.len() + self.failures.len()
    }

    pub fn success_rate(&self) -> f64 {
        let total = self.total_processed();
        if total == 0 {
            1.0
        } else {
            self.converted.len() as f64 / total as f64
        }
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}
