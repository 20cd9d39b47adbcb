pub mod errors;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use errors::{ConvertError, Result};
pub use models::{CandidateFile, ExtensionRule, RECOGNIZED_EXTENSIONS};
pub use services::{
    convert, convert_directory, ConsoleObserver, ConversionFailure, ConversionObserver,
    ConversionReport, ConvertedFile, ConverterConfig, FailurePolicy, SilentObserver,
};
pub use utils::OUTPUT_DIR_NAME;

/// Environment variable consulted when no directory argument is given
pub const SOURCE_DIR_ENV: &str = "CODE_TO_TEXT_DIR";

// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub converter: ConverterConfig,
    pub log_level: String,
    pub quiet: bool,
    pub json_report: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            converter: ConverterConfig::default(),
            log_level: "info".to_string(),
            quiet: false,
            json_report: false,
        }
    }
}
