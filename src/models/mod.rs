pub mod candidate;
pub mod extension;

pub use candidate::{output_file_name, CandidateFile, TEXT_EXTENSION};
pub use extension::{match_extension, ExtensionRule, RECOGNIZED_EXTENSIONS};
