use crate::models::extension::{match_extension, ExtensionRule};
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Extension appended to every converted file name
pub const TEXT_EXTENSION: &str = "txt";

/// A regular file in the source directory selected for conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub name: OsString,
    pub rule: &'static ExtensionRule,
}

impl CandidateFile {
    /// Build a candidate from a path whose file name carries a recognized suffix
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let path = path.as_ref();
        let name = path.file_name()?;
        let rule = match_extension(name)?;

        Some(Self {
            path: path.to_path_buf(),
            name: name.to_os_string(),
            rule,
        })
    }

    /// Name for notices and reports; invalid UTF-8 is replaced
    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    /// `{base}_{ext}.txt`, e.g. `weird.name_cpp.txt` for `weird.name.cpp`
    pub fn output_file_name(&self) -> OsString {
        output_file_name(&self.name, self.rule)
    }
}

/// Compose the output name for a file matched by `rule`, keeping the raw base bytes
pub fn output_file_name(file_name: &OsStr, rule: &ExtensionRule) -> OsString {
    let mut output = rule.base_name(file_name).unwrap_or(file_name).to_os_string();
    output.push("_");
    output.push(rule.bare_extension());
    output.push(".");
    output.push(TEXT_EXTENSION);
    output
}
