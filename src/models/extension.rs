use serde::Serialize;
use std::ffi::OsStr;
use std::path::Path;

/// A recognized source suffix and what kind of file it marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExtensionRule {
    pub suffix: &'static str,
    pub label: &'static str,
}

/// Suffixes eligible for conversion. Matching is case-sensitive.
/// Each suffix is a single `.ext` component.
pub const RECOGNIZED_EXTENSIONS: &[ExtensionRule] = &[
    ExtensionRule {
        suffix: ".cpp",
        label: "C++ source",
    },
    ExtensionRule {
        suffix: ".h",
        label: "C++ header",
    },
];

impl ExtensionRule {
    /// Suffix without its leading separator, e.g. `cpp` for `.cpp`
    pub fn bare_extension(&self) -> &'static str {
        self.suffix.strip_prefix('.').unwrap_or(self.suffix)
    }

    /// Whether the raw name ends with this suffix; names need not be UTF-8
    pub fn matches(&self, file_name: &OsStr) -> bool {
        file_name
            .as_encoded_bytes()
            .ends_with(self.suffix.as_bytes())
    }

    /// Name with this rule's suffix removed, if the name ends with it
    pub fn base_name<'a>(&self, file_name: &'a OsStr) -> Option<&'a OsStr> {
        if !self.matches(file_name) {
            return None;
        }
        if file_name == OsStr::new(self.suffix) {
            return Some(OsStr::new(""));
        }

        // the suffix is exactly the last extension, so the stem is the base
        Path::new(file_name).file_stem()
    }
}

/// Find the rule whose suffix ends the given file name
pub fn match_extension<S: AsRef<OsStr> + ?Sized>(file_name: &S) -> Option<&'static ExtensionRule> {
    let file_name = file_name.as_ref();
    RECOGNIZED_EXTENSIONS
        .iter()
        .find(|rule| rule.matches(file_name))
}
