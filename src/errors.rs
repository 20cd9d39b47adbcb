use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Failures a conversion pass can surface
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Source directory is missing, not a directory, or cannot be listed
    #[error("cannot access source directory {path:?}")]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Output directory cannot be created or is occupied by a non-directory
    #[error("cannot create output directory {path:?}")]
    OutputCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Candidate file cannot be read as UTF-8 text
    #[error("failed to read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    /// Path the failed operation was acting on
    pub fn path(&self) -> &PathBuf {
        match self {
            ConvertError::DirectoryAccess { path, .. }
            | ConvertError::OutputCreation { path, .. }
            | ConvertError::Read { path, .. }
            | ConvertError::Write { path, .. } => path,
        }
    }

    /// Read and write failures are per-file; everything else ends the run
    pub fn is_per_file(&self) -> bool {
        matches!(self, ConvertError::Read { .. } | ConvertError::Write { .. })
    }
}
