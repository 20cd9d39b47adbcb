use crate::errors::{ConvertError, Result};
use crate::models::CandidateFile;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the subdirectory that receives converted files
pub const OUTPUT_DIR_NAME: &str = "Text";

/// Outcome of preparing the output directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputDirectoryState {
    Created,
    Reused,
}

/// Fail unless `directory` exists, is a directory, and can be listed
pub fn ensure_source_directory<P: AsRef<Path>>(directory: P) -> Result<()> {
    let dir_path = directory.as_ref();
    let access_error = |source| ConvertError::DirectoryAccess {
        path: dir_path.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(dir_path).map_err(access_error)?;

    if !metadata.is_dir() {
        return Err(access_error(io::Error::other("path is not a directory")));
    }

    fs::read_dir(dir_path).map_err(access_error)?;

    Ok(())
}

/// Create `<directory>/Text`, or reuse it when it is already a directory.
/// Parents are never created.
pub fn ensure_output_directory<P: AsRef<Path>>(
    directory: P,
) -> Result<(PathBuf, OutputDirectoryState)> {
    let output_dir = directory.as_ref().join(OUTPUT_DIR_NAME);

    match fs::create_dir(&output_dir) {
        Ok(()) => Ok((output_dir, OutputDirectoryState::Created)),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            match fs::metadata(&output_dir) {
                Ok(metadata) if metadata.is_dir() => {
                    Ok((output_dir, OutputDirectoryState::Reused))
                }
                Ok(_) => Err(ConvertError::OutputCreation {
                    path: output_dir,
                    source: io::Error::new(
                        io::ErrorKind::AlreadyExists,
                        "path exists and is not a directory",
                    ),
                }),
                Err(source) => Err(ConvertError::OutputCreation {
                    path: output_dir,
                    source,
                }),
            }
        }
        Err(source) => Err(ConvertError::OutputCreation {
            path: output_dir,
            source,
        }),
    }
}

/// Regular files directly inside `directory` with a recognized suffix,
/// sorted by name, plus the number of other entries passed over.
/// The output directory itself is not counted.
pub fn list_candidate_files<P: AsRef<Path>>(directory: P) -> Result<(Vec<CandidateFile>, usize)> {
    let dir_path = directory.as_ref();
    let access_error = |source| ConvertError::DirectoryAccess {
        path: dir_path.to_path_buf(),
        source,
    };

    let mut candidates = Vec::new();
    let mut skipped = 0;

    for entry in fs::read_dir(dir_path).map_err(access_error)? {
        let entry = entry.map_err(access_error)?;
        if entry.file_name().as_os_str() == OsStr::new(OUTPUT_DIR_NAME) {
            continue;
        }
        let path = entry.path();

        match CandidateFile::from_path(&path).filter(|_| path.is_file()) {
            Some(candidate) => candidates.push(candidate),
            None => skipped += 1,
        }
    }

    candidates.sort_by(|a, b| a.name.cmp(&b.name));

    Ok((candidates, skipped))
}

/// Read a whole file as UTF-8 text
pub fn read_text_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Create or truncate `path` and write `content` to it; returns bytes written
pub fn write_text_file<P: AsRef<Path>>(path: P, content: &str) -> Result<u64> {
    let path = path.as_ref();
    fs::write(path, content).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content.len() as u64)
}
