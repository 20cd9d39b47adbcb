pub mod file_operations;

pub use file_operations::{
    ensure_output_directory, ensure_source_directory, list_candidate_files, read_text_file,
    write_text_file, OutputDirectoryState, OUTPUT_DIR_NAME,
};
