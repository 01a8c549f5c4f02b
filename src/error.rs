use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
/// Export error
pub enum ExportError {
    /// A parent directory of the destination could not be created.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying OS error, unmodified.
        #[source]
        source: io::Error,
    },

    /// The assembled CSV content could not be written to disk.
    #[error("failed to write {path}: {source}")]
    Write {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying OS error, unmodified.
        #[source]
        source: io::Error,
    },

    /// A data row could not be encoded by the CSV writer.
    #[error("row encoding failed: {0}")]
    Row(String),
}
