use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;

use crate::error::ExportError;

/// Destination of one export: a path stub without extension.
///
/// The sink appends the `.csv` extension itself (appending, not replacing,
/// so stubs containing dots keep them) and guarantees that every parent
/// directory exists before the content is written. The write completes
/// before `commit` returns: callers may read the file immediately.
pub struct CsvSink {
    target: PathBuf,
}

impl CsvSink {
    pub fn new(stub: impl AsRef<Path>) -> Self {
        let mut target = stub.as_ref().as_os_str().to_os_string();
        target.push(".csv");

        Self {
            target: PathBuf::from(target),
        }
    }

    /// Final path of the file this sink writes.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Creates missing parent directories, then writes `content` in full.
    pub fn commit(self, content: &str) -> Result<PathBuf, ExportError> {
        if let Some(parent) = self.target.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| ExportError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
                debug!("created directory {}", parent.display());
            }
        }

        fs::write(&self.target, content).map_err(|source| ExportError::Write {
            path: self.target.clone(),
            source,
        })?;
        debug!("wrote {} bytes to {}", content.len(), self.target.display());

        Ok(self.target)
    }
}
