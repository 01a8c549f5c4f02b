use std::path::PathBuf;

/// Outcome classification of one export call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportStatus {
    /// A file was written.
    Written,
    /// The input held no data; no file was created.
    SkippedNoData,
}

/// Summary of one export call: where the file went and how big the table
/// was. Rows count data lines only; header and separator lines are
/// excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub status: ExportStatus,
    /// Path of the written file; `None` when the export was skipped.
    pub path: Option<PathBuf>,
    pub rows: usize,
    pub columns: usize,
}

impl ExportReport {
    pub(crate) fn written(path: PathBuf, rows: usize, columns: usize) -> Self {
        Self {
            status: ExportStatus::Written,
            path: Some(path),
            rows,
            columns,
        }
    }

    pub(crate) fn skipped() -> Self {
        Self {
            status: ExportStatus::SkippedNoData,
            path: None,
            rows: 0,
            columns: 0,
        }
    }
}
