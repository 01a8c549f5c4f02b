use std::path::Path;

use log::info;

use crate::{
    core::{report::ExportReport, sink::CsvSink},
    error::ExportError,
};

/// Header of the match statistics table.
pub const MATCH_STATS_HEADER: &str = "Home Score,Category,Away Score";

/// Writes a pre-delimited statistics block under the fixed three-column
/// header.
///
/// The block comes out of the scraper already comma-joined, one row per
/// line, and is emitted verbatim: no reformatting, no column-count
/// validation. An empty block still produces a file holding only the
/// header line.
pub fn export_match_stats(raw: &str, dest: impl AsRef<Path>) -> Result<ExportReport, ExportError> {
    let content = format!("{MATCH_STATS_HEADER}\n{raw}");
    let rows = raw.lines().count();

    let path = CsvSink::new(dest).commit(&content)?;
    info!("exported {} stat rows to {}", rows, path.display());

    Ok(ExportReport::written(path, rows, 3))
}
