use std::path::Path;

use log::info;

use crate::{
    core::{
        format::{QuoteMode, RowWriter},
        record::PointEvent,
        report::ExportReport,
        sink::CsvSink,
    },
    error::ExportError,
};

/// Writes the point-by-point event feed of one match.
///
/// Each event becomes the quoted row
/// `[matchId, time, score, homeIncident, awayIncident]`; the match id is
/// supplied by the caller and repeated on every row. This file carries no
/// header row.
///
/// An empty feed still creates the file, with zero-length content,
/// unlike the table serializers, which skip the write entirely.
pub fn export_point_by_point(
    events: &[PointEvent],
    dest: impl AsRef<Path>,
    match_id: &str,
) -> Result<ExportReport, ExportError> {
    let mut rows = RowWriter::new(QuoteMode::Quoted);
    for event in events {
        rows.append([
            match_id,
            event.time.as_str(),
            event.score.as_str(),
            event.home_incident.as_str(),
            event.away_incident.as_str(),
        ])?;
    }

    let path = CsvSink::new(dest).commit(&rows.finish()?)?;
    info!(
        "exported {} point-by-point events for {} to {}",
        events.len(),
        match_id,
        path.display()
    );

    Ok(ExportReport::written(path, events.len(), 5))
}
