use std::path::Path;

use log::info;

use crate::{
    core::{
        format::{QuoteMode, RowWriter},
        record::Lineups,
        report::ExportReport,
        sink::CsvSink,
    },
    error::ExportError,
};

const LINEUP_HEADER: &str = "team,number,name,position";

/// Writes both rosters of a match, home side first.
///
/// Every row leads with a `team` discriminator (`"home"` or `"away"`)
/// ahead of the player fields, all quoted. A missing side is an empty
/// roster, not an error; when both sides are empty no file is written.
pub fn export_lineups(
    lineups: &Lineups,
    dest: impl AsRef<Path>,
) -> Result<ExportReport, ExportError> {
    let sink = CsvSink::new(&dest);
    if lineups.home.is_empty() && lineups.away.is_empty() {
        info!("no lineup data to export, skipping {}", sink.target().display());
        return Ok(ExportReport::skipped());
    }

    let mut rows = RowWriter::new(QuoteMode::Quoted);
    for (team, players) in [("home", &lineups.home), ("away", &lineups.away)] {
        for player in players {
            rows.append([
                team,
                player.number.as_str(),
                player.name.as_str(),
                player.position.as_str(),
            ])?;
        }
    }

    let content = format!("{LINEUP_HEADER}\n{}", rows.finish()?);
    let row_count = lineups.home.len() + lineups.away.len();

    let path = sink.commit(content.trim())?;
    info!("exported {} lineup rows to {}", row_count, path.display());

    Ok(ExportReport::written(path, row_count, 4))
}
