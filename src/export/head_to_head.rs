use std::path::Path;

use log::info;

use crate::{
    core::{
        format::{QuoteMode, RowWriter},
        record::{HeadToHead, HistoryEntry},
        report::ExportReport,
        sink::CsvSink,
    },
    error::ExportError,
};

const SECTION_HEADER: &str = "date,event,homeTeam,awayTeam,result";

/// Writes the head-to-head block of a match page as three mini-tables.
///
/// Sections appear in fixed order: `homeLastMatches`, `awayLastMatches`,
/// `directMatches`. A non-empty section contributes a `--- name ---`
/// separator line, the fixed header and one quoted row per match; an empty
/// section contributes nothing, not even its header. The assembled content
/// is trimmed of leading and trailing whitespace before the write, so when
/// every section is empty the file is still written and contains the empty
/// string.
pub fn export_head_to_head(
    report: &HeadToHead,
    dest: impl AsRef<Path>,
) -> Result<ExportReport, ExportError> {
    let sections: [(&str, &[HistoryEntry]); 3] = [
        ("homeLastMatches", &report.home_last_matches),
        ("awayLastMatches", &report.away_last_matches),
        ("directMatches", &report.direct_matches),
    ];

    let mut content = String::new();
    let mut rows = 0;
    for (name, matches) in sections {
        if matches.is_empty() {
            continue;
        }

        content.push_str(&format!("\n--- {name} ---\n"));
        content.push_str(SECTION_HEADER);
        content.push('\n');

        let mut writer = RowWriter::new(QuoteMode::Quoted);
        for entry in matches {
            writer.append([
                entry.date.as_str(),
                entry.event.as_str(),
                entry.home_team.as_str(),
                entry.away_team.as_str(),
                entry.result.as_str(),
            ])?;
        }
        content.push_str(&writer.finish()?);
        rows += matches.len();
    }

    let path = CsvSink::new(dest).commit(content.trim())?;
    info!("exported {} head-to-head rows to {}", rows, path.display());

    Ok(ExportReport::written(path, rows, 5))
}
