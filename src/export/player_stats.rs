use std::path::Path;

use log::info;

use crate::{
    core::{
        format::{NullPolicy, header_line, render_field},
        record::PlayerLine,
        report::ExportReport,
        sink::CsvSink,
    },
    error::ExportError,
};

/// Writes the per-player statistics table of one match.
///
/// Column layout is driven entirely by the first player: `Name` first,
/// then that player's stat keys in insertion order. Every player is read
/// at those same keys; a stat the player lacks renders as an empty cell,
/// and a player whose stat map uses different keys misaligns silently.
/// Fields are joined without quoting.
///
/// An empty player list writes nothing.
pub fn export_player_stats(
    players: &[PlayerLine],
    dest: impl AsRef<Path>,
) -> Result<ExportReport, ExportError> {
    let sink = CsvSink::new(&dest);
    let Some(first) = players.first() else {
        info!("no player stats to export, skipping {}", sink.target().display());
        return Ok(ExportReport::skipped());
    };

    let stat_keys: Vec<&str> = first.stats.keys().map(String::as_str).collect();
    let mut columns: Vec<&str> = Vec::with_capacity(stat_keys.len() + 1);
    columns.push("Name");
    columns.extend(stat_keys.iter().copied());

    let mut lines = Vec::with_capacity(players.len() + 1);
    lines.push(header_line(&columns));
    for player in players {
        let mut fields = Vec::with_capacity(columns.len());
        fields.push(player.name.clone());
        for key in &stat_keys {
            fields.push(render_field(player.stats.get(*key), NullPolicy::Empty));
        }
        lines.push(fields.join(","));
    }

    let path = sink.commit(&lines.join("\n"))?;
    info!("exported stats for {} players to {}", players.len(), path.display());

    Ok(ExportReport::written(path, players.len(), columns.len()))
}
