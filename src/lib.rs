/*!
 # Hoopsheet

 **Hoopsheet** is the CSV export layer of a basketball scraping pipeline: a
 toolkit that turns the heterogeneous record shapes a scraper produces for a
 competition (results, fixtures, odds, standings, lineups, player and match
 statistics, head-to-head history, point-by-point feeds) into well-formed
 CSV files organized per competition and match.

 The scraping itself (browser automation, DOM extraction, CLI glue) lives
 upstream and is out of scope here: callers hand this crate plain data plus
 a destination path stub, and get back a durable `.csv` file.

 ## Core Concepts

 - **Record:** one logical unit of scraped data (a match, a player, a
   standings row), typed in [`core::record`]. Loose tabular data is an
   insertion-ordered [`core::record::Record`] mapping; fixed shapes
   (lineups, head-to-head, point events) are plain structs.
 - **Serializer:** a pure function converting one record shape into CSV text
   and committing it to storage. One component per dataset, under
   [`export`].
 - **QuoteMode / NullPolicy:** the two escaping policies and two
   null-rendering policies of the scraped-data corpus, explicit per
   serializer ([`core::format`]).
 - **CsvSink:** appends the `.csv` extension, creates missing parent
   directories and writes synchronously ([`core::sink`]).
 - **ExportReport:** per-call summary: status, final path, row and column
   counts ([`core::report`]).

 ## Serializer policy table

 Each dataset keeps the exact format contract its downstream consumers
 rely on; there is no single universal CSV writer.

 | Entry point                           | Header | Quoting  | Nulls        | Empty input    |
 |---------------------------------------|--------|----------|--------------|----------------|
 | [`export::export_table`]              | yes    | quoted   | literal `null` | no file      |
 | [`export::export_results`]            | yes    | unquoted | empty cell   | no file        |
 | [`export::export_odds`]               | yes    | quoted   | quoted empty | no file        |
 | [`export::export_standings`]          | yes    | quoted   | quoted empty | no file        |
 | [`export::export_countries_and_leagues`] | yes | quoted   | quoted empty | no file        |
 | [`export::export_match_summary`]      | yes    | unquoted | empty cell   | always writes  |
 | [`export::export_player_stats`]       | yes    | unquoted | empty cell   | no file        |
 | [`export::export_match_stats`]        | fixed  | verbatim | —            | header-only file |
 | [`export::export_point_by_point`]     | none   | quoted   | —            | zero-byte file |
 | [`export::export_head_to_head`]       | per section | quoted | —          | empty file     |
 | [`export::export_lineups`]            | yes    | quoted   | —            | no file        |

 ## Getting Started

```
use hoopsheet::core::report::ExportStatus;
use hoopsheet::export::export_results;
use serde_json::json;
use std::env::temp_dir;

let records = vec![
    json!({
        "homeTeam": "Real Madrid",
        "awayTeam": "Barcelona",
        "homeScore": "95",
        "awayScore": "88",
        "eventTime": null,
    })
    .as_object()
    .unwrap()
    .clone(),
];

let report = export_results(&records, temp_dir().join("hoopsheet_doc_results")).unwrap();

assert_eq!(report.status, ExportStatus::Written);
assert_eq!(report.rows, 1);
assert_eq!(report.columns, 5);

let content = std::fs::read_to_string(report.path.unwrap()).unwrap();
assert_eq!(
    content,
    "homeTeam,awayTeam,homeScore,awayScore,eventTime\nReal Madrid,Barcelona,95,88,\n"
);
```

 ## Logging

 The crate logs through the [`log`] facade: skipped no-data exports and
 successful commits at info level, directory creation at debug level.
 Binding a logger implementation is the caller's choice.
 */

/// Shared machinery: record shapes, field rendering, sinks and reports.
pub mod core;

/// Error types for export operations.
pub mod error;

#[doc(inline)]
pub use error::*;

/// Serializer components, one per scraped dataset shape.
pub mod export;
