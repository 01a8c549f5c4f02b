use std::path::Path;

use log::info;

use crate::{
    core::{
        format::{NullPolicy, QuoteMode, RowWriter, header_line, render_field},
        record::Record,
        report::ExportReport,
        sink::CsvSink,
    },
    error::ExportError,
};

/// Writer for uniform record lists.
///
/// Column headers are derived ONLY from the first record's key order;
/// every record is read at those keys. Records with divergent keys
/// misalign silently; homogeneous lists are a caller contract, and the
/// writer does not validate it.
///
/// The header flag, quoting policy and null policy are explicit
/// configuration so that each dataset's contract is visible at the call
/// site instead of buried in string handling.
pub struct TableWriter {
    quote_mode: QuoteMode,
    null_policy: NullPolicy,
    has_headers: bool,
}

impl TableWriter {
    /// Renders the records to CSV text without touching the filesystem.
    ///
    /// Returns `None` for an empty list: an empty table has no header to
    /// derive and produces no file.
    pub fn render(&self, records: &[Record]) -> Result<Option<String>, ExportError> {
        let Some(first) = records.first() else {
            return Ok(None);
        };

        let columns: Vec<&str> = first.keys().map(String::as_str).collect();
        let mut rows = RowWriter::new(self.quote_mode);
        for record in records {
            rows.append(
                columns
                    .iter()
                    .map(|key| render_field(record.get(*key), self.null_policy)),
            )?;
        }

        let mut content = String::new();
        if self.has_headers {
            content.push_str(&header_line(&columns));
            content.push('\n');
        }
        content.push_str(&rows.finish()?);

        Ok(Some(content))
    }

    /// Renders and commits the records to `<dest>.csv`.
    ///
    /// Empty input writes nothing, logs an info-level notice and reports
    /// [`ExportStatus::SkippedNoData`](crate::core::report::ExportStatus).
    pub fn export(
        &self,
        records: &[Record],
        dest: impl AsRef<Path>,
    ) -> Result<ExportReport, ExportError> {
        let sink = CsvSink::new(&dest);
        match self.render(records)? {
            None => {
                info!("no data to export, skipping {}", sink.target().display());
                Ok(ExportReport::skipped())
            }
            Some(content) => {
                let columns = records[0].len();
                let path = sink.commit(&content)?;
                info!(
                    "exported {} records ({} columns) to {}",
                    records.len(),
                    columns,
                    path.display()
                );
                Ok(ExportReport::written(path, records.len(), columns))
            }
        }
    }
}

/// Builder for [`TableWriter`].
///
/// # Example
///
/// ```
/// use hoopsheet::core::format::{NullPolicy, QuoteMode};
/// use hoopsheet::export::table::TableWriterBuilder;
/// use serde_json::json;
///
/// let records = vec![
///     json!({"homeTeam": "Lakers", "awayTeam": "Celtics"})
///         .as_object()
///         .unwrap()
///         .clone(),
/// ];
///
/// let writer = TableWriterBuilder::new()
///     .quote_mode(QuoteMode::Quoted)
///     .null_policy(NullPolicy::Literal)
///     .has_headers(true)
///     .build();
///
/// let content = writer.render(&records).unwrap().unwrap();
/// assert_eq!(content, "homeTeam,awayTeam\n\"Lakers\",\"Celtics\"\n");
/// ```
pub struct TableWriterBuilder {
    quote_mode: QuoteMode,
    null_policy: NullPolicy,
    has_headers: bool,
}

impl TableWriterBuilder {
    pub fn new() -> TableWriterBuilder {
        TableWriterBuilder {
            quote_mode: QuoteMode::Quoted,
            null_policy: NullPolicy::Literal,
            has_headers: true,
        }
    }

    pub fn quote_mode(mut self, mode: QuoteMode) -> TableWriterBuilder {
        self.quote_mode = mode;
        self
    }

    pub fn null_policy(mut self, nulls: NullPolicy) -> TableWriterBuilder {
        self.null_policy = nulls;
        self
    }

    pub fn has_headers(mut self, yes: bool) -> TableWriterBuilder {
        self.has_headers = yes;
        self
    }

    pub fn build(self) -> TableWriter {
        TableWriter {
            quote_mode: self.quote_mode,
            null_policy: self.null_policy,
            has_headers: self.has_headers,
        }
    }
}

impl Default for TableWriterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializes a uniform record list with every field quoted.
///
/// Null and missing values keep the source-data convention of printing the
/// quoted literal `"null"`; use [`export_results`] for the empty-cell
/// convention. Empty input produces no file.
pub fn export_table(records: &[Record], dest: impl AsRef<Path>) -> Result<ExportReport, ExportError> {
    TableWriterBuilder::new()
        .quote_mode(QuoteMode::Quoted)
        .null_policy(NullPolicy::Literal)
        .build()
        .export(records, dest)
}

/// Serializes scraped match results: bare comma-joined fields, null cells
/// empty. Field content is assumed comma-free. Empty input produces no
/// file.
pub fn export_results(
    records: &[Record],
    dest: impl AsRef<Path>,
) -> Result<ExportReport, ExportError> {
    TableWriterBuilder::new()
        .quote_mode(QuoteMode::Unquoted)
        .null_policy(NullPolicy::Empty)
        .build()
        .export(records, dest)
}

/// Serializes bookmaker odds: quoted fields, null cells as quoted empty
/// strings. Empty input produces no file.
pub fn export_odds(records: &[Record], dest: impl AsRef<Path>) -> Result<ExportReport, ExportError> {
    TableWriterBuilder::new()
        .quote_mode(QuoteMode::Quoted)
        .null_policy(NullPolicy::Empty)
        .build()
        .export(records, dest)
}

/// Serializes a league standings table; same policy as [`export_odds`].
pub fn export_standings(
    records: &[Record],
    dest: impl AsRef<Path>,
) -> Result<ExportReport, ExportError> {
    TableWriterBuilder::new()
        .quote_mode(QuoteMode::Quoted)
        .null_policy(NullPolicy::Empty)
        .build()
        .export(records, dest)
}

/// Serializes the country/league catalog; same policy as [`export_odds`].
pub fn export_countries_and_leagues(
    records: &[Record],
    dest: impl AsRef<Path>,
) -> Result<ExportReport, ExportError> {
    TableWriterBuilder::new()
        .quote_mode(QuoteMode::Quoted)
        .null_policy(NullPolicy::Empty)
        .build()
        .export(records, dest)
}
