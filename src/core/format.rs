use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde_json::Value;

use crate::error::ExportError;

/// Escaping policy for data rows.
///
/// The two policies of the scraped-data corpus, kept explicit per
/// serializer rather than implied by the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteMode {
    /// Every field is wrapped in double quotes; embedded quotes are
    /// doubled.
    Quoted,
    /// Fields are joined with bare commas. Nothing is escaped: field
    /// content is assumed comma- and quote-free by the caller.
    Unquoted,
}

/// Rendering of null or missing values, configured per serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullPolicy {
    /// Render as the literal string `null`.
    Literal,
    /// Render as the empty string.
    Empty,
}

/// Renders one scalar cell.
///
/// Strings pass through verbatim, numbers and booleans use their display
/// form, null and missing values follow `nulls`. A value that is itself
/// structured (nested deeper than any serializer flattens) is emitted as
/// its JSON text.
pub fn render_field(value: Option<&Value>, nulls: NullPolicy) -> String {
    match value {
        None | Some(Value::Null) => match nulls {
            NullPolicy::Literal => "null".to_owned(),
            NullPolicy::Empty => String::new(),
        },
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Joins column names with commas. Header rows are never quoted,
/// whatever the data-row policy of the serializer.
pub fn header_line<I, S>(columns: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    columns
        .into_iter()
        .map(|column| column.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join(",")
}

/// Buffers data rows through a CSV writer configured for one of the two
/// escaping policies: `\n` terminators, no automatic headers, flexible
/// record lengths (rows of differing widths are the caller's problem and
/// are not rejected here).
pub struct RowWriter {
    inner: csv::Writer<Vec<u8>>,
}

impl RowWriter {
    pub fn new(mode: QuoteMode) -> Self {
        let style = match mode {
            QuoteMode::Quoted => QuoteStyle::Always,
            QuoteMode::Unquoted => QuoteStyle::Never,
        };
        let inner = WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quote_style(style)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        Self { inner }
    }

    /// Appends one row, newline-terminated.
    pub fn append<I, S>(&mut self, fields: I) -> Result<(), ExportError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        self.inner
            .write_record(fields)
            .map_err(|error| ExportError::Row(error.to_string()))
    }

    /// Flushes and returns the accumulated rows. Empty if no row was
    /// appended.
    pub fn finish(self) -> Result<String, ExportError> {
        let bytes = self
            .inner
            .into_inner()
            .map_err(|error| ExportError::Row(error.to_string()))?;

        String::from_utf8(bytes).map_err(|error| ExportError::Row(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn null_renders_per_policy() {
        assert_eq!(render_field(None, NullPolicy::Literal), "null");
        assert_eq!(render_field(None, NullPolicy::Empty), "");
        assert_eq!(render_field(Some(&Value::Null), NullPolicy::Literal), "null");
        assert_eq!(render_field(Some(&Value::Null), NullPolicy::Empty), "");
    }

    #[test]
    fn scalars_render_verbatim() {
        assert_eq!(render_field(Some(&json!("Lakers")), NullPolicy::Empty), "Lakers");
        assert_eq!(render_field(Some(&json!(110)), NullPolicy::Empty), "110");
        assert_eq!(render_field(Some(&json!(true)), NullPolicy::Empty), "true");
    }

    #[test]
    fn quoted_rows_double_embedded_quotes() {
        let mut rows = RowWriter::new(QuoteMode::Quoted);
        rows.append(["say \"hi\"", ""]).unwrap();

        assert_eq!(rows.finish().unwrap(), "\"say \"\"hi\"\"\",\"\"\n");
    }

    #[test]
    fn unquoted_rows_escape_nothing() {
        let mut rows = RowWriter::new(QuoteMode::Unquoted);
        rows.append(["98 - 91", "", "x"]).unwrap();

        assert_eq!(rows.finish().unwrap(), "98 - 91,,x\n");
    }

    #[test]
    fn empty_writer_yields_empty_content() {
        let rows = RowWriter::new(QuoteMode::Quoted);
        assert_eq!(rows.finish().unwrap(), "");
    }

    #[test]
    fn headers_are_never_quoted() {
        assert_eq!(header_line(["Home Score", "Category"]), "Home Score,Category");
    }
}
