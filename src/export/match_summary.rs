use std::path::Path;

use log::info;
use serde_json::Value;

use crate::{
    core::{
        format::{NullPolicy, header_line, render_field},
        record::Record,
        report::ExportReport,
        sink::CsvSink,
    },
    error::ExportError,
};

/// Flattens one match-summary record into a single-row CSV file.
///
/// Values that are nested objects contribute one `parentKey_childKey`
/// column per nested entry, in the nested map's own key order; scalars
/// pass through under their own key. Flattening is exactly one level
/// deep: a value nested any further is emitted as its JSON text. Null
/// values render as empty cells. Fields are joined without quoting.
///
/// A file is always written, even for a single-key record: the input is
/// one object, so there is no empty case.
pub fn export_match_summary(
    record: &Record,
    dest: impl AsRef<Path>,
) -> Result<ExportReport, ExportError> {
    let (columns, values) = flatten(record);
    let content = format!("{}\n{}", header_line(&columns), values.join(","));

    let path = CsvSink::new(dest).commit(&content)?;
    info!(
        "exported match summary ({} columns) to {}",
        columns.len(),
        path.display()
    );

    Ok(ExportReport::written(path, 1, columns.len()))
}

fn flatten(record: &Record) -> (Vec<String>, Vec<String>) {
    let mut columns = Vec::with_capacity(record.len());
    let mut values = Vec::with_capacity(record.len());

    for (key, value) in record {
        match value {
            Value::Object(nested) => {
                for (sub_key, sub_value) in nested {
                    columns.push(format!("{key}_{sub_key}"));
                    values.push(render_field(Some(sub_value), NullPolicy::Empty));
                }
            }
            scalar => {
                columns.push(key.clone());
                values.push(render_field(Some(scalar), NullPolicy::Empty));
            }
        }
    }

    (columns, values)
}
