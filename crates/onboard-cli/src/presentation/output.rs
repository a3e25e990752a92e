//! Choosing between JSON and table output.

use anyhow::Result;
use onboard_core::Record;
use serde::Serialize;
use serde_json::Value;

use super::tables::render_table;

/// Keys shown first when laying out loosely typed records.
const LEADING_KEYS: &[&str] = &["id", "name", "email", "building_id", "org_id"];

/// Most columns a record table shows; `--json` shows everything.
const MAX_RECORD_COLUMNS: usize = 6;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub const fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Table }
    }
}

/// Pretty-print any serializable value as JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print loosely typed records in the requested format.
pub fn emit_records(records: &[Record], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(records),
        OutputFormat::Table => {
            if records.is_empty() {
                println!("No results.");
            } else {
                print!("{}", records_table(records));
            }
            Ok(())
        }
    }
}

/// Render records as a table.
///
/// Columns come from the first record: well-known identifying keys first,
/// then the remaining scalar keys in order, up to a fixed number.
pub fn records_table(records: &[Record]) -> String {
    let columns = record_columns(records);
    let headers: Vec<&str> = columns.iter().map(String::as_str).collect();
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|key| record.get(key).map_or_else(String::new, cell_text))
                .collect()
        })
        .collect();
    render_table(&headers, &rows)
}

fn record_columns(records: &[Record]) -> Vec<String> {
    let Some(first) = records.first() else {
        return Vec::new();
    };

    let leading = LEADING_KEYS
        .iter()
        .filter(|key| first.contains_key(**key))
        .map(|key| (*key).to_string());
    let rest = first
        .iter()
        .filter(|(key, value)| !LEADING_KEYS.contains(&key.as_str()) && is_scalar(value))
        .map(|(key, _)| key.clone());

    leading.chain(rest).take(MAX_RECORD_COLUMNS).collect()
}

const fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

/// Text for a table cell: strings unquoted, null blank, the rest as JSON.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
