//! CSV export of the practice history.

use chrono::{DateTime, Local, Utc};
use serde_json::Value;

use crate::store::{record_time, DataManager};

/// Column headers, in output order.
pub const CSV_HEADER: [&str; 5] = ["日期", "练习名称", "分类", "时长(分钟)", "备注"];

const BOM: char = '\u{feff}';

/// Render the practice history as CSV.
///
/// Returns `None` when there is nothing to export. Every cell is quoted and
/// the text starts with a UTF-8 byte-order mark so spreadsheet tools pick
/// the right encoding.
pub fn practices_csv(manager: &DataManager) -> Option<String> {
    let practices = manager.practices();
    if practices.is_empty() {
        return None;
    }

    let mut lines = Vec::with_capacity(practices.len() + 1);
    lines.push(CSV_HEADER.join(","));
    lines.extend(practices.iter().map(row));

    let mut out = String::new();
    out.push(BOM);
    out.push_str(&lines.join("\n"));
    Some(out)
}

/// Default file name for a CSV export taken at `now`.
pub fn csv_file_name(now: DateTime<Utc>) -> String {
    format!("mindfit-practices-{}.csv", now.timestamp_millis())
}

fn row(record: &Value) -> String {
    let date = record_time(record)
        .map(|at| at.with_timezone(&Local).format("%Y/%-m/%-d").to_string())
        .unwrap_or_default();
    let mut duration = field(record, "duration");
    if duration.is_empty() {
        duration.push('0');
    }

    [
        date,
        field(record, "title"),
        field(record, "category"),
        duration,
        field(record, "notes"),
    ]
    .iter()
    .map(|cell| quote(cell))
    .collect::<Vec<_>>()
    .join(",")
}

fn field(record: &Value, name: &str) -> String {
    record.get(name).map(cell_text).unwrap_or_default()
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            Some(f) => f.to_string(),
            None => n.to_string(),
        },
        Value::Bool(true) => "true".to_string(),
        _ => String::new(),
    }
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}
