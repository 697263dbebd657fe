//! Shared display helpers for practice records.
//!
//! Used by `practice list` and `stats` to render records
//! consistently.

use serde_json::Value;

use crate::store::{record_duration, record_time};
use crate::ui::{format_minutes, format_relative_time};

/// One-line summary of a practice record.
pub fn practice_line(record: &Value) -> String {
    let title = text_field(record, "title").unwrap_or("(untitled)");
    let category = text_field(record, "category")
        .map(|c| format!(" [{}]", c))
        .unwrap_or_default();
    let when = record_time(record)
        .map(|at| format!(", {}", format_relative_time(at)))
        .unwrap_or_default();

    format!(
        "{}{} - {}{}",
        title,
        category,
        format_minutes(record_duration(record)),
        when
    )
}

fn text_field<'a>(record: &'a Value, name: &str) -> Option<&'a str> {
    record
        .get(name)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_record_line() {
        let line = practice_line(&json!({
            "title": "Body Scan",
            "category": "body",
            "duration": 12
        }));
        assert_eq!(line, "Body Scan [body] - 12 min");
    }

    #[test]
    fn sparse_record_line() {
        assert_eq!(practice_line(&json!({})), "(untitled) - 0 min");
    }

    #[test]
    fn line_includes_relative_time() {
        let line = practice_line(&json!({
            "title": "Grounding",
            "duration": 5,
            "timestamp": chrono::Utc::now().to_rfc3339()
        }));
        assert!(line.ends_with(", just now"));
    }
}
