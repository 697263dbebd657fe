//! JSON export and import of the whole mirror.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{MindFitError, Result};
use crate::store::records::format_timestamp;
use crate::store::{merge_by_id, DataManager, Mirror};

/// Format version written into every export.
pub const EXPORT_VERSION: &str = "1.0";

/// The on-disk export document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub version: String,
    pub export_date: String,
    pub data: Mirror,
}

impl ExportDocument {
    /// Snapshot the manager's mirror.
    pub fn from_manager(manager: &DataManager, at: DateTime<Utc>) -> Self {
        Self {
            version: EXPORT_VERSION.to_string(),
            export_date: format_timestamp(at),
            data: manager.snapshot().clone(),
        }
    }
}

/// What an import changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Keys whose record lists were merged by id.
    pub merged: Vec<String>,
    /// Keys whose values were replaced wholesale.
    pub replaced: Vec<String>,
}

impl ImportSummary {
    /// Total number of keys touched.
    pub fn total(&self) -> usize {
        self.merged.len() + self.replaced.len()
    }
}

/// Serialize the entire mirror as a pretty-printed export document.
pub fn export_json(manager: &DataManager) -> Result<String> {
    let document = ExportDocument::from_manager(manager, Utc::now());
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Default file name for a JSON export taken at `now`.
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("mindfit-data-{}.json", now.timestamp_millis())
}

/// Merge an export document into the store, then reload it.
///
/// The whole document is validated before anything is written. Record lists
/// are merged by id with imported records winning; every other value
/// replaces what is stored.
pub fn import_json(manager: &mut DataManager, text: &str) -> Result<ImportSummary> {
    let data = validate(text)?;
    let mut summary = ImportSummary::default();

    for (key, value) in data {
        match value {
            Value::Array(imported) => {
                let merged = merge_by_id(&manager.records(&key), &imported);
                tracing::debug!(
                    "Merged {} imported records into '{}' ({} total)",
                    imported.len(),
                    key,
                    merged.len()
                );
                manager.save(&key, Value::Array(merged));
                summary.merged.push(key);
            }
            other => {
                manager.save(&key, other);
                summary.replaced.push(key);
            }
        }
    }

    manager.reload();
    Ok(summary)
}

/// Read an export document from `path` and import it.
pub fn import_file(manager: &mut DataManager, path: &Path) -> Result<ImportSummary> {
    let text = std::fs::read_to_string(path)?;
    import_json(manager, &text)
}

fn validate(text: &str) -> Result<Map<String, Value>> {
    let document: Value = serde_json::from_str(text).map_err(|e| MindFitError::InvalidImport {
        message: format!("not valid JSON: {}", e),
    })?;

    if !document.get("version").is_some_and(is_truthy) {
        return Err(MindFitError::InvalidImport {
            message: "missing 'version' field".to_string(),
        });
    }

    match document.get("data") {
        Some(Value::Object(data)) => Ok(data.clone()),
        Some(_) => Err(MindFitError::InvalidImport {
            message: "'data' must be an object".to_string(),
        }),
        None => Err(MindFitError::InvalidImport {
            message: "missing 'data' field".to_string(),
        }),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}
