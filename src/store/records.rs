//! Record types stored in the collections.

use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::Collection;

/// Generate a fresh record identifier.
pub fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Render a timestamp the way records store it (`2024-01-05T10:00:00.000Z`).
pub(crate) fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Caller-supplied fields of a completed practice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeEntry {
    pub title: String,
    pub category: String,
    /// Minutes practiced.
    pub duration: f64,
    #[serde(default)]
    pub notes: String,
    /// Route identifier of the practice, when started through navigation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub practice_id: Option<String>,
}

/// A practice record as stored in `practiceHistory`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeRecord {
    pub id: String,
    pub title: String,
    pub category: String,
    pub duration: f64,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub practice_id: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl PracticeRecord {
    /// Stamp an entry with a new id and the given creation time.
    pub fn stamp(entry: PracticeEntry, at: DateTime<Utc>) -> Self {
        Self {
            id: new_record_id(),
            title: entry.title,
            category: entry.category,
            duration: entry.duration,
            notes: entry.notes,
            practice_id: entry.practice_id,
            timestamp: at,
        }
    }

    /// Encode as the JSON object kept in the mirror.
    pub fn to_value(&self) -> Value {
        let mut value = json!({
            "id": self.id,
            "title": self.title,
            "category": self.category,
            "duration": self.duration,
            "notes": self.notes,
            "timestamp": format_timestamp(self.timestamp),
        });
        if let (Some(practice_id), Some(obj)) = (&self.practice_id, value.as_object_mut()) {
            obj.insert("practiceId".to_string(), json!(practice_id));
        }
        value
    }
}

/// Which assessment collection a result belongs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentKind {
    General,
    Bmi,
    BodyAnxiety,
}

impl AssessmentKind {
    /// Collection the assessment is appended to.
    pub fn collection(&self) -> Collection {
        match self {
            Self::General => Collection::Assessments,
            Self::Bmi => Collection::BmiAssessments,
            Self::BodyAnxiety => Collection::BodyAnxietyAssessments,
        }
    }

    /// Stamp a result with a new id and creation time.
    ///
    /// The stamped `id` and `timestamp` replace any the caller supplied.
    pub fn stamp(&self, result: Map<String, Value>, at: DateTime<Utc>) -> Value {
        let mut record = result;
        record.insert("id".to_string(), json!(new_record_id()));
        record.insert("timestamp".to_string(), json!(format_timestamp(at)));
        Value::Object(record)
    }
}

impl FromStr for AssessmentKind {
    type Err = std::convert::Infallible;

    /// `bmi` and `anxiety` select their own collections; anything else is general.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "bmi" => Self::Bmi,
            "anxiety" => Self::BodyAnxiety,
            _ => Self::General,
        })
    }
}

/// Aggregate figures over the current mirror.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_practices: usize,
    pub total_minutes: f64,
    pub assessments_count: usize,
    pub last_practice: Option<Value>,
    pub last_assessment: Option<Value>,
}

/// Minutes recorded on a practice; missing or non-numeric counts as zero.
pub fn record_duration(record: &Value) -> f64 {
    record
        .get("duration")
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
}

/// When a record happened: `timestamp`, else the legacy `date` field.
///
/// Accepts RFC 3339 strings and epoch-millisecond numbers.
pub fn record_time(record: &Value) -> Option<DateTime<Utc>> {
    ["timestamp", "date"]
        .iter()
        .filter_map(|field| record.get(*field))
        .find_map(|value| match value {
            Value::String(s) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
            _ => None,
        })
}
