//! Named collections and the default mirror shape.

use serde_json::{json, Map, Value};

/// The in-memory mirror: collection name to stored value.
pub type Mirror = Map<String, Value>;

/// Session-store key holding the whole mirror as one JSON blob.
pub const SESSION_BACKUP_KEY: &str = "mindfit_session_data";

/// A known top-level collection of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    PracticeHistory,
    Assessments,
    BmiAssessments,
    BodyAnxietyAssessments,
    MindfulEatingRecords,
    UserProfile,
    Settings,
}

impl Collection {
    /// Every known collection, in load order.
    pub const ALL: [Collection; 7] = [
        Collection::PracticeHistory,
        Collection::Assessments,
        Collection::BmiAssessments,
        Collection::BodyAnxietyAssessments,
        Collection::MindfulEatingRecords,
        Collection::UserProfile,
        Collection::Settings,
    ];

    /// Storage key for this collection.
    pub fn key(&self) -> &'static str {
        match self {
            Self::PracticeHistory => "practiceHistory",
            Self::Assessments => "assessments",
            Self::BmiAssessments => "bmiAssessments",
            Self::BodyAnxietyAssessments => "bodyAnxietyAssessments",
            Self::MindfulEatingRecords => "mindfulEatingRecords",
            Self::UserProfile => "userProfile",
            Self::Settings => "settings",
        }
    }

    /// Look up a collection by its storage key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Whether this collection holds an array of records.
    pub fn is_record_list(&self) -> bool {
        !matches!(self, Self::UserProfile | Self::Settings)
    }

    /// Value a fresh store starts with for this collection.
    pub fn default_value(&self) -> Value {
        match self {
            Self::UserProfile => json!({}),
            Self::Settings => json!({
                "theme": "light",
                "notifications": true,
                "soundEnabled": true
            }),
            _ => json!([]),
        }
    }
}

/// Build the mirror a brand-new store starts from.
pub fn default_mirror() -> Mirror {
    Collection::ALL
        .into_iter()
        .map(|c| (c.key().to_string(), c.default_value()))
        .collect()
}
