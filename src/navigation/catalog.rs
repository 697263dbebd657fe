//! Practice metadata lookup.

use serde::Serialize;

/// Display details for a practice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PracticeInfo {
    pub id: String,
    pub title: String,
    pub category: String,
}

/// Source of practice titles and categories.
///
/// A session marker is only recorded for practices the catalog knows.
pub trait PracticeCatalog {
    fn find(&self, id: &str) -> Option<PracticeInfo>;
}

/// Catalog with an entry for every routed practice.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinCatalog;

const BUILTIN: [(&str, &str, &str); 13] = [
    ("breathing-4-7-8", "4-7-8 Breathing", "breathing"),
    ("breathing-box", "Box Breathing", "breathing"),
    ("breathing-alternate", "Alternate Nostril Breathing", "breathing"),
    ("body-scan", "Body Scan", "body"),
    ("progressive-relaxation", "Progressive Muscle Relaxation", "body"),
    ("muscle-relaxation", "Muscle Relaxation", "body"),
    ("mindful-eating", "Mindful Eating", "mindfulness"),
    ("mindful-breathing", "Mindful Breathing", "mindfulness"),
    ("grounding-5-4-3-2-1", "5-4-3-2-1 Grounding", "mindfulness"),
    ("grounding", "Grounding", "mindfulness"),
    ("emotion-regulation", "Emotion Regulation", "emotion"),
    ("gratitude-practice", "Gratitude Practice", "emotion"),
    ("self-compassion", "Self-Compassion", "emotion"),
];

impl PracticeCatalog for BuiltinCatalog {
    fn find(&self, id: &str) -> Option<PracticeInfo> {
        BUILTIN
            .iter()
            .find(|(practice_id, _, _)| *practice_id == id)
            .map(|(practice_id, title, category)| PracticeInfo {
                id: practice_id.to_string(),
                title: title.to_string(),
                category: category.to_string(),
            })
    }
}

/// Catalog that knows nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyCatalog;

impl PracticeCatalog for EmptyCatalog {
    fn find(&self, _id: &str) -> Option<PracticeInfo> {
        None
    }
}
