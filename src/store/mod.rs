//! The MindFit data store.
//!
//! This module provides the in-memory mirror of every stored collection and
//! the [`DataManager`] facade that routes mutations through it to the active
//! persistence backends.

pub mod collections;
pub mod manager;
pub mod merge;
pub mod records;

pub use collections::{default_mirror, Collection, Mirror, SESSION_BACKUP_KEY};
pub use manager::{ClearOutcome, DataManager, StorageMode};
pub use merge::merge_by_id;
pub use records::{
    new_record_id, record_duration, record_time, AssessmentKind, PracticeEntry, PracticeRecord,
    Stats,
};
