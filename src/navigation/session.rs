//! Session-scoped navigation state.
//!
//! Two keys live in the session store: the marker for the practice currently
//! in progress, and a bounded log of navigation events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::KeyValueStore;

/// Session key holding the in-progress practice marker.
pub const CURRENT_PRACTICE_KEY: &str = "currentPractice";

/// Session key holding the navigation tracking log.
pub const TRACKING_KEY: &str = "practiceTracking";

/// Most tracking entries kept; older entries are evicted first.
pub const TRACKING_LIMIT: usize = 50;

/// A practice that has started but not completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentPractice {
    pub id: String,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub category: String,
}

/// One navigation event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingEntry {
    pub practice_id: String,
    pub source: String,
    /// Epoch milliseconds.
    pub timestamp: i64,
    pub url: String,
}

/// Read the marker. A corrupt marker reads as none.
pub fn load_marker(store: &dyn KeyValueStore) -> Result<Option<CurrentPractice>> {
    let Some(raw) = store.get_item(CURRENT_PRACTICE_KEY)? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(marker) => Ok(Some(marker)),
        Err(e) => {
            tracing::warn!("Ignoring unreadable practice marker: {}", e);
            Ok(None)
        }
    }
}

/// Replace the marker.
pub fn save_marker(store: &mut dyn KeyValueStore, marker: &CurrentPractice) -> Result<()> {
    store.set_item(CURRENT_PRACTICE_KEY, &serde_json::to_string(marker)?)
}

/// Remove the marker.
pub fn clear_marker(store: &mut dyn KeyValueStore) -> Result<()> {
    store.remove_item(CURRENT_PRACTICE_KEY)
}

/// Read the tracking log, oldest first. A corrupt log reads as empty.
pub fn load_tracking(store: &dyn KeyValueStore) -> Result<Vec<TrackingEntry>> {
    let Some(raw) = store.get_item(TRACKING_KEY)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&raw) {
        Ok(log) => Ok(log),
        Err(e) => {
            tracing::warn!("Ignoring unreadable tracking log: {}", e);
            Ok(Vec::new())
        }
    }
}

/// Append to the tracking log, evicting the oldest entries past the limit.
pub fn append_tracking(store: &mut dyn KeyValueStore, entry: TrackingEntry) -> Result<()> {
    let mut log = load_tracking(store)?;
    log.push(entry);
    if log.len() > TRACKING_LIMIT {
        let excess = log.len() - TRACKING_LIMIT;
        log.drain(..excess);
    }
    store.set_item(TRACKING_KEY, &serde_json::to_string(&log)?)
}
