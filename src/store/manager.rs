//! The data manager facade.
//!
//! [`DataManager`] owns the in-memory mirror and both persistence backends.
//! Every mutation lands in the mirror first, is written through to the
//! durable store when one is available, and is then backed up to the session
//! store as a single JSON blob.
//!
//! # Example
//!
//! ```
//! use mindfit::storage::MemoryStore;
//! use mindfit::store::{DataManager, PracticeEntry, StorageMode};
//! use serde_json::json;
//!
//! let mut manager = DataManager::open(
//!     Box::new(MemoryStore::new()),
//!     Box::new(MemoryStore::new()),
//! );
//! assert_eq!(manager.mode(), StorageMode::Durable);
//!
//! manager.save("userProfile", json!({"name": "Lin"}));
//! assert_eq!(manager.get("userProfile"), Some(&json!({"name": "Lin"})));
//!
//! manager.add_practice_record(PracticeEntry {
//!     title: "Body Scan".into(),
//!     category: "body".into(),
//!     duration: 12.0,
//!     ..Default::default()
//! });
//! assert_eq!(manager.stats().total_minutes, 12.0);
//! ```

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::collections::{default_mirror, Collection, Mirror, SESSION_BACKUP_KEY};
use super::records::{record_duration, AssessmentKind, PracticeEntry, PracticeRecord, Stats};
use crate::error::Result;
use crate::storage::{probe_durable, KeyValueStore};
use crate::ui::{confirm, UserInterface};

/// Prompt key for the clear-all confirmation.
pub const CLEAR_PROMPT_KEY: &str = "clear_all_data";

/// Which backend receives write-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    /// Durable store is usable; the session blob is a backup.
    Durable,
    /// Durable store failed its probe; data lives only in the session.
    SessionOnly,
}

/// Outcome of [`DataManager::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    Cleared,
    Cancelled,
}

/// Mediates reads and writes between the mirror and the backends.
pub struct DataManager {
    mirror: Mirror,
    durable: Box<dyn KeyValueStore>,
    session: Box<dyn KeyValueStore>,
    mode: StorageMode,
    /// Cleared by `close` and by a confirmed `clear`; set again by `flush`.
    flush_on_drop: bool,
}

impl DataManager {
    /// Open the store, probing the durable backend and loading its contents.
    pub fn open(durable: Box<dyn KeyValueStore>, session: Box<dyn KeyValueStore>) -> Self {
        let mut manager = Self {
            mirror: default_mirror(),
            durable,
            session,
            mode: StorageMode::SessionOnly,
            flush_on_drop: true,
        };
        manager.load();
        manager
    }

    /// The backend mode chosen at load time.
    pub fn mode(&self) -> StorageMode {
        self.mode
    }

    /// Whether the durable backend is in use.
    pub fn is_durable(&self) -> bool {
        self.mode == StorageMode::Durable
    }

    /// The whole mirror.
    pub fn snapshot(&self) -> &Mirror {
        &self.mirror
    }

    /// The durable backend.
    pub fn durable_store(&self) -> &dyn KeyValueStore {
        self.durable.as_ref()
    }

    /// The session backend.
    pub fn session_store(&self) -> &dyn KeyValueStore {
        self.session.as_ref()
    }

    /// The session backend, for collaborators keeping their own session keys.
    pub fn session_store_mut(&mut self) -> &mut dyn KeyValueStore {
        self.session.as_mut()
    }

    fn load(&mut self) {
        self.mirror = default_mirror();
        self.mode = if probe_durable(self.durable.as_mut()) {
            StorageMode::Durable
        } else {
            StorageMode::SessionOnly
        };

        match self.mode {
            StorageMode::Durable => self.load_from_durable(),
            StorageMode::SessionOnly => self.load_from_session(),
        }
    }

    fn load_from_durable(&mut self) {
        for collection in Collection::ALL {
            let key = collection.key();
            match self.durable.get_item(key) {
                Ok(Some(raw)) if !raw.is_empty() => match serde_json::from_str::<Value>(&raw) {
                    Ok(value) => {
                        self.mirror.insert(key.to_string(), value);
                    }
                    Err(e) => tracing::error!("Ignoring corrupt stored value for '{}': {}", key, e),
                },
                Ok(_) => {}
                Err(e) => tracing::error!("Failed to read '{}' from durable storage: {}", key, e),
            }
        }
        tracing::debug!("Loaded data from durable storage");
    }

    fn load_from_session(&mut self) {
        let raw = match self.session.get_item(SESSION_BACKUP_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return,
            Err(e) => {
                tracing::error!("Failed to read session backup: {}", e);
                return;
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(data)) => {
                self.mirror.extend(data);
                tracing::debug!("Restored data from session storage");
            }
            Ok(_) => tracing::error!("Ignoring session backup that is not an object"),
            Err(e) => tracing::error!("Ignoring corrupt session backup: {}", e),
        }
    }

    /// Re-run the startup load, discarding the current mirror.
    pub fn reload(&mut self) {
        tracing::debug!("Reloading store");
        self.load();
    }

    /// Write the whole mirror to the session backup.
    ///
    /// Failures are logged; the mirror stays authoritative.
    pub fn flush(&mut self) {
        let blob = Value::Object(self.mirror.clone()).to_string();
        if let Err(e) = self.session.set_item(SESSION_BACKUP_KEY, &blob) {
            tracing::error!("Failed to back up to session storage: {}", e);
        }
        self.flush_on_drop = true;
    }

    /// Flush and end the store's lifecycle.
    ///
    /// Nothing is written after a confirmed [`clear`](Self::clear) with no
    /// later writes, so the session store stays empty.
    pub fn close(mut self) {
        if self.flush_on_drop {
            self.flush();
        }
        self.flush_on_drop = false;
    }

    /// Read a value. Stored `null` counts as absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.mirror.get(key).filter(|v| !v.is_null())
    }

    /// Read a value, or `default` when absent.
    pub fn get_or(&self, key: &str, default: Value) -> Value {
        self.get(key).cloned().unwrap_or(default)
    }

    /// Read and decode a value into `T`.
    ///
    /// Returns `None` when absent or when the stored shape does not decode.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::warn!("Stored value for '{}' has an unexpected shape: {}", key, e);
                None
            }
        }
    }

    /// Store `value` under `key`.
    ///
    /// Backend failures are logged and swallowed.
    pub fn save(&mut self, key: &str, value: Value) {
        let encoded = value.to_string();
        self.mirror.insert(key.to_string(), value);

        if self.is_durable() {
            if let Err(e) = self.durable.set_item(key, &encoded) {
                tracing::error!("Failed to persist '{}': {}", key, e);
            }
        }

        self.flush();
    }

    /// Delete `key` from the mirror and the durable store.
    pub fn remove(&mut self, key: &str) {
        self.mirror.remove(key);

        if self.is_durable() {
            if let Err(e) = self.durable.remove_item(key) {
                tracing::error!("Failed to remove '{}': {}", key, e);
            }
        }

        self.flush();
    }

    /// Wipe every collection after the user confirms.
    ///
    /// On confirmation the mirror is reset, the durable and session stores
    /// are emptied, and the store is reloaded.
    pub fn clear(&mut self, ui: &mut dyn UserInterface) -> Result<ClearOutcome> {
        let confirmed = confirm(
            ui,
            CLEAR_PROMPT_KEY,
            "Clear all data? This cannot be undone.",
            false,
        )?;
        if !confirmed {
            return Ok(ClearOutcome::Cancelled);
        }

        self.mirror = default_mirror();

        if self.is_durable() {
            if let Err(e) = self.durable.clear() {
                tracing::error!("Failed to clear durable storage: {}", e);
            }
        }

        if let Err(e) = self.session.clear() {
            tracing::error!("Failed to clear session storage: {}", e);
        }

        ui.success("All data cleared");
        self.reload();
        self.flush_on_drop = false;
        Ok(ClearOutcome::Cleared)
    }

    /// A record-list collection, or empty when absent or not a list.
    pub fn records(&self, key: &str) -> Vec<Value> {
        match self.get(key) {
            Some(Value::Array(items)) => items.clone(),
            Some(_) => {
                tracing::warn!("Collection '{}' is not a list, treating as empty", key);
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    /// Every practice record, in stored order.
    pub fn practices(&self) -> Vec<Value> {
        self.records(Collection::PracticeHistory.key())
    }

    /// Append a practice record stamped with a fresh id and the current time.
    pub fn add_practice_record(&mut self, entry: PracticeEntry) -> PracticeRecord {
        let record = PracticeRecord::stamp(entry, Utc::now());
        let mut history = self.practices();
        history.push(record.to_value());
        self.save(Collection::PracticeHistory.key(), Value::Array(history));
        tracing::debug!("Recorded practice '{}' ({})", record.title, record.id);
        record
    }

    /// Append an assessment result to the collection for `kind`.
    pub fn add_assessment(&mut self, kind: AssessmentKind, result: Map<String, Value>) -> Value {
        let key = kind.collection().key();
        let record = kind.stamp(result, Utc::now());
        let mut assessments = self.records(key);
        assessments.push(record.clone());
        self.save(key, Value::Array(assessments));
        record
    }

    /// Aggregate figures over the current mirror.
    ///
    /// "Last" means last by stored order, not by timestamp.
    pub fn stats(&self) -> Stats {
        let practices = self.practices();
        let assessments = self.records(Collection::BodyAnxietyAssessments.key());

        Stats {
            total_practices: practices.len(),
            total_minutes: practices.iter().map(record_duration).sum(),
            assessments_count: assessments.len(),
            last_practice: practices.last().cloned(),
            last_assessment: assessments.last().cloned(),
        }
    }
}

impl Drop for DataManager {
    fn drop(&mut self) {
        if self.flush_on_drop {
            self.flush();
        }
    }
}
