//! Key-value persistence backends.
//!
//! This module provides the string-keyed storage abstraction that the
//! [`DataManager`](crate::store::DataManager) writes through to:
//! - [`KeyValueStore`] trait shared by every backend
//! - [`FileStore`] for durable, directory-backed storage
//! - [`MemoryStore`] for in-process storage and failure simulation
//! - [`probe_durable`] to decide whether a durable backend is usable

pub mod file;
pub mod memory;
pub mod probe;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use probe::{probe_durable, PROBE_KEY};

use crate::error::Result;

/// A string-keyed store holding JSON-encoded values.
///
/// Mirrors the shape of browser Web Storage: values are opaque strings and
/// every operation may fail (disabled storage, exhausted quota).
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Removing a missing key is not an error.
    fn remove_item(&mut self, key: &str) -> Result<()>;

    /// Delete every key.
    fn clear(&mut self) -> Result<()>;

    /// List every stored key.
    fn keys(&self) -> Result<Vec<String>>;
}
