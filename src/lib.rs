//! MindFit - local data store and practice navigation for a wellness app.
//!
//! MindFit keeps a user's practice history, assessments, and settings in a
//! durable key-value store, falling back to a per-session store when the
//! durable one is unusable. It also routes practice identifiers to their
//! pages and tracks the practice in progress.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and path resolution
//! - [`error`] - Error types and result aliases
//! - [`navigation`] - Practice routing, readiness checks, and session markers
//! - [`storage`] - Key-value backends and the durability probe
//! - [`store`] - The [`DataManager`](store::DataManager) facade and record shapes
//! - [`transfer`] - JSON export/import and CSV export
//! - [`ui`] - Notices, confirmation prompts, and terminal output
//!
//! # Example
//!
//! ```
//! use mindfit::storage::MemoryStore;
//! use mindfit::store::{DataManager, PracticeEntry, StorageMode};
//!
//! let mut manager = DataManager::open(
//!     Box::new(MemoryStore::new()),
//!     Box::new(MemoryStore::new()),
//! );
//! assert_eq!(manager.mode(), StorageMode::Durable);
//!
//! manager.add_practice_record(PracticeEntry {
//!     title: "Body Scan".to_string(),
//!     category: "body".to_string(),
//!     duration: 10.0,
//!     ..Default::default()
//! });
//! assert_eq!(manager.stats().total_minutes, 10.0);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod navigation;
pub mod storage;
pub mod store;
pub mod transfer;
pub mod ui;

pub use error::{MindFitError, Result};
