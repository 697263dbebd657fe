//! Practice navigation.
//!
//! Maps practice identifiers to their pages and tracks the practice in
//! progress in the session store. [`PracticeNavigator`] is the entry point:
//!
//! ```
//! use std::time::Duration;
//! use mindfit::navigation::{PracticeNavigator, RecordingLauncher, StartOutcome};
//! use mindfit::storage::MemoryStore;
//! use mindfit::store::DataManager;
//! use mindfit::ui::MockUI;
//!
//! let mut manager = DataManager::open(
//!     Box::new(MemoryStore::new()),
//!     Box::new(MemoryStore::new()),
//! );
//! let mut ui = MockUI::new();
//! let mut nav = PracticeNavigator::new(&mut manager, RecordingLauncher::new())
//!     .with_delay(Duration::ZERO);
//!
//! let outcome = nav.start("breathing-box", &mut ui).unwrap();
//! assert!(matches!(outcome, StartOutcome::Started { .. }));
//! ```

pub mod catalog;
pub mod navigator;
pub mod readiness;
pub mod routes;
pub mod session;

pub use catalog::{BuiltinCatalog, EmptyCatalog, PracticeCatalog, PracticeInfo};
pub use navigator::{
    CompletionData, Launcher, PracticeNavigator, RecordingLauncher, StartOutcome,
    DEFAULT_LAUNCH_DELAY, QUICK_START_PROMPT_KEY, RESUME_PROMPT_KEY,
};
pub use readiness::{check_readiness, Readiness, ReadinessThresholds, ReadinessWarning};
pub use routes::{find_route, practice_type_from_url, Route, ROUTES};
pub use session::{CurrentPractice, TrackingEntry, CURRENT_PRACTICE_KEY, TRACKING_KEY, TRACKING_LIMIT};
