//! Wiring from resolved configuration to the store and navigator.

use std::time::Duration;

use crate::config::ResolvedConfig;
use crate::error::Result;
use crate::navigation::{Launcher, PracticeNavigator, ReadinessThresholds};
use crate::storage::{FileStore, KeyValueStore, MemoryStore};
use crate::store::{DataManager, StorageMode};
use crate::ui::UserInterface;

const DEMO_NOTICE: &str =
    "Running in demo mode: data is kept only for this session. Run `mindfit export` to save it.";

/// Everything a command needs to reach the user's data.
#[derive(Debug, Clone)]
pub struct AppContext {
    resolved: ResolvedConfig,
}

impl AppContext {
    pub fn new(resolved: ResolvedConfig) -> Self {
        Self { resolved }
    }

    pub fn resolved(&self) -> &ResolvedConfig {
        &self.resolved
    }

    /// The durable backend, or an unusable one when durability is off.
    pub fn durable_store(&self) -> Box<dyn KeyValueStore> {
        if self.resolved.config.durable {
            Box::new(FileStore::new(&self.resolved.data_dir))
        } else {
            Box::new(MemoryStore::unavailable())
        }
    }

    /// The ephemeral backend for the active session.
    pub fn session_store(&self) -> FileStore {
        FileStore::new(&self.resolved.session_dir)
    }

    /// Open the data manager, announcing demo mode when data won't persist.
    pub fn open_store(&self, ui: &mut dyn UserInterface) -> DataManager {
        let manager = DataManager::open(self.durable_store(), Box::new(self.session_store()));
        if manager.mode() == StorageMode::SessionOnly {
            ui.warning(DEMO_NOTICE);
        }
        manager
    }

    /// A navigator configured from the navigation settings.
    pub fn navigator<'a>(&self, manager: &'a mut DataManager) -> PracticeNavigator<'a, StdoutLauncher> {
        let settings = &self.resolved.config.navigation;
        PracticeNavigator::new(manager, StdoutLauncher)
            .with_delay(Duration::from_millis(settings.launch_delay_ms))
            .with_thresholds(ReadinessThresholds {
                daily_limit_minutes: settings.daily_limit_minutes,
                cooldown_minutes: settings.cooldown_minutes,
            })
            .with_base_url(self.resolved.config.base_url.clone().unwrap_or_default())
    }
}

/// Launcher that prints the page URL for the caller to open.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutLauncher;

impl Launcher for StdoutLauncher {
    fn open(&mut self, url: &str) -> Result<()> {
        println!("{}", url);
        Ok(())
    }
}
