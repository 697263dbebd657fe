//! Starting, resuming, and completing practices.

use std::time::Duration;

use chrono::{Local, Utc};

use super::catalog::{BuiltinCatalog, PracticeCatalog};
use super::readiness::{check_readiness, Readiness, ReadinessThresholds};
use super::routes::{find_route, Route, ROUTES};
use super::session::{
    append_tracking, clear_marker, load_marker, save_marker, CurrentPractice, TrackingEntry,
};
use crate::error::Result;
use crate::store::{DataManager, PracticeEntry, PracticeRecord};
use crate::ui::{confirm, Prompt, PromptOption, PromptType, UserInterface};

/// Prompt key for resuming an unfinished practice.
pub const RESUME_PROMPT_KEY: &str = "resume_practice";

/// Prompt key for confirming a quick start past a readiness warning.
pub const QUICK_START_PROMPT_KEY: &str = "quick_start_confirm";

/// Pause before opening a practice page.
pub const DEFAULT_LAUNCH_DELAY: Duration = Duration::from_millis(300);

const NOT_AVAILABLE: &str = "Sorry, this practice is still in development.";

/// Opens practice pages.
pub trait Launcher {
    fn open(&mut self, url: &str) -> Result<()>;
}

/// Launcher that remembers what it opened.
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    opened: Vec<String>,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> &[String] {
        &self.opened
    }
}

impl Launcher for RecordingLauncher {
    fn open(&mut self, url: &str) -> Result<()> {
        self.opened.push(url.to_string());
        Ok(())
    }
}

/// How a start request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    /// A practice page was opened.
    Started { url: String },
    /// The unfinished practice was reopened instead.
    Resumed { url: String },
    /// No route exists for the practice.
    Unavailable,
    /// The user backed out at a readiness warning.
    Declined,
}

/// Caller-supplied overrides when completing a practice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionData {
    /// Minutes practiced; elapsed time is used when absent or zero.
    pub duration: Option<f64>,
    pub notes: Option<String>,
}

/// Navigation between practices, backed by the data manager's session store.
pub struct PracticeNavigator<'a, L: Launcher> {
    manager: &'a mut DataManager,
    launcher: L,
    catalog: Box<dyn PracticeCatalog>,
    thresholds: ReadinessThresholds,
    delay: Duration,
    base_url: String,
}

impl<'a, L: Launcher> PracticeNavigator<'a, L> {
    pub fn new(manager: &'a mut DataManager, launcher: L) -> Self {
        Self {
            manager,
            launcher,
            catalog: Box::new(BuiltinCatalog),
            thresholds: ReadinessThresholds::default(),
            delay: DEFAULT_LAUNCH_DELAY,
            base_url: String::new(),
        }
    }

    pub fn with_catalog(mut self, catalog: Box<dyn PracticeCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_thresholds(mut self, thresholds: ReadinessThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Every routed practice.
    pub fn routes(&self) -> &'static [Route] {
        &ROUTES
    }

    /// Full URL for a practice, if it has a route.
    pub fn route(&self, id: &str) -> Option<String> {
        find_route(id).map(|route| route.url_with_base(&self.base_url))
    }

    /// The practice currently in progress.
    pub fn current_practice(&self) -> Result<Option<CurrentPractice>> {
        load_marker(self.manager.session_store())
    }

    /// Open a practice, recording it as in progress.
    pub fn start(&mut self, id: &str, ui: &mut dyn UserInterface) -> Result<StartOutcome> {
        let Some(url) = self.route(id) else {
            tracing::warn!("No route for practice '{}'", id);
            ui.warning(NOT_AVAILABLE);
            return Ok(StartOutcome::Unavailable);
        };

        tracing::debug!("Starting practice '{}'", id);
        self.record_start(id);
        ui.message("Opening practice...");

        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        self.launcher.open(&url)?;
        Ok(StartOutcome::Started { url })
    }

    /// Like [`start`](Self::start), but first offers to resume an unfinished practice.
    pub fn start_safe(&mut self, id: &str, ui: &mut dyn UserInterface) -> Result<StartOutcome> {
        if let Some(current) = self.current_practice()? {
            let prompt = Prompt {
                key: RESUME_PROMPT_KEY.to_string(),
                question: format!("You have an unfinished practice: {}. Resume it?", current.title),
                prompt_type: PromptType::Select {
                    options: vec![
                        PromptOption {
                            label: format!("Resume {}", current.title),
                            value: "resume".to_string(),
                        },
                        PromptOption {
                            label: "Discard it and start something new".to_string(),
                            value: "discard".to_string(),
                        },
                    ],
                },
                default: Some("resume".to_string()),
            };

            let answer = ui.prompt(&prompt)?;
            if resumes(&answer.as_string()) {
                if let Some(url) = self.route(&current.id) {
                    self.launcher.open(&url)?;
                    return Ok(StartOutcome::Resumed { url });
                }
                tracing::warn!("Unfinished practice '{}' has no route", current.id);
            } else {
                clear_marker(self.manager.session_store_mut())?;
            }
        }

        self.start(id, ui)
    }

    /// Start a practice, confirming first when the readiness check warns.
    pub fn quick_start(&mut self, id: &str, ui: &mut dyn UserInterface) -> Result<StartOutcome> {
        let readiness = check_readiness(&self.manager.practices(), &Local::now(), &self.thresholds);

        if let Readiness::Warning(warning) = readiness {
            let question = format!("{}\n\nContinue anyway?", warning.message());
            if !confirm(ui, QUICK_START_PROMPT_KEY, &question, false)? {
                return Ok(StartOutcome::Declined);
            }
        }

        self.start(id, ui)
    }

    /// Finish the practice in progress and record it.
    ///
    /// Returns `None` when no practice is in progress.
    pub fn complete(&mut self, data: CompletionData) -> Result<Option<PracticeRecord>> {
        let Some(current) = self.current_practice()? else {
            tracing::debug!("No practice in progress to complete");
            return Ok(None);
        };

        let elapsed_ms = Utc::now()
            .signed_duration_since(current.start_time)
            .num_milliseconds();
        let elapsed = (elapsed_ms as f64 / 60_000.0).round();
        let duration = data.duration.filter(|d| *d != 0.0).unwrap_or(elapsed);

        let record = self.manager.add_practice_record(PracticeEntry {
            title: current.title.clone(),
            category: current.category.clone(),
            duration,
            notes: data.notes.unwrap_or_default(),
            practice_id: Some(current.id.clone()),
        });

        clear_marker(self.manager.session_store_mut())?;
        tracing::debug!("Completed practice '{}'", current.title);
        Ok(Some(record))
    }

    /// Append a navigation event to the tracking log.
    pub fn track(&mut self, id: &str, source: &str, url: &str) -> Result<()> {
        let entry = TrackingEntry {
            practice_id: id.to_string(),
            source: source.to_string(),
            timestamp: Utc::now().timestamp_millis(),
            url: url.to_string(),
        };
        append_tracking(self.manager.session_store_mut(), entry)
    }

    fn record_start(&mut self, id: &str) {
        let Some(info) = self.catalog.find(id) else {
            tracing::debug!("Practice '{}' not in catalog, no marker recorded", id);
            return;
        };

        let marker = CurrentPractice {
            id: id.to_string(),
            title: info.title,
            start_time: Utc::now(),
            category: info.category,
        };
        if let Err(e) = save_marker(self.manager.session_store_mut(), &marker) {
            tracing::error!("Failed to record practice start: {}", e);
        }
    }
}

fn resumes(answer: &str) -> bool {
    match answer {
        "resume" => true,
        "discard" => false,
        other => crate::ui::parse_yes_no(other).unwrap_or(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::catalog::EmptyCatalog;
    use crate::navigation::session::{load_tracking, TRACKING_KEY};
    use crate::storage::{KeyValueStore, MemoryStore};
    use crate::ui::MockUI;
    use chrono::Duration as ChronoDuration;
    use serde_json::json;

    fn manager() -> DataManager {
        DataManager::open(Box::new(MemoryStore::new()), Box::new(MemoryStore::new()))
    }

    fn navigator(manager: &mut DataManager) -> PracticeNavigator<'_, RecordingLauncher> {
        PracticeNavigator::new(manager, RecordingLauncher::new()).with_delay(Duration::ZERO)
    }

    fn seed_marker(manager: &mut DataManager, id: &str, title: &str, minutes_ago: i64) {
        let marker = CurrentPractice {
            id: id.to_string(),
            title: title.to_string(),
            start_time: Utc::now() - ChronoDuration::minutes(minutes_ago),
            category: "body".to_string(),
        };
        save_marker(manager.session_store_mut(), &marker).unwrap();
    }

    #[test]
    fn start_opens_route_and_records_marker() {
        let mut m = manager();
        let mut ui = MockUI::new();
        let mut nav = navigator(&mut m);

        let outcome = nav.start("body-scan", &mut ui).unwrap();

        assert_eq!(
            outcome,
            StartOutcome::Started {
                url: "anxiety_relief.html?type=body-scan".to_string()
            }
        );
        assert_eq!(nav.launcher().opened().len(), 1);
        let marker = nav.current_practice().unwrap().unwrap();
        assert_eq!(marker.id, "body-scan");
        assert_eq!(marker.title, "Body Scan");
        assert!(ui.has_message("Opening"));
    }

    #[test]
    fn start_unknown_practice_does_not_navigate() {
        let mut m = manager();
        let mut ui = MockUI::new();
        let mut nav = navigator(&mut m);

        let outcome = nav.start("tai-chi", &mut ui).unwrap();

        assert_eq!(outcome, StartOutcome::Unavailable);
        assert!(nav.launcher().opened().is_empty());
        assert!(nav.current_practice().unwrap().is_none());
        assert!(ui.has_warning("in development"));
    }

    #[test]
    fn start_without_catalog_entry_skips_marker() {
        let mut m = manager();
        let mut ui = MockUI::new();
        let mut nav = navigator(&mut m).with_catalog(Box::new(EmptyCatalog));

        nav.start("body-scan", &mut ui).unwrap();

        assert_eq!(nav.launcher().opened().len(), 1);
        assert!(nav.current_practice().unwrap().is_none());
    }

    #[test]
    fn start_uses_base_url() {
        let mut m = manager();
        let mut ui = MockUI::new();
        let mut nav = navigator(&mut m).with_base_url("https://mindfit.example");

        nav.start("mindful-eating", &mut ui).unwrap();

        assert_eq!(
            nav.launcher().opened(),
            &["https://mindfit.example/mindful_eating.html".to_string()]
        );
    }

    #[test]
    fn start_safe_without_marker_just_starts() {
        let mut m = manager();
        let mut ui = MockUI::new();
        let mut nav = navigator(&mut m);

        let outcome = nav.start_safe("grounding", &mut ui).unwrap();

        assert!(matches!(outcome, StartOutcome::Started { .. }));
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn start_safe_resumes_unfinished_practice() {
        let mut m = manager();
        seed_marker(&mut m, "body-scan", "Body Scan", 2);
        let mut ui = MockUI::new();
        ui.set_prompt_response(RESUME_PROMPT_KEY, "resume");
        let mut nav = navigator(&mut m);

        let outcome = nav.start_safe("grounding", &mut ui).unwrap();

        assert_eq!(
            outcome,
            StartOutcome::Resumed {
                url: "anxiety_relief.html?type=body-scan".to_string()
            }
        );
        assert_eq!(nav.current_practice().unwrap().unwrap().id, "body-scan");
        assert!(ui.questions()[0].contains("Body Scan"));
    }

    #[test]
    fn start_safe_discards_and_starts_new() {
        let mut m = manager();
        seed_marker(&mut m, "body-scan", "Body Scan", 2);
        let mut ui = MockUI::new();
        ui.set_prompt_response(RESUME_PROMPT_KEY, "discard");
        let mut nav = navigator(&mut m);

        let outcome = nav.start_safe("grounding", &mut ui).unwrap();

        assert!(matches!(outcome, StartOutcome::Started { .. }));
        assert_eq!(nav.current_practice().unwrap().unwrap().id, "grounding");
    }

    #[test]
    fn complete_records_elapsed_minutes_and_clears_marker() {
        let mut m = manager();
        seed_marker(&mut m, "body-scan", "Body Scan", 10);
        let mut nav = navigator(&mut m);

        let record = nav
            .complete(CompletionData {
                notes: Some("calm".to_string()),
                ..Default::default()
            })
            .unwrap()
            .unwrap();

        assert_eq!(record.duration, 10.0);
        assert_eq!(record.notes, "calm");
        assert_eq!(record.practice_id.as_deref(), Some("body-scan"));
        assert!(nav.current_practice().unwrap().is_none());
        drop(nav);
        assert_eq!(m.practices().len(), 1);
    }

    #[test]
    fn complete_prefers_caller_duration() {
        let mut m = manager();
        seed_marker(&mut m, "body-scan", "Body Scan", 10);
        let mut nav = navigator(&mut m);

        let record = nav
            .complete(CompletionData {
                duration: Some(7.5),
                notes: None,
            })
            .unwrap()
            .unwrap();

        assert_eq!(record.duration, 7.5);
        assert_eq!(record.notes, "");
    }

    #[test]
    fn complete_without_marker_records_nothing() {
        let mut m = manager();
        let mut nav = navigator(&mut m);

        assert!(nav.complete(CompletionData::default()).unwrap().is_none());
        drop(nav);
        assert!(m.practices().is_empty());
    }

    #[test]
    fn quick_start_prompts_after_long_day() {
        let mut m = manager();
        let now = Utc::now();
        m.save(
            "practiceHistory",
            json!([
                {"id": "a", "duration": 20, "timestamp": now.to_rfc3339()},
                {"id": "b", "duration": 15, "timestamp": now.to_rfc3339()}
            ]),
        );
        let mut ui = MockUI::new();
        ui.set_prompt_response(QUICK_START_PROMPT_KEY, "no");
        let mut nav = navigator(&mut m);

        let outcome = nav.quick_start("body-scan", &mut ui).unwrap();

        assert_eq!(outcome, StartOutcome::Declined);
        assert_eq!(ui.prompts_shown(), &[QUICK_START_PROMPT_KEY.to_string()]);
        assert!(nav.launcher().opened().is_empty());
    }

    #[test]
    fn quick_start_proceeds_when_confirmed() {
        let mut m = manager();
        m.save(
            "practiceHistory",
            json!([{"id": "a", "duration": 35, "timestamp": Utc::now().to_rfc3339()}]),
        );
        let mut ui = MockUI::new();
        ui.set_prompt_response(QUICK_START_PROMPT_KEY, "yes");
        let mut nav = navigator(&mut m);

        let outcome = nav.quick_start("body-scan", &mut ui).unwrap();

        assert!(matches!(outcome, StartOutcome::Started { .. }));
    }

    #[test]
    fn quick_start_without_history_does_not_prompt() {
        let mut m = manager();
        let mut ui = MockUI::new();
        let mut nav = navigator(&mut m);

        let outcome = nav.quick_start("body-scan", &mut ui).unwrap();

        assert!(matches!(outcome, StartOutcome::Started { .. }));
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn track_appends_to_session_log() {
        let mut m = manager();
        let mut nav = navigator(&mut m);

        nav.track("body-scan", "practice_list", "index.html").unwrap();
        nav.track("grounding", "home", "index.html").unwrap();
        drop(nav);

        let log = load_tracking(m.session_store()).unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].practice_id, "body-scan");
        assert_eq!(log[1].source, "home");
    }

    #[test]
    fn track_recovers_from_corrupt_log() {
        let mut m = manager();
        m.session_store_mut().set_item(TRACKING_KEY, "{oops").unwrap();
        let mut nav = navigator(&mut m);

        nav.track("body-scan", "practice_list", "index.html").unwrap();
        nav.track("grounding", "home", "index.html").unwrap();
        drop(nav);

        let log = load_tracking(m.session_store()).unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log[1].practice_id, "grounding");
    }

    #[test]
    fn route_lookup() {
        let mut m = manager();
        let nav = navigator(&mut m);
        assert_eq!(nav.routes().len(), 13);
        assert_eq!(
            nav.route("breathing-box").as_deref(),
            Some("anxiety_relief.html?type=box-breathing")
        );
        assert_eq!(nav.route("tai-chi"), None);
    }
}
