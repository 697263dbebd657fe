//! Store, transfer, and navigation through the public API.

use std::time::Duration;

use mindfit::navigation::{CompletionData, PracticeNavigator, RecordingLauncher};
use mindfit::storage::{FileStore, MemoryStore};
use mindfit::store::{DataManager, StorageMode};
use mindfit::transfer::{export_json, import_json, practices_csv};
use mindfit::ui::MockUI;
use serde_json::json;
use tempfile::TempDir;

fn open(temp: &TempDir) -> DataManager {
    DataManager::open(
        Box::new(FileStore::new(temp.path().join("data"))),
        Box::new(FileStore::new(temp.path().join("session"))),
    )
}

#[test]
fn data_survives_reopen() {
    let temp = TempDir::new().unwrap();
    let mut manager = open(&temp);
    manager.save("settings", json!({"reminders": true}));
    manager.close();

    let reopened = open(&temp);
    assert_eq!(reopened.mode(), StorageMode::Durable);
    assert_eq!(reopened.get("settings"), Some(&json!({"reminders": true})));
}

#[test]
fn unusable_durable_store_falls_back_to_session() {
    let manager = DataManager::open(
        Box::new(MemoryStore::unavailable()),
        Box::new(MemoryStore::new()),
    );
    assert_eq!(manager.mode(), StorageMode::SessionOnly);
    assert!(!manager.is_durable());
}

#[test]
fn navigated_practice_is_exported() {
    let temp = TempDir::new().unwrap();
    let mut manager = open(&temp);
    let mut ui = MockUI::new();

    let mut nav = PracticeNavigator::new(&mut manager, RecordingLauncher::new())
        .with_delay(Duration::ZERO);
    nav.start("gratitude-practice", &mut ui).unwrap();
    assert_eq!(
        nav.launcher().opened(),
        &["anxiety_relief.html?type=gratitude".to_string()]
    );
    let record = nav
        .complete(CompletionData {
            duration: Some(6.0),
            notes: Some("three good things".to_string()),
        })
        .unwrap()
        .unwrap();
    assert_eq!(record.title, "Gratitude Practice");
    drop(nav);

    let exported = export_json(&manager).unwrap();
    let csv = practices_csv(&manager).unwrap();
    assert!(csv.contains("\"three good things\""));

    let other = TempDir::new().unwrap();
    let mut target = open(&other);
    let summary = import_json(&mut target, &exported).unwrap();
    assert!(summary.merged.contains(&"practiceHistory".to_string()));
    assert_eq!(target.practices().len(), 1);
    assert_eq!(target.practices()[0]["practiceId"], "gratitude-practice");
}
