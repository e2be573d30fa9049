use amhp_core::chat::ChatMessage;
use amhp_core::mood::{MoodEntry, MoodScore};
use amhp_core::settings::{Settings, Theme};
use amhp_core::store::{KeyValueStore, StoreKey, load_collection, load_record, save_record};
use amhp_infrastructure::FileKeyValueStore;
use chrono::{TimeZone, Utc};
use serde_json::json;
use tempfile::TempDir;

#[tokio::test]
async fn records_survive_reopening_the_store() {
    let temp_dir = TempDir::new().unwrap();
    let at = Utc.with_ymd_and_hms(2024, 3, 10, 9, 30, 0).unwrap();

    {
        let store = FileKeyValueStore::new(temp_dir.path());
        let entries = vec![MoodEntry::new(MoodScore::new(7).unwrap(), "walked", at)];
        save_record(&store, StoreKey::MoodData, &entries).await.unwrap();

        let settings = Settings {
            theme: Theme::Dark,
            ..Settings::default()
        };
        save_record(&store, StoreKey::Settings, &settings).await.unwrap();
    }

    let store = FileKeyValueStore::new(temp_dir.path());
    let entries: Vec<MoodEntry> = load_collection(&store, StoreKey::MoodData).await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].mood.value(), 7);
    assert_eq!(entries[0].note, "walked");

    let settings: Option<Settings> = load_record(&store, StoreKey::Settings).await;
    assert_eq!(settings.map(|s| s.theme), Some(Theme::Dark));
}

#[tokio::test]
async fn corrupt_files_degrade_to_empty() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("chat-history.json"), "not json at all").unwrap();
    let store = FileKeyValueStore::new(temp_dir.path());

    let history: Vec<ChatMessage> = load_collection(&store, StoreKey::ChatHistory).await;
    assert!(history.is_empty());
}

#[tokio::test]
async fn malformed_elements_are_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileKeyValueStore::new(temp_dir.path());
    store
        .set(
            StoreKey::MoodData,
            json!([
                {"date": "2024-03-10", "mood": 4, "note": "", "timestamp": "2024-03-10T08:00:00Z"},
                {"date": "2024-03-10", "mood": 42, "note": "", "timestamp": "2024-03-10T09:00:00Z"},
                "garbage"
            ]),
        )
        .await
        .unwrap();

    let entries: Vec<MoodEntry> = load_collection(&store, StoreKey::MoodData).await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].mood.value(), 4);
}
