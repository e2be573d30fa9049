use amhp_core::error::Result;
use amhp_core::event::{AppEvent, StatusKind};
use amhp_core::mood::{MoodEntry, MoodScore, last_seven_days};
use amhp_core::store::StoreKey;
use chrono::Utc;

use crate::app::AmhpApp;

const QUICK_ENTRY_NOTE: &str = "Quick entry from dashboard";
const SAVED_STATUS: &str = "Mood entry saved successfully!";

impl AmhpApp {
    /// Records a mood from the mood form and refreshes the chart.
    pub async fn record_mood(&self, mood: i64, note: &str) -> Result<MoodEntry> {
        let score = MoodScore::new(mood)?;
        let entry = self.append_mood(MoodEntry::new(score, note, Utc::now())).await;

        let mut state = self.lock().await;
        self.announce(format!("Mood entry saved: {}", score.label()));
        self.show_status(&mut state, SAVED_STATUS, StatusKind::Success);
        let series = last_seven_days(state.mood.entries(), Utc::now().date_naive());
        self.emit(AppEvent::MoodChartRefreshed { series });
        Ok(entry)
    }

    /// One-tap mood from the dashboard.
    pub async fn quick_mood(&self, mood: i64) -> Result<MoodEntry> {
        let score = MoodScore::new(mood)?;
        let entry = self
            .append_mood(MoodEntry::new(score, QUICK_ENTRY_NOTE, Utc::now()))
            .await;

        let mut state = self.lock().await;
        self.announce(format!("Mood recorded as {}", score.label()));
        self.show_status(&mut state, SAVED_STATUS, StatusKind::Success);
        Ok(entry)
    }

    async fn append_mood(&self, entry: MoodEntry) -> MoodEntry {
        let mut state = self.lock().await;
        let entry = state.mood.record(entry).clone();
        self.persist(StoreKey::MoodData, &state.mood).await;
        tracing::info!(mood = entry.mood.value(), date = %entry.date, "Mood recorded");
        entry
    }
}
