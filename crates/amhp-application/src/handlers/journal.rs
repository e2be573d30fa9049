use amhp_core::error::Result;
use amhp_core::event::{AppEvent, StatusKind};
use amhp_core::journal::JournalEntry;
use amhp_core::catalog::random_prompt;
use amhp_core::store::StoreKey;
use chrono::{DateTime, Utc};

use crate::app::AmhpApp;

impl AmhpApp {
    pub async fn save_journal_entry(&self, text: &str) -> Result<JournalEntry> {
        self.save_journal_entry_at(text, Utc::now()).await
    }

    /// Appends a journal entry dated from `at`. Blank text is rejected and
    /// the journal is left unchanged.
    pub async fn save_journal_entry_at(&self, text: &str, at: DateTime<Utc>) -> Result<JournalEntry> {
        let mut state = self.lock().await;
        let entry = state.journal.save(text, at)?.clone();
        self.persist(StoreKey::JournalEntries, &state.journal).await;

        tracing::info!(date = %entry.date, "Journal entry saved");
        self.show_status(&mut state, "Journal entry saved successfully!", StatusKind::Success);
        self.announce("Journal entry saved");
        Ok(entry)
    }

    /// Picks a new journal prompt uniformly at random.
    pub async fn new_prompt(&self) -> &'static str {
        let mut state = self.lock().await;
        let prompt = random_prompt(&mut state.rng);
        state.journal_prompt = prompt;
        self.emit(AppEvent::JournalPromptChanged(prompt.to_string()));
        prompt
    }
}
