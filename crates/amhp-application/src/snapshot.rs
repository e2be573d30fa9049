//! Read-only view of the application state for rendering.

use amhp_core::catalog::{CRISIS_HOTLINES, Hotline, Resource, ResourceTab};
use amhp_core::chat::ChatMessage;
use amhp_core::event::StatusMessage;
use amhp_core::journal::JournalEntry;
use amhp_core::mood::{DailyMood, last_seven_days};
use amhp_core::navigation::Screen;
use amhp_core::settings::Settings;
use amhp_core::user::UserSession;
use chrono::NaiveDate;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct AppSnapshot {
    pub screen: Screen,
    pub messages: Vec<ChatMessage>,
    pub mood_series: Vec<DailyMood>,
    pub mood_entry_count: usize,
    pub journal_entries: Vec<JournalEntry>,
    pub settings: Settings,
    pub status: Option<StatusMessage>,
    pub journal_prompt: &'static str,
    pub recommendation: &'static str,
    pub session: Option<UserSession>,
    pub active_tab: ResourceTab,
    pub tab_resources: &'static [Resource],
    pub hotlines: &'static [Hotline],
    pub chat_draft: String,
    pub redirect_pending: bool,
}

impl AppSnapshot {
    pub(crate) fn capture(state: &AppState, today: NaiveDate) -> Self {
        Self {
            screen: state.navigator.current(),
            messages: state.messages().to_vec(),
            mood_series: last_seven_days(state.mood.entries(), today),
            mood_entry_count: state.mood.len(),
            journal_entries: state.journal.entries().to_vec(),
            settings: state.settings.current().clone(),
            status: state.status.clone(),
            journal_prompt: state.journal_prompt,
            recommendation: state.recommendation,
            session: state.user.clone(),
            active_tab: state.active_tab,
            tab_resources: state.active_tab.resources(),
            hotlines: CRISIS_HOTLINES,
            chat_draft: state.chat_draft.clone(),
            redirect_pending: state.redirect_pending(),
        }
    }
}
