//! The single mutable application state.

use amhp_core::catalog::{ResourceTab, random_prompt, random_recommendation};
use amhp_core::chat::{ChatMessage, Conversation};
use amhp_core::event::{StatusKind, StatusMessage};
use amhp_core::journal::Journal;
use amhp_core::mood::MoodLog;
use amhp_core::navigation::Navigator;
use amhp_core::settings::SettingsManager;
use amhp_core::user::UserSession;
use rand::rngs::StdRng;

use crate::scheduler::ScheduledTask;

/// Everything the running app knows. Lives behind one mutex in [`AmhpApp`].
///
/// [`AmhpApp`]: crate::AmhpApp
pub struct AppState {
    pub navigator: Navigator,
    pub settings: SettingsManager,
    pub mood: MoodLog,
    pub conversation: Conversation,
    pub journal: Journal,
    pub user: Option<UserSession>,
    pub status: Option<StatusMessage>,
    pub journal_prompt: &'static str,
    pub recommendation: &'static str,
    pub active_tab: ResourceTab,
    /// Text waiting in the chat input, filled by voice input.
    pub chat_draft: String,
    pub rng: StdRng,
    /// Replies enqueued under an older epoch are dropped by the reply worker.
    pub reply_epoch: u64,
    pub pending_redirect: Option<ScheduledTask>,
    next_status_id: u64,
}

impl AppState {
    pub fn new(
        settings: SettingsManager,
        mood: MoodLog,
        conversation: Conversation,
        journal: Journal,
        user: Option<UserSession>,
        mut rng: StdRng,
    ) -> Self {
        let journal_prompt = random_prompt(&mut rng);
        let recommendation = random_recommendation(&mut rng);
        Self {
            navigator: Navigator::new(),
            settings,
            mood,
            conversation,
            journal,
            user,
            status: None,
            journal_prompt,
            recommendation,
            active_tab: ResourceTab::Cbt,
            chat_draft: String::new(),
            rng,
            reply_epoch: 0,
            pending_redirect: None,
            next_status_id: 0,
        }
    }

    /// Replaces the visible status and returns the new message.
    pub fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) -> StatusMessage {
        self.next_status_id += 1;
        let message = StatusMessage {
            id: self.next_status_id,
            text: text.into(),
            kind,
        };
        self.status = Some(message.clone());
        message
    }

    /// Clears the status only if it is still the one with `id`.
    pub fn clear_status(&mut self, id: u64) -> bool {
        match &self.status {
            Some(current) if current.id == id => {
                self.status = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel_pending_redirect(&mut self) -> bool {
        match self.pending_redirect.take() {
            Some(task) if task.is_pending() => {
                task.cancel();
                true
            }
            _ => false,
        }
    }

    pub fn redirect_pending(&self) -> bool {
        self.pending_redirect
            .as_ref()
            .is_some_and(ScheduledTask::is_pending)
    }

    pub fn has_user_data(&self) -> bool {
        !self.conversation.is_empty() || !self.mood.is_empty()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        self.conversation.messages()
    }
}
