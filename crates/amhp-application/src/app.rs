//! The application handle.
//!
//! [`AmhpApp`] is a cheap-clone handle over shared state. All user input
//! arrives as an [`Action`] through [`AmhpApp::dispatch`]; all output leaves
//! as [`AppEvent`]s on the channel returned by [`AmhpApp::start`].

use std::sync::Arc;
use std::time::Duration;

use amhp_core::action::Action;
use amhp_core::chat::{ChatMessage, Conversation, Responder, ResponseCategory};
use amhp_core::config::AppConfig;
use amhp_core::error::{AmhpError, Result};
use amhp_core::event::{AppEvent, StatusKind};
use amhp_core::journal::Journal;
use amhp_core::mood::MoodLog;
use amhp_core::settings::SettingsManager;
use amhp_core::speech::{SpeechCapabilities, Utterance};
use amhp_core::store::{KeyValueStore, StoreKey, load_collection, load_record, save_record};
use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::{Mutex, MutexGuard, mpsc};

use crate::reply_queue::{self, ReplyQueue};
use crate::scheduler::{ScheduledTask, Scheduler};
use crate::snapshot::AppSnapshot;
use crate::state::AppState;

pub(crate) struct Shared {
    pub(crate) state: Mutex<AppState>,
    pub(crate) store: Arc<dyn KeyValueStore>,
    pub(crate) config: AppConfig,
    pub(crate) speech: SpeechCapabilities,
    pub(crate) responder: Responder,
    pub(crate) scheduler: Scheduler,
    pub(crate) replies: ReplyQueue,
    events: mpsc::UnboundedSender<AppEvent>,
}

#[derive(Clone)]
pub struct AmhpApp {
    shared: Arc<Shared>,
}

impl AmhpApp {
    /// Loads persisted state and starts the background reply worker.
    ///
    /// Unreadable records fall back to empty defaults. An empty conversation
    /// is opened with a greeting.
    pub async fn start(
        store: Arc<dyn KeyValueStore>,
        config: AppConfig,
        speech: SpeechCapabilities,
    ) -> (Self, mpsc::UnboundedReceiver<AppEvent>) {
        let settings = SettingsManager::load(store.clone()).await;
        let mood = MoodLog::from_entries(load_collection(store.as_ref(), StoreKey::MoodData).await);
        let conversation =
            Conversation::from_messages(load_collection(store.as_ref(), StoreKey::ChatHistory).await);
        let journal =
            Journal::from_entries(load_collection(store.as_ref(), StoreKey::JournalEntries).await);
        let user = load_record(store.as_ref(), StoreKey::CurrentUser).await;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        tracing::info!(
            mood_entries = mood.len(),
            messages = conversation.len(),
            journal_entries = journal.len(),
            has_session = user.is_some(),
            "Loaded persisted state"
        );

        let state = AppState::new(settings, mood, conversation, journal, user, rng);
        let (events, event_rx) = mpsc::unbounded_channel();
        let (replies, reply_rx) = ReplyQueue::channel();
        let scheduler = Scheduler::new();
        let worker_token = scheduler.child_token();

        let shared = Arc::new(Shared {
            state: Mutex::new(state),
            store,
            config,
            speech,
            responder: Responder::new(),
            scheduler,
            replies,
            events,
        });
        reply_queue::spawn_worker(Arc::downgrade(&shared), reply_rx, worker_token);

        let app = Self { shared };
        app.open_conversation().await;
        (app, event_rx)
    }

    pub(crate) fn from_shared(shared: Arc<Shared>) -> Self {
        Self { shared }
    }

    pub fn config(&self) -> &AppConfig {
        &self.shared.config
    }

    pub(crate) fn shared(&self) -> &Shared {
        &self.shared
    }

    /// Routes an action to its handler.
    ///
    /// Validation and capability failures become an error status message;
    /// anything else is logged.
    pub async fn dispatch(&self, action: Action) {
        let name = action.name();
        tracing::debug!(action = name, "Dispatching action");

        let result = match action {
            Action::Navigate { screen } => {
                self.go_to(&screen).await;
                Ok(())
            }
            Action::Key { key } => {
                self.handle_key(key).await;
                Ok(())
            }
            Action::StartAnonymous => {
                self.start_anonymous().await;
                Ok(())
            }
            Action::ContinueAsGuest => {
                self.continue_as_guest().await;
                Ok(())
            }
            Action::ShowCrisis => {
                self.show_crisis().await;
                Ok(())
            }
            Action::QuickMood { mood } => self.quick_mood(mood).await.map(|_| ()),
            Action::SubmitMood { mood, note } => self.record_mood(mood, &note).await.map(|_| ()),
            Action::SendMessage { text } => self.send_message(&text).await,
            Action::VoiceInput => self.voice_input().await,
            Action::ShowTab { tab } => {
                self.show_tab(&tab).await;
                Ok(())
            }
            Action::StartResource { title } => self.start_resource(&title).await,
            Action::NewPrompt => {
                self.new_prompt().await;
                Ok(())
            }
            Action::SaveJournal { text } => self.save_journal_entry(&text).await.map(|_| ()),
            Action::UpdateSetting { key, value } => {
                self.update_setting(&key, value).await.map(|_| ())
            }
        };

        if let Err(e) = result {
            self.report_error(name, e).await;
        }
    }

    /// Current state as seen by the presentation layer.
    pub async fn snapshot(&self) -> AppSnapshot {
        let state = self.lock().await;
        AppSnapshot::capture(&state, Utc::now().date_naive())
    }

    /// Whether there is chat or mood data the user might lose track of.
    pub async fn has_user_data(&self) -> bool {
        self.lock().await.has_user_data()
    }

    /// Cancels every pending delayed task and stops the reply worker.
    pub fn shutdown(&self) {
        tracing::info!("Shutting down");
        self.shared.scheduler.shutdown();
    }

    pub(crate) async fn lock(&self) -> MutexGuard<'_, AppState> {
        self.shared.state.lock().await
    }

    pub(crate) fn emit(&self, event: AppEvent) {
        if self.shared.events.send(event).is_err() {
            tracing::trace!("Event receiver dropped");
        }
    }

    pub(crate) fn announce(&self, text: impl Into<String>) {
        self.emit(AppEvent::Announcement(text.into()));
    }

    /// Shows a transient status message and schedules its expiry.
    pub(crate) fn show_status(&self, state: &mut AppState, text: impl Into<String>, kind: StatusKind) {
        let message = state.set_status(text, kind);
        let id = message.id;
        self.emit(AppEvent::Status(message));

        let app = self.clone();
        self.schedule(self.shared.config.timing.status(), async move {
            let cleared = app.lock().await.clear_status(id);
            if cleared {
                app.emit(AppEvent::StatusCleared { id });
            }
        });
    }

    pub(crate) fn schedule<F>(&self, delay: Duration, task: F) -> ScheduledTask
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        self.shared.scheduler.schedule(delay, task)
    }

    /// Writes `record` under `key`. Failures are logged and otherwise ignored.
    pub(crate) async fn persist<T: serde::Serialize + ?Sized>(&self, key: StoreKey, record: &T) {
        if let Err(e) = save_record(self.shared.store.as_ref(), key, record).await {
            tracing::warn!(%key, error = %e, "Failed to persist record");
        }
    }

    /// Appends an assistant message, persists the history and speaks it.
    pub(crate) async fn append_assistant(&self, state: &mut AppState, text: &str) {
        let message = state.conversation.push(ChatMessage::assistant(text)).clone();
        self.persist(StoreKey::ChatHistory, &state.conversation).await;
        self.emit(AppEvent::MessageAppended(message));
        self.speak(state, text);
    }

    fn speak(&self, state: &AppState, text: &str) {
        let settings = state.settings.current();
        if !settings.voice_enabled {
            return;
        }
        let Some(synthesizer) = &self.shared.speech.synthesizer else {
            tracing::debug!("Voice output enabled but no synthesizer available");
            return;
        };
        let utterance = Utterance::assistant(text, settings.speech_locale());
        if let Err(e) = synthesizer.speak(&utterance) {
            tracing::warn!(error = %e, "Speech synthesis failed");
        }
    }

    async fn open_conversation(&self) {
        let mut state = self.lock().await;
        if !state.conversation.is_empty() {
            return;
        }
        let greeting = Responder::pick(ResponseCategory::Greeting, &mut state.rng);
        self.append_assistant(&mut state, greeting).await;
    }

    async fn report_error(&self, action: &str, error: AmhpError) {
        if error.is_user_facing() {
            tracing::debug!(action, error = %error, "Action rejected");
            let mut state = self.lock().await;
            self.show_status(&mut state, error.to_string(), StatusKind::Error);
        } else {
            tracing::error!(action, error = %error, "Action failed");
        }
    }
}
