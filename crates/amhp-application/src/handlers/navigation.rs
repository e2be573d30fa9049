use amhp_core::event::AppEvent;
use amhp_core::mood::last_seven_days;
use amhp_core::navigation::{KeyInput, Screen, ScreenEffect, Transition};
use chrono::Utc;

use crate::app::AmhpApp;
use crate::state::AppState;

pub const CRISIS_ANNOUNCEMENT: &str =
    "Crisis support resources are now displayed. Emergency help is available.";

impl AmhpApp {
    /// Navigates to the screen with `screen_id` (`"mood"` or `"mood-screen"`).
    ///
    /// Unknown ids are ignored and return `None`.
    pub async fn go_to(&self, screen_id: &str) -> Option<Screen> {
        let mut state = self.lock().await;
        let transition = state.navigator.go_to(screen_id)?;
        self.apply_transition(&mut state, transition);
        Some(transition.to)
    }

    pub async fn handle_key(&self, key: KeyInput) -> Option<Screen> {
        match key {
            KeyInput::CrisisShortcut => {
                self.show_crisis().await;
                Some(Screen::Crisis)
            }
            KeyInput::Escape => {
                let mut state = self.lock().await;
                let transition = state.navigator.handle_key(key)?;
                self.apply_transition(&mut state, transition);
                Some(transition.to)
            }
        }
    }

    /// Shows crisis resources right away, superseding any scheduled redirect.
    pub async fn show_crisis(&self) {
        let mut state = self.lock().await;
        if state.cancel_pending_redirect() {
            tracing::debug!("Cancelled pending crisis redirect");
        }
        self.enter_crisis(&mut state);
    }

    pub(crate) fn enter_crisis(&self, state: &mut AppState) {
        let transition = state.navigator.enter(Screen::Crisis);
        self.apply_transition(state, transition);
        self.announce(CRISIS_ANNOUNCEMENT);
    }

    pub(crate) fn apply_transition(&self, state: &mut AppState, transition: Transition) {
        self.emit(AppEvent::ScreenChanged {
            from: transition.from,
            to: transition.to,
        });

        let leaving_chat = transition.from == Screen::Chat && transition.to != Screen::Chat;
        if leaving_chat && self.config().chat.suppress_replies_off_chat {
            state.reply_epoch += 1;
            tracing::debug!(epoch = state.reply_epoch, "Discarding pending replies");
        }

        let Some(effect) = transition.effect else {
            return;
        };
        let screen = transition.to;
        let app = self.clone();
        self.schedule(self.config().timing.screen_effect(), async move {
            let state = app.lock().await;
            if !state.navigator.is_on(screen) {
                return;
            }
            match effect {
                ScreenEffect::RefreshMoodChart => {
                    let series = last_seven_days(state.mood.entries(), Utc::now().date_naive());
                    app.emit(AppEvent::MoodChartRefreshed { series });
                }
                ScreenEffect::FocusChatInput => app.emit(AppEvent::ChatInputFocused),
            }
        });
    }
}
