use amhp_core::navigation::Screen;
use amhp_core::store::StoreKey;
use amhp_core::user::UserSession;
use chrono::Utc;

use crate::app::AmhpApp;

impl AmhpApp {
    /// Creates the anonymous session (once) and opens the dashboard.
    pub async fn start_anonymous(&self) -> UserSession {
        let mut state = self.lock().await;
        let session = match &state.user {
            Some(existing) => existing.clone(),
            None => {
                let session = UserSession::anonymous(Utc::now());
                self.persist(StoreKey::CurrentUser, &session).await;
                tracing::info!(user_id = %session.id, "Anonymous session started");
                state.user = Some(session.clone());
                session
            }
        };

        let transition = state.navigator.enter(Screen::Dashboard);
        self.apply_transition(&mut state, transition);
        self.announce("Anonymous session started. Welcome to your mental health dashboard.");
        session
    }

    /// Opens the dashboard without creating a session.
    pub async fn continue_as_guest(&self) {
        let mut state = self.lock().await;
        let transition = state.navigator.enter(Screen::Dashboard);
        self.apply_transition(&mut state, transition);
        self.announce("Continuing as guest. Welcome to your mental health dashboard.");
    }
}
