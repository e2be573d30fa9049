use amhp_core::chat::ChatMessage;
use amhp_core::error::{Result, ValidationError};
use amhp_core::event::AppEvent;
use amhp_core::store::StoreKey;
use tokio::time::Instant;

use crate::app::AmhpApp;
use crate::reply_queue::PendingReply;
use crate::state::AppState;

impl AmhpApp {
    /// Appends the trimmed user message and queues the assistant reply.
    ///
    /// The reply arrives after the configured latency. Blank input is rejected
    /// and nothing is stored.
    pub async fn send_message(&self, text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyMessage.into());
        }

        let mut state = self.lock().await;
        state.chat_draft.clear();
        let message = state.conversation.push(ChatMessage::user(text)).clone();
        self.persist(StoreKey::ChatHistory, &state.conversation).await;
        self.emit(AppEvent::MessageAppended(message));

        self.shared().replies.enqueue(PendingReply {
            text: text.to_string(),
            due: Instant::now() + self.config().timing.reply_delay(),
            epoch: state.reply_epoch,
        });
        Ok(())
    }

    /// Produces and appends the reply for one queued message.
    pub(crate) async fn deliver_reply(&self, pending: PendingReply) {
        let mut state = self.lock().await;
        if pending.epoch != state.reply_epoch {
            tracing::debug!("Dropping reply for a conversation the user left");
            return;
        }

        let reply = self.shared().responder.respond(&pending.text, &mut state.rng);
        tracing::debug!(category = ?reply.category, "Reply selected");
        self.append_assistant(&mut state, reply.text).await;

        if reply.requires_crisis_redirect() {
            self.schedule_crisis_redirect(&mut state);
        }
    }

    /// Forces the crisis screen after a short pause. A redirect that is
    /// already pending is kept as is.
    fn schedule_crisis_redirect(&self, state: &mut AppState) {
        if state.redirect_pending() {
            return;
        }
        tracing::info!("Crisis language detected, scheduling crisis screen");

        let app = self.clone();
        let task = self.schedule(self.config().timing.crisis_redirect(), async move {
            let mut state = app.lock().await;
            match state.pending_redirect.take() {
                Some(task) if !task.is_cancelled() => app.enter_crisis(&mut state),
                _ => {}
            }
        });
        state.pending_redirect = Some(task);
    }
}
