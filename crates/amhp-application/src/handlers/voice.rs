use amhp_core::error::{AmhpError, Capability, Result};
use amhp_core::event::{AppEvent, StatusKind};

use crate::app::AmhpApp;

impl AmhpApp {
    /// Starts listening for one utterance; the transcript fills the chat draft.
    ///
    /// Returns [`AmhpError::CapabilityUnavailable`] when the platform has no
    /// recognizer.
    pub async fn voice_input(&self) -> Result<()> {
        let Some(recognizer) = self.shared().speech.recognizer.clone() else {
            return Err(AmhpError::CapabilityUnavailable(Capability::VoiceInput));
        };
        let locale = self.lock().await.settings.current().speech_locale();

        self.emit(AppEvent::VoiceListening(true));
        self.announce("Listening...");

        let app = self.clone();
        let token = self.shared().scheduler.child_token();
        tokio::spawn(async move {
            let result = tokio::select! {
                _ = token.cancelled() => return,
                result = recognizer.listen(&locale) => result,
            };

            match result {
                Ok(transcript) => {
                    app.lock().await.chat_draft = transcript.clone();
                    app.announce(format!("Voice input received: {}", transcript));
                    app.emit(AppEvent::VoiceTranscript(transcript));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Voice input failed");
                    let mut state = app.lock().await;
                    app.show_status(&mut state, "Voice input error. Please try again.", StatusKind::Error);
                }
            }
            app.emit(AppEvent::VoiceListening(false));
        });
        Ok(())
    }
}
