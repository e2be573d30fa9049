use amhp_core::error::{AmhpError, Capability, Result};
use amhp_core::event::{AppEvent, StatusKind};
use amhp_core::settings::{SettingKey, Settings};
use serde_json::Value;

use crate::app::AmhpApp;

impl AmhpApp {
    /// Validates, stores and applies one setting.
    ///
    /// Turning voice output on without a synthesizer keeps the setting but
    /// shows an unsupported notice.
    pub async fn update_setting(&self, key: &str, value: Value) -> Result<Settings> {
        let mut state = self.lock().await;
        let settings = state.settings.update(key, value).await?.clone();
        self.emit(AppEvent::SettingsApplied(settings.clone()));

        let voice_key = matches!(SettingKey::parse(key), Ok(SettingKey::VoiceEnabled));
        if voice_key && settings.voice_enabled && self.shared().speech.synthesizer.is_none() {
            let error = AmhpError::CapabilityUnavailable(Capability::VoiceOutput);
            tracing::debug!(error = %error, "Voice output enabled without a synthesizer");
            self.show_status(&mut state, error.to_string(), StatusKind::Error);
        }
        Ok(settings)
    }
}
