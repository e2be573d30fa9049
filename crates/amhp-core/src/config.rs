use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Overrides the platform data directory for persisted records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Fixed RNG seed. Unset means entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            seed: None,
            log_level: default_log_level(),
            timing: TimingConfig::default(),
            chat: ChatConfig::default(),
        }
    }
}

/// Delays, all in milliseconds.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct TimingConfig {
    pub reply_delay_ms: u64,
    pub crisis_redirect_ms: u64,
    pub screen_effect_ms: u64,
    pub status_ms: u64,
    pub exercise_notice_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1000,
            crisis_redirect_ms: 2000,
            screen_effect_ms: 100,
            status_ms: 4000,
            exercise_notice_ms: 2000,
        }
    }
}

impl TimingConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn crisis_redirect(&self) -> Duration {
        Duration::from_millis(self.crisis_redirect_ms)
    }

    pub fn screen_effect(&self) -> Duration {
        Duration::from_millis(self.screen_effect_ms)
    }

    pub fn status(&self) -> Duration {
        Duration::from_millis(self.status_ms)
    }

    pub fn exercise_notice(&self) -> Duration {
        Duration::from_millis(self.exercise_notice_ms)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ChatConfig {
    /// Drop replies that are still pending when the user leaves the chat screen.
    pub suppress_replies_off_chat: bool,
}
