//! Events emitted to the presentation layer.

use serde::Serialize;

use crate::catalog::ResourceTab;
use crate::chat::ChatMessage;
use crate::mood::DailyMood;
use crate::navigation::Screen;
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Error,
}

/// A transient notice shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    /// Monotonic id so an expiry only clears the message it was scheduled for.
    pub id: u64,
    pub text: String,
    pub kind: StatusKind,
}

/// Everything the presentation layer needs to react to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum AppEvent {
    ScreenChanged { from: Screen, to: Screen },
    MoodChartRefreshed { series: Vec<DailyMood> },
    ChatInputFocused,
    MessageAppended(ChatMessage),
    Status(StatusMessage),
    StatusCleared { id: u64 },
    /// Text for assistive technology.
    Announcement(String),
    SettingsApplied(Settings),
    JournalPromptChanged(String),
    TabChanged(ResourceTab),
    VoiceListening(bool),
    VoiceTranscript(String),
}
