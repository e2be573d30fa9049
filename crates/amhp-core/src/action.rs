//! User actions accepted by the application.
//!
//! Every UI trigger maps to exactly one [`Action`] variant; the application
//! layer dispatches on the variant.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::navigation::KeyInput;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Go to a screen by id. Unknown ids are ignored.
    Navigate { screen: String },
    /// Global keyboard shortcut.
    Key { key: KeyInput },
    StartAnonymous,
    ContinueAsGuest,
    ShowCrisis,
    /// One-tap mood from the dashboard.
    QuickMood { mood: i64 },
    /// Mood form submission.
    SubmitMood { mood: i64, note: String },
    SendMessage { text: String },
    VoiceInput,
    ShowTab { tab: String },
    StartResource { title: String },
    NewPrompt,
    SaveJournal { text: String },
    UpdateSetting { key: String, value: Value },
}

impl Action {
    /// Identifier used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Navigate { .. } => "navigate",
            Action::Key { .. } => "key",
            Action::StartAnonymous => "start_anonymous",
            Action::ContinueAsGuest => "continue_as_guest",
            Action::ShowCrisis => "show_crisis",
            Action::QuickMood { .. } => "quick_mood",
            Action::SubmitMood { .. } => "submit_mood",
            Action::SendMessage { .. } => "send_message",
            Action::VoiceInput => "voice_input",
            Action::ShowTab { .. } => "show_tab",
            Action::StartResource { .. } => "start_resource",
            Action::NewPrompt => "new_prompt",
            Action::SaveJournal { .. } => "save_journal",
            Action::UpdateSetting { .. } => "update_setting",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_json_shape() {
        let action: Action =
            serde_json::from_str(r#"{"action":"navigate","screen":"mood"}"#).unwrap();
        assert_eq!(
            action,
            Action::Navigate {
                screen: "mood".to_string()
            }
        );
        assert_eq!(action.name(), "navigate");
    }

    #[test]
    fn test_unit_variant_json() {
        let action: Action = serde_json::from_str(r#"{"action":"new_prompt"}"#).unwrap();
        assert_eq!(action, Action::NewPrompt);
    }
}
