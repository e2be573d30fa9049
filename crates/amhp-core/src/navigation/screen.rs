//! Screen identifiers and their entry effects.

use serde::{Deserialize, Serialize};

/// One mutually exclusive visible UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Welcome,
    Dashboard,
    Mood,
    Chat,
    Resources,
    Journal,
    Crisis,
    Settings,
}

/// Deferred side effect fired after a screen becomes active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenEffect {
    /// Rebuild the mood chart from the current mood series.
    RefreshMoodChart,
    /// Move keyboard focus to the chat input.
    FocusChatInput,
}

impl Screen {
    pub const fn id(&self) -> &'static str {
        match self {
            Screen::Welcome => "welcome",
            Screen::Dashboard => "dashboard",
            Screen::Mood => "mood",
            Screen::Chat => "chat",
            Screen::Resources => "resources",
            Screen::Journal => "journal",
            Screen::Crisis => "crisis",
            Screen::Settings => "settings",
        }
    }

    pub const fn title(&self) -> &'static str {
        match self {
            Screen::Welcome => "Welcome",
            Screen::Dashboard => "Dashboard",
            Screen::Mood => "Mood Tracker",
            Screen::Chat => "Support Chat",
            Screen::Resources => "Resources",
            Screen::Journal => "Journal",
            Screen::Crisis => "Crisis Support",
            Screen::Settings => "Settings",
        }
    }

    /// Resolves a screen id. Accepts both `mood` and `mood-screen` forms,
    /// case-insensitively. Returns `None` for anything else.
    pub fn parse(id: &str) -> Option<Self> {
        let id = id.trim().to_ascii_lowercase();
        let id = id.strip_suffix("-screen").unwrap_or(&id);
        let screen = match id {
            "welcome" => Screen::Welcome,
            "dashboard" => Screen::Dashboard,
            "mood" => Screen::Mood,
            "chat" => Screen::Chat,
            "resources" => Screen::Resources,
            "journal" => Screen::Journal,
            "crisis" => Screen::Crisis,
            "settings" => Screen::Settings,
            _ => return None,
        };
        Some(screen)
    }

    pub const fn entry_effect(&self) -> Option<ScreenEffect> {
        match self {
            Screen::Mood => Some(ScreenEffect::RefreshMoodChart),
            Screen::Chat => Some(ScreenEffect::FocusChatInput),
            _ => None,
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_round_trips_every_id() {
        for screen in Screen::iter() {
            assert_eq!(Screen::parse(screen.id()), Some(screen));
        }
    }

    #[test]
    fn test_parse_accepts_screen_suffix() {
        assert_eq!(Screen::parse("mood-screen"), Some(Screen::Mood));
        assert_eq!(Screen::parse(" Chat "), Some(Screen::Chat));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(Screen::parse("nonexistent-screen"), None);
        assert_eq!(Screen::parse(""), None);
    }

    #[test]
    fn test_entry_effects() {
        assert_eq!(Screen::Mood.entry_effect(), Some(ScreenEffect::RefreshMoodChart));
        assert_eq!(Screen::Chat.entry_effect(), Some(ScreenEffect::FocusChatInput));
        assert_eq!(Screen::Journal.entry_effect(), None);
    }
}
