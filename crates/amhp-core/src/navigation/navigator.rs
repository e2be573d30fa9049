//! Navigation state machine.

use serde::{Deserialize, Serialize};

use super::screen::{Screen, ScreenEffect};

/// Global keyboard shortcuts understood by the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyInput {
    /// Escape: back to the dashboard.
    Escape,
    /// Alt+C: jump to crisis support.
    CrisisShortcut,
}

impl KeyInput {
    pub fn parse(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "esc" | "escape" => Some(KeyInput::Escape),
            "alt+c" | "alt-c" => Some(KeyInput::CrisisShortcut),
            _ => None,
        }
    }
}

/// A completed screen change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Screen,
    pub to: Screen,
    /// Effect to run once the new screen is shown.
    pub effect: Option<ScreenEffect>,
}

/// Tracks the active screen.
///
/// Starts on [`Screen::Welcome`]; there is no terminal state and every screen
/// can be re-entered.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Screen,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            current: Screen::Welcome,
        }
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn is_on(&self, screen: Screen) -> bool {
        self.current == screen
    }

    /// Navigates to the screen named by `screen_id`.
    ///
    /// Unknown ids leave the state untouched and return `None`.
    pub fn go_to(&mut self, screen_id: &str) -> Option<Transition> {
        match Screen::parse(screen_id) {
            Some(screen) => Some(self.enter(screen)),
            None => {
                tracing::debug!(screen_id, "Ignoring navigation to unknown screen");
                None
            }
        }
    }

    /// Makes `screen` active. Re-entering the current screen re-fires its effect.
    pub fn enter(&mut self, screen: Screen) -> Transition {
        let from = self.current;
        self.current = screen;
        tracing::debug!(from = %from, to = %screen, "Screen changed");
        Transition {
            from,
            to: screen,
            effect: screen.entry_effect(),
        }
    }

    /// Applies a keyboard shortcut.
    ///
    /// Escape on the dashboard is a no-op; the crisis shortcut always transitions.
    pub fn handle_key(&mut self, key: KeyInput) -> Option<Transition> {
        match key {
            KeyInput::Escape if self.current == Screen::Dashboard => None,
            KeyInput::Escape => Some(self.enter(Screen::Dashboard)),
            KeyInput::CrisisShortcut => Some(self.enter(Screen::Crisis)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_screen_is_welcome() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), Screen::Welcome);
    }

    #[test]
    fn test_unknown_target_is_noop() {
        let mut nav = Navigator::new();
        nav.enter(Screen::Journal);
        assert!(nav.go_to("nonexistent-screen").is_none());
        assert_eq!(nav.current(), Screen::Journal);
    }

    #[test]
    fn test_go_to_reports_transition_and_effect() {
        let mut nav = Navigator::new();
        let transition = nav.go_to("mood-screen").unwrap();
        assert_eq!(transition.from, Screen::Welcome);
        assert_eq!(transition.to, Screen::Mood);
        assert_eq!(transition.effect, Some(ScreenEffect::RefreshMoodChart));
    }

    #[test]
    fn test_reentering_fires_effect_again() {
        let mut nav = Navigator::new();
        nav.enter(Screen::Chat);
        let again = nav.go_to("chat").unwrap();
        assert_eq!(again.from, Screen::Chat);
        assert_eq!(again.effect, Some(ScreenEffect::FocusChatInput));
    }

    #[test]
    fn test_escape_routes_to_dashboard() {
        let mut nav = Navigator::new();
        nav.enter(Screen::Settings);
        let t = nav.handle_key(KeyInput::Escape).unwrap();
        assert_eq!(t.to, Screen::Dashboard);
        assert!(nav.handle_key(KeyInput::Escape).is_none());
        assert_eq!(nav.current(), Screen::Dashboard);
    }

    #[test]
    fn test_crisis_shortcut_from_anywhere() {
        let mut nav = Navigator::new();
        for screen in [Screen::Welcome, Screen::Crisis, Screen::Chat] {
            nav.enter(screen);
            let t = nav.handle_key(KeyInput::CrisisShortcut).unwrap();
            assert_eq!(t.to, Screen::Crisis);
        }
    }

    #[test]
    fn test_key_parse() {
        assert_eq!(KeyInput::parse("Esc"), Some(KeyInput::Escape));
        assert_eq!(KeyInput::parse("alt+c"), Some(KeyInput::CrisisShortcut));
        assert_eq!(KeyInput::parse("ctrl+z"), None);
    }
}
