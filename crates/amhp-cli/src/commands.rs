//! Slash commands understood by the REPL.
//!
//! Each command maps onto one [`Action`]; plain text is a chat message.

use amhp_core::action::Action;
use amhp_core::navigation::KeyInput;
use serde_json::Value;

/// A slash command shown in help and offered for completion.
#[derive(Debug, Clone, Copy)]
pub struct SlashCommand {
    /// Command name (without the leading /)
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

impl SlashCommand {
    const fn new(name: &'static str, usage: &'static str, description: &'static str) -> Self {
        Self {
            name,
            usage,
            description,
        }
    }
}

pub const COMMANDS: &[SlashCommand] = &[
    SlashCommand::new("help", "/help", "Show available commands"),
    SlashCommand::new("go", "/go <screen>", "Open a screen (dashboard, mood, chat, resources, journal, crisis, settings)"),
    SlashCommand::new("start", "/start", "Start an anonymous session"),
    SlashCommand::new("guest", "/guest", "Continue as guest"),
    SlashCommand::new("crisis", "/crisis", "Show crisis support resources now"),
    SlashCommand::new("key", "/key <esc|alt+c>", "Press a keyboard shortcut"),
    SlashCommand::new("mood", "/mood <1-10> [note]", "Save a mood entry"),
    SlashCommand::new("quick", "/quick <1-10>", "Record a quick mood from the dashboard"),
    SlashCommand::new("voice", "/voice", "Dictate a chat message"),
    SlashCommand::new("send", "/send", "Send the dictated chat message"),
    SlashCommand::new("tab", "/tab <cbt|meditation>", "Switch the resources tab"),
    SlashCommand::new("exercise", "/exercise <title>", "Start an exercise or meditation"),
    SlashCommand::new("prompt", "/prompt", "Show a new journal prompt"),
    SlashCommand::new("journal", "/journal <text>", "Save a journal entry"),
    SlashCommand::new("set", "/set <key> <value>", "Change a setting (theme, textSize, language, voiceEnabled)"),
    SlashCommand::new("show", "/show", "Redraw the current screen"),
    SlashCommand::new("quit", "/quit", "Exit"),
];

/// What one line of input asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Action(Action),
    /// Plain text for the chat.
    Chat(String),
    SendDraft,
    Help,
    Show,
    Quit,
}

/// Parses one line. Errors carry the text to show the user.
pub fn parse_input(line: &str) -> Result<Input, String> {
    let line = line.trim();
    if matches!(line, "quit" | "exit") {
        return Ok(Input::Quit);
    }
    let Some(command) = line.strip_prefix('/') else {
        return Ok(Input::Chat(line.to_string()));
    };

    let (name, rest) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (command, ""),
    };

    let input = match name {
        "help" => Input::Help,
        "show" => Input::Show,
        "quit" | "exit" => Input::Quit,
        "send" => Input::SendDraft,
        "go" => Input::Action(Action::Navigate {
            screen: required(rest, "go")?.to_string(),
        }),
        "start" => Input::Action(Action::StartAnonymous),
        "guest" => Input::Action(Action::ContinueAsGuest),
        "crisis" => Input::Action(Action::ShowCrisis),
        "key" => {
            let key = KeyInput::parse(required(rest, "key")?)
                .ok_or_else(|| format!("Unknown key '{}'. Usage: {}", rest, usage("key")))?;
            Input::Action(Action::Key { key })
        }
        "mood" => {
            let rest = required(rest, "mood")?;
            let (score, note) = match rest.split_once(char::is_whitespace) {
                Some((score, note)) => (score, note.trim()),
                None => (rest, ""),
            };
            Input::Action(Action::SubmitMood {
                mood: parse_score(score, "mood")?,
                note: note.to_string(),
            })
        }
        "quick" => Input::Action(Action::QuickMood {
            mood: parse_score(required(rest, "quick")?, "quick")?,
        }),
        "voice" => Input::Action(Action::VoiceInput),
        "tab" => Input::Action(Action::ShowTab {
            tab: required(rest, "tab")?.to_string(),
        }),
        "exercise" => Input::Action(Action::StartResource {
            title: required(rest, "exercise")?.to_string(),
        }),
        "prompt" => Input::Action(Action::NewPrompt),
        "journal" => Input::Action(Action::SaveJournal {
            text: rest.to_string(),
        }),
        "set" => {
            let (key, value) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| format!("Usage: {}", usage("set")))?;
            Input::Action(Action::UpdateSetting {
                key: key.to_string(),
                value: setting_value(value.trim()),
            })
        }
        other => return Err(format!("Unknown command '/{}'. Type /help for a list.", other)),
    };
    Ok(input)
}

fn usage(name: &str) -> &'static str {
    COMMANDS
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.usage)
        .unwrap_or("/help")
}

fn required<'a>(rest: &'a str, name: &str) -> Result<&'a str, String> {
    if rest.is_empty() {
        Err(format!("Usage: {}", usage(name)))
    } else {
        Ok(rest)
    }
}

fn parse_score(raw: &str, name: &str) -> Result<i64, String> {
    raw.trim()
        .parse()
        .map_err(|_| format!("Mood must be a number. Usage: {}", usage(name)))
}

/// Booleans become JSON booleans; everything else stays a string.
fn setting_value(raw: &str) -> Value {
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        other => Value::String(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_chat() {
        assert_eq!(
            parse_input("  I had a rough day "),
            Ok(Input::Chat("I had a rough day".to_string()))
        );
    }

    #[test]
    fn test_mood_with_note() {
        assert_eq!(
            parse_input("/mood 7 slept well"),
            Ok(Input::Action(Action::SubmitMood {
                mood: 7,
                note: "slept well".to_string()
            }))
        );
        assert!(parse_input("/mood great").is_err());
    }

    #[test]
    fn test_out_of_range_mood_is_left_to_validation() {
        assert_eq!(
            parse_input("/quick 12"),
            Ok(Input::Action(Action::QuickMood { mood: 12 }))
        );
    }

    #[test]
    fn test_set_parses_booleans() {
        assert_eq!(
            parse_input("/set voiceEnabled true"),
            Ok(Input::Action(Action::UpdateSetting {
                key: "voiceEnabled".to_string(),
                value: Value::Bool(true)
            }))
        );
        assert!(parse_input("/set theme").is_err());
    }

    #[test]
    fn test_key_shortcuts() {
        assert_eq!(
            parse_input("/key alt+c"),
            Ok(Input::Action(Action::Key {
                key: KeyInput::CrisisShortcut
            }))
        );
        assert!(parse_input("/key f1").is_err());
    }

    #[test]
    fn test_unknown_command() {
        assert!(parse_input("/dance").is_err());
        assert_eq!(parse_input("quit"), Ok(Input::Quit));
    }

    #[test]
    fn test_every_command_parses_its_name() {
        for command in COMMANDS {
            let result = parse_input(&format!("/{}", command.name));
            if let Err(message) = result {
                assert!(message.starts_with("Usage:"), "{}: {}", command.name, message);
            }
        }
    }
}
