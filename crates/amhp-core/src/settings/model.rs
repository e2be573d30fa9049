//! Settings domain model.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::EnumString, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::EnumString, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TextSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// The recognized settings fields, named as they are persisted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "camelCase")]
pub enum SettingKey {
    Theme,
    TextSize,
    Language,
    VoiceEnabled,
}

impl SettingKey {
    /// Resolves a key name, rejecting anything unrecognized.
    pub fn parse(key: &str) -> Result<Self, ValidationError> {
        Self::from_str(key.trim()).map_err(|_| ValidationError::UnknownSettingKey(key.to_string()))
    }
}

/// User preferences. Always fully populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub theme: Theme,
    pub text_size: TextSize,
    /// Locale code, e.g. `en`.
    pub language: String,
    pub voice_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            text_size: TextSize::Medium,
            language: "en".to_string(),
            voice_enabled: false,
        }
    }
}

impl Settings {
    /// Builds settings from persisted data by merging recognized keys over the
    /// defaults. Non-object data yields the defaults; unknown keys and invalid
    /// values are skipped.
    pub fn merged_over_defaults(persisted: &Value) -> Self {
        let mut settings = Self::default();

        let Value::Object(fields) = persisted else {
            tracing::warn!("Persisted settings are not an object, using defaults");
            return settings;
        };

        for (name, value) in fields {
            let Ok(key) = SettingKey::from_str(name) else {
                tracing::debug!(key = %name, "Ignoring unknown persisted setting");
                continue;
            };
            if let Err(e) = settings.apply(key, value) {
                tracing::warn!(key = %name, error = %e, "Ignoring invalid persisted setting");
            }
        }

        settings
    }

    /// Sets one field from a JSON value. On error nothing changes.
    pub fn apply(&mut self, key: SettingKey, value: &Value) -> Result<(), ValidationError> {
        let invalid = || ValidationError::InvalidSettingValue {
            key: key.to_string(),
            value: match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            },
        };

        match key {
            SettingKey::Theme => {
                self.theme = value
                    .as_str()
                    .and_then(|s| Theme::from_str(s.trim()).ok())
                    .ok_or_else(invalid)?;
            }
            SettingKey::TextSize => {
                self.text_size = value
                    .as_str()
                    .and_then(|s| TextSize::from_str(s.trim()).ok())
                    .ok_or_else(invalid)?;
            }
            SettingKey::Language => {
                let language = value
                    .as_str()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .ok_or_else(invalid)?;
                self.language = language.to_string();
            }
            SettingKey::VoiceEnabled => {
                self.voice_enabled = match value {
                    Value::Bool(b) => *b,
                    Value::String(s) => parse_flag(s).ok_or_else(invalid)?,
                    _ => return Err(invalid()),
                };
            }
        }

        Ok(())
    }

    /// Locale passed to speech services. Bare `en` means US English.
    pub fn speech_locale(&self) -> String {
        if self.language == "en" {
            "en-US".to_string()
        } else {
            self.language.clone()
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.text_size, TextSize::Medium);
        assert_eq!(settings.language, "en");
        assert!(!settings.voice_enabled);
    }

    #[test]
    fn test_partial_merge() {
        let settings = Settings::merged_over_defaults(&json!({ "theme": "dark" }));
        assert_eq!(
            settings,
            Settings {
                theme: Theme::Dark,
                ..Settings::default()
            }
        );
    }

    #[test]
    fn test_merge_skips_unknown_and_invalid() {
        let settings = Settings::merged_over_defaults(&json!({
            "theme": "purple",
            "textSize": "large",
            "fontFamily": "serif",
            "voiceEnabled": true
        }));
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.text_size, TextSize::Large);
        assert!(settings.voice_enabled);
    }

    #[test]
    fn test_non_object_gives_defaults() {
        assert_eq!(Settings::merged_over_defaults(&json!([1, 2])), Settings::default());
        assert_eq!(Settings::merged_over_defaults(&json!("dark")), Settings::default());
    }

    #[test]
    fn test_serialized_keys_are_camel_case() {
        let value = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(value["textSize"], "medium");
        assert_eq!(value["voiceEnabled"], false);
    }

    #[test]
    fn test_key_parse() {
        assert_eq!(SettingKey::parse("textSize").unwrap(), SettingKey::TextSize);
        assert_eq!(SettingKey::parse("voiceEnabled").unwrap(), SettingKey::VoiceEnabled);
        assert_eq!(
            SettingKey::parse("volume").unwrap_err(),
            ValidationError::UnknownSettingKey("volume".to_string())
        );
    }

    #[test]
    fn test_apply_rejects_invalid_without_change() {
        let mut settings = Settings::default();
        let err = settings.apply(SettingKey::TextSize, &json!("huge")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidSettingValue {
                key: "textSize".to_string(),
                value: "huge".to_string()
            }
        );
        assert_eq!(settings, Settings::default());
        assert!(settings.apply(SettingKey::Language, &json!("  ")).is_err());
    }

    #[test]
    fn test_voice_flag_from_string() {
        let mut settings = Settings::default();
        settings.apply(SettingKey::VoiceEnabled, &json!("on")).unwrap();
        assert!(settings.voice_enabled);
    }

    #[test]
    fn test_speech_locale() {
        let mut settings = Settings::default();
        assert_eq!(settings.speech_locale(), "en-US");
        settings.language = "es".to_string();
        assert_eq!(settings.speech_locale(), "es");
    }
}
