//! Error types for the AMHP application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Optional platform capabilities that may be missing at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum Capability {
    /// Speech-to-text input.
    #[strum(serialize = "Voice input")]
    VoiceInput,
    /// Text-to-speech output.
    #[strum(serialize = "Voice output")]
    VoiceOutput,
}

/// Input rejected before anything is mutated or persisted.
///
/// The `Display` text is what the user sees in the status area.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("Please type a message before sending.")]
    EmptyMessage,

    #[error("Please write something in your journal before saving.")]
    EmptyJournalText,

    #[error("Mood must be between 1 and 10 (got {0}).")]
    MoodOutOfRange(i64),

    #[error("Unknown setting '{0}'.")]
    UnknownSettingKey(String),

    #[error("Invalid value '{value}' for setting '{key}'.")]
    InvalidSettingValue { key: String, value: String },

    #[error("Unknown resource '{0}'.")]
    UnknownResource(String),
}

/// A shared error type for the entire AMHP workspace.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum AmhpError {
    /// User input failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Key-value store access failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// An optional platform capability is not available
    #[error("{0} not supported on this device")]
    CapabilityUnavailable(Capability),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AmhpError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Errors that should be shown to the user as a transient status message.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::CapabilityUnavailable(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for AmhpError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for AmhpError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for AmhpError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for AmhpError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, AmhpError>`.
pub type Result<T> = std::result::Result<T, AmhpError>;
