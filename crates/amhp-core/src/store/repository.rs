//! Key-value store trait.
//!
//! Defines the narrow persistence interface the rest of the domain talks to.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Top-level collections held by the store.
///
/// Each key is an independent JSON blob; there are no relations between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum StoreKey {
    #[strum(serialize = "settings")]
    Settings,
    #[strum(serialize = "mood-data")]
    MoodData,
    #[strum(serialize = "chat-history")]
    ChatHistory,
    #[strum(serialize = "journal-entries")]
    JournalEntries,
    #[strum(serialize = "current-user")]
    CurrentUser,
}

impl StoreKey {
    /// Stable identifier used as the persisted key name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            StoreKey::Settings => "settings",
            StoreKey::MoodData => "mood-data",
            StoreKey::ChatHistory => "chat-history",
            StoreKey::JournalEntries => "journal-entries",
            StoreKey::CurrentUser => "current-user",
        }
    }
}

/// An abstract key-value store holding serialized JSON values.
///
/// Writes are last-write-wins. A missing key is `Ok(None)`; implementations
/// return `Err` for unreadable or unparsable data and leave the decision to
/// degrade to defaults to the caller.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    async fn get(&self, key: StoreKey) -> Result<Option<Value>>;

    /// Replaces the value stored under `key`.
    async fn set(&self, key: StoreKey, value: Value) -> Result<()>;
}
