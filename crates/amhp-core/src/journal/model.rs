//! Journal records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A saved journal entry. `text` is always trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub date: NaiveDate,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl JournalEntry {
    /// Builds an entry from raw editor text, rejecting blank input.
    pub fn new(text: &str, at: DateTime<Utc>) -> Result<Self, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyJournalText);
        }

        Ok(Self {
            date: at.date_naive(),
            text: text.to_string(),
            timestamp: at,
        })
    }
}

/// Append-only journal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<JournalEntry>) -> Self {
        Self { entries }
    }

    /// Validates and appends an entry. On error the journal is unchanged.
    pub fn save(&mut self, text: &str, at: DateTime<Utc>) -> Result<&JournalEntry, ValidationError> {
        let entry = JournalEntry::new(text, at)?;
        self.entries.push(entry);
        Ok(&self.entries[self.entries.len() - 1])
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_rejected() {
        let mut journal = Journal::new();
        assert_eq!(journal.save("", Utc::now()).unwrap_err(), ValidationError::EmptyJournalText);
        assert_eq!(journal.save("   ", Utc::now()).unwrap_err(), ValidationError::EmptyJournalText);
        assert_eq!(journal.save("\n\t", Utc::now()).unwrap_err(), ValidationError::EmptyJournalText);
        assert!(journal.is_empty());
    }

    #[test]
    fn test_save_trims_and_appends_once() {
        let mut journal = Journal::new();
        let entry = journal.save("  hello  ", Utc::now()).unwrap();
        assert_eq!(entry.text, "hello");
        assert_eq!(journal.len(), 1);
        assert_eq!(journal.entries()[0].text, "hello");
    }
}
