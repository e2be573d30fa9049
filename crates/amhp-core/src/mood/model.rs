//! Mood records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A mood rating in `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct MoodScore(u8);

impl MoodScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;
    pub const NEUTRAL: MoodScore = MoodScore(5);

    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::MoodOutOfRange(value))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> &'static str {
        mood_label(self.0)
    }
}

impl TryFrom<i64> for MoodScore {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MoodScore> for u8 {
    fn from(score: MoodScore) -> Self {
        score.0
    }
}

/// Describes a mood value on the 1-10 scale. Values off the scale read as
/// "Neutral".
pub fn mood_label(value: u8) -> &'static str {
    match value {
        1 => "Extremely Low",
        2 => "Very Low",
        3 => "Low",
        4 => "Somewhat Low",
        6 => "Somewhat Good",
        7 => "Good",
        8 => "Very Good",
        9 => "Great",
        10 => "Excellent",
        _ => "Neutral",
    }
}

/// One recorded mood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Calendar date (UTC) the entry belongs to.
    pub date: NaiveDate,
    pub mood: MoodScore,
    #[serde(default)]
    pub note: String,
    pub timestamp: DateTime<Utc>,
}

impl MoodEntry {
    pub fn new(mood: MoodScore, note: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            date: at.date_naive(),
            mood,
            note: note.into(),
            timestamp: at,
        }
    }
}

/// Append-only list of mood entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoodLog {
    entries: Vec<MoodEntry>,
}

impl MoodLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<MoodEntry>) -> Self {
        Self { entries }
    }

    pub fn record(&mut self, entry: MoodEntry) -> &MoodEntry {
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bounds() {
        assert!(MoodScore::new(1).is_ok());
        assert!(MoodScore::new(10).is_ok());
        assert_eq!(MoodScore::new(0), Err(ValidationError::MoodOutOfRange(0)));
        assert_eq!(MoodScore::new(11), Err(ValidationError::MoodOutOfRange(11)));
    }

    #[test]
    fn test_labels() {
        assert_eq!(MoodScore::new(1).unwrap().label(), "Extremely Low");
        assert_eq!(MoodScore::NEUTRAL.label(), "Neutral");
        assert_eq!(MoodScore::new(10).unwrap().label(), "Excellent");
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        let json = r#"{"date":"2026-10-18","mood":12,"note":"","timestamp":"2026-10-18T08:00:00Z"}"#;
        assert!(serde_json::from_str::<MoodEntry>(json).is_err());
    }

    #[test]
    fn test_entry_date_follows_timestamp() {
        let at = DateTime::parse_from_rfc3339("2026-10-18T23:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let entry = MoodEntry::new(MoodScore::new(7).unwrap(), "ok", at);
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["date"], "2026-10-18");
        assert_eq!(value["mood"], 7);
    }
}
