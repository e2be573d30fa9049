//! Fixed-length daily mood series for trend display.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::model::{MoodEntry, MoodScore, mood_label};

/// Number of days in the trend series.
pub const SERIES_DAYS: u64 = 7;

/// One point of the mood series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMood {
    pub date: NaiveDate,
    pub mood: u8,
    /// `false` when the day had no entry and `mood` is the neutral filler.
    pub recorded: bool,
}

impl DailyMood {
    pub fn label(&self) -> &'static str {
        mood_label(self.mood)
    }
}

/// Builds the last [`SERIES_DAYS`] days ending at `today`, oldest first.
///
/// Days without an entry get the neutral value 5. When several entries share a
/// date, the one with the newest timestamp wins; equal timestamps resolve to
/// the later insertion.
pub fn last_seven_days(entries: &[MoodEntry], today: NaiveDate) -> Vec<DailyMood> {
    (0..SERIES_DAYS)
        .rev()
        .map(|offset| {
            let date = today.checked_sub_days(Days::new(offset)).unwrap_or(NaiveDate::MIN);
            match latest_for_date(entries, date) {
                Some(entry) => DailyMood {
                    date,
                    mood: entry.mood.value(),
                    recorded: true,
                },
                None => DailyMood {
                    date,
                    mood: MoodScore::NEUTRAL.value(),
                    recorded: false,
                },
            }
        })
        .collect()
}

fn latest_for_date(entries: &[MoodEntry], date: NaiveDate) -> Option<&MoodEntry> {
    entries
        .iter()
        .filter(|entry| entry.date == date)
        .fold(None, |best: Option<&MoodEntry>, entry| match best {
            Some(current) if current.timestamp > entry.timestamp => Some(current),
            _ => Some(entry),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn at(ts: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(ts).unwrap().with_timezone(&Utc)
    }

    fn entry(mood: i64, ts: &str) -> MoodEntry {
        MoodEntry::new(MoodScore::new(mood).unwrap(), "", at(ts))
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_empty_history_is_all_neutral() {
        let series = last_seven_days(&[], today());
        assert_eq!(series.len(), 7);
        assert!(series.iter().all(|d| d.mood == 5 && !d.recorded));
        assert_eq!(series.last().unwrap().date, today());
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2026, 10, 12).unwrap());
    }

    #[test]
    fn test_single_entry_lands_on_its_day() {
        let entries = vec![entry(8, "2026-10-16T10:00:00Z")];
        let series = last_seven_days(&entries, today());
        assert_eq!(series.len(), 7);
        assert_eq!(series[4].date, NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        assert_eq!(series[4].mood, 8);
        assert!(series[4].recorded);
        assert_eq!(series.iter().filter(|d| d.recorded).count(), 1);
    }

    #[test]
    fn test_many_entries_still_seven_points() {
        let entries: Vec<MoodEntry> = (1..=30)
            .map(|day| entry((day % 10) + 1, &format!("2026-09-{:02}T12:00:00Z", day)))
            .chain((12..=18).map(|day| entry(9, &format!("2026-10-{:02}T12:00:00Z", day))))
            .collect();
        let series = last_seven_days(&entries, today());
        assert_eq!(series.len(), 7);
        assert!(series.iter().all(|d| d.mood == 9 && d.recorded));
    }

    #[test]
    fn test_out_of_window_entries_ignored() {
        let entries = vec![entry(2, "2026-10-01T12:00:00Z"), entry(3, "2026-10-19T12:00:00Z")];
        let series = last_seven_days(&entries, today());
        assert!(series.iter().all(|d| !d.recorded));
    }

    #[test]
    fn test_newest_timestamp_wins_same_day() {
        let entries = vec![
            entry(9, "2026-10-18T20:00:00Z"),
            entry(3, "2026-10-18T08:00:00Z"),
        ];
        let series = last_seven_days(&entries, today());
        assert_eq!(series[6].mood, 9);
    }

    #[test]
    fn test_equal_timestamps_prefer_later_insertion() {
        let entries = vec![
            entry(4, "2026-10-18T08:00:00Z"),
            entry(6, "2026-10-18T08:00:00Z"),
        ];
        let series = last_seven_days(&entries, today());
        assert_eq!(series[6].mood, 6);
        assert_eq!(series[6].label(), "Somewhat Good");
    }
}
