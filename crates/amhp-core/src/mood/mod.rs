//! Mood tracking domain module.

mod model;
mod series;

pub use model::{MoodEntry, MoodLog, MoodScore, mood_label};
pub use series::{DailyMood, SERIES_DAYS, last_seven_days};
