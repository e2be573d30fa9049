//! Journal prompts and daily recommendations.

use rand::Rng;
use rand::seq::SliceRandom;

pub const JOURNAL_PROMPTS: &[&str] = &[
    "What am I grateful for today?",
    "What emotions am I experiencing right now?",
    "What would I tell a friend in my situation?",
    "What small step can I take today to feel better?",
    "What positive thing happened to me today?",
];

pub const DAILY_RECOMMENDATIONS: &[&str] = &[
    "Try the 5-minute breathing exercise to start your day mindfully.",
    "Practice gratitude by writing down three things you're thankful for.",
    "Take a short walk outside to connect with nature.",
    "Use the thought record exercise to examine any negative thoughts.",
    "Schedule one enjoyable activity for today.",
];

/// Uniformly picks a journal prompt.
pub fn random_prompt<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    JOURNAL_PROMPTS.choose(rng).copied().unwrap_or(JOURNAL_PROMPTS[0])
}

/// Uniformly picks a recommendation for the dashboard.
pub fn random_recommendation<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    DAILY_RECOMMENDATIONS
        .choose(rng)
        .copied()
        .unwrap_or(DAILY_RECOMMENDATIONS[0])
}
