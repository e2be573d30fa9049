//! Static catalogs: exercises, meditations, journal prompts, daily
//! recommendations and crisis hotlines.

mod crisis;
mod prompts;
mod resources;

pub use crisis::{CRISIS_HOTLINES, Hotline};
pub use prompts::{DAILY_RECOMMENDATIONS, JOURNAL_PROMPTS, random_prompt, random_recommendation};
pub use resources::{CBT_EXERCISES, MEDITATIONS, Resource, ResourceTab, find_resource};
