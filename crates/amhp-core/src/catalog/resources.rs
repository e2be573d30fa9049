//! Psychoeducational exercises and meditations.
//!
//! These entries are fixed and read-only.

use serde::Serialize;

/// Which resources tab an entry is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum ResourceTab {
    Cbt,
    Meditation,
}

impl ResourceTab {
    pub fn parse(tab: &str) -> Option<Self> {
        match tab.trim().to_ascii_lowercase().as_str() {
            "cbt" => Some(ResourceTab::Cbt),
            "meditation" | "meditations" => Some(ResourceTab::Meditation),
            _ => None,
        }
    }

    pub const fn id(&self) -> &'static str {
        match self {
            ResourceTab::Cbt => "cbt",
            ResourceTab::Meditation => "meditation",
        }
    }

    pub fn resources(&self) -> &'static [Resource] {
        match self {
            ResourceTab::Cbt => CBT_EXERCISES,
            ResourceTab::Meditation => MEDITATIONS,
        }
    }
}

/// A single exercise or meditation card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub title: &'static str,
    pub tab: ResourceTab,
    pub description: Option<&'static str>,
    /// Category label for CBT exercises, meditation type for meditations.
    pub category: &'static str,
    pub duration: &'static str,
    pub difficulty: Option<&'static str>,
}

impl Resource {
    const fn exercise(title: &'static str, description: &'static str, duration: &'static str) -> Self {
        Self {
            title,
            tab: ResourceTab::Cbt,
            description: Some(description),
            category: "CBT",
            duration,
            difficulty: None,
        }
    }

    const fn meditation(
        title: &'static str,
        duration: &'static str,
        kind: &'static str,
        difficulty: &'static str,
    ) -> Self {
        Self {
            title,
            tab: ResourceTab::Meditation,
            description: None,
            category: kind,
            duration,
            difficulty: Some(difficulty),
        }
    }

    /// Text shown on the resource card.
    pub fn display_description(&self) -> String {
        match self.description {
            Some(description) => description.to_string(),
            None => format!("{} meditation to help with relaxation", self.category),
        }
    }

    /// Status text shown when the user starts the resource.
    pub fn start_message(&self) -> String {
        let benefit = match self.description {
            Some(description) => description.to_lowercase(),
            None => format!("with {}", self.category.to_lowercase()),
        };
        format!(
            "Starting {}. This {} exercise will help you {}.",
            self.title, self.duration, benefit
        )
    }

    /// Guided instructions shown a moment after starting.
    pub fn instructions(&self) -> String {
        if self.title.contains("Thought Record") {
            "Step 1: Identify the situation that triggered negative thoughts. Step 2: Write down the negative thought. Step 3: Rate your belief in this thought (1-10). Step 4: Look for evidence for and against this thought. Step 5: Create a more balanced thought.".to_string()
        } else if self.title.contains("Breathing") {
            "Find a comfortable position. Breathe in slowly for 4 counts... Hold for 4 counts... Breathe out slowly for 6 counts... Repeat this cycle 5 more times.".to_string()
        } else if self.title.contains("Body Scan") {
            "Close your eyes and start by focusing on your toes. Notice any sensations. Slowly move your attention up through your legs, torso, arms, and head. Spend 30 seconds on each body part.".to_string()
        } else {
            format!(
                "Begin your {} practice. Focus on the present moment and follow the guided instructions.",
                self.title.to_lowercase()
            )
        }
    }
}

pub const CBT_EXERCISES: &[Resource] = &[
    Resource::exercise(
        "Thought Record",
        "Identify and challenge negative thoughts",
        "10-15 minutes",
    ),
    Resource::exercise(
        "Behavioral Activation",
        "Plan enjoyable activities to improve mood",
        "20-30 minutes",
    ),
    Resource::exercise(
        "Problem Solving",
        "Break down problems into manageable steps",
        "15-20 minutes",
    ),
];

pub const MEDITATIONS: &[Resource] = &[
    Resource::meditation("Body Scan Meditation", "10 minutes", "Mindfulness", "Beginner"),
    Resource::meditation("Breathing Exercise", "5 minutes", "Anxiety Relief", "Beginner"),
    Resource::meditation(
        "Progressive Muscle Relaxation",
        "15 minutes",
        "Stress Relief",
        "Intermediate",
    ),
];

/// Finds a resource by title, case-insensitively, across all tabs.
pub fn find_resource(title: &str) -> Option<&'static Resource> {
    let title = title.trim();
    CBT_EXERCISES
        .iter()
        .chain(MEDITATIONS.iter())
        .find(|r| r.title.eq_ignore_ascii_case(title))
}
