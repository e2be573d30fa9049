//! Rule-based response selection.
//!
//! Free text is classified by keyword containment in a fixed priority order
//! (crisis, anxiety, depression), falling back to general support. A reply
//! is then picked uniformly at random from the category's canned set.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// A bucket of canned replies keyed by detected topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum ResponseCategory {
    Greeting,
    Crisis,
    Anxiety,
    Depression,
    Support,
}

const GREETING_RESPONSES: &[&str] = &[
    "Hello! I'm here to listen and support you. How are you feeling today?",
    "Hi there! I'm glad you're here. What's on your mind right now?",
    "Welcome! I'm here whenever you need to talk. How can I help you today?",
];

const ANXIETY_RESPONSES: &[&str] = &[
    "I understand anxiety can feel overwhelming. Let's try a breathing exercise together - breathe in for 4 counts, hold for 4, then breathe out for 4.",
    "Anxiety is a valid feeling, and you're not alone. What specific situation is making you feel anxious right now?",
    "I hear that you're feeling anxious. Would it help to talk about what's triggering these feelings?",
];

const DEPRESSION_RESPONSES: &[&str] = &[
    "I'm here with you. Depression can make everything feel harder, but you've taken a brave step by reaching out.",
    "Your feelings are valid, and it's okay to not be okay. What has been the most difficult part of your day?",
    "I want you to know that you matter, and there are people who want to help. What small thing might bring you a moment of comfort today?",
];

const CRISIS_RESPONSES: &[&str] = &[
    "I'm concerned about your safety. Please know that there are people who want to help. Would you like me to connect you with a crisis counselor right now?",
    "Your life has value, and there are resources available to support you through this difficult time. Can I help you find immediate professional support?",
];

const SUPPORT_RESPONSES: &[&str] = &[
    "Thank you for sharing that with me. It takes courage to open up about difficult feelings.",
    "I'm here to listen without judgment. Your experiences and feelings are important.",
    "You're being really brave by talking about this. How else can I support you right now?",
];

impl ResponseCategory {
    /// The fixed, non-empty reply set for this category.
    pub const fn responses(&self) -> &'static [&'static str] {
        match self {
            ResponseCategory::Greeting => GREETING_RESPONSES,
            ResponseCategory::Crisis => CRISIS_RESPONSES,
            ResponseCategory::Anxiety => ANXIETY_RESPONSES,
            ResponseCategory::Depression => DEPRESSION_RESPONSES,
            ResponseCategory::Support => SUPPORT_RESPONSES,
        }
    }

    /// Whether a reply in this category should be followed by a forced
    /// navigation to the crisis screen.
    pub const fn requires_crisis_redirect(&self) -> bool {
        matches!(self, ResponseCategory::Crisis)
    }
}

/// Keywords that select a category when contained in the lower-cased input.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub category: ResponseCategory,
    pub keywords: &'static [&'static str],
}

impl KeywordRule {
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// Rules in priority order; the first match wins.
pub const DEFAULT_RULES: &[KeywordRule] = &[
    KeywordRule {
        category: ResponseCategory::Crisis,
        keywords: &["suicide", "kill myself", "end it all", "want to die", "hurt myself"],
    },
    KeywordRule {
        category: ResponseCategory::Anxiety,
        keywords: &["anxious", "anxiety", "worried"],
    },
    KeywordRule {
        category: ResponseCategory::Depression,
        keywords: &["sad", "depressed", "down", "bad day"],
    },
];

/// A selected reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reply {
    pub category: ResponseCategory,
    pub text: &'static str,
}

impl Reply {
    pub fn requires_crisis_redirect(&self) -> bool {
        self.category.requires_crisis_redirect()
    }
}

/// Keyword classifier plus uniform reply picker.
///
/// Randomness is supplied by the caller so tests can use a seeded RNG.
#[derive(Debug, Clone)]
pub struct Responder {
    rules: &'static [KeywordRule],
    fallback: ResponseCategory,
}

impl Default for Responder {
    fn default() -> Self {
        Self {
            rules: DEFAULT_RULES,
            fallback: ResponseCategory::Support,
        }
    }
}

impl Responder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the category for `text`. Matching is case-insensitive
    /// substring containment.
    pub fn classify(&self, text: &str) -> ResponseCategory {
        let lowered = text.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.category)
            .unwrap_or(self.fallback)
    }

    /// Classifies `text` and picks a reply from the matching category.
    pub fn respond<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Reply {
        let category = self.classify(text);
        Reply {
            category,
            text: Self::pick(category, rng),
        }
    }

    /// Uniform pick with replacement from `category`'s reply set.
    pub fn pick<R: Rng + ?Sized>(category: ResponseCategory, rng: &mut R) -> &'static str {
        category
            .responses()
            .choose(rng)
            .copied()
            .unwrap_or(SUPPORT_RESPONSES[0])
    }
}
