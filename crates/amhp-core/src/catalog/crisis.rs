//! Crisis hotlines shown on the crisis screen.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hotline {
    pub name: &'static str,
    /// Phone number or other contact instruction.
    pub contact: &'static str,
    pub available: &'static str,
    pub description: &'static str,
}

pub const CRISIS_HOTLINES: &[Hotline] = &[
    Hotline {
        name: "National Suicide Prevention Lifeline",
        contact: "988",
        available: "24/7",
        description: "Free, confidential crisis support",
    },
    Hotline {
        name: "Crisis Text Line",
        contact: "Text HOME to 741741",
        available: "24/7",
        description: "Free crisis counseling via text",
    },
    Hotline {
        name: "SAMHSA National Helpline",
        contact: "1-800-662-4357",
        available: "24/7",
        description: "Treatment referral and information",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifeline_listed_first() {
        assert_eq!(CRISIS_HOTLINES[0].contact, "988");
        assert!(CRISIS_HOTLINES.iter().all(|h| h.available == "24/7"));
    }
}
