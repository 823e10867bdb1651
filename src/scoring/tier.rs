use serde::{Deserialize, Serialize};
use std::fmt;

/// Triage bucket for a 0-10 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// 0-4
    Low,
    /// 5-7
    Medium,
    /// 8-10
    High,
}

impl Tier {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=4 => Tier::Low,
            5..=7 => Tier::Medium,
            _ => Tier::High,
        }
    }

    /// Only the middle tier asks the text-generation service for resources
    pub fn requests_recommendations(self) -> bool {
        self == Tier::Medium
    }

    pub fn message(self) -> &'static str {
        match self {
            Tier::Low => {
                "Your responses suggest you may be going through a difficult time. \
                 It is a sign of great strength to seek help. \
                 We strongly recommend speaking with a mental health professional."
            }
            Tier::Medium => {
                "Thank you for checking in with yourself. \
                 Here are some personalized resources that might be helpful for you right now."
            }
            Tier::High => {
                "You're doing well. Thank you for taking the time to check in with your \
                 mental health. Keep prioritizing your well-being! 🎉"
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Low => "low",
            Tier::Medium => "medium",
            Tier::High => "high",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
