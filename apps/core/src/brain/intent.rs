//! Intent Classification using single-token trigger words.
//!
//! Every token is checked against the trigger table; a matching token
//! overwrites the current intent, so the last trigger in the text wins.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Detected intent type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Describe the picture (what, describe)
    Describe,
    /// Name the object's class (classify, identify)
    Classify,
    /// No trigger and no noun
    #[default]
    Unknown,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Intent {
    /// Returns a human-readable label for the intent
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Describe => "describe",
            Intent::Classify => "classify",
            Intent::Unknown => "unknown",
        }
    }
}

/// Trigger words for one intent
struct TriggerRule {
    intent: Intent,
    words: &'static [&'static str],
}

// Checked in order; the first rule containing the token decides.
const TRIGGER_RULES: &[TriggerRule] = &[
    TriggerRule {
        intent: Intent::Describe,
        words: &["what", "describe"],
    },
    TriggerRule {
        intent: Intent::Classify,
        words: &["classify", "identify"],
    },
];

/// Intent classifier over trigger tokens
#[derive(Debug, Default, Clone, Copy)]
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Intent triggered by a single token, by exact (case-sensitive) equality.
    pub fn match_token(&self, token: &str) -> Option<Intent> {
        TRIGGER_RULES
            .iter()
            .find(|rule| rule.words.iter().any(|word| *word == token))
            .map(|rule| rule.intent)
    }

    /// Folds the trigger rules over `tokens` in order.
    ///
    /// Every matching token overwrites the running intent (last match wins);
    /// returns `Unknown` when no token matches.
    pub fn classify<'a, I>(&self, tokens: I) -> Intent
    where
        I: IntoIterator<Item = &'a str>,
    {
        tokens.into_iter().fold(Intent::Unknown, |current, token| {
            self.match_token(token).unwrap_or(current)
        })
    }
}
