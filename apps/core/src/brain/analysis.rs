//! Output data structure of the text analyzer.

use super::intent::Intent;
use serde::{Deserialize, Serialize};

/// Intent and noun keywords derived from one prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAnalysisResult {
    /// Detected intent (never absent; `Unknown` when nothing fired)
    pub intent: Intent,
    /// Noun tokens in order of appearance, duplicates kept
    pub keywords: Vec<String>,
}

impl TextAnalysisResult {
    pub fn new(intent: Intent, keywords: Vec<String>) -> Self {
        Self { intent, keywords }
    }

    /// Whether `keyword` was extracted (exact match).
    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }
}
