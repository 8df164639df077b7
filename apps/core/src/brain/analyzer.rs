//! Text Analyzer - turns a prompt into an intent and noun keywords.
//!
//! Pipeline:
//! 1. Lowercase the prompt
//! 2. Tokenize + POS-tag (via the `PosTagger` capability)
//! 3. Trigger scan, last match wins (`IntentClassifier`)
//! 4. Collect noun tokens as keywords
//! 5. Promote `Unknown` to `Describe` when keywords were found

use std::time::Instant;
use tracing::debug;

use super::analysis::TextAnalysisResult;
use super::intent::{Intent, IntentClassifier};
use super::tagger::{LexiconTagger, PosTag, PosTagger};

/// Main text analyzer combining a tagger with the intent rules
pub struct TextAnalyzer<T: PosTagger = LexiconTagger> {
    tagger: T,
    intent_classifier: IntentClassifier,
}

impl Default for TextAnalyzer<LexiconTagger> {
    fn default() -> Self {
        Self::new()
    }
}

impl TextAnalyzer<LexiconTagger> {
    /// Create a text analyzer backed by the built-in lexicon tagger
    pub fn new() -> Self {
        Self::with_tagger(LexiconTagger::new())
    }
}

impl<T: PosTagger> TextAnalyzer<T> {
    /// Create a text analyzer over any tagger implementation
    pub fn with_tagger(tagger: T) -> Self {
        Self {
            tagger,
            intent_classifier: IntentClassifier::new(),
        }
    }

    /// Analyze a prompt. Never fails; the empty prompt yields `Unknown` and no keywords.
    pub fn analyze(&self, text: &str) -> TextAnalysisResult {
        let start = Instant::now();

        let tokens = self.tagger.tag(&text.to_lowercase());

        let mut intent = self
            .intent_classifier
            .classify(tokens.iter().map(|t| t.text.as_str()));

        let keywords: Vec<String> = tokens
            .iter()
            .filter(|t| t.pos == PosTag::Noun)
            .map(|t| t.text.clone())
            .collect();

        // Fallback to describe if nouns are present
        if intent == Intent::Unknown && !keywords.is_empty() {
            intent = Intent::Describe;
        }

        debug!(
            tokens = tokens.len(),
            intent = %intent,
            keywords = ?keywords,
            elapsed_us = start.elapsed().as_micros() as u64,
            "Text analyzed"
        );

        TextAnalysisResult::new(intent, keywords)
    }
}
