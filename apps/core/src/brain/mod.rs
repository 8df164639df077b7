//! # Brain Module
//!
//! Fast, non-ML text analysis for Glimpse.
//! Derives a coarse intent and noun keywords from the user's prompt.
//!
//! ## Components
//! - `tagger`: tokenizer + lexicon POS tagger (`PosTagger` capability)
//! - `intent`: trigger-word intent rules
//! - `analysis`: output data structure
//! - `analyzer`: main orchestrator

pub mod analysis;
pub mod analyzer;
pub mod intent;
pub mod tagger;

pub use analysis::TextAnalysisResult;
pub use analyzer::TextAnalyzer;
pub use intent::{Intent, IntentClassifier};
pub use tagger::{LexiconTagger, PosTag, PosTagger, TaggedToken};
