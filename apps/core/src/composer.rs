//! Response Composer - fuses the text analysis with the image label.
//!
//! Decision table, first match wins:
//!
//! | Condition | Template |
//! |---|---|
//! | Describe and (keyword "image" or raw text contains "this") | `This image shows a {label}.` |
//! | Describe | `This is a {label}.` |
//! | Classify | `The object is classified as a {label}.` |
//! | Unknown | `I see a {label} in the image.` |
//!
//! The `Unknown` row only fires when the prompt had no trigger and no noun,
//! because the analyzer promotes noun-bearing prompts to `Describe`.

use crate::brain::{Intent, TextAnalysisResult};

/// Sentence template selected for a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseTemplate {
    ImageShows,
    ThisIs,
    ClassifiedAs,
    Fallback,
}

impl ResponseTemplate {
    /// Pick the template for an analysis and the original prompt.
    pub fn select(analysis: &TextAnalysisResult, raw_text: &str) -> Self {
        match analysis.intent {
            Intent::Describe
                if analysis.has_keyword("image") || raw_text.to_lowercase().contains("this") =>
            {
                ResponseTemplate::ImageShows
            }
            Intent::Describe => ResponseTemplate::ThisIs,
            Intent::Classify => ResponseTemplate::ClassifiedAs,
            Intent::Unknown => ResponseTemplate::Fallback,
        }
    }

    /// Fill the template with the image label.
    pub fn render(&self, label: &str) -> String {
        match self {
            ResponseTemplate::ImageShows => format!("This image shows a {}.", label),
            ResponseTemplate::ThisIs => format!("This is a {}.", label),
            ResponseTemplate::ClassifiedAs => format!("The object is classified as a {}.", label),
            ResponseTemplate::Fallback => format!("I see a {} in the image.", label),
        }
    }
}

/// Builds the final sentence. Pure: same inputs, same output.
pub fn compose(analysis: &TextAnalysisResult, label: &str, raw_text: &str) -> String {
    ResponseTemplate::select(analysis, raw_text).render(label)
}
