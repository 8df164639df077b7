//! Request Orchestrator - one prompt + one image → one sentence.
//!
//! Runs the text analyzer, then the image classifier, then the composer.
//! Any failure aborts the request; nothing is retried or kept between calls.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::brain::{Intent, LexiconTagger, PosTagger, TextAnalyzer};
use crate::composer;
use crate::error::AppError;
use crate::vision::ImageLabeler;

/// Everything produced for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantResponse {
    pub text: String,
    pub image: String,
    pub intent: Intent,
    pub keywords: Vec<String>,
    pub label: String,
    pub response: String,
}

/// Text analyzer + image labeler + composer
pub struct Assistant<L: ImageLabeler, T: PosTagger = LexiconTagger> {
    analyzer: TextAnalyzer<T>,
    labeler: L,
}

impl<L: ImageLabeler> Assistant<L, LexiconTagger> {
    pub fn new(labeler: L) -> Self {
        Self::with_analyzer(TextAnalyzer::new(), labeler)
    }
}

impl<L: ImageLabeler, T: PosTagger> Assistant<L, T> {
    pub fn with_analyzer(analyzer: TextAnalyzer<T>, labeler: L) -> Self {
        Self { analyzer, labeler }
    }

    /// Handle one request.
    ///
    /// `text` is `None` when no prompt was supplied ([`AppError::MissingInput`]).
    #[instrument(
        skip(self, text, image_path),
        fields(request_id = %Uuid::new_v4(), image = %image_path.display())
    )]
    pub fn respond(
        &self,
        text: Option<&str>,
        image_path: &Path,
    ) -> Result<AssistantResponse, AppError> {
        let start = Instant::now();
        let text = text.ok_or(AppError::MissingInput)?;

        let analysis = self.analyzer.analyze(text);
        let label = self.labeler.classify(image_path)?;
        let response = composer::compose(&analysis, &label, text);

        info!(
            intent = %analysis.intent,
            label = %label,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Response composed"
        );

        Ok(AssistantResponse {
            text: text.to_string(),
            image: image_path.display().to_string(),
            intent: analysis.intent,
            keywords: analysis.keywords,
            label,
            response,
        })
    }
}
