//! Image Classifier - image file in, top-1 label out.

use std::path::Path;
use tracing::{debug, instrument};

use super::decoder::{ImageDecoder, PixelTensor};
use crate::error::AppError;

/// One ranked classification result
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label_id: usize,
    pub label: String,
    pub score: f32,
}

/// Defines the image classification capability.
///
/// This trait abstracts the specific model, allowing different backends
/// (candle MobileNet, test doubles) to be used interchangeably.
pub trait ClassificationModel: Send + Sync {
    /// Scores the image; results are ranked by descending score.
    fn predict(&self, pixels: &PixelTensor) -> Result<Vec<Prediction>, AppError>;
}

/// Defines what the orchestrator needs from the vision side: a single label.
pub trait ImageLabeler {
    /// Returns the top-1 label for the image at `image_path`.
    fn classify(&self, image_path: &Path) -> Result<String, AppError>;
}

impl<L: ImageLabeler + ?Sized> ImageLabeler for &L {
    fn classify(&self, image_path: &Path) -> Result<String, AppError> {
        (**self).classify(image_path)
    }
}

/// Decoder + model pipeline
pub struct ImageClassifier<D: ImageDecoder, M: ClassificationModel> {
    decoder: D,
    model: M,
}

impl<D: ImageDecoder, M: ClassificationModel> ImageClassifier<D, M> {
    pub fn new(decoder: D, model: M) -> Self {
        Self { decoder, model }
    }
}

impl<D: ImageDecoder, M: ClassificationModel> ImageLabeler for ImageClassifier<D, M> {
    #[instrument(skip(self, image_path), fields(path = %image_path.display()))]
    fn classify(&self, image_path: &Path) -> Result<String, AppError> {
        let pixels = self.decoder.decode(image_path)?;

        let top = self
            .model
            .predict(&pixels)?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Internal("Model returned no predictions".to_string()))?;

        debug!(label = %top.label, label_id = top.label_id, score = top.score, "Top prediction");
        Ok(top.label)
    }
}
