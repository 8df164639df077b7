//! # Vision Module
//!
//! Image file → top-1 ImageNet label.
//!
//! ## Components
//! - `decoder`: decode + resize + normalize (`ImageDecoder` capability)
//! - `labels`: class label index (Keras JSON or plain text)
//! - `mobilenet`: candle MobileNetV4 backend (`ClassificationModel` capability)
//! - `classifier`: decoder + model pipeline (`ImageLabeler`)

pub mod classifier;
pub mod decoder;
pub mod labels;
pub mod mobilenet;

pub use classifier::{ClassificationModel, ImageClassifier, ImageLabeler, Prediction};
pub use decoder::{ImageDecoder, Normalization, PixelTensor, PreprocessConfig, PreprocessingDecoder};
pub use labels::LabelIndex;
pub use mobilenet::{DeviceKind, MobileNetModel, MobileNetVariant};

use std::sync::OnceLock;
use tracing::info;

use crate::config::VisionSettings;
use crate::error::AppError;

/// Production classifier: `image` decoding in front of a lazily loaded MobileNetV4
pub type MobileNetClassifier = ImageClassifier<PreprocessingDecoder, LazyMobileNet>;

/// Lazy-initialized process-wide model (expensive to create).
/// A failed load is cached too, so every later call reports the same error.
static SHARED_MODEL: OnceLock<Result<MobileNetModel, AppError>> = OnceLock::new();

/// Get or initialize the shared model.
///
/// `settings` only matter for the first call in the process.
pub fn shared_model(settings: &VisionSettings) -> Result<&'static MobileNetModel, AppError> {
    SHARED_MODEL
        .get_or_init(|| {
            info!("Initializing image classifier (MobileNetV4-{})...", settings.variant);
            MobileNetModel::load(settings)
        })
        .as_ref()
        .map_err(Clone::clone)
}

/// [`ClassificationModel`] over the shared model; weights load on the first
/// prediction, after the image already decoded.
#[derive(Debug, Clone)]
pub struct LazyMobileNet {
    settings: VisionSettings,
}

impl LazyMobileNet {
    pub fn new(settings: VisionSettings) -> Self {
        Self { settings }
    }
}

impl ClassificationModel for LazyMobileNet {
    fn predict(&self, pixels: &PixelTensor) -> Result<Vec<Prediction>, AppError> {
        shared_model(&self.settings)?.predict(pixels)
    }
}

/// Build the production classifier for `settings`.
pub fn mobilenet_classifier(settings: VisionSettings) -> MobileNetClassifier {
    let decoder = PreprocessingDecoder::new(settings.variant.preprocess_config());
    ImageClassifier::new(decoder, LazyMobileNet::new(settings))
}
