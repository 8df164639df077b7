//! Candle-based MobileNetV4 image classifier.
//!
//! Loads an ImageNet-1k MobileNetV4 checkpoint (timm weights from the
//! HuggingFace Hub, or a local `.safetensors` file) and ranks the 1000
//! classes with a softmax over the logits.

use candle_core::{DType, Device, Module, Tensor, D};
use candle_nn::{Func, VarBuilder};
use candle_transformers::models::mobilenetv4;
use hf_hub::api::sync::ApiBuilder;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

use super::classifier::{ClassificationModel, Prediction};
use super::decoder::{Normalization, PixelTensor, PreprocessConfig};
use super::labels::LabelIndex;
use crate::config::VisionSettings;
use crate::error::AppError;

/// Number of ImageNet-1k classes produced by the checkpoints
pub const IMAGENET_CLASSES: usize = 1000;

/// MobileNetV4 size variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MobileNetVariant {
    #[default]
    Small,
    Medium,
    Large,
}

impl MobileNetVariant {
    /// HuggingFace repository holding the ImageNet-1k weights
    pub fn default_repo(&self) -> &'static str {
        match self {
            MobileNetVariant::Small => "timm/mobilenetv4_conv_small.e2400_r224_in1k",
            MobileNetVariant::Medium => "timm/mobilenetv4_conv_medium.e500_r256_in1k",
            MobileNetVariant::Large => "timm/mobilenetv4_conv_large.e600_r384_in1k",
        }
    }

    /// Square input resolution the checkpoint was trained at
    pub fn resolution(&self) -> u32 {
        match self {
            MobileNetVariant::Small => 224,
            MobileNetVariant::Medium => 256,
            MobileNetVariant::Large => 384,
        }
    }

    pub fn preprocess_config(&self) -> PreprocessConfig {
        PreprocessConfig {
            size: self.resolution(),
            normalization: Normalization::IMAGENET,
        }
    }

    fn config(&self) -> mobilenetv4::Config {
        match self {
            MobileNetVariant::Small => mobilenetv4::Config::small(),
            MobileNetVariant::Medium => mobilenetv4::Config::medium(),
            MobileNetVariant::Large => mobilenetv4::Config::large(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MobileNetVariant::Small => "small",
            MobileNetVariant::Medium => "medium",
            MobileNetVariant::Large => "large",
        }
    }
}

impl fmt::Display for MobileNetVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for MobileNetVariant {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "small" => Ok(MobileNetVariant::Small),
            "medium" => Ok(MobileNetVariant::Medium),
            "large" => Ok(MobileNetVariant::Large),
            other => Err(AppError::Config(format!(
                "Unknown model variant '{}' (expected small, medium or large)",
                other
            ))),
        }
    }
}

/// Where inference runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceKind {
    #[default]
    Cpu,
    /// First CUDA device, falling back to CPU when unavailable
    Cuda,
}

impl DeviceKind {
    fn device(&self) -> Result<Device, AppError> {
        match self {
            DeviceKind::Cpu => Ok(Device::Cpu),
            DeviceKind::Cuda => Device::cuda_if_available(0)
                .map_err(|e| AppError::Model(format!("Device setup failed: {}", e))),
        }
    }
}

impl FromStr for DeviceKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cpu" => Ok(DeviceKind::Cpu),
            "cuda" | "gpu" => Ok(DeviceKind::Cuda),
            other => Err(AppError::Config(format!(
                "Unknown device '{}' (expected cpu or cuda)",
                other
            ))),
        }
    }
}

/// MobileNetV4 with its label index
pub struct MobileNetModel {
    model: Func<'static>,
    device: Device,
    labels: LabelIndex,
    variant: MobileNetVariant,
}

impl fmt::Debug for MobileNetModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MobileNetModel")
            .field("variant", &self.variant)
            .field("device", &self.device)
            .field("labels", &self.labels.len())
            .finish()
    }
}

impl MobileNetModel {
    /// Load weights and labels described by `settings`.
    ///
    /// Weights come from `settings.weights_path` when set, otherwise from the
    /// HuggingFace Hub (cached under `settings.cache_dir`).
    pub fn load(settings: &VisionSettings) -> Result<Self, AppError> {
        let labels =
            LabelIndex::load_or_fetch(&settings.labels_path, settings.labels_url.as_deref())?;
        if labels.len() != IMAGENET_CLASSES {
            return Err(AppError::Labels(format!(
                "Expected {} class labels, found {} in {}",
                IMAGENET_CLASSES,
                labels.len(),
                settings.labels_path.display()
            )));
        }

        let device = settings.device.device()?;
        let weights = Self::resolve_weights(settings)?;
        info!(
            "Loading MobileNetV4-{} weights from {:?}",
            settings.variant, weights
        );

        // SAFETY: the weights file is not modified while mapped
        let vb = unsafe { VarBuilder::from_mmaped_safetensors(&[weights], DType::F32, &device)? };
        let model = mobilenetv4::mobilenetv4(&settings.variant.config(), IMAGENET_CLASSES, vb)?;

        Ok(Self {
            model,
            device,
            labels,
            variant: settings.variant,
        })
    }

    fn resolve_weights(settings: &VisionSettings) -> Result<PathBuf, AppError> {
        if let Some(path) = &settings.weights_path {
            if !path.exists() {
                return Err(AppError::Model(format!(
                    "Weights file not found: {}",
                    path.display()
                )));
            }
            return Ok(path.clone());
        }

        let api = ApiBuilder::new()
            .with_cache_dir(settings.cache_dir.clone())
            .with_progress(false)
            .build()?;
        let repo = settings
            .repo
            .clone()
            .unwrap_or_else(|| settings.variant.default_repo().to_string());

        info!("Fetching weights from HuggingFace repo {}", repo);
        Ok(api.model(repo).get("model.safetensors")?)
    }
}

impl ClassificationModel for MobileNetModel {
    fn predict(&self, pixels: &PixelTensor) -> Result<Vec<Prediction>, AppError> {
        let size = self.variant.resolution() as usize;
        if pixels.shape() != (3, size, size) {
            return Err(AppError::Model(format!(
                "MobileNetV4-{} expects a 3x{}x{} input, got {:?}",
                self.variant,
                size,
                size,
                pixels.shape()
            )));
        }

        let input = Tensor::from_slice(&pixels.data, pixels.shape(), &self.device)?.unsqueeze(0)?;

        let logits = self.model.forward(&input)?;
        let scores: Vec<f32> = candle_nn::ops::softmax(&logits, D::Minus1)?
            .squeeze(0)?
            .to_vec1()?;

        Ok(rank(&scores, &self.labels))
    }
}

/// Pairs scores with labels and sorts by descending score.
fn rank(scores: &[f32], labels: &LabelIndex) -> Vec<Prediction> {
    let mut predictions: Vec<Prediction> = scores
        .iter()
        .enumerate()
        .map(|(label_id, &score)| Prediction {
            label_id,
            label: labels
                .get(label_id)
                .map(str::to_string)
                .unwrap_or_else(|| format!("class_{}", label_id)),
            score,
        })
        .collect();

    predictions.sort_by(|a, b| b.score.total_cmp(&a.score));
    predictions
}
