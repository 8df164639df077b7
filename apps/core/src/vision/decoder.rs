//! Image decoding and model-input preprocessing.
//!
//! Decodes an image file with the `image` crate, then applies the fixed
//! preprocessing policy a classifier expects:
//! 1. Resize to `size x size`
//! 2. Convert to RGB
//! 3. Normalize each channel: `(pixel / 255.0 - mean) / std`
//! 4. Lay the data out channel-first (C, H, W)

use image::{imageops::FilterType, DynamicImage, ImageReader};
use std::path::Path;
use tracing::debug;

use crate::error::AppError;

/// Per-channel normalization constants (RGB order)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    pub mean: [f32; 3],
    pub std: [f32; 3],
}

impl Normalization {
    /// ImageNet statistics, used by timm/torchvision checkpoints
    pub const IMAGENET: Normalization = Normalization {
        mean: [0.485, 0.456, 0.406],
        std: [0.229, 0.224, 0.225],
    };
}

/// Preprocessing contract of a classification model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreprocessConfig {
    /// Square input resolution in pixels
    pub size: u32,
    pub normalization: Normalization,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            size: 224,
            normalization: Normalization::IMAGENET,
        }
    }
}

/// Normalized pixel data in (C, H, W) layout
#[derive(Debug, Clone, PartialEq)]
pub struct PixelTensor {
    pub data: Vec<f32>,
    pub channels: usize,
    pub height: usize,
    pub width: usize,
}

impl PixelTensor {
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.channels, self.height, self.width)
    }

    /// Value at channel `c`, row `y`, column `x`.
    pub fn at(&self, c: usize, y: usize, x: usize) -> Option<f32> {
        if c >= self.channels || y >= self.height || x >= self.width {
            return None;
        }
        self.data.get((c * self.height + y) * self.width + x).copied()
    }
}

/// Defines the image decode capability: path in, model-ready pixels out.
pub trait ImageDecoder: Send + Sync {
    /// Decodes and preprocesses the image at `path`.
    ///
    /// Fails with [`AppError::ImageLoad`] when the path is not a decodable image.
    fn decode(&self, path: &Path) -> Result<PixelTensor, AppError>;
}

/// `image`-crate decoder applying a [`PreprocessConfig`]
#[derive(Debug, Clone, Copy)]
pub struct PreprocessingDecoder {
    config: PreprocessConfig,
}

impl PreprocessingDecoder {
    pub fn new(config: PreprocessConfig) -> Self {
        Self { config }
    }

    fn to_tensor(&self, img: DynamicImage) -> PixelTensor {
        let size = self.config.size;
        let img = img.resize_exact(size, size, FilterType::Triangle);

        let img = match img {
            DynamicImage::ImageRgb8(img) => img,
            img => img.to_rgb8(),
        };

        let (width, height) = (img.width() as usize, img.height() as usize);
        let plane = width * height;
        let Normalization { mean, std: std_dev } = self.config.normalization;

        let mut data = vec![0.0f32; 3 * plane];
        for (i, pixel) in img.pixels().enumerate() {
            for c in 0..3 {
                data[c * plane + i] = (pixel[c] as f32 / 255.0 - mean[c]) / std_dev[c];
            }
        }

        PixelTensor {
            data,
            channels: 3,
            height,
            width,
        }
    }
}

impl ImageDecoder for PreprocessingDecoder {
    fn decode(&self, path: &Path) -> Result<PixelTensor, AppError> {
        let img = ImageReader::open(path)
            .map_err(|e| AppError::image_load(path, e))?
            .with_guessed_format()
            .map_err(|e| AppError::image_load(path, e))?
            .decode()
            .map_err(|e| AppError::image_load(path, e))?;

        debug!(
            path = %path.display(),
            width = img.width(),
            height = img.height(),
            "Image decoded"
        );

        Ok(self.to_tensor(img))
    }
}
