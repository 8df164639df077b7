//! Runtime configuration read from the environment (and `.env` via `dotenv`).

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::AppError;
use crate::fs_manager::PortablePathManager;
use crate::vision::{DeviceKind, MobileNetVariant};

pub const MODEL_ENV: &str = "GLIMPSE_MODEL";
pub const MODEL_REPO_ENV: &str = "GLIMPSE_MODEL_REPO";
pub const WEIGHTS_PATH_ENV: &str = "GLIMPSE_WEIGHTS_PATH";
pub const LABELS_PATH_ENV: &str = "GLIMPSE_LABELS_PATH";
pub const LABELS_URL_ENV: &str = "GLIMPSE_LABELS_URL";
pub const CACHE_DIR_ENV: &str = "GLIMPSE_CACHE_DIR";
pub const DEVICE_ENV: &str = "GLIMPSE_DEVICE";
pub const LOG_FORMAT_ENV: &str = "GLIMPSE_LOG_FORMAT";

// Keras class index, the same file `decode_predictions` uses
pub const DEFAULT_LABELS_URL: &str =
    "https://storage.googleapis.com/download.tensorflow.org/data/imagenet_class_index.json";
pub const DEFAULT_LABELS_FILENAME: &str = "imagenet_class_index.json";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    /// Bunyan-style JSON lines
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" | "bunyan" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "Unknown log format '{}' (expected pretty or json)",
                other
            ))),
        }
    }
}

/// Everything needed to build the vision model
#[derive(Debug, Clone, PartialEq)]
pub struct VisionSettings {
    pub variant: MobileNetVariant,
    /// HuggingFace repo override; `None` uses the variant's default
    pub repo: Option<String>,
    /// Local weights; skips the hub download when set
    pub weights_path: Option<PathBuf>,
    pub labels_path: PathBuf,
    /// Fetched when `labels_path` is missing
    pub labels_url: Option<String>,
    pub cache_dir: PathBuf,
    pub device: DeviceKind,
}

impl Default for VisionSettings {
    fn default() -> Self {
        Self {
            variant: MobileNetVariant::default(),
            repo: None,
            weights_path: None,
            labels_path: PortablePathManager::models_dir().join(DEFAULT_LABELS_FILENAME),
            labels_url: Some(DEFAULT_LABELS_URL.to_string()),
            cache_dir: PortablePathManager::hub_cache_dir(),
            device: DeviceKind::default(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub vision: VisionSettings,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Build the configuration from `GLIMPSE_*` environment variables.
    ///
    /// Unset or blank variables keep their defaults; unparsable values are
    /// reported as [`AppError::Config`].
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Some(variant) = var(MODEL_ENV) {
            config.vision.variant = variant.parse()?;
        }
        if let Some(device) = var(DEVICE_ENV) {
            config.vision.device = device.parse()?;
        }
        if let Some(format) = var(LOG_FORMAT_ENV) {
            config.log_format = format.parse()?;
        }

        config.vision.repo = var(MODEL_REPO_ENV);
        config.vision.weights_path = var(WEIGHTS_PATH_ENV).map(PathBuf::from);

        if let Some(path) = var(LABELS_PATH_ENV) {
            config.vision.labels_path = PathBuf::from(path);
        }
        if let Some(url) = var(LABELS_URL_ENV) {
            config.vision.labels_url = Some(url);
        }
        if let Some(dir) = var(CACHE_DIR_ENV) {
            config.vision.cache_dir = PathBuf::from(dir);
        }

        Ok(config)
    }
}

fn var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
