use std::io;
use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// The image path does not resolve to a decodable image.
    #[error("Could not load image at {path}: {reason}")]
    ImageLoad { path: String, reason: String },

    /// The text prompt was not supplied.
    #[error("Text prompt cannot be None")]
    MissingInput,

    /// Represents errors from loading or running the vision model.
    #[error("Model error: {0}")]
    Model(String),

    /// Represents errors reading, fetching or parsing the class label index.
    #[error("Label index error: {0}")]
    Labels(String),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents configuration-related errors (e.g., invalid environment values).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

// Cached initialization failures are handed out by value on every call.
impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            AppError::ImageLoad { path, reason } => AppError::ImageLoad {
                path: path.clone(),
                reason: reason.clone(),
            },
            AppError::MissingInput => AppError::MissingInput,
            AppError::Model(s) => AppError::Model(s.clone()),
            AppError::Labels(s) => AppError::Labels(s.clone()),
            AppError::Io(e) => AppError::Io(io::Error::new(e.kind(), e.to_string())),
            AppError::Config(s) => AppError::Config(s.clone()),
            AppError::Internal(s) => AppError::Internal(s.clone()),
        }
    }
}

impl AppError {
    /// Builds an [`AppError::ImageLoad`] for `path` from any displayable cause.
    pub fn image_load(path: impl AsRef<std::path::Path>, reason: impl std::fmt::Display) -> Self {
        AppError::ImageLoad {
            path: path.as_ref().display().to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<candle_core::Error> for AppError {
    fn from(err: candle_core::Error) -> Self {
        AppError::Model(format!("Tensor error: {}", err))
    }
}

impl From<hf_hub::api::sync::ApiError> for AppError {
    fn from(err: hf_hub::api::sync::ApiError) -> Self {
        AppError::Model(format!("Hub download error: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Labels(format!("HTTP error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Labels(format!("JSON error: {}", err))
    }
}
