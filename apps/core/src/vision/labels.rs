//! Class label index for the image classifier.
//!
//! Accepts the Keras `imagenet_class_index.json` format
//! (`{"0": ["n01440764", "tench"], ...}`) or a plain text file with one
//! label per line. A missing index can be fetched once over HTTP.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::error::AppError;

/// Ordered class names; position = class id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelIndex {
    labels: Vec<String>,
}

impl LabelIndex {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Parse the Keras class index. Ids must cover `0..n` without gaps.
    pub fn from_keras_json(json: &str) -> Result<Self, AppError> {
        let raw: HashMap<String, (String, String)> = serde_json::from_str(json)?;

        let mut entries = raw
            .into_iter()
            .map(|(id, (_synset, name))| {
                id.trim()
                    .parse::<usize>()
                    .map(|id| (id, name))
                    .map_err(|_| AppError::Labels(format!("Invalid class id: {:?}", id)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        entries.sort_by_key(|(id, _)| *id);

        for (expected, (id, _)) in entries.iter().enumerate() {
            if *id != expected {
                return Err(AppError::Labels(format!(
                    "Class index has a gap: expected id {}, found {}",
                    expected, id
                )));
            }
        }

        Ok(Self::new(entries.into_iter().map(|(_, name)| name).collect()))
    }

    /// One label per non-empty line.
    pub fn from_lines(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Parse either format, sniffing JSON by its leading `{`.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        if content.trim_start().starts_with('{') {
            Self::from_keras_json(content)
        } else {
            Ok(Self::from_lines(content))
        }
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Labels(format!("Cannot read label file {}: {}", path.display(), e))
        })?;
        let index = Self::parse(&content)?;
        if index.is_empty() {
            return Err(AppError::Labels(format!(
                "Label file {} is empty",
                path.display()
            )));
        }
        Ok(index)
    }

    /// Load `path`, downloading it from `url` first if it doesn't exist.
    pub fn load_or_fetch(path: &Path, url: Option<&str>) -> Result<Self, AppError> {
        if !path.exists() {
            let url = url.ok_or_else(|| {
                AppError::Labels(format!(
                    "Label file {} not found and no download URL configured",
                    path.display()
                ))
            })?;
            Self::fetch(url, path)?;
        }
        Self::load(path)
    }

    fn fetch(url: &str, path: &Path) -> Result<(), AppError> {
        info!("Downloading class index from {}", url);

        let body = reqwest::blocking::get(url)?.error_for_status()?.text()?;

        // Validate before persisting so a bad download isn't cached
        let index = Self::parse(&body)?;
        if index.is_empty() {
            warn!("Downloaded class index from {} is empty", url);
            return Err(AppError::Labels(format!("Empty class index at {}", url)));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, body)?;
        info!("Saved {} class labels to {:?}", index.len(), path);
        Ok(())
    }

    pub fn get(&self, id: usize) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KERAS_SAMPLE: &str = r#"{
        "1": ["n01443537", "goldfish"],
        "0": ["n01440764", "tench"],
        "2": ["n01484850", "great_white_shark"]
    }"#;

    #[test]
    fn test_keras_json_is_ordered_by_id() {
        let index = LabelIndex::from_keras_json(KERAS_SAMPLE).unwrap();

        assert_eq!(index.len(), 3);
        assert_eq!(index.get(0), Some("tench"));
        assert_eq!(index.get(1), Some("goldfish"));
        assert_eq!(index.get(2), Some("great_white_shark"));
        assert_eq!(index.get(3), None);
    }

    #[test]
    fn test_keras_json_with_gap_is_rejected() {
        let json = r#"{"0": ["a", "tench"], "2": ["b", "shark"]}"#;
        assert!(matches!(
            LabelIndex::from_keras_json(json),
            Err(AppError::Labels(_))
        ));
    }

    #[test]
    fn test_keras_json_with_bad_id_is_rejected() {
        let json = r#"{"zero": ["a", "tench"]}"#;
        assert!(matches!(
            LabelIndex::from_keras_json(json),
            Err(AppError::Labels(_))
        ));
    }

    #[test]
    fn test_plain_text_labels() {
        let index = LabelIndex::parse("tench\n\ngoldfish\r\n  golden retriever \n").unwrap();

        assert_eq!(index.len(), 3);
        assert_eq!(index.get(2), Some("golden retriever"));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("imagenet_class_index.json");
        fs::write(&path, KERAS_SAMPLE).unwrap();

        let index = LabelIndex::load_or_fetch(&path, None).unwrap();
        assert_eq!(index.get(1), Some("goldfish"));
    }

    #[test]
    fn test_missing_file_without_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = LabelIndex::load_or_fetch(&path, None).unwrap_err();
        assert!(matches!(err, AppError::Labels(_)));
    }

    #[test]
    fn test_empty_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labels.txt");
        fs::write(&path, "\n\n").unwrap();

        assert!(matches!(LabelIndex::load(&path), Err(AppError::Labels(_))));
    }

    #[test]
    fn test_missing_file_is_downloaded_and_saved() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/imagenet_class_index.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(KERAS_SAMPLE)
            .create();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("models").join("imagenet_class_index.json");
        let url = format!("{}/imagenet_class_index.json", server.url());

        let index = LabelIndex::load_or_fetch(&path, Some(&url)).unwrap();
        mock.assert();

        assert_eq!(index.len(), 3);
        assert_eq!(index.get(2), Some("great_white_shark"));
        assert!(path.exists());

        // second load reads the saved copy
        let again = LabelIndex::load_or_fetch(&path, Some(&url)).unwrap();
        assert_eq!(again, index);
        mock.assert();
    }

    #[test]
    fn test_http_error_status_is_labels_error() {
        let mut server = mockito::Server::new();
        let mock = server.mock("GET", "/labels.json").with_status(404).create();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labels.json");
        let url = format!("{}/labels.json", server.url());

        let err = LabelIndex::load_or_fetch(&path, Some(&url)).unwrap_err();
        mock.assert();

        assert!(matches!(err, AppError::Labels(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_invalid_download_is_not_saved() {
        let mut server = mockito::Server::new();
        let broken = server
            .mock("GET", "/broken.json")
            .with_status(200)
            .with_body(r#"{"0": ["n01440764""#)
            .create();
        let empty = server
            .mock("GET", "/empty.txt")
            .with_status(200)
            .with_body("\n\n")
            .create();

        let dir = tempfile::tempdir().unwrap();

        let path = dir.path().join("broken.json");
        let url = format!("{}/broken.json", server.url());
        assert!(matches!(
            LabelIndex::load_or_fetch(&path, Some(&url)),
            Err(AppError::Labels(_))
        ));
        broken.assert();
        assert!(!path.exists());

        let path = dir.path().join("empty.txt");
        let url = format!("{}/empty.txt", server.url());
        assert!(matches!(
            LabelIndex::load_or_fetch(&path, Some(&url)),
            Err(AppError::Labels(_))
        ));
        empty.assert();
        assert!(!path.exists());
    }
}
