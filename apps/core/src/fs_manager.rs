use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// Environment variable that relocates the whole data directory.
pub const DATA_DIR_ENV: &str = "GLIMPSE_DATA_DIR";

pub struct PortablePathManager;

impl PortablePathManager {
    /// Root directory of the application (where the executable lives).
    pub fn root_dir() -> PathBuf {
        #[cfg(debug_assertions)]
        {
            // In development the executable sits in target/debug at the workspace root
            if let Ok(mut path) = std::env::current_exe() {
                path.pop(); // exe name
                path.pop(); // debug
                path.pop(); // target

                let core_path = path.join("apps").join("core");
                if core_path.exists() {
                    return core_path;
                }
            }
        }

        match std::env::current_exe() {
            Ok(mut path) => {
                path.pop();
                path
            }
            Err(e) => {
                warn!(
                    "Failed to get current exe path: {}. Falling back to current_dir.",
                    e
                );
                std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
            }
        }
    }

    /// Main data directory (`./data`, or `$GLIMPSE_DATA_DIR`).
    pub fn data_dir() -> PathBuf {
        match std::env::var(DATA_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => Self::root_dir().join("data"),
        }
    }

    /// Model directory (`./data/models`): label index and local weights.
    pub fn models_dir() -> PathBuf {
        Self::data_dir().join("models")
    }

    /// HuggingFace hub cache (`./data/models/hub`).
    pub fn hub_cache_dir() -> PathBuf {
        Self::models_dir().join("hub")
    }

    /// Creates the data and models directories if they don't exist.
    pub fn init() -> Result<(), std::io::Error> {
        for dir in [Self::data_dir(), Self::models_dir()] {
            if !dir.exists() {
                info!("Creating directory: {:?}", dir);
                fs::create_dir_all(&dir)?;
            }
        }
        Ok(())
    }
}
