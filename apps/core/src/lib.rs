//! Glimpse core: prompt intent + image label → one sentence.
//!
//! "The Brain" reads the prompt, the vision module names the picture, and
//! the composer fuses both.

pub mod assistant;
pub mod brain;
pub mod composer;
pub mod config;
pub mod error;
pub mod fs_manager;
pub mod output;
pub mod telemetry;
pub mod vision;

#[cfg(test)]
mod tests;

pub use assistant::{Assistant, AssistantResponse};
pub use config::AppConfig;
pub use error::AppError;
