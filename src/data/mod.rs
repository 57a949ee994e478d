//! Generation parameters and their on-disk form
//!
//! Configs are plain RON files so level parameters can be tuned without
//! rebuilding.

pub mod config;
pub mod loader;

pub use config::GenerationConfig;
pub use loader::{DataLoader, DEFAULT_CONFIG_PATH};
