//! Error types
//!
//! Only the ambient surfaces (config files, exports) can fail. Level
//! generation itself degrades silently and reports through statistics.

use thiserror::Error;

/// Errors raised while loading configuration or exporting levels
#[derive(Debug, Error)]
pub enum DungeonError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse RON: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("Failed to serialize RON: {0}")]
    Serialize(#[from] ron::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid generation config: {0}")]
    InvalidConfig(String),

    #[error("Invalid level export: {0}")]
    InvalidExport(String),
}

pub type Result<T> = std::result::Result<T, DungeonError>;
