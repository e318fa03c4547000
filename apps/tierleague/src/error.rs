//! # Application Errors
//!
//! Everything the CLI can fail on: engine errors plus file and format
//! problems the engine never sees.

use std::path::PathBuf;
use thiserror::Error;
use tierleague_core::TierError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum AppError {
    /// The season engine rejected an operation.
    #[error(transparent)]
    Tier(#[from] TierError),

    /// A file could not be read.
    #[error("Cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The competition file exceeds the size limit.
    #[error("File size {size} bytes exceeds maximum allowed {max} bytes")]
    FileTooLarge { size: u64, max: u64 },

    /// The competition file is not valid TOML for the expected shape.
    #[error("Invalid competition file: {0}")]
    Config(#[from] toml::de::Error),

    /// JSON output could not be produced.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
