//! Error types for the timeline library.
//!
//! The resolver itself never fails; the only fallible surface is
//! loading a timeline document and looking steps up by display index.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for timeline operations.
#[derive(Error, Debug)]
pub enum TimelineError {
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Step not found for the given 1-based display index
    #[error("Step {index} not found (timeline has {len} steps)")]
    StepNotFound { index: usize, len: usize },
}

impl TimelineError {
    /// Creates a file system error with the offending path attached.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for timeline operations
pub type Result<T> = std::result::Result<T, TimelineError>;
