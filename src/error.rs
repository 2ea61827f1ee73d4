//! Error types for summary reporting

use std::io;
use std::path::PathBuf;

/// Errors raised while encoding a report or hashing an artifact
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("failed to serialize summary report: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to read artifact {}: {source}", path.display())]
    Artifact {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
