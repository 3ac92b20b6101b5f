//! Crate error type.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Input file missing or unreadable. Fatal, nothing is counted.
    #[error("cannot read input file {path}: {source}")]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file is not valid JSON.
    #[error("invalid JSON in input file: {0}")]
    Json(#[from] serde_json::Error),

    /// A required path in the document is absent or of the wrong shape.
    /// Fatal: the reference lines and the frame collection must exist
    /// before any counting can proceed.
    #[error("malformed input at `{path}`: {reason}")]
    MalformedInput { path: String, reason: String },
}

impl Error {
    pub(crate) fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
