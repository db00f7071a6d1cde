//! Error types for digest construction and the clipboard shim.

use std::path::PathBuf;
use thiserror::Error;

use crate::algorithm::Algorithm;

#[derive(Debug, Error)]
pub(crate) enum HashError {
    #[error("unsupported hash algorithm {name:?}, must be one of: {}", Algorithm::supported_names())]
    UnsupportedAlgorithm { name: String },

    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("clipboard unavailable: {0}")]
    Clipboard(#[from] arboard::Error),
}
