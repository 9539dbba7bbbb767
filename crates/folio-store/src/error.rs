//! Error types for the entity store.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading or persisting the data file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to read the data file.
    #[error("failed to read data file {path}: {source}")]
    Read {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write the data file.
    #[error("failed to write data file {path}: {source}")]
    Write {
        /// Path to the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The data file held invalid JSON.
    #[error("failed to parse data file {path}: {source}")]
    Parse {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The in-memory data could not be serialized.
    #[error("failed to serialize store data: {0}")]
    Serialize(#[from] serde_json::Error),
}
